// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! The wrapping engine: folds directives into a chain of scripts.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::directive::parse_directives;
use crate::script::{MaterializedScript, materialize, stepname};
use crate::{CommandRunner, Error, Result, Wrapper, WrapperTable};

#[cfg(test)]
#[path = "./engine_test.rs"]
mod engine_test;

/// Everything needed to wrap one piece of code.
#[derive(Debug, Clone)]
pub struct WrapRequest<'a> {
    /// Wrappers available to directives.
    pub table: &'a WrapperTable,
    /// Directory that receives the generated scripts.
    pub script_dir: &'a Path,
    /// Directory the final command is meant to run in.
    pub workdir: &'a Path,
    /// Code, optionally starting with `#WRAP(name)` directives.
    pub code: &'a str,
}

/// Outcome of a successful wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapping {
    /// Command that runs the outermost script.
    pub command: String,
    /// Scripts in the order they were written, innermost first.
    pub scripts: Vec<MaterializedScript>,
}

impl WrapRequest<'_> {
    /// Wrap the code and return the command that runs it.
    pub fn wrap(&self) -> Result<Wrapping> {
        check_directory("Script", self.script_dir)?;
        check_directory("Working", self.workdir)?;

        let directives = parse_directives(self.code);

        // Resolve everything before touching the filesystem.
        let mut layers: Vec<Cow<'_, Wrapper>> = Vec::with_capacity(directives.names.len() + 1);
        for name in directives.names.iter().copied() {
            layers.push(Cow::Borrowed(self.table.resolve(name)?));
        }
        layers.push(self.table.innermost()?);

        let script_dir = dunce::canonicalize(self.script_dir)?;
        utf8_path(&script_dir)?;
        let mut code = directives.body.to_string();
        let mut scripts = Vec::with_capacity(layers.len());

        for wrapper in layers.iter().rev() {
            let stepname = stepname(wrapper.name(), &code);
            let wrapped = wrapper.render(&code, &stepname)?;
            let script = materialize(
                &script_dir,
                wrapper.name(),
                &stepname,
                &wrapped,
                wrapper.file_suffix(),
            )?;
            code = wrapper.executor_command(utf8_path(&script.path)?, &stepname)?;
            scripts.push(script);
        }

        tracing::debug!(layers = scripts.len(), command = %code, "wrapped code");

        Ok(Wrapping {
            command: code,
            scripts,
        })
    }

    /// Wrap the code and hand the final command to `runner`, inside the
    /// working directory. Returns the command's exit code.
    pub fn run(&self, runner: &dyn CommandRunner) -> Result<i32> {
        let wrapping = self.wrap()?;
        for script in &wrapping.scripts {
            tracing::info!("{} -> {}", script.stepname, script.path.display());
        }
        runner.run(&wrapping.command, self.workdir)
    }
}

/// Wrap `code` with the wrappers in `table`, writing scripts into `script_dir`.
///
/// Returns the command that runs the outermost script. `script_dir` doubles
/// as the working directory, so it is the only directory checked; use
/// [`WrapRequest`] when the command will run somewhere else. A table without
/// an `innermost` wrapper falls back to [`Wrapper::default_innermost`].
pub fn wrap(table: &WrapperTable, script_dir: &Path, code: &str) -> Result<String> {
    WrapRequest {
        table,
        script_dir,
        workdir: script_dir,
        code,
    }
    .wrap()
    .map(|w| w.command)
}

/// Resolve a script directory given relative to `workdir` and create it if
/// it does not exist yet. `workdir` itself must already exist.
pub fn prepare_script_dir(workdir: &Path, script_dir: &Path) -> Result<PathBuf> {
    check_directory("Working", workdir)?;

    let dir = if script_dir.is_absolute() {
        script_dir.to_path_buf()
    } else {
        workdir.join(script_dir)
    };

    if !dir.exists() {
        tracing::debug!(path = %dir.display(), "creating script directory");
        std::fs::create_dir_all(&dir)?;
    }

    check_directory("Script", &dir)?;
    Ok(dir)
}

fn check_directory(kind: &'static str, path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::NotADirectory {
            kind,
            path: path.to_path_buf(),
        })
    }
}

fn utf8_path(path: &Path) -> Result<&str> {
    path.to_str().ok_or_else(|| {
        Error::ValidationFailed(format!(
            "Script path is not valid UTF-8 and cannot be put in a command: {path:?}"
        ))
    })
}
