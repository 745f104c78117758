// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Running a wrapped command.

use std::borrow::Cow;
use std::path::Path;
use std::process::Command;

#[cfg(test)]
#[path = "./exec_test.rs"]
mod exec_test;

/// Shell used by [`ShellRunner`] when none is configured.
pub const DEFAULT_SHELL: &str = "sh";

/// Quote `arg` for a POSIX shell, leaving plain words untouched.
pub fn shell_quote(arg: &str) -> Cow<'_, str> {
    if arg.is_empty() {
        return Cow::Borrowed("''");
    }
    let plain = arg.chars().all(|ch| {
        matches!(
            ch,
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' | '/' | ':' | '@' | '+' | '=' | ','
        )
    });
    if plain {
        return Cow::Borrowed(arg);
    }
    Cow::Owned(format!("'{}'", arg.replace('\'', "'\\''")))
}

/// Strategy for running the final command of a wrap.
pub trait CommandRunner {
    /// Run `command` inside `workdir`, returning its exit code.
    fn run(&self, command: &str, workdir: &Path) -> crate::Result<i32>;
}

/// Runs commands through `<shell> -c`.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    pub shell: String,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
        }
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, workdir: &Path) -> crate::Result<i32> {
        tracing::info!(shell = %self.shell, workdir = %workdir.display(), "running {command}");

        let status = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .current_dir(workdir)
            .status()?;

        match status.code() {
            Some(code) => Ok(code),
            None => {
                tracing::warn!("command was terminated by a signal: {status}");
                Ok(1)
            }
        }
    }
}
