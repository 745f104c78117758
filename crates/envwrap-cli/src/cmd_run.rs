// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envwrap run` command.

use std::path::PathBuf;

use clap::Args;
use envwrap::CommandRunner;
use miette::Result;

#[cfg(test)]
#[path = "./cmd_run_test.rs"]
mod cmd_run_test;

/// Wrap code and run it
#[derive(Debug, Args)]
pub struct CmdRun {
    #[clap(flatten)]
    pub spec: crate::SpecFlags,

    /// Directory in which the wrapped scripts are generated, relative to the workdir
    #[clap(long, env = "ENVWRAP_SCRIPTDIR", default_value = envwrap::ENVWRAP_SCRIPT_DIRNAME)]
    pub scriptdir: PathBuf,

    /// Shell used to run the final command
    #[clap(long, env = "ENVWRAP_SHELL", default_value = envwrap::exec::DEFAULT_SHELL)]
    pub shell: String,

    /// Do not execute the code, just print what command to run
    #[clap(short = 'n', long)]
    pub just_print: bool,

    /// Code to be wrapped
    pub code: String,
}

impl CmdRun {
    pub fn run(&mut self) -> Result<i32> {
        let runner = envwrap::ShellRunner {
            shell: self.shell.clone(),
        };
        self.run_with(&runner)
    }

    fn run_with(&self, runner: &dyn CommandRunner) -> Result<i32> {
        let table = self.spec.load_table()?;
        let workdir = &self.spec.workdir;
        let script_dir = envwrap::prepare_script_dir(workdir, &self.scriptdir)?;

        let request = envwrap::WrapRequest {
            table: &table,
            script_dir: &script_dir,
            workdir,
            code: &self.code,
        };

        if self.just_print {
            let wrapping = request.wrap()?;
            for script in &wrapping.scripts {
                tracing::info!("{} -> {}", script.stepname, script.path.display());
            }
            println!("{}", wrapping.command);
            return Ok(0);
        }

        Ok(request.run(runner)?)
    }
}
