// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! envwrap - Nested Shell Wrapper CLI

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::Result;

mod cmd_init;
mod cmd_run;
mod cmd_show;

use cmd_init::CmdInit;
use cmd_run::CmdRun;
use cmd_show::CmdShow;

#[derive(Parser)]
#[clap(
    name = "envwrap",
    about = "Nested Shell Wrapper",
    version,
    long_about = "Wrap shell code in the wrappers named by its leading #WRAP(name) directives and run it"
)]
struct Opt {
    #[clap(flatten)]
    logging: Logging,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Parser)]
struct Logging {
    /// Increase verbosity (-v, -vv, -vvv)
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[clap(short, long, global = true)]
    quiet: bool,
}

#[derive(Parser, Clone, Debug, Default)]
pub struct SpecFlags {
    /// Wrapper spec file (default: ./.envwrap.yaml, then the user config)
    #[clap(short, long, env = "ENVWRAP_SPEC")]
    pub spec: Option<String>,

    /// Ignore the per-user wrapper spec
    #[clap(long, env = "ENVWRAP_NO_USER_SPEC")]
    pub no_user_spec: bool,

    /// Working directory in which the scripts are run
    #[clap(short, long, env = "ENVWRAP_WORKDIR", default_value = ".")]
    pub workdir: PathBuf,
}

impl SpecFlags {
    /// Load the wrapper table these flags select.
    pub fn load_table(&self) -> Result<envwrap::WrapperTable> {
        let options = envwrap::DiscoveryOptions {
            spec: self.spec.clone(),
            no_user_spec: self.no_user_spec,
        };
        Ok(envwrap::load_table(&self.workdir, &options)?)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Wrap code and run it
    Run(CmdRun),

    /// List the wrappers available to #WRAP directives
    Show(CmdShow),

    /// Create a new .envwrap.yaml file
    Init(CmdInit),
}

impl Opt {
    fn run(self) -> Result<i32> {
        // Setup logging
        let log_level = match (self.logging.quiet, self.logging.verbose) {
            (true, _) => tracing::Level::ERROR,
            (false, 0) => tracing::Level::WARN,
            (false, 1) => tracing::Level::INFO,
            (false, 2) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .init();

        // Dispatch to command
        match self.cmd {
            Command::Run(mut cmd) => cmd.run(),
            Command::Show(mut cmd) => cmd.run(),
            Command::Init(mut cmd) => cmd.run(),
        }
    }
}

fn main() -> Result<()> {
    let opt = Opt::parse();
    let code = opt.run()?;
    std::process::exit(code);
}
