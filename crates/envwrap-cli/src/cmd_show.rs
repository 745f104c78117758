// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envwrap show` command.

use clap::Args;
use colored::Colorize;
use miette::{IntoDiagnostic, Result};

/// List the wrappers available to #WRAP directives
#[derive(Debug, Args)]
pub struct CmdShow {
    #[clap(flatten)]
    spec: crate::SpecFlags,

    /// Output format: table, yaml
    #[clap(long, default_value = "table")]
    format: String,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let table = self.spec.load_table()?;

        if self.format == "yaml" {
            self.show_yaml(&table)?;
        } else {
            self.show_table(&table);
        }

        Ok(0)
    }

    fn show_table(&self, table: &envwrap::WrapperTable) {
        let source = table
            .source_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<none>".to_string());
        println!("{} {}", "Spec file:".bold(), source.cyan());
        println!();

        for (i, wrapper) in table.iter().enumerate() {
            let spec = wrapper.to_spec();
            let implicit = if table.is_implicit(&spec.name) {
                " [default]"
            } else {
                ""
            };
            println!(
                "  {}. {}{}",
                i + 1,
                spec.name.green(),
                implicit.yellow()
            );
            println!(
                "     executor: {}  suffix: {}",
                spec.executor.dimmed(),
                spec.file_suffix.dimmed()
            );
        }

        println!();
        println!("Total: {} wrapper(s)", table.len());
    }

    fn show_yaml(&self, table: &envwrap::WrapperTable) -> Result<()> {
        if let Some(path) = &table.source_path {
            println!("# Loaded from {}", path.display());
        }
        let mut documents = Vec::with_capacity(table.len());
        for wrapper in table.iter() {
            documents.push(serde_yaml::to_string(&wrapper.to_spec()).into_diagnostic()?);
        }
        print!("{}", documents.join("---\n"));
        Ok(())
    }
}
