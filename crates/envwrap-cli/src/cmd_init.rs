// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `envwrap init` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

#[cfg(test)]
#[path = "./cmd_init_test.rs"]
mod cmd_init_test;

/// Create a new .envwrap.yaml file
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to create file in
    #[clap(default_value = ".")]
    path: PathBuf,

    /// Overwrite an existing file
    #[clap(long)]
    force: bool,

    /// Header of the innermost wrapper
    #[clap(long, default_value = envwrap::wrapper::DEFAULT_INNERMOST_HEADER)]
    shebang: String,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let spec_path = self.path.join(envwrap::ENVWRAP_FILENAME);

        // Check if file already exists
        if spec_path.exists() && !self.force {
            return Err(miette::miette!(
                ".envwrap.yaml already exists at {:?} (use --force to replace it)",
                spec_path
            ));
        }

        std::fs::write(&spec_path, self.generate_template())
            .map_err(|e| miette::miette!("Failed to write .envwrap.yaml: {}", e))?;

        println!("Created .envwrap.yaml at {:?}", spec_path);
        println!();
        println!("Next steps:");
        println!("  1. Edit the file to add your wrappers");
        println!("  2. Run 'envwrap show' to list them");
        println!("  3. Run 'envwrap run -n \"#WRAP(timed)echo hi\"' to preview a wrap");

        Ok(0)
    }

    fn generate_template(&self) -> String {
        format!(
            "# envwrap wrapper specification\n\
            # One wrapper per YAML document. Every field except 'name' is optional.\n\
            #\n\
            # Fields may use {{stepname}}; 'executor' may also use {{script}}.\n\
            # Write '{{{{' and '}}}}' for literal braces, e.g. ${{{{HOME}}}}.\n\
            \n\
            # Applied to the code left after all #WRAP(...) directives.\n\
            name: innermost\n\
            header: \"{}\"\n\
            \n\
            ---\n\
            # Selected with #WRAP(timed)\n\
            name: timed\n\
            header: \"#!/bin/bash\"\n\
            prefix: \"time \"\n\
            # footer: \"\"\n\
            # suffix: \"\"\n\
            # executor: \"bash {{script}}\"\n\
            # file_suffix: .sh\n\
            \n\
            # ---\n\
            # name: docker\n\
            # header: \"#!/bin/bash\"\n\
            # prefix: \"docker run --rm -i --name {{stepname}} ubuntu bash <<'EOF'\\n\"\n\
            # suffix: \"\\nEOF\"\n",
            self.shebang.replace('\\', "\\\\").replace('"', "\\\"")
        )
    }
}
