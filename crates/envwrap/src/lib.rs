// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! envwrap - Nested Shell Wrappers
//!
//! This crate layers a piece of shell code inside named wrapper templates.
//! Code selects its wrappers with leading `#WRAP(name)` directives; each
//! wrapper becomes one generated script that runs the next one, and the
//! result is a single command that runs the whole chain.
//!
//! # Example
//!
//! ```yaml
//! # .envwrap.yaml
//! name: innermost
//! header: "#!/bin/bash"
//! ---
//! name: timed
//! header: "#!/bin/bash"
//! prefix: "time "
//! ```
//!
//! Wrapping `#WRAP(timed)./build.sh` writes an `innermost` script holding
//! `./build.sh` and a `timed` script holding `time bash <innermost script>`,
//! and returns `bash <timed script>`.
//!
//! Generated scripts are named `<stepname>_<sha256><suffix>` where the
//! stepname is the wrapper name plus a short hash of the wrapped body, so
//! the same input always produces the same files.

pub mod directive;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod exec;
pub mod format;
pub mod script;
pub mod table;
pub mod wrapper;

pub use directive::{Directives, parse_directives};
pub use discovery::{DiscoveryOptions, find_spec_file, load_table};
pub use engine::{WrapRequest, Wrapping, prepare_script_dir, wrap};
pub use error::{Error, Result};
pub use exec::{CommandRunner, ShellRunner};
pub use script::MaterializedScript;
pub use table::WrapperTable;
pub use wrapper::{INNERMOST, Wrapper, WrapperSpec};

/// Well-known filename for a project's wrapper spec.
pub const ENVWRAP_FILENAME: &str = ".envwrap.yaml";

/// Directory under the user's config directory holding their wrapper spec.
pub const ENVWRAP_CONFIG_DIRNAME: &str = "envwrap";

/// Filename of the per-user wrapper spec.
pub const ENVWRAP_USER_FILENAME: &str = "wrappers.yaml";

/// Default directory for generated scripts, relative to the working directory.
pub const ENVWRAP_SCRIPT_DIRNAME: &str = ".envwrapper";
