// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Error types for envwrap operations.

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type with envwrap Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during envwrap operations.
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Invalid YAML in spec file
    #[error("Invalid wrapper spec: {error}")]
    #[diagnostic(
        code(envwrap::invalid_yaml),
        help("Each YAML document must be a wrapper with a 'name' and only known fields")
    )]
    InvalidYaml {
        #[source]
        error: serde_yaml::Error,
        yaml_content: String,
    },

    /// Failed to read file
    #[error("Failed to read file: {path:?}")]
    #[diagnostic(code(envwrap::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Failed to write a materialized script
    #[error("Failed to write script: {path:?}")]
    #[diagnostic(code(envwrap::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// Two spec records share a name
    #[error("Wrapper '{0}' is defined more than once")]
    #[diagnostic(
        code(envwrap::duplicate_wrapper),
        help("Wrapper names must be unique within a spec file")
    )]
    DuplicateWrapper(String),

    /// A directive references a wrapper missing from the table
    #[error("Wrapper not found in spec: {name}")]
    #[diagnostic(
        code(envwrap::unknown_wrapper),
        help("{}", suggestion_message(available))
    )]
    UnknownWrapper {
        name: String,
        available: Vec<String>,
    },

    /// A template field is malformed or references an unknown placeholder
    #[error("Invalid template in '{wrapper}.{field}': {reason}")]
    #[diagnostic(
        code(envwrap::invalid_template),
        help("Use {{stepname}} or {{script}} as placeholders and double braces for literal ones")
    )]
    InvalidTemplate {
        wrapper: String,
        field: &'static str,
        reason: String,
    },

    /// A placeholder had no value at render time
    #[error("Placeholder '{{{0}}}' has no value here")]
    #[diagnostic(code(envwrap::unresolved_placeholder))]
    UnresolvedPlaceholder(String),

    /// Script or working directory precondition failed
    #[error("{kind} directory does not exist or is not a directory: {path:?}")]
    #[diagnostic(
        code(envwrap::not_a_directory),
        help("Create the directory or point to an existing one")
    )]
    NotADirectory { kind: &'static str, path: PathBuf },

    /// Validation error
    #[error("Validation failed: {0}")]
    #[diagnostic(code(envwrap::validation_failed))]
    ValidationFailed(String),

    /// IO error passthrough
    #[error(transparent)]
    #[diagnostic(code(envwrap::io_error))]
    Io(#[from] std::io::Error),
}

fn suggestion_message(available: &[String]) -> String {
    if available.is_empty() {
        "No wrappers are defined; add one to the spec file".to_string()
    } else {
        format!("Known wrappers: {}", available.join(", "))
    }
}
