// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Content-addressed script files.

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

#[cfg(test)]
#[path = "./script_test.rs"]
mod script_test;

/// Number of hex characters of the body hash kept in a stepname.
pub const STEPNAME_HASH_LEN: usize = 8;

/// Hex encoded sha256 of `content`.
pub fn sha256_hex(content: &str) -> String {
    format!("{:x}", Sha256::digest(content.as_bytes()))
}

/// Identifier of one layer: the wrapper name plus a short hash of the body.
pub fn stepname(wrapper: &str, body: &str) -> String {
    let hash = sha256_hex(body);
    format!("{wrapper}_{}", &hash[..STEPNAME_HASH_LEN])
}

/// File name of a script holding `content`.
pub fn script_filename(stepname: &str, content: &str, file_suffix: &str) -> String {
    format!("{stepname}_{}{file_suffix}", sha256_hex(content))
}

/// A script written to disk for one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedScript {
    /// Name of the wrapper that produced the script.
    pub wrapper: String,
    pub stepname: String,
    /// Absolute path of the script.
    pub path: PathBuf,
}

/// Write `content` into `dir` under its content-addressed name.
///
/// The file holds `content` plus a trailing newline. An existing file of the
/// same name already has these exact bytes, so it is simply overwritten.
pub fn materialize(
    dir: &Path,
    wrapper: &str,
    stepname: &str,
    content: &str,
    file_suffix: &str,
) -> crate::Result<MaterializedScript> {
    let path = dir.join(script_filename(stepname, content, file_suffix));

    std::fs::write(&path, format!("{content}\n")).map_err(|e| crate::Error::WriteFailed {
        path: path.clone(),
        error: e,
    })?;

    let path = dunce::canonicalize(&path).map_err(|e| crate::Error::WriteFailed {
        path: path.clone(),
        error: e,
    })?;

    tracing::debug!(wrapper, stepname, path = %path.display(), "materialized script");

    Ok(MaterializedScript {
        wrapper: wrapper.to_string(),
        stepname: stepname.to_string(),
        path,
    })
}
