// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Finding the wrapper spec file to use.

use std::path::{Path, PathBuf};

use crate::{ENVWRAP_CONFIG_DIRNAME, ENVWRAP_FILENAME, ENVWRAP_USER_FILENAME, WrapperTable};

#[cfg(test)]
#[path = "./discovery_test.rs"]
mod discovery_test;

/// Where to look for a spec file.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// Explicit spec file (from --spec or ENVWRAP_SPEC).
    pub spec: Option<String>,

    /// Skip the per-user spec in the config directory.
    pub no_user_spec: bool,
}

/// Pick the spec file for `workdir`, if any.
///
/// An explicit path wins. Otherwise `<workdir>/.envwrap.yaml` is used, then
/// `<config dir>/envwrap/wrappers.yaml`.
pub fn find_spec_file(workdir: &Path, options: &DiscoveryOptions) -> crate::Result<Option<PathBuf>> {
    if let Some(spec) = &options.spec {
        return expand_home(spec).map(Some);
    }

    let local = workdir.join(ENVWRAP_FILENAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    if !options.no_user_spec {
        if let Some(config) = dirs::config_dir() {
            let user = config.join(ENVWRAP_CONFIG_DIRNAME).join(ENVWRAP_USER_FILENAME);
            if user.is_file() {
                return Ok(Some(user));
            }
        }
    }

    Ok(None)
}

/// Load the table for `workdir`, always including an `innermost` wrapper.
pub fn load_table(workdir: &Path, options: &DiscoveryOptions) -> crate::Result<WrapperTable> {
    let table = match find_spec_file(workdir, options)? {
        Some(path) => WrapperTable::load(path)?,
        None => {
            tracing::debug!("no wrapper spec found, only the innermost wrapper is available");
            WrapperTable::new()
        }
    };
    table.with_innermost()
}

/// Resolve a `~/` prefix against the home directory.
fn expand_home(path: &str) -> crate::Result<PathBuf> {
    if let Some(rel) = path.strip_prefix("~/") {
        let home = dirs::home_dir().ok_or_else(|| {
            crate::Error::ValidationFailed("Cannot resolve ~ without HOME".to_string())
        })?;
        Ok(home.join(rel))
    } else {
        Ok(PathBuf::from(path))
    }
}
