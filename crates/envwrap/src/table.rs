// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Loading wrapper spec files into a table of named wrappers.
//!
//! A spec file is a YAML stream with one wrapper per document:
//!
//! ```yaml
//! name: innermost
//! header: "#!/bin/bash"
//! ---
//! name: docker
//! header: "#!/bin/bash"
//! prefix: "docker run --rm -i ubuntu bash <<'EOF'\n"
//! suffix: "\nEOF"
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::wrapper::{INNERMOST, Wrapper, WrapperSpec};

#[cfg(test)]
#[path = "./table_test.rs"]
mod table_test;

/// Wrappers keyed by name, in the order they were defined.
#[derive(Debug, Clone, Default)]
pub struct WrapperTable {
    wrappers: IndexMap<String, Wrapper>,

    /// Path to the file this was loaded from.
    pub source_path: Option<PathBuf>,

    /// Set when `innermost` was synthesized rather than loaded.
    implicit_innermost: bool,
}

impl WrapperTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a table from a YAML stream of wrapper records.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();
        let mut table = Self::new();

        for document in serde_yaml::Deserializer::from_str(&yaml) {
            let value =
                serde_yaml::Value::deserialize(document).map_err(|e| crate::Error::InvalidYaml {
                    error: e,
                    yaml_content: yaml.clone(),
                })?;
            // empty documents, e.g. a trailing `---`
            if value.is_null() {
                continue;
            }
            let spec: WrapperSpec =
                serde_yaml::from_value(value).map_err(|e| crate::Error::InvalidYaml {
                    error: e,
                    yaml_content: yaml.clone(),
                })?;
            table.insert(Wrapper::from_spec(spec)?)?;
        }

        Ok(table)
    }

    /// Load a table from a spec file.
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let mut table = Self::from_yaml(yaml)?;
        table.source_path = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), count = table.len(), "loaded wrapper spec");
        Ok(table)
    }

    /// Add a wrapper, rejecting names that are already taken.
    pub fn insert(&mut self, wrapper: Wrapper) -> crate::Result<()> {
        if self.wrappers.contains_key(wrapper.name()) {
            return Err(crate::Error::DuplicateWrapper(wrapper.name().to_string()));
        }
        if !crate::directive::is_valid_name(wrapper.name()) {
            tracing::warn!(
                name = wrapper.name(),
                "wrapper name is not a word; no #WRAP directive can select it"
            );
        }
        self.wrappers.insert(wrapper.name().to_string(), wrapper);
        Ok(())
    }

    /// Add the default `innermost` wrapper unless one is already defined.
    pub fn ensure_innermost(&mut self) -> crate::Result<()> {
        if !self.wrappers.contains_key(INNERMOST) {
            tracing::debug!("no innermost wrapper in spec, using the default");
            self.insert(Wrapper::default_innermost()?)?;
            self.implicit_innermost = true;
        }
        Ok(())
    }

    /// Like [`Self::ensure_innermost`], consuming and returning the table.
    pub fn with_innermost(mut self) -> crate::Result<Self> {
        self.ensure_innermost()?;
        Ok(self)
    }

    /// Whether `name` is the synthesized default `innermost` wrapper.
    pub fn is_implicit(&self, name: &str) -> bool {
        self.implicit_innermost && name == INNERMOST
    }

    pub fn get(&self, name: &str) -> Option<&Wrapper> {
        self.wrappers.get(name)
    }

    /// Look up a wrapper, reporting the known names when it is missing.
    pub fn resolve(&self, name: &str) -> crate::Result<&Wrapper> {
        self.get(name).ok_or_else(|| crate::Error::UnknownWrapper {
            name: name.to_string(),
            available: self.names().map(String::from).collect(),
        })
    }

    /// The `innermost` wrapper, or the default one when the table has none.
    pub fn innermost(&self) -> crate::Result<Cow<'_, Wrapper>> {
        match self.get(INNERMOST) {
            Some(wrapper) => Ok(Cow::Borrowed(wrapper)),
            None => {
                tracing::debug!("no innermost wrapper in spec, using the default");
                Ok(Cow::Owned(Wrapper::default_innermost()?))
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.wrappers.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.wrappers.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Wrapper> {
        self.wrappers.values()
    }

    pub fn len(&self) -> usize {
        self.wrappers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrappers.is_empty()
    }
}
