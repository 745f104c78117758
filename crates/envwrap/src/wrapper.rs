// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Wrapper templates and their spec file records.

use serde::{Deserialize, Serialize};

use crate::format::{FormatString, Param, Params, substitute_stepname};

#[cfg(test)]
#[path = "./wrapper_test.rs"]
mod wrapper_test;

/// Name of the wrapper applied to the deepest code body.
pub const INNERMOST: &str = "innermost";

/// Executor used when a spec record does not set one.
pub const DEFAULT_EXECUTOR: &str = "bash {script}";

/// File suffix used when a spec record does not set one.
pub const DEFAULT_FILE_SUFFIX: &str = ".sh";

/// Header of the synthesized `innermost` wrapper.
pub const DEFAULT_INNERMOST_HEADER: &str = "#!/bin/bash";

/// One wrapper as written in a spec file.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WrapperSpec {
    /// Unique name, referenced by `#WRAP(name)` directives.
    pub name: String,

    /// First line(s) of the generated script, usually a shebang.
    #[serde(default)]
    pub header: String,

    /// Trailing line(s) of the generated script.
    #[serde(default)]
    pub footer: String,

    /// Text placed directly before the wrapped body.
    #[serde(default)]
    pub prefix: String,

    /// Text placed directly after the wrapped body.
    #[serde(default)]
    pub suffix: String,

    /// Command that runs a generated script; `{script}` is substituted
    /// already shell-quoted.
    #[serde(default = "default_executor")]
    pub executor: String,

    /// Extension of generated script files.
    #[serde(default = "default_file_suffix")]
    pub file_suffix: String,
}

fn default_executor() -> String {
    DEFAULT_EXECUTOR.to_string()
}

fn default_file_suffix() -> String {
    DEFAULT_FILE_SUFFIX.to_string()
}

impl WrapperSpec {
    /// A record with only a name; every other field takes its default.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            header: String::new(),
            footer: String::new(),
            prefix: String::new(),
            suffix: String::new(),
            executor: default_executor(),
            file_suffix: default_file_suffix(),
        }
    }
}

/// A validated, immutable wrapper template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapper {
    name: String,
    header: FormatString,
    footer: FormatString,
    prefix: FormatString,
    suffix: FormatString,
    executor: FormatString,
    file_suffix: String,
}

impl Wrapper {
    /// Validate a spec record, parsing every template field.
    ///
    /// The body fields may only reference `{stepname}`; the executor may also
    /// reference `{script}`.
    pub fn from_spec(spec: WrapperSpec) -> crate::Result<Self> {
        let body_params: &[Param] = &[Param::Stepname];
        let executor_params: &[Param] = &[Param::Stepname, Param::Script];

        let header = parse_field(&spec.name, "header", &spec.header, body_params)?;
        let footer = parse_field(&spec.name, "footer", &spec.footer, body_params)?;
        let prefix = parse_field(&spec.name, "prefix", &spec.prefix, body_params)?;
        let suffix = parse_field(&spec.name, "suffix", &spec.suffix, body_params)?;
        let executor = parse_field(&spec.name, "executor", &spec.executor, executor_params)?;

        Ok(Self {
            name: spec.name,
            header,
            footer,
            prefix,
            suffix,
            executor,
            file_suffix: spec.file_suffix,
        })
    }

    /// The wrapper used for the deepest layer when a spec does not define one.
    pub fn default_innermost() -> crate::Result<Self> {
        Self::from_spec(WrapperSpec {
            header: DEFAULT_INNERMOST_HEADER.to_string(),
            ..WrapperSpec::new(INNERMOST)
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file_suffix(&self) -> &str {
        &self.file_suffix
    }

    /// Embed `body` between this wrapper's header, prefix, suffix and footer.
    ///
    /// `{stepname}` is substituted in every part, including the body, which
    /// may carry placeholders left there by an outer layer.
    pub fn render(&self, body: &str, stepname: &str) -> crate::Result<String> {
        let params = Params {
            stepname: Some(stepname),
            script: None,
        };
        let header = self.header.render(&params)?;
        let prefix = self.prefix.render(&params)?;
        let suffix = self.suffix.render(&params)?;
        let footer = self.footer.render(&params)?;
        let body = substitute_stepname(body, stepname);

        Ok(format!("{header}\n{prefix}{body}{suffix}\n{footer}"))
    }

    /// The command that runs this wrapper's script once written to `script`.
    ///
    /// `{script}` expands to the path quoted for a POSIX shell, so executors
    /// must not add quotes of their own around it.
    pub fn executor_command(&self, script: &str, stepname: &str) -> crate::Result<String> {
        let script = crate::exec::shell_quote(script);
        self.executor.render(&Params {
            stepname: Some(stepname),
            script: Some(&script),
        })
    }

    /// Convert back into a spec record.
    pub fn to_spec(&self) -> WrapperSpec {
        WrapperSpec {
            name: self.name.clone(),
            header: self.header.source().to_string(),
            footer: self.footer.source().to_string(),
            prefix: self.prefix.source().to_string(),
            suffix: self.suffix.source().to_string(),
            executor: self.executor.source().to_string(),
            file_suffix: self.file_suffix.clone(),
        }
    }
}

fn parse_field(
    wrapper: &str,
    field: &'static str,
    source: &str,
    allowed: &[Param],
) -> crate::Result<FormatString> {
    let parsed = FormatString::parse(source).map_err(|err| crate::Error::InvalidTemplate {
        wrapper: wrapper.to_string(),
        field,
        reason: err.to_string(),
    })?;

    if let Some(param) = parsed.params().find(|p| !allowed.contains(p)) {
        return Err(crate::Error::InvalidTemplate {
            wrapper: wrapper.to_string(),
            field,
            reason: format!("'{{{param}}}' is not available in this field"),
        });
    }

    Ok(parsed)
}
