// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Placeholder format strings used by wrapper template fields.
//!
//! A format string is literal text with `{name}` placeholders drawn from a
//! closed set of parameters. `{{` and `}}` produce literal braces, so shell
//! expansions like `${HOME}` are written `${{HOME}}` inside a template.

use std::str::FromStr;

use strum::{Display, EnumString};

#[cfg(test)]
#[path = "./format_test.rs"]
mod format_test;

/// The parameters a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Param {
    /// Content-derived identifier of the layer being rendered.
    Stepname,
    /// Absolute path of the materialized script.
    Script,
}

/// Values available while rendering a format string.
#[derive(Debug, Clone, Copy, Default)]
pub struct Params<'a> {
    pub stepname: Option<&'a str>,
    pub script: Option<&'a str>,
}

impl<'a> Params<'a> {
    fn get(&self, param: Param) -> Option<&'a str> {
        match param {
            Param::Stepname => self.stepname,
            Param::Script => self.script,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(Param),
}

/// A parsed format string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatString {
    source: String,
    segments: Vec<Segment>,
}

/// Reasons a format string can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownPlaceholder(String),
    EmptyPlaceholder,
    UnclosedBrace,
    UnmatchedClosingBrace,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlaceholder(name) => write!(f, "unknown placeholder '{{{name}}}'"),
            Self::EmptyPlaceholder => f.write_str("empty placeholder '{}'"),
            Self::UnclosedBrace => f.write_str("'{' is never closed (use '{{' for a literal brace)"),
            Self::UnmatchedClosingBrace => {
                f.write_str("single '}' outside a placeholder (use '}}' for a literal brace)")
            }
        }
    }
}

impl FormatString {
    /// Parse a format string.
    pub fn parse(source: &str) -> std::result::Result<Self, ParseError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '{' if chars.peek() == Some(&'{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek() == Some(&'}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(c) => name.push(c),
                            None => return Err(ParseError::UnclosedBrace),
                        }
                    }
                    if name.is_empty() {
                        return Err(ParseError::EmptyPlaceholder);
                    }
                    let param = Param::from_str(&name)
                        .map_err(|_| ParseError::UnknownPlaceholder(name.clone()))?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(param));
                }
                '}' => return Err(ParseError::UnmatchedClosingBrace),
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// The text this format string was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholders referenced by this format string, in order of appearance.
    pub fn params(&self) -> impl Iterator<Item = Param> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(p) => Some(*p),
            Segment::Literal(_) => None,
        })
    }

    /// Substitute parameters, failing on any placeholder without a value.
    pub fn render(&self, params: &Params<'_>) -> crate::Result<String> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(param) => {
                    let value = params
                        .get(*param)
                        .ok_or_else(|| crate::Error::UnresolvedPlaceholder(param.to_string()))?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

/// Replace `{stepname}` tokens in free-form code, leaving other braces alone.
pub fn substitute_stepname(code: &str, stepname: &str) -> String {
    code.replace("{stepname}", stepname)
}
