// Copyright (c) Contributors to the SPK project.
// SPDX-License-Identifier: Apache-2.0

//! Parsing of leading `#WRAP(name)` directives.

use once_cell::sync::Lazy;
use regex::Regex;

#[cfg(test)]
#[path = "./directive_test.rs"]
mod directive_test;

/// Matches one directive at the very start of the remaining code.
static DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*#WRAP\(([A-Za-z0-9_]+)\)").expect("directive pattern is valid")
});

static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("name pattern is valid"));

/// Code split into its leading directives and the remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directives<'a> {
    /// Directive names, outermost first.
    pub names: Vec<&'a str>,
    /// Everything after the last directive's closing parenthesis.
    pub body: &'a str,
}

/// Strip leading `#WRAP(name)` directives off `code`.
///
/// Only the directive token and the whitespace before it are consumed; any
/// text following `)` on the same line stays part of the body. Parsing stops
/// at the first thing that is not a well formed directive.
pub fn parse_directives(code: &str) -> Directives<'_> {
    let mut names = Vec::new();
    let mut rest = code;

    while let Some(caps) = DIRECTIVE.captures(rest) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        names.push(name.as_str());
        rest = &rest[whole.end()..];
    }

    Directives { names, body: rest }
}

/// Whether `name` could be selected by a directive.
pub fn is_valid_name(name: &str) -> bool {
    NAME.is_match(name)
}
