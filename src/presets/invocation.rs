// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Call-style invocation parsing
//!
//! `name(arg1, arg2)` is split on the first `(` and the last `)`. Parentheses
//! are not balanced, so a nested call such as `f(g(x))` passes `g(x)` through
//! as a literal argument. Arguments are split on every comma with no regard
//! for quoting.

use crate::error::ExpandError;

/// Characters stripped from both ends of every argument
const ARG_TRIM: &[char] = &[' ', '\t', '\n', '\r'];

/// A parsed `name(args...)` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> Invocation<'a> {
    /// Parse invocation text
    ///
    /// `name()` yields a single empty argument. Anything after the last `)` is
    /// ignored.
    pub fn parse(text: &'a str) -> Result<Self, ExpandError> {
        let syntax_error = || ExpandError::Syntax(text.to_string());

        let open = text.find('(').ok_or_else(syntax_error)?;
        let close = text.rfind(')').ok_or_else(syntax_error)?;
        if close < open {
            return Err(syntax_error());
        }

        let name = &text[..open];
        let args = text[open + 1..close]
            .split(',')
            .map(|arg| arg.trim_matches(ARG_TRIM))
            .collect();

        Ok(Self { name, args })
    }
}
