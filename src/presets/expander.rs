// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Macro expansion
//!
//! Expansion is single pass: positional placeholders `$1..$n` are replaced in
//! ascending order, then every short `$<name>` is replaced. Each placeholder is
//! replaced at most once, so a template repeating `$1` keeps the second `$1`
//! verbatim. Saved config files rely on this.

use std::collections::BTreeMap;

use tracing::trace;

use super::invocation::Invocation;
use crate::error::{ExpandError, MacroKind};

/// Expands invocations against one template dictionary plus the shared shorts
pub struct Expander<'a> {
    kind: MacroKind,
    templates: &'a BTreeMap<String, String>,
    shorts: &'a BTreeMap<String, String>,
}

impl<'a> Expander<'a> {
    pub fn new(
        kind: MacroKind,
        templates: &'a BTreeMap<String, String>,
        shorts: &'a BTreeMap<String, String>,
    ) -> Self {
        Self {
            kind,
            templates,
            shorts,
        }
    }

    /// Expand `name(args...)` into its query fragment
    pub fn expand(&self, text: &str) -> Result<String, ExpandError> {
        let invocation = Invocation::parse(text)?;

        let template = self.templates.get(invocation.name).ok_or_else(|| {
            ExpandError::UnknownMacro {
                kind: self.kind,
                name: invocation.name.to_string(),
            }
        })?;

        let mut expanded = template.clone();
        for (idx, arg) in invocation.args.iter().enumerate() {
            replace_first(&mut expanded, &format!("${}", idx + 1), arg);
        }

        // Reverse key order visits a name before any of its prefixes,
        // so `$namespace` is not clobbered by `$name`.
        for (short, value) in self.shorts.iter().rev() {
            replace_first(&mut expanded, &format!("${}", short), value);
        }

        trace!(kind = %self.kind, invocation = %text, expanded = %expanded, "Expanded macro");
        Ok(expanded)
    }
}

/// Replace the first occurrence of `token` in place
fn replace_first(haystack: &mut String, token: &str, value: &str) {
    if let Some(idx) = haystack.find(token) {
        haystack.replace_range(idx..idx + token.len(), value);
    }
}
