// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Query assembly
//!
//! The final query always has the shape `items[] | <filter> | [<select>]`.
//! Nothing here validates jq syntax; a bad query surfaces as an evaluation
//! error.

use crate::config::Presets;
use crate::error::ExpandError;
use crate::presets::SENTINEL_INVOCATION;

/// Combine expanded filter and select fragments into the final query
pub fn assemble(filter: &str, select: &str) -> String {
    format!("items[] | {} | [{}]", filter, select)
}

/// Filter and select invocations for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPlan {
    pub filter: String,
    pub select: String,
}

impl QueryPlan {
    /// Plan from optional `-w` / `-s` values, defaulting each to `all()`
    pub fn from_flags(filter: Option<&str>, select: Option<&str>) -> Self {
        Self {
            filter: filter.unwrap_or(SENTINEL_INVOCATION).to_string(),
            select: select.unwrap_or(SENTINEL_INVOCATION).to_string(),
        }
    }

    /// Expand both invocations and assemble the query
    pub fn build(&self, presets: &Presets) -> Result<String, ExpandError> {
        let filter = presets.filters().expand(&self.filter)?;
        let select = presets.selects().expand(&self.select)?;
        Ok(assemble(&filter, &select))
    }
}
