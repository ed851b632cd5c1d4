// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Result formatting
//!
//! Query results are always printed as one array holding every value the
//! query produced.

mod json;
mod yaml;

pub use json::JsonFormatter;
pub use yaml::YamlFormatter;

use clap::ValueEnum;
use serde_json::Value;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

pub trait OutputFormatter {
    fn format(results: &[Value]) -> anyhow::Result<String>;
}

/// Format query results for stdout
pub fn format_results(results: &[Value], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => JsonFormatter::format(results),
        OutputFormat::Yaml => YamlFormatter::format(results),
    }
}
