// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

use anyhow::Context;
use serde_json::Value;

use super::OutputFormatter;

pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(results: &[Value]) -> anyhow::Result<String> {
        serde_yaml::to_string(results).context("Failed to serialize results as YAML")
    }
}
