// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

use anyhow::Context;
use serde_json::Value;

use super::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(results: &[Value]) -> anyhow::Result<String> {
        serde_json::to_string_pretty(results).context("Failed to serialize results as JSON")
    }
}
