// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Query evaluation through jq

use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;
use tracing::debug;

use crate::error::EvalError;

/// Definitions prepended to every query; `items` makes `items[]` valid jq
const PRELUDE: &str = "def items: .items; ";

/// Evaluates an assembled query against a fetched document
pub trait QueryEvaluator {
    fn evaluate(&self, query: &str, input: &Value) -> Result<Vec<Value>, EvalError>;
}

/// Runs an external jq-compatible binary (`jq`, `gojq`, `jaq`)
#[derive(Debug, Clone)]
pub struct JqCommand {
    program: String,
}

impl JqCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for JqCommand {
    fn default() -> Self {
        Self::new("jq")
    }
}

impl QueryEvaluator for JqCommand {
    fn evaluate(&self, query: &str, input: &Value) -> Result<Vec<Value>, EvalError> {
        let spawn_err = |source: std::io::Error| EvalError::Spawn {
            program: self.program.clone(),
            source,
        };

        let filter = format!("{}{}", PRELUDE, query);
        debug!(program = %self.program, query = %query, "Evaluating query");

        let mut child = Command::new(&self.program)
            .arg("-c")
            .arg(&filter)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_err)?;

        // jq reads the whole document before emitting anything, so writing
        // all of stdin before collecting stdout cannot deadlock.
        if let Some(mut stdin) = child.stdin.take() {
            let payload = serde_json::to_vec(input).map_err(EvalError::Output)?;
            if let Err(e) = stdin.write_all(&payload) {
                // A broken pipe means jq exited early, its status explains why
                if e.kind() != std::io::ErrorKind::BrokenPipe {
                    return Err(spawn_err(e));
                }
            }
        }

        let output = child.wait_with_output().map_err(spawn_err)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EvalError::Query {
                query: query.to_string(),
                message: match stderr.trim() {
                    "" => format!("{} exited with {}", self.program, output.status),
                    msg => msg.to_string(),
                },
            });
        }

        parse_value_stream(&output.stdout)
    }
}

/// Parse a whitespace separated stream of JSON values
fn parse_value_stream(bytes: &[u8]) -> Result<Vec<Value>, EvalError> {
    serde_json::Deserializer::from_slice(bytes)
        .into_iter::<Value>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(EvalError::Output)
}
