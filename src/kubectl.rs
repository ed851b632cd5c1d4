// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Resource listing via kubectl
//!
//! kubequery never talks to the API server itself. Every listing comes from
//! `kubectl get <resource> <forwarded...> -o json`, run with the caller's
//! environment so kubeconfig and context selection behave exactly as they do
//! for kubectl.

use std::process::{Command, Stdio};

use serde_json::Value;
use tracing::debug;

use crate::error::FetchError;

/// Resource type used when `-x` is not given
pub const DEFAULT_RESOURCE: &str = "all";

/// Source of resource listings as JSON documents
pub trait ResourceSource {
    fn fetch(&self, resource: &str, forwarded: &[String]) -> Result<Value, FetchError>;
}

/// Runs the kubectl binary
#[derive(Debug, Clone)]
pub struct Kubectl {
    program: String,
}

impl Kubectl {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Full argument list passed to kubectl
    fn command_args<'a>(resource: &'a str, forwarded: &'a [String]) -> Vec<&'a str> {
        let mut args = Vec::with_capacity(forwarded.len() + 4);
        args.push("get");
        args.push(resource);
        args.extend(forwarded.iter().map(String::as_str));
        args.extend(["-o", "json"]);
        args
    }
}

impl Default for Kubectl {
    fn default() -> Self {
        Self::new("kubectl")
    }
}

impl ResourceSource for Kubectl {
    fn fetch(&self, resource: &str, forwarded: &[String]) -> Result<Value, FetchError> {
        let args = Self::command_args(resource, forwarded);
        debug!(program = %self.program, args = ?args, "Running kubectl");

        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|source| FetchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(FetchError::Status {
                program: self.program.clone(),
                status: output.status,
            });
        }

        debug!(bytes = output.stdout.len(), "Fetched resource listing");
        serde_json::from_slice(&output.stdout).map_err(|source| FetchError::JsonDecode {
            program: self.program.clone(),
            source,
        })
    }
}
