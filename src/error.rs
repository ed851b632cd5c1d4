// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Error taxonomy
//!
//! Each component returns its own typed error; `Error` gathers them so the
//! binary can report any failure with a single `?`. None of these are
//! recoverable: the caller prints the message and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the preset config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to {action} config file {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize built-in presets: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Failures while expanding a macro invocation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("invalid invocation '{0}': expected name(arg1, arg2, ...)")]
    Syntax(String),

    #[error("unknown {kind} macro '{name}'")]
    UnknownMacro { kind: MacroKind, name: String },
}

/// Which preset dictionary a macro is looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacroKind {
    Filter,
    Select,
}

impl std::fmt::Display for MacroKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MacroKind::Filter => f.write_str("filter"),
            MacroKind::Select => f.write_str("select"),
        }
    }
}

/// Failures fetching the resource listing from kubectl
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}")]
    Status {
        program: String,
        status: std::process::ExitStatus,
    },

    #[error("failed to decode {program} output as JSON: {source}")]
    JsonDecode {
        program: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failures evaluating the assembled query
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("query '{query}' failed: {message}")]
    Query { query: String, message: String },

    #[error("failed to decode query result: {0}")]
    Output(#[source] serde_json::Error),
}

/// Any failure of a kubequery run
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Expand(#[from] ExpandError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
