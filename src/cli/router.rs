// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Argument routing between kubequery and kubectl
//!
//! kubequery's flags may appear anywhere on the command line, mixed with
//! kubectl flags such as `-n` or `-l`. The router claims kubequery's own flags
//! (and their values) and forwards every other token untouched, in order.
//! A `--` ends flag recognition and is itself dropped.

use thiserror::Error;

/// Own flags that take a value
const VALUE_FLAGS: &[(&str, Option<char>)] = &[
    ("--where", Some('w')),
    ("--select", Some('s')),
    ("--resource", Some('x')),
    ("--config", None),
    ("--kubectl", None),
    ("--jq", None),
    ("--format", None),
];

/// Own flags without a value
const SWITCH_FLAGS: &[(&str, Option<char>)] = &[
    // long only, kubectl owns `-v` for its log level
    ("--verbose", None),
    ("--help", Some('h')),
    ("--version", Some('V')),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("missing value for {0}")]
    MissingValue(String),
}

/// Command line split into kubequery's tokens and kubectl's tokens
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RoutedArgs {
    /// Program name followed by kubequery's own flags, ready for clap.
    /// Value flags are normalized to `--long=value`.
    pub own: Vec<String>,
    /// Tokens forwarded verbatim to `kubectl get`
    pub forwarded: Vec<String>,
}

/// Long name of the flag `token` spells, if any
fn find_flag(token: &str, flags: &[(&'static str, Option<char>)]) -> Option<&'static str> {
    flags
        .iter()
        .find(|(long, short)| token == *long || short.is_some_and(|c| token == format!("-{}", c)))
        .map(|(long, _)| *long)
}

/// `--flag=value` for one of the value flags
fn is_inline_value(token: &str) -> bool {
    token
        .split_once('=')
        .is_some_and(|(flag, _)| flag.starts_with("--") && find_flag(flag, VALUE_FLAGS).is_some())
}

/// Split the process arguments (including the program name)
pub fn route<I>(args: I) -> Result<RoutedArgs, RouteError>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut routed = RoutedArgs::default();
    routed
        .own
        .push(args.next().unwrap_or_else(|| "kubequery".to_string()));

    while let Some(token) = args.next() {
        if token == "--" {
            routed.forwarded.extend(args.by_ref());
            break;
        }

        if let Some(long) = find_flag(&token, VALUE_FLAGS) {
            let value = args
                .next()
                .ok_or_else(|| RouteError::MissingValue(token.clone()))?;
            // Joined so clap never mistakes a value such as `-n` for a flag
            routed.own.push(format!("{}={}", long, value));
        } else if find_flag(&token, SWITCH_FLAGS).is_some() || is_inline_value(&token) {
            routed.own.push(token);
        } else {
            routed.forwarded.push(token);
        }
    }

    Ok(routed)
}
