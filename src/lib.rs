// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

//! Query Kubernetes resources with jq preset macros
//!
//! A preset invocation such as `podsForLabel(app, "web")` is expanded from the
//! user's preset file into a jq fragment, assembled into
//! `items[] | <filter> | [<select>]` and evaluated against the JSON listing
//! returned by `kubectl get`.

pub mod cli;
pub mod config;
pub mod error;
pub mod jq;
pub mod kubectl;
pub mod output;
pub mod pipeline;
pub mod presets;
pub mod query;

pub use config::Presets;
pub use error::{Error, Result};
