// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

use std::path::PathBuf;

use clap::Parser;

use crate::kubectl::DEFAULT_RESOURCE;
use crate::output::OutputFormat;

/// kubequery's own options
///
/// Only the tokens the router claimed reach this parser; everything else on
/// the command line goes to kubectl.
#[derive(Parser, Debug)]
#[command(name = "kubequery")]
#[command(author, version, about = "Query Kubernetes resources with jq preset macros")]
#[command(
    after_help = "Any other arguments are passed to `kubectl get`.\n\
                  Example: kubequery -x pods -n kube-system -w 'podsForName(dns)' -s 'images()'"
)]
pub struct Args {
    /// Filter macro invocation, e.g. 'podsForLabel(app, "web")'
    #[arg(short = 'w', long = "where", value_name = "MACRO")]
    pub filter: Option<String>,

    /// Selection macro invocation, e.g. 'namespaced()'
    #[arg(short, long, value_name = "MACRO")]
    pub select: Option<String>,

    /// Resource type passed to `kubectl get`
    #[arg(short = 'x', long, value_name = "RESOURCE", default_value = DEFAULT_RESOURCE)]
    pub resource: String,

    /// Preset file (defaults to ~/.kubequery)
    #[arg(long, value_name = "PATH", env = "KUBEQUERY_CONFIG")]
    pub config: Option<PathBuf>,

    /// kubectl binary
    #[arg(long, value_name = "PROGRAM", env = "KUBEQUERY_KUBECTL", default_value = "kubectl")]
    pub kubectl: String,

    /// jq-compatible binary used to evaluate the query
    #[arg(long, value_name = "PROGRAM", env = "KUBEQUERY_JQ", default_value = "jq")]
    pub jq: String,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,
}
