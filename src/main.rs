// Copyright (c) 2025 Nikolay Denev <ndenev@gmail.com>
// SPDX-License-Identifier: BSD-3-Clause

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use kubequery::Presets;
use kubequery::cli::{self, Args};
use kubequery::config;
use kubequery::jq::JqCommand;
use kubequery::kubectl::Kubectl;
use kubequery::output;
use kubequery::pipeline::{Pipeline, Request};
use kubequery::presets::BUILTIN_PRESETS;
use kubequery::query::QueryPlan;

/// Initialize logging on stderr
///
/// stdout carries only the query result, so it can be piped into other tools.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "kubequery=debug"
    } else {
        "kubequery=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let routed = cli::route(std::env::args()).context("Invalid arguments")?;
    let args = Args::parse_from(&routed.own);

    init_logging(args.verbose);

    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    debug!(path = %config_path.display(), "Using preset file");
    let presets = Presets::load_or_seed(&config_path, &BUILTIN_PRESETS)?;

    let request = Request {
        resource: args.resource.clone(),
        plan: QueryPlan::from_flags(args.filter.as_deref(), args.select.as_deref()),
        forwarded: routed.forwarded,
    };
    debug!(resource = %request.resource, forwarded = ?request.forwarded, "Routed arguments");

    let pipeline = Pipeline::new(Kubectl::new(&args.kubectl), JqCommand::new(&args.jq));
    let results = pipeline.run(&request, &presets)?;

    // Only reached once every step succeeded; a failed run leaves stdout empty
    println!("{}", output::format_results(&results, args.format)?);
    Ok(())
}
