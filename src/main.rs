// src/main.rs
//! Cistern rate calculator
//!
//! Usage: `cistern [CONFIG_FILE]`
//!
//! Reads the pipes from configuration (defaults: three inlets taking 10, 12
//! and 15 hours), evaluates them once and prints the report to stdout.

use anyhow::{Context, Result};
use cistern_engine::observability::init_tracing;
use cistern_engine::report::Reporter;
use cistern_engine::utils::config::EngineConfig;
use cistern_engine::{BuildInfo, RateEngine};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> Result<ExitCode> {
    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load_from(&path)
            .with_context(|| format!("failed to load configuration from {}", path))?,
        None => EngineConfig::load().context("failed to load configuration")?,
    };

    init_tracing(&config.logging)?;

    let build = BuildInfo::current();
    info!(
        "Starting cistern engine v{} ({}, {})",
        build.version, build.git_hash, build.rustc_version
    );

    let reporter = Reporter::from_config(&config.report).with_labels(config.labels());

    // Invalid pipes are rejected before any calculation
    let outcome = config
        .agents()
        .and_then(|agents| RateEngine::new().evaluate(&agents).map(|result| (agents, result)));

    match outcome {
        Ok((agents, result)) => {
            info!(
                "Evaluated {} pipes: capacity {}, outcome {}",
                agents.len(),
                result.capacity,
                result.outcome
            );
            let rendered = reporter.render(&agents, &result)?;
            if rendered.ends_with('\n') {
                print!("{}", rendered);
            } else {
                println!("{}", rendered);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_invalid_input() => {
            error!("Rejected input: {}", e);
            eprintln!("{}", reporter.render_rejection(&e));
            Ok(ExitCode::from(2))
        }
        Err(e) => {
            error!("Calculation failed: {}", e);
            Err(e.into())
        }
    }
}
