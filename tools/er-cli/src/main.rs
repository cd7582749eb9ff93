//! er-cli: run a JSON script of royalty operations against an in-process
//! service and print one JSON result per operation.

use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use er_04_orchestrator::prelude::*;
use er_cli::script::{run_script, Op};

/// Royalty engine script runner
#[derive(Parser, Debug)]
#[command(name = "er-cli")]
#[command(about = "Runs a JSON script of royalty operations and prints JSON results")]
struct Args {
    /// Script file (JSON array of operations), or `-` for stdin
    #[arg(short, long)]
    script: PathBuf,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Maximum beneficiaries per split (overrides ER_MAX_BENEFICIARIES)
    #[arg(long)]
    max_beneficiaries: Option<usize>,
}

/// Defaults, then `ER_*` environment variables, then flags.
fn load_config(args: &Args) -> EngineConfig {
    let mut config = EngineConfig::default();

    if let Ok(value) = std::env::var("ER_MAX_BENEFICIARIES") {
        match value.parse() {
            Ok(max) => config.max_beneficiaries = max,
            Err(_) => warn!("ER_MAX_BENEFICIARIES must be a positive integer, ignoring {value:?}"),
        }
    }
    if let Ok(value) = std::env::var("ER_ALLOW_ZERO_OWNER") {
        config.allow_zero_address_owner = matches!(value.as_str(), "1" | "true");
    }

    if let Some(max) = args.max_beneficiaries {
        config.max_beneficiaries = max;
    }
    config
}

fn read_script(path: &PathBuf) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read script from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn emit(value: &Value, pretty: bool) -> Result<()> {
    let line = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{line}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr; stdout carries only JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args);
    let (service, admin) = RoyaltyService::new(
        config,
        Arc::new(InMemoryPayouts::new()),
        Arc::new(InMemoryEventLog::new()),
    )
    .context("Invalid engine configuration")?;

    let source = read_script(&args.script)?;
    let ops: Vec<Op> = serde_json::from_str(&source).context("Failed to parse script")?;
    info!("Running {} operations", ops.len());

    for line in run_script(&service, &admin, ops) {
        emit(&line, args.pretty)?;
    }

    let payouts: serde_json::Map<String, Value> = service
        .payouts()
        .balances()
        .into_iter()
        .map(|(addr, amount)| (format!("{addr:?}"), json!(amount.to_string())))
        .collect();
    emit(&json!({ "payouts": payouts }), args.pretty)?;
    emit(
        &json!({ "events": service.event_sink().records() }),
        args.pretty,
    )?;
    emit(&json!({ "stats": service.stats() }), args.pretty)?;

    Ok(())
}
