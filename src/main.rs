// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fleetdns::{
    config::Config,
    constants::{DEFAULT_CONFIG_PATH, DRY_RUN_ENV_VAR, HOSTNAMES_TAG_KEY, TOKIO_WORKER_THREADS},
    providers::aws::AwsCloud,
    reconcile::run_reconciliation,
};
use tracing::{debug, info};

/// Reconcile Route 53 address records with the running EC2 fleet.
#[derive(Debug, Parser)]
#[command(name = "fleetdns", version, about)]
struct Cli {
    /// Path to the optional JSON override config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Compute and report changes without applying them
    #[arg(long)]
    dry_run: bool,

    /// Instance tag carrying the comma-separated hostname list
    #[arg(long, default_value = HOSTNAMES_TAG_KEY)]
    tag_key: String,
}

fn main() -> Result<()> {
    // Build Tokio runtime with custom thread names
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(TOKIO_WORKER_THREADS)
        .thread_name("fleetdns")
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with custom format
    //
    // Respects RUST_LOG environment variable if set, otherwise defaults to INFO level
    // Example: RUST_LOG=debug fleetdns
    //
    // Respects RUST_LOG_FORMAT environment variable for output format
    // Example: RUST_LOG_FORMAT=json fleetdns
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(true)
                .compact()
                .init();
        }
    }

    let config = Config::load(&cli.config);
    let dry_run = cli.dry_run || dry_run_from_env();

    info!(
        region = %config.aws.region,
        ttl = config.dns.ttl,
        ignored_zones = config.dns.ignore_zones.len(),
        dry_run,
        "Starting fleetdns reconciliation run"
    );

    let cloud = AwsCloud::connect(&config.aws.region).await;

    let outcome = run_reconciliation(
        &cloud,
        &cloud,
        &cloud,
        &cloud,
        &config,
        &cli.tag_key,
        dry_run,
    )
    .await?;

    if outcome.rows.is_empty() {
        debug!("No record changes required");
    } else {
        info!(
            changes = outcome.rows.len(),
            zones_applied = outcome.zones_applied,
            "Reconciliation run complete"
        );
    }

    Ok(())
}

/// Whether the DRY_RUN environment toggle suppresses application.
///
/// Unset means apply. Any value other than `0`, `false`, `no`, `off` or
/// the empty string (ASCII case-insensitive) enables dry-run.
fn dry_run_from_env() -> bool {
    match std::env::var(DRY_RUN_ENV_VAR) {
        Ok(value) => !matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "" | "0" | "false" | "no" | "off"
        ),
        Err(_) => false,
    }
}
