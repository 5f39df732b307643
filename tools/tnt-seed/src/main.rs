//! TNT-Seed: bootstrap a Track-and-Trace ledger with demo data.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tnt_04_submission::{BatchSubmitter, GatewayConfig, RestGateway, DEFAULT_GATEWAY_URL};
use tnt_05_services::{AccountApi, ClientConfig, DEFAULT_API_URL};
use tnt_seed::{load_organizations, load_record_types, Seeder};
use tnt_telemetry::{init_logging, service_span, TelemetryConfig};
use tracing::{error, info, Instrument};

/// TNT-Seed: seed a Track-and-Trace ledger with demo data
#[derive(Parser, Debug)]
#[command(name = "tnt-seed")]
#[command(about = "Create demo organizations, admin users and record types")]
struct Args {
    /// Application server base URL
    #[arg(long, env = "SERVER", default_value = DEFAULT_API_URL)]
    server: String,

    /// Ledger gateway base URL
    #[arg(long, env = "GRID", default_value = DEFAULT_GATEWAY_URL)]
    grid: String,

    /// Delay between server readiness probes, in milliseconds
    #[arg(long, env = "RETRY_WAIT", default_value = "5000")]
    retry_wait: u64,

    /// JSON seed data file
    #[arg(long, env = "DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Create organizations with admin users and their record types
    Organizations,
    /// Register record types under a fresh key
    Schemas,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let telemetry = TelemetryConfig::for_tool("tnt-seed");
    if let Err(e) = init_logging(&telemetry) {
        eprintln!("Warning: {e}");
    }
    match run(args).instrument(service_span!(telemetry)).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> anyhow::Result<bool> {
    let gateway_config = GatewayConfig {
        poll_delay: Duration::from_millis(500),
        ..GatewayConfig::new(&args.grid)
    };
    let config = ClientConfig::new(&args.server, gateway_config);

    let gateway = RestGateway::new(&config.gateway).context("building gateway client")?;
    let accounts = AccountApi::new(&config).context("building account client")?;
    let submitter = BatchSubmitter::from_config(Arc::new(gateway), &config.gateway);
    let seeder = Seeder::new(Arc::new(accounts), Arc::new(submitter), config)
        .with_retry_wait(Duration::from_millis(args.retry_wait));

    match args.command {
        Command::Organizations => {
            let organizations = load_organizations(args.data.as_deref())?;
            seeder.await_server_ready().await;

            let report = seeder.seed_organizations(&organizations).await;
            info!(
                seeded = report.seeded.len(),
                failed = report.failed.len(),
                "Seeding finished"
            );
            Ok(report.is_success())
        }
        Command::Schemas => {
            let record_types = load_record_types(args.data.as_deref())?;
            seeder.await_server_ready().await;

            let ids = seeder
                .seed_record_types(&record_types)
                .await
                .context("seeding record types")?;
            info!(transactions = ids.len(), "Record types committed");
            Ok(true)
        }
    }
}
