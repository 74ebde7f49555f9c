//! GAVEL — Sealed-Bid Auction Tournament Simulator
//!
//! Entry point. Initialises structured logging, loads configuration,
//! runs a single collect → score → rank tournament against the external
//! bid generator, and prints the report. Any failure is fatal and
//! surfaces as a non-zero exit.

use anyhow::Result;
use tracing::info;

use gavel::bidsource::process::ProcessBidSource;
use gavel::config::AppConfig;
use gavel::engine::tournament;

const BANNER: &str = r#"
  ____    ___     _______ _
 / ___|  / \ \   / / ____| |
| |  _  / _ \ \ / /|  _| | |
| |_| |/ ___ \ V / | |___| |___
 \____/_/   \_\_/  |_____|_____|

  Generalized Auction Victory Evaluation Loop
  v0.1.0 — Tournament Simulator
"#;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cfg = AppConfig::load_or_default("config.toml")?;

    println!("{BANNER}");
    info!(
        rounds = cfg.tournament.rounds,
        players = cfg.tournament.players,
        command = %cfg.bidder.command.display(),
        "GAVEL starting up"
    );

    let source = ProcessBidSource::new(cfg.bidder.command.clone());
    let report = tournament::run(&cfg.tournament, &source).await?;

    if std::env::var("GAVEL_REPORT_JSON").is_ok() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    info!(
        run_id = %report.run_id,
        champions = ?report.champions(),
        elapsed_ms = report.elapsed().num_milliseconds(),
        "Tournament complete"
    );

    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gavel=info"));

    let json_logging = std::env::var("GAVEL_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    }
}
