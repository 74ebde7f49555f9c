//! External-process bid source.
//!
//! Invokes the configured bid generator as `<command> <player id>`,
//! fully awaits its exit, and parses the captured stdout. One invocation
//! per `fetch_bids` call; the caller decides sequencing.
//!
//! Output format: one line per round in round order. Each non-empty line
//! is whitespace-separated and only its second token (the bid integer)
//! is consumed. Empty lines are skipped.

use anyhow::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

use super::BidSource;
use crate::types::{Bid, GavelError, PlayerId};

/// Bid source backed by an external executable.
pub struct ProcessBidSource {
    command: PathBuf,
}

impl ProcessBidSource {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The executable this source launches.
    pub fn command(&self) -> &Path {
        &self.command
    }
}

#[async_trait]
impl BidSource for ProcessBidSource {
    async fn fetch_bids(&self, player: PlayerId) -> Result<Vec<Bid>> {
        debug!(
            command = %self.command.display(),
            player = %player,
            "Launching bid generator"
        );

        let output = Command::new(&self.command)
            .arg(player.to_string())
            .output()
            .await
            .map_err(|e| GavelError::ProcessLaunch {
                player,
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(GavelError::ProcessLaunch {
                player,
                message: format!("bid generator exited with {}", output.status),
            }
            .into());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let bids = parse_bid_lines(&stdout, player)?;

        debug!(player = %player, count = bids.len(), "Bid generator output parsed");
        Ok(bids)
    }

    fn name(&self) -> &str {
        "process"
    }
}

/// Parse generator output into bids: second whitespace-separated token
/// of every non-empty line. Lines with fewer than two tokens, or a
/// second token that is not an integer, are fatal.
fn parse_bid_lines(output: &str, player: PlayerId) -> Result<Vec<Bid>> {
    let mut bids = Vec::new();

    for (idx, line) in output.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let _label = tokens.next();
        let raw = tokens.next().ok_or_else(|| GavelError::OutputParse {
            player,
            message: format!("line {}: expected at least two fields, got {line:?}", idx + 1),
        })?;

        let bid: Bid = raw.parse().map_err(|_| GavelError::OutputParse {
            player,
            message: format!("line {}: invalid bid value {raw:?}", idx + 1),
        })?;

        bids.push(bid);
    }

    Ok(bids)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
