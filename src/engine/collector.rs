//! Bid collection.
//!
//! Pulls every player's bids through the injected `BidSource`, strictly
//! one player at a time: each fetch is fully awaited before the next
//! player's source is contacted. The first failure aborts the whole
//! collection — no retry, no padded table.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::bidsource::BidSource;
use crate::types::{BidTable, GavelError, PlayerId};

pub struct BidCollector;

impl BidCollector {
    /// Collect exactly `rounds` bids for every player, in enumeration
    /// order. A source returning fewer than `rounds` bids is fatal;
    /// bids beyond `rounds` (trailing generator output) are ignored.
    pub async fn collect(
        source: &dyn BidSource,
        players: &[PlayerId],
        rounds: usize,
    ) -> Result<BidTable> {
        info!(
            source = source.name(),
            players = players.len(),
            rounds,
            "Collecting bids"
        );

        let mut table = BidTable::new(rounds);

        for &player in players {
            let mut bids = source
                .fetch_bids(player)
                .await
                .with_context(|| format!("Failed to obtain bids for player {player}"))?;

            if bids.len() < rounds {
                return Err(GavelError::OutputParse {
                    player,
                    message: format!("expected {rounds} bids, got {}", bids.len()),
                }
                .into());
            }
            bids.truncate(rounds);

            debug!(player = %player, ?bids, "Bids recorded");
            table.insert(player, bids);
        }

        Ok(table)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
