//! Bid sources.
//!
//! Defines the `BidSource` trait and provides the production
//! implementation backed by an external generator process. Tests inject
//! in-memory implementations so no process is ever spawned.

pub mod process;

use anyhow::Result;
use async_trait::async_trait;

use crate::types::{Bid, PlayerId};

/// Abstraction over per-player bid generators.
///
/// Implementors produce the full bid sequence for one player per call.
/// Any failure is fatal for the run — there is no retry and no partial
/// recovery anywhere downstream.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BidSource: Send + Sync {
    /// Fetch all of a player's bids, one per round in round order.
    async fn fetch_bids(&self, player: PlayerId) -> Result<Vec<Bid>>;

    /// Source name for logging and identification.
    fn name(&self) -> &str;
}
