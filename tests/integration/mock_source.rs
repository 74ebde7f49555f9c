//! Mock bid source for integration testing.
//!
//! Provides a deterministic `BidSource` implementation with scripted
//! per-player bids, call recording, and forceable errors — all
//! in-memory with no external processes.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use gavel::bidsource::BidSource;
use gavel::types::{Bid, PlayerId};

/// The demo generator's deterministic schedule: player `p` bids
/// `SCHEDULE[p + round - 2] * 100` in round `round` (both 1-based).
const SCHEDULE: [i64; 21] = [
    20, 18, 5, 21, 8, 7, 2, 19, 14, 13, 9, 1, 6, 10, 16, 11, 4, 12, 15, 17, 3,
];

/// Bids the demo generator emits for one player over ten rounds.
pub fn demo_schedule(player: u32) -> Vec<Bid> {
    let p = player as usize;
    (1..=10).map(|round| SCHEDULE[p + round - 2] * 100).collect()
}

/// A mock bid source for deterministic testing.
///
/// All state is in-memory. Scripted bids, recorded calls, and forced
/// errors are fully controllable from test code.
pub struct MockBidSource {
    name: String,
    bids: Vec<(PlayerId, Vec<Bid>)>,
    calls: Arc<Mutex<Vec<PlayerId>>>,
    /// If set, all fetches will return this error.
    force_error: Arc<Mutex<Option<String>>>,
}

impl MockBidSource {
    /// Create a mock with no scripted bids.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            bids: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            force_error: Arc::new(Mutex::new(None)),
        }
    }

    /// Create a mock scripted with the demo generator's schedule for
    /// players 1..=8.
    pub fn demo() -> Self {
        let mut source = Self::new("mock-demo");
        for player in 1..=8 {
            source.script(PlayerId(player), demo_schedule(player));
        }
        source
    }

    /// Script a player's bid sequence.
    pub fn script(&mut self, player: PlayerId, bids: Vec<Bid>) {
        self.bids.push((player, bids));
    }

    /// Force all subsequent fetches to return an error.
    pub fn set_error(&self, msg: &str) {
        *self.force_error.lock().unwrap() = Some(msg.to_string());
    }

    /// Clear any forced error.
    pub fn clear_error(&self) {
        *self.force_error.lock().unwrap() = None;
    }

    /// Players fetched so far, in call order.
    pub fn calls(&self) -> Vec<PlayerId> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BidSource for MockBidSource {
    async fn fetch_bids(&self, player: PlayerId) -> Result<Vec<Bid>> {
        self.calls.lock().unwrap().push(player);

        if let Some(err) = self.force_error.lock().unwrap().as_ref() {
            return Err(anyhow!("{}", err));
        }

        self.bids
            .iter()
            .find(|(p, _)| *p == player)
            .map(|(_, bids)| bids.clone())
            .ok_or_else(|| anyhow!("no bids scripted for player {player}"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_scripted_bids() {
        let mut source = MockBidSource::new("test");
        source.script(PlayerId(1), vec![10, 20, 30]);

        let bids = source.fetch_bids(PlayerId(1)).await.unwrap();
        assert_eq!(bids, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn test_mock_unscripted_player_errors() {
        let source = MockBidSource::new("test");
        let err = source.fetch_bids(PlayerId(9)).await.unwrap_err();
        assert!(err.to_string().contains("player 9"));
    }

    #[tokio::test]
    async fn test_mock_records_calls_in_order() {
        let mut source = MockBidSource::new("test");
        source.script(PlayerId(1), vec![1]);
        source.script(PlayerId(2), vec![2]);

        source.fetch_bids(PlayerId(2)).await.unwrap();
        source.fetch_bids(PlayerId(1)).await.unwrap();

        assert_eq!(source.calls(), vec![PlayerId(2), PlayerId(1)]);
    }

    #[tokio::test]
    async fn test_mock_forced_error() {
        let mut source = MockBidSource::new("test");
        source.script(PlayerId(1), vec![1]);
        source.set_error("simulated generator crash");

        let err = source.fetch_bids(PlayerId(1)).await.unwrap_err();
        assert!(err.to_string().contains("simulated generator crash"));

        source.clear_error();
        assert!(source.fetch_bids(PlayerId(1)).await.is_ok());
    }

    #[test]
    fn test_demo_schedule_shape() {
        for player in 1..=8 {
            let bids = demo_schedule(player);
            assert_eq!(bids.len(), 10);
            assert!(bids.iter().all(|b| b % 100 == 0));
        }
        // Round 1 bids come straight from the head of the schedule.
        assert_eq!(demo_schedule(1)[0], 2000);
        assert_eq!(demo_schedule(4)[0], 2100);
    }
}
