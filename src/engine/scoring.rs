//! Winner selection and score tallying.
//!
//! A round's winner is the player maximizing the pairing
//! `(bid, player id)`: among tied maximum bids, the numerically larger
//! player id wins. That tie-break is part of the established behavior
//! and is reproduced exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{BidTable, PlayerId};

/// Winner of a single round, or `None` for an empty table.
///
/// `round` must be below `table.rounds()`.
pub fn round_winner(table: &BidTable, round: usize) -> Option<PlayerId> {
    table
        .rows()
        .iter()
        .map(|row| (row.bids[round], row.player))
        .max()
        .map(|(_, player)| player)
}

/// Cumulative win counts, aligned with the player enumeration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scoreboard {
    players: Vec<PlayerId>,
    scores: Vec<u32>,
}

impl Scoreboard {
    /// A fresh scoreboard with every player at zero wins.
    pub fn new(players: &[PlayerId]) -> Self {
        Self {
            players: players.to_vec(),
            scores: vec![0; players.len()],
        }
    }

    /// Credit one round win. Unknown players are ignored — winners
    /// always come from the same table the board was built for.
    pub fn record_win(&mut self, player: PlayerId) {
        if let Some(pos) = self.players.iter().position(|&p| p == player) {
            self.scores[pos] += 1;
        }
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn scores(&self) -> &[u32] {
        &self.scores
    }

    /// Sum of all recorded wins — equals the number of scored rounds.
    pub fn total_wins(&self) -> u32 {
        self.scores.iter().sum()
    }
}

impl fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .players
            .iter()
            .zip(&self.scores)
            .map(|(p, s)| format!("{p}={s}"))
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{pairs}")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
