//! Shared types for the GAVEL simulator.
//!
//! These types form the data model used across all modules.
//! They are designed to be stable so that bid source, engine,
//! and ranking modules can depend on them without circular references.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Identifier of an auction participant.
///
/// The `Ord` impl is load-bearing: round winners are chosen by the maximum
/// of `(bid, player id)`, so among equal bids the larger id wins.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single sealed bid. The external generator emits plain integers.
pub type Bid = i64;

// ---------------------------------------------------------------------------
// Bid table
// ---------------------------------------------------------------------------

/// One player's bids, one entry per round in round order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidRow {
    pub player: PlayerId,
    pub bids: Vec<Bid>,
}

/// All collected bids: one row per player, in enumeration order.
///
/// Immutable once populated — the collector builds it, everything
/// downstream only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidTable {
    rounds: usize,
    rows: Vec<BidRow>,
}

impl BidTable {
    /// Create an empty table for the given round count.
    pub fn new(rounds: usize) -> Self {
        Self {
            rounds,
            rows: Vec::new(),
        }
    }

    /// Append a player's row. Rows must arrive in enumeration order and
    /// hold exactly `rounds` bids.
    pub fn insert(&mut self, player: PlayerId, bids: Vec<Bid>) {
        debug_assert_eq!(bids.len(), self.rounds);
        self.rows.push(BidRow { player, bids });
    }

    /// Number of rounds each row covers.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// All rows in enumeration order.
    pub fn rows(&self) -> &[BidRow] {
        &self.rows
    }

    /// Player ids in enumeration order.
    pub fn players(&self) -> Vec<PlayerId> {
        self.rows.iter().map(|r| r.player).collect()
    }

    /// A player's full bid sequence, if the player is present.
    pub fn bids_for(&self, player: PlayerId) -> Option<&[Bid]> {
        self.rows
            .iter()
            .find(|r| r.player == player)
            .map(|r| r.bids.as_slice())
    }

    /// A single bid, if both the player and the round exist.
    pub fn bid(&self, player: PlayerId, round: usize) -> Option<Bid> {
        self.bids_for(player).and_then(|bids| bids.get(round).copied())
    }

    /// Number of players in the table.
    pub fn player_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for BidTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  {}: {}", row.player, fmt_list(&row.bids))?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tournament report
// ---------------------------------------------------------------------------

/// Outcome of a full tournament run.
///
/// Carries the raw bid data plus the three aligned result vectors
/// (player ids, scores, ranks) and run metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub rounds: usize,
    pub bids: BidTable,
    /// Winning player of each round, in round order.
    pub round_winners: Vec<PlayerId>,
    pub players: Vec<PlayerId>,
    /// Rounds won per player, aligned with `players`.
    pub scores: Vec<u32>,
    /// Dense competition rank per player, aligned with `players`.
    pub ranks: Vec<u32>,
}

impl TournamentReport {
    /// Players holding rank 1 (more than one after a tie at the top).
    pub fn champions(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .zip(&self.ranks)
            .filter(|(_, &rank)| rank == 1)
            .map(|(&player, _)| player)
            .collect()
    }

    /// Wall-clock duration of the run.
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Raw data:")?;
        writeln!(f, "{}", self.bids)?;
        writeln!(f)?;
        writeln!(f, "player id:    {}", fmt_list(&self.players))?;
        writeln!(f, "player score: {}", fmt_list(&self.scores))?;
        write!(f, "player rank:  {}", fmt_list(&self.ranks))
    }
}

/// Render a slice as `[a, b, c]` using each element's Display.
fn fmt_list<T: fmt::Display>(items: &[T]) -> String {
    let inner = items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types for GAVEL.
///
/// Every variant is fatal for the run: the simulator is fail-fast and
/// produces no partial report.
#[derive(Debug, thiserror::Error)]
pub enum GavelError {
    #[error("Failed to launch bid source for player {player}: {message}")]
    ProcessLaunch { player: PlayerId, message: String },

    #[error("Malformed bid output from player {player}: {message}")]
    OutputParse { player: PlayerId, message: String },

    #[error("Configuration error: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
