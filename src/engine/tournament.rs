//! Tournament driver.
//!
//! Runs a single collect → score → rank pass over injected components
//! and assembles the final report. Both stages are pure transformations;
//! the driver itself keeps no state between runs.

use anyhow::Result;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::bidsource::BidSource;
use crate::config::TournamentConfig;
use crate::engine::collector::BidCollector;
use crate::engine::scoring::{self, Scoreboard};
use crate::ranking::rank_by_score;
use crate::types::{GavelError, TournamentReport};

/// Run a full tournament: collect every player's bids, pick each round's
/// winner, tally wins, and rank the players.
pub async fn run(cfg: &TournamentConfig, source: &dyn BidSource) -> Result<TournamentReport> {
    let players = cfg.player_ids();
    if players.is_empty() {
        return Err(GavelError::Config("at least one player is required".to_string()).into());
    }

    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    info!(
        run_id = %run_id,
        players = players.len(),
        rounds = cfg.rounds,
        "Tournament starting"
    );

    let table = BidCollector::collect(source, &players, cfg.rounds).await?;

    let mut board = Scoreboard::new(&players);
    let mut round_winners = Vec::with_capacity(cfg.rounds);

    for round in 0..cfg.rounds {
        let winner = scoring::round_winner(&table, round).ok_or_else(|| {
            GavelError::Config("cannot score a round without players".to_string())
        })?;

        debug!(
            round = round + 1,
            winner = %winner,
            bid = table.bid(winner, round).unwrap_or_default(),
            "Round scored"
        );

        board.record_win(winner);
        round_winners.push(winner);
    }

    let ranks = rank_by_score(board.scores());
    let finished_at = Utc::now();

    info!(run_id = %run_id, standings = %board, "Tournament scored");

    Ok(TournamentReport {
        run_id,
        started_at,
        finished_at,
        rounds: cfg.rounds,
        scores: board.scores().to_vec(),
        players,
        bids: table,
        round_winners,
        ranks,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
