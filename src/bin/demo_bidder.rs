//! Demo bid generator.
//!
//! Stand-in for a real player program: emits a deterministic bid per
//! round on stdout, one `<player id> <bid>` line per round, derived from
//! a fixed schedule. Useful for manual runs and as the process under
//! test for the subprocess-backed bid source.
//!
//! Usage: `demo_bidder <player id>` (player ids 1..=8, 10 rounds).

use anyhow::{bail, Context, Result};

const ROUNDS: usize = 10;

/// Fixed bid schedule; player `p` bids `SCHEDULE[p + round - 2] * 100`
/// in round `round` (both 1-based).
const SCHEDULE: [i64; 21] = [
    20, 18, 5, 21, 8, 7, 2, 19, 14, 13, 9, 1, 6, 10, 16, 11, 4, 12, 15, 17, 3,
];

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let player: usize = args
        .next()
        .context("expected exactly one argument: the player id")?
        .parse()
        .context("player id must be a positive integer")?;

    if player < 1 || player + ROUNDS - 1 > SCHEDULE.len() {
        bail!("player id {player} is out of range for the bid schedule");
    }

    for round in 1..=ROUNDS {
        let bid = SCHEDULE[player + round - 2] * 100;
        println!("{player} {bid}");
    }

    Ok(())
}
