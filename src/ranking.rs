//! Dense competition ranking.
//!
//! Converts a score vector into ranks: rank 1 is best, tied scores share
//! a rank, and the rank value is 1 plus the number of strictly higher
//! scores (so the sequence may skip values after a tie, e.g. scores
//! `[3, 5, 5, 1]` yield ranks `[3, 1, 1, 4]`).

/// Rank every position of `scores` against the whole vector.
///
/// Quadratic in the number of players, which stays in the single digits
/// here; the ranking is recomputed in full on demand rather than
/// maintained incrementally.
pub fn rank_by_score(scores: &[u32]) -> Vec<u32> {
    scores
        .iter()
        .map(|score| 1 + scores.iter().filter(|other| *other > score).count() as u32)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
