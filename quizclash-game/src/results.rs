//! Battle results derivation.
//!
//! Pure read-only view over the final roster: no state mutation happens
//! after the session completes.

use crate::player::Player;
use crate::rankings::{rank_of_current, sort_by_score_desc};
use serde::{Deserialize, Serialize};

/// Configuration for the results screen and reward amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsConfig {
    /// Minimum final score that triggers the celebration effect.
    pub celebration_threshold: u32,
    pub xp_divisor: u32,
    pub coin_divisor: u32,
    /// Minimum final streak for the streak-master badge.
    pub streak_badge_min: u32,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            celebration_threshold: 70,
            xp_divisor: 10,
            coin_divisor: 20,
            streak_badge_min: 3,
        }
    }
}

/// Cosmetic reward amounts derived from the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Rewards {
    pub xp: u32,
    pub coins: u32,
}

/// Everything the results screen needs, derived once from the final roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleSummary {
    /// Final roster, sorted by score descending.
    pub players: Vec<Player>,
    /// 1-based rank of the current user, if present.
    pub rank: Option<usize>,
    pub is_winner: bool,
    pub score: u32,
    pub streak: u32,
    pub correct: u32,
    pub rewards: Rewards,
    pub victory_badge: bool,
    pub streak_badge: bool,
    pub celebrate: bool,
}

impl BattleSummary {
    #[must_use]
    pub fn from_players(players: &[Player], cfg: &ResultsConfig) -> Self {
        let mut sorted = players.to_vec();
        sort_by_score_desc(&mut sorted);
        let rank = rank_of_current(&sorted);
        let me = sorted.iter().find(|p| p.is_current_user);
        let score = me.map_or(0, |p| p.score);
        let streak = me.map_or(0, |p| p.streak);
        let correct = me.map_or(0, |p| p.correct);
        let is_winner = rank == Some(1);

        Self {
            rank,
            is_winner,
            score,
            streak,
            correct,
            rewards: Rewards {
                xp: score / cfg.xp_divisor,
                coins: score / cfg.coin_divisor,
            },
            victory_badge: is_winner,
            streak_badge: streak >= cfg.streak_badge_min,
            celebrate: score >= cfg.celebration_threshold,
            players: sorted,
        }
    }
}

/// Ordinal label for a 1-based rank: 1st, 2nd, 3rd, 4th, ...
#[must_use]
pub fn placement_label(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (1, r) if r != 11 => "st",
        (2, r) if r != 12 => "nd",
        (3, r) if r != 13 => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}
