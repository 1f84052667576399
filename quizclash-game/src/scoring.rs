//! Per-question score calculation.

use serde::{Deserialize, Serialize};

/// Scoring algorithm configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_points: u32,
    pub time_bonus_per_sec: u32,
    pub streak_bonus: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: 100,
            time_bonus_per_sec: 10,
            streak_bonus: 20,
        }
    }
}

/// Points awarded for a correct answer with `time_left` seconds on the clock
/// and `streak` consecutive correct answers before this one.
#[must_use]
pub fn question_score(cfg: &ScoringConfig, time_left: u32, streak: u32) -> u32 {
    cfg.base_points + time_left * cfg.time_bonus_per_sec + streak * cfg.streak_bonus
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_seconds_left_with_streak_two_scores_220() {
        let cfg = ScoringConfig::default();
        assert_eq!(question_score(&cfg, 8, 2), 220);
    }

    #[test]
    fn time_bonus_shrinks_as_clock_runs_down() {
        let cfg = ScoringConfig::default();
        let mut last = u32::MAX;
        for time_left in (0..=15).rev() {
            let score = question_score(&cfg, time_left, 0);
            assert!(score <= last);
            last = score;
        }
        assert_eq!(question_score(&cfg, 0, 0), 100);
    }

    #[test]
    fn streak_bonus_grows_with_streak() {
        let cfg = ScoringConfig::default();
        let mut last = 0;
        for streak in 0..10 {
            let score = question_score(&cfg, 5, streak);
            assert!(score > last || streak == 0);
            last = score;
        }
    }
}
