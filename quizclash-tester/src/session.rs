//! Headless battle sessions with an answer bot of configurable accuracy.
//! Every mutation is followed by invariant checks; a violation fails the
//! whole run, not just one iteration.

use quizclash_game::{
    ActiveBattle, BattleConfig, BattleMode, Player, RoundPhase, TickOutcome, question_pack,
    seed_roster,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InvariantViolation {
    #[error("seed {seed}: rankings lost descending order after {step}")]
    RankingsUnsorted { seed: u64, step: &'static str },
    #[error("seed {seed}: a correct answer did not increase the score")]
    ScoreDidNotIncrease { seed: u64 },
    #[error("seed {seed}: a miss changed the score or kept the streak")]
    MissNotZeroed { seed: u64 },
    #[error("seed {seed}: completion fired {count} times")]
    OutcomeCount { seed: u64, count: u32 },
    #[error("seed {seed}: battle could not start: {reason}")]
    StartFailed { seed: u64, reason: String },
}

/// One finished session, flattened for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub seed: u64,
    pub accuracy: f64,
    pub score: u32,
    pub best_streak: u32,
    pub correct: u32,
    pub timeouts: u32,
    pub rank: usize,
    pub players: usize,
    pub won: bool,
}

pub struct BotConfig {
    pub mode: BattleMode,
    pub accuracy: f64,
    pub verbose: bool,
}

fn battle_config(mode: BattleMode, seed: u64) -> BattleConfig {
    BattleConfig {
        mode,
        room_code: Some(format!("QC-ROOM{seed:02}")),
        ..BattleConfig::default()
    }
}

fn assert_sorted(
    rankings: &[Player],
    seed: u64,
    step: &'static str,
) -> Result<(), InvariantViolation> {
    if rankings.windows(2).all(|w| w[0].score >= w[1].score) {
        Ok(())
    } else {
        Err(InvariantViolation::RankingsUnsorted { seed, step })
    }
}

/// Drive one battle to completion and return its record. `seed` fixes the
/// room (and so the opponent field); `bot_seed` varies the bot's behavior.
pub fn run_session(
    seed: u64,
    bot_seed: u64,
    cfg: &BotConfig,
) -> Result<SessionRecord, InvariantViolation> {
    let config = battle_config(cfg.mode, seed);
    let mut battle = ActiveBattle::new(
        question_pack().take(config.total_questions),
        seed_roster(config.mode),
        &config,
    )
    .map_err(|err| InvariantViolation::StartFailed {
        seed,
        reason: err.to_string(),
    })?;

    let mut bot = SmallRng::seed_from_u64(bot_seed);
    let mut outcomes = 0u32;
    let mut best_streak = 0u32;
    let mut timeouts = 0u32;
    let mut elapsed = 0u32;

    loop {
        match battle.phase() {
            RoundPhase::Awaiting => {
                // Inclusive upper bound: hesitating the full clock lets the
                // question expire, exercising the timeout path.
                let hesitation = bot.gen_range(0..=config.time_per_question);
                let score_before = battle.score();
                let mut expired = false;
                for _ in 0..hesitation {
                    elapsed += 1;
                    if elapsed % 3 == 0 {
                        battle.simulate_opponents();
                        assert_sorted(battle.rankings(), seed, "simulate_opponents")?;
                    }
                    if battle.tick() == TickOutcome::Expired {
                        expired = true;
                        break;
                    }
                }
                if expired {
                    timeouts += 1;
                    if battle.score() != score_before || battle.streak() != 0 {
                        return Err(InvariantViolation::MissNotZeroed { seed });
                    }
                } else {
                    let question = battle.current_question();
                    let answer_correctly = bot.gen_bool(cfg.accuracy);
                    let answer = if answer_correctly {
                        question.correct
                    } else {
                        (question.correct + 1) % question.options.len()
                    };
                    battle
                        .select(answer)
                        .map_err(|err| InvariantViolation::StartFailed {
                            seed,
                            reason: err.to_string(),
                        })?;
                    battle.submit();
                    if answer_correctly {
                        if battle.score() <= score_before {
                            return Err(InvariantViolation::ScoreDidNotIncrease { seed });
                        }
                    } else if battle.score() != score_before || battle.streak() != 0 {
                        return Err(InvariantViolation::MissNotZeroed { seed });
                    }
                }
                assert_sorted(battle.rankings(), seed, "submit")?;
                best_streak = best_streak.max(battle.streak());
            }
            RoundPhase::Feedback { .. } => {
                if battle.advance().is_some() {
                    outcomes += 1;
                }
            }
            RoundPhase::Complete => break,
        }
    }

    // A completed battle must stay frozen.
    battle.simulate_opponents();
    assert_sorted(battle.rankings(), seed, "post-complete")?;
    if outcomes != 1 {
        return Err(InvariantViolation::OutcomeCount {
            seed,
            count: outcomes,
        });
    }

    let rank = battle
        .rankings()
        .iter()
        .position(|p| p.is_current_user)
        .map_or(0, |i| i + 1);
    let record = SessionRecord {
        seed,
        accuracy: cfg.accuracy,
        score: battle.score(),
        best_streak,
        correct: battle.correct(),
        timeouts,
        rank,
        players: battle.rankings().len(),
        won: rank == 1,
    };
    if cfg.verbose {
        log::info!(
            "seed {} -> score {} rank {}/{} ({} correct, {} timeouts)",
            record.seed,
            record.score,
            record.rank,
            record.players,
            record.correct,
            record.timeouts
        );
    }
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot(accuracy: f64) -> BotConfig {
        BotConfig {
            mode: BattleMode::Group,
            accuracy,
            verbose: false,
        }
    }

    #[test]
    fn perfect_bot_answers_everything() {
        let record = run_session(7, 7, &bot(1.0)).unwrap();
        assert_eq!(record.correct + record.timeouts, 10);
        assert!(record.score > 0);
        assert!(record.rank >= 1 && record.rank <= record.players);
    }

    #[test]
    fn hopeless_bot_never_scores() {
        let record = run_session(7, 7, &bot(0.0)).unwrap();
        assert_eq!(record.score, 0);
        assert_eq!(record.best_streak, 0);
    }

    #[test]
    fn sessions_are_reproducible_per_seed() {
        let a = run_session(1337, 1337, &bot(0.6)).unwrap();
        let b = run_session(1337, 1337, &bot(0.6)).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.rank, b.rank);
    }

    #[test]
    fn bot_seed_varies_play_in_a_fixed_room() {
        let a = run_session(1337, 1, &bot(0.6)).unwrap();
        let b = run_session(1337, 2, &bot(0.6)).unwrap();
        // Same room, different hesitation and answers.
        assert_eq!(a.seed, b.seed);
        assert!(a.score != b.score || a.correct != b.correct || a.best_streak != b.best_streak);
    }

    #[test]
    fn full_clock_hesitation_records_timeouts() {
        // The hesitation bound is inclusive, so the bot can sit out a whole
        // question. Across a sweep of bot seeds some questions must expire,
        // and run_session verifies each expiry leaves score and streak
        // untouched.
        let total: u32 = (0..20)
            .map(|bot_seed| run_session(9, bot_seed, &bot(1.0)).unwrap().timeouts)
            .sum();
        assert!(total > 0, "timeout path was never taken");
    }

    #[test]
    fn one_v_one_sessions_have_two_players() {
        let cfg = BotConfig {
            mode: BattleMode::OneVsOne,
            accuracy: 0.5,
            verbose: false,
        };
        let record = run_session(42, 42, &cfg).unwrap();
        assert_eq!(record.players, 2);
    }
}
