//! Active battle state machine.
//!
//! Drives one session from the first question to completion:
//! awaiting-answer -> feedback-shown -> awaiting-answer (next question)
//! -> ... -> complete. Timers live in the owning view; this machine only
//! exposes the transitions they trigger.

use crate::opponents::{perturb_opponents, session_rng};
use crate::player::Player;
use crate::question::Question;
use crate::rankings::sort_by_score_desc;
use crate::scoring::{ScoringConfig, question_score};
use crate::session::BattleConfig;
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

/// How long feedback stays on screen before the next question, in ms.
pub const FEEDBACK_DELAY_MS: u32 = 1500;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BattleError {
    #[error("battle requires at least one question")]
    EmptyQuestionSet,
    #[error("option index {index} out of range for {options} options")]
    OptionOutOfRange { index: usize, options: usize },
}

/// Exactly one of these holds at any time while a session is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for a selection; the question clock is running.
    Awaiting,
    /// Answer evaluated; next question is scheduled by the view.
    Feedback { correct: bool },
    /// Final question answered; the outcome has been emitted.
    Complete,
}

/// Result of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do (feedback or complete).
    Idle,
    /// Clock decremented, still running.
    Counting,
    /// Clock hit zero; the pending selection was auto-submitted.
    Expired,
}

/// Final report for the session, emitted exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BattleOutcome {
    pub score: u32,
    pub streak: u32,
    pub correct: u32,
}

#[derive(Debug, Clone)]
pub struct ActiveBattle {
    questions: Vec<Question>,
    scoring: ScoringConfig,
    time_per_question: u32,
    current: usize,
    selected: Option<usize>,
    phase: RoundPhase,
    time_left: u32,
    score: u32,
    streak: u32,
    correct: u32,
    rankings: Vec<Player>,
    rng: ChaCha20Rng,
}

impl ActiveBattle {
    /// Start a session over the given questions and roster.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::EmptyQuestionSet`] when no questions are given.
    pub fn new(
        questions: Vec<Question>,
        players: Vec<Player>,
        cfg: &BattleConfig,
    ) -> Result<Self, BattleError> {
        if questions.is_empty() {
            return Err(BattleError::EmptyQuestionSet);
        }
        let mut rankings = players;
        sort_by_score_desc(&mut rankings);
        Ok(Self {
            questions,
            scoring: ScoringConfig::default(),
            time_per_question: cfg.time_per_question,
            current: 0,
            selected: None,
            phase: RoundPhase::Awaiting,
            time_left: cfg.time_per_question,
            score: 0,
            streak: 0,
            correct: 0,
            rankings,
            rng: session_rng(cfg.session_seed()),
        })
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    /// Record (or overwrite) the outstanding selection. Ignored outside the
    /// awaiting-answer phase, matching the no-changes-after-submit rule.
    ///
    /// # Errors
    ///
    /// Returns [`BattleError::OptionOutOfRange`] for an index past the
    /// current question's options.
    pub fn select(&mut self, index: usize) -> Result<(), BattleError> {
        let options = self.current_question().options.len();
        if index >= options {
            return Err(BattleError::OptionOutOfRange { index, options });
        }
        if self.phase == RoundPhase::Awaiting {
            self.selected = Some(index);
        }
        Ok(())
    }

    /// Advance the question clock by one second. When the clock reaches
    /// zero the pending selection (or lack of one) is submitted, so a
    /// timeout scores exactly like a wrong answer when nothing is selected.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != RoundPhase::Awaiting {
            return TickOutcome::Idle;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.submit();
            TickOutcome::Expired
        } else {
            TickOutcome::Counting
        }
    }

    /// Evaluate the outstanding selection against the answer key and enter
    /// feedback. No-op unless awaiting an answer.
    pub fn submit(&mut self) {
        if self.phase != RoundPhase::Awaiting {
            return;
        }
        let question = &self.questions[self.current];
        let is_correct = self.selected == Some(question.correct);

        if is_correct {
            let points = question_score(&self.scoring, self.time_left, self.streak);
            self.score += points;
            self.streak += 1;
            self.correct += 1;
            if let Some(me) = self.rankings.iter_mut().find(|p| p.is_current_user) {
                me.score += points;
                me.streak = self.streak;
                me.correct = self.correct;
            }
        } else {
            self.streak = 0;
            if let Some(me) = self.rankings.iter_mut().find(|p| p.is_current_user) {
                me.streak = 0;
            }
        }
        sort_by_score_desc(&mut self.rankings);
        self.phase = RoundPhase::Feedback {
            correct: is_correct,
        };
    }

    /// Leave feedback: move to the next question with a fresh clock, or
    /// complete the session after the last one. The completion outcome is
    /// returned exactly once.
    pub fn advance(&mut self) -> Option<BattleOutcome> {
        if !matches!(self.phase, RoundPhase::Feedback { .. }) {
            return None;
        }
        if self.current + 1 < self.questions.len() {
            self.current += 1;
            self.selected = None;
            self.time_left = self.time_per_question;
            self.phase = RoundPhase::Awaiting;
            None
        } else {
            self.phase = RoundPhase::Complete;
            Some(BattleOutcome {
                score: self.score,
                streak: self.streak,
                correct: self.correct,
            })
        }
    }

    /// One opponent-simulation tick: bump every non-current player's score
    /// and re-sort the rankings.
    pub fn simulate_opponents(&mut self) {
        if self.phase == RoundPhase::Complete {
            return;
        }
        perturb_opponents(&mut self.rankings, &mut self.rng);
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    /// 1-based number of the question on screen.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Progress through the pack as a 0-100 percentage.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        (self.current as f64 / self.questions.len() as f64) * 100.0
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn rankings(&self) -> &[Player] {
        &self.rankings
    }

    /// Players carrying their final scores, for the results screen.
    #[must_use]
    pub fn into_players(self) -> Vec<Player> {
        self.rankings
    }
}
