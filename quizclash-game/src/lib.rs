//! QuizClash Battle Engine
//!
//! Platform-agnostic core logic for the QuizClash trivia battle game.
//! This crate provides the battle state machine, scoring, rankings, and
//! mock catalog data without UI or platform-specific dependencies.

pub mod battle;
pub mod catalog;
pub mod lobby;
pub mod opponents;
pub mod player;
pub mod question;
pub mod rankings;
pub mod results;
pub mod scoring;
pub mod session;

// Re-export commonly used types
pub use battle::{
    ActiveBattle, BattleError, BattleOutcome, FEEDBACK_DELAY_MS, RoundPhase, TickOutcome,
};
pub use catalog::{
    Catalog, Category, CreatorProfile, DailyChallenge, LeaderboardEntry, QuizInfo, QuizRef,
    QuizScore, Review, catalog,
};
pub use lobby::{LobbyState, READY_DELAY_SECS, START_COUNTDOWN_SECS};
pub use opponents::{SIM_TICK_SECS, perturb_opponents, session_rng};
pub use player::{Player, seed_roster};
pub use question::{Question, QuestionPack, question_pack};
pub use rankings::{podium, rank_of_current, sort_by_score_desc};
pub use results::{BattleSummary, ResultsConfig, Rewards, placement_label};
pub use scoring::{ScoringConfig, question_score};
pub use session::{
    BattleConfig, BattleMode, Difficulty, Visibility, generate_room_code, is_room_code_valid,
    seed_from_room_code,
};
