//! Mock content catalog: categories, quizzes, global leaderboard, and the
//! daily challenge. Stands in for a backend; everything is embedded static
//! data.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub quiz_count: u32,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatorProfile {
    pub name: String,
    pub avatar: String,
    pub level: String,
    pub quizzes: u32,
    pub last_update: String,
}

/// Entry in a per-quiz leaderboard tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub rank: u32,
    pub name: String,
    pub avatar: String,
    pub score: u32,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    pub avatar: String,
    pub rating: u8,
    pub comment: String,
}

/// Shorthand card for a related quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizRef {
    pub id: String,
    pub title: String,
    pub image: String,
    pub difficulty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizInfo {
    pub id: String,
    pub title: String,
    pub image: String,
    pub category: String,
    pub difficulty: String,
    pub time_limit: u32,
    pub reward: String,
    pub players: u32,
    pub max_players: u32,
    pub questions: u32,
    pub rating: f32,
    pub rating_count: u32,
    pub description: String,
    pub requirements: String,
    pub creator: CreatorProfile,
    pub tags: Vec<String>,
    pub leaderboard: Vec<QuizScore>,
    pub reviews: Vec<Review>,
    pub related: Vec<QuizRef>,
}

impl QuizInfo {
    /// Lobby fill percentage for the spots-left progress bar.
    #[must_use]
    pub fn fill_percent(&self) -> f64 {
        if self.max_players == 0 {
            return 0.0;
        }
        (f64::from(self.players) / f64::from(self.max_players)) * 100.0
    }

    #[must_use]
    pub fn spots_left(&self) -> u32 {
        self.max_players.saturating_sub(self.players)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub avatar: String,
    pub score: u32,
    pub quizzes_played: u32,
    pub win_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyChallenge {
    pub title: String,
    pub quiz_id: String,
    pub description: String,
    pub reward: String,
    pub participants: u32,
    pub ends_in_hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
    pub quizzes: Vec<QuizInfo>,
    pub global_leaderboard: Vec<LeaderboardEntry>,
    pub daily_challenge: DailyChallenge,
}

impl Catalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Category lookup by slug; `None` renders as the not-found fallback.
    #[must_use]
    pub fn find_category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    #[must_use]
    pub fn find_quiz(&self, id: &str) -> Option<&QuizInfo> {
        self.quizzes.iter().find(|q| q.id == id)
    }
}

/// The embedded catalog shared by every page.
///
/// # Panics
///
/// Panics if the embedded asset is malformed, which is a build defect.
#[must_use]
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(|| {
        Catalog::from_json(include_str!("../assets/catalog.json"))
            .expect("bundled catalog.json should be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_catalog_parses_and_links_daily_challenge() {
        let cat = catalog();
        assert!(!cat.categories.is_empty());
        assert!(cat.find_quiz(&cat.daily_challenge.quiz_id).is_some());
    }

    #[test]
    fn category_lookup_falls_back_to_none() {
        let cat = catalog();
        assert!(cat.find_category("science-technology").is_some());
        assert!(cat.find_category("no-such-category").is_none());
    }

    #[test]
    fn quiz_fill_math_stays_in_bounds() {
        let quiz = catalog().find_quiz("1").unwrap();
        assert!(quiz.fill_percent() <= 100.0);
        assert_eq!(quiz.spots_left(), quiz.max_players - quiz.players);
    }

    #[test]
    fn global_leaderboard_is_ranked_descending() {
        let board = &catalog().global_leaderboard;
        assert!(board.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(board[0].rank, 1);
    }
}
