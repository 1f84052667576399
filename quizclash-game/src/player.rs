use crate::session::BattleMode;
use serde::{Deserialize, Serialize};

/// A participant in a battle session.
///
/// One player carries `is_current_user`; the rest are simulated opponents
/// whose scores are perturbed by [`crate::opponents::perturb_opponents`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub correct: u32,
    #[serde(default)]
    pub is_ready: bool,
    #[serde(default)]
    pub is_current_user: bool,
}

impl Player {
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            avatar: None,
            score: 0,
            streak: 0,
            correct: 0,
            is_ready: false,
            is_current_user: false,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, avatar: &str) -> Self {
        self.avatar = Some(avatar.to_string());
        self
    }
}

const OPPONENTS: [(&str, &str, &str); 4] = [
    ("p2", "Sara", "avatars/sarah.webp"),
    ("p3", "QuizWhiz", "avatars/wizard.webp"),
    ("p4", "BrainStorm", "avatars/brain.png"),
    ("p5", "Alex", "avatars/alex.png"),
];

/// Build the mock roster for a new battle session.
///
/// The current user is always first; 1v1 battles get a single opponent,
/// group battles get four.
#[must_use]
pub fn seed_roster(mode: BattleMode) -> Vec<Player> {
    let mut you = Player::new("p1", "You").with_avatar("avatars/master.png");
    you.is_current_user = true;
    you.is_ready = true;

    let opponent_count = match mode {
        BattleMode::OneVsOne => 1,
        BattleMode::Group => OPPONENTS.len(),
    };

    let mut roster = vec![you];
    for (id, name, avatar) in OPPONENTS.iter().take(opponent_count) {
        roster.push(Player::new(id, name).with_avatar(avatar));
    }
    roster
}
