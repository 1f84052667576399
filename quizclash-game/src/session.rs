//! Battle session configuration and room-code scheme.
//! Code format: QC-<WORD><NN>, e.g., QC-COMET42, QC-ORBIT07

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BattleMode {
    #[serde(rename = "1v1")]
    OneVsOne,
    #[default]
    #[serde(rename = "group")]
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Medium => write!(f, "Medium"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// Session configuration chosen before the lobby opens. Owned by the battle
/// page, passed down to the lobby/active/results views, and discarded on
/// navigation away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    pub mode: BattleMode,
    pub visibility: Visibility,
    pub room_code: Option<String>,
    pub category: Option<String>,
    pub difficulty: Difficulty,
    pub total_questions: usize,
    pub time_per_question: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            mode: BattleMode::Group,
            visibility: Visibility::Public,
            room_code: None,
            category: None,
            difficulty: Difficulty::Medium,
            total_questions: 10,
            time_per_question: 15,
        }
    }
}

// Word list for room codes
const WORD_LIST: [&str; 16] = [
    "COMET", "ORBIT", "RIDDLE", "PUZZLE", "STREAK", "PODIUM", "TROPHY", "BONUS", "BRAIN", "CLASH",
    "RAPID", "SPARK", "WAGER", "CROWN", "PIXEL", "VAULT",
];

fn fnv1a64(bytes: &[u8]) -> u64 {
    const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const FNV_PRIME: u64 = 0x0100_0000_01b3;
    let mut hash = FNV_OFFSET;
    for b in bytes {
        hash = (hash ^ u64::from(*b)).wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Generate a shareable room code for a private battle.
pub fn generate_room_code<R: Rng + ?Sized>(rng: &mut R) -> String {
    let word = WORD_LIST[rng.gen_range(0..WORD_LIST.len())];
    let nn: u8 = rng.gen_range(0..100);
    format!("QC-{word}{nn:02}")
}

#[must_use]
pub fn is_room_code_valid(code: &str) -> bool {
    regex::Regex::new(r"^QC-[A-Z]+\d{2}$")
        .map(|re| re.is_match(code))
        .unwrap_or(false)
}

/// Derive the per-session RNG seed from a room code. Public matches without
/// a code all share the default seed domain.
#[must_use]
pub fn seed_from_room_code(code: &str) -> u64 {
    let mut buf = Vec::with_capacity(code.len() + 3);
    buf.extend_from_slice(b"QC-");
    buf.extend_from_slice(code.trim().to_ascii_uppercase().as_bytes());
    fnv1a64(&buf)
}

impl BattleConfig {
    /// Seed for the opponent-simulation RNG, derived from the room code so
    /// rematches in the same room replay the same opponent pressure.
    #[must_use]
    pub fn session_seed(&self) -> u64 {
        seed_from_room_code(self.room_code.as_deref().unwrap_or("PUBLIC"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn generated_codes_validate() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..32 {
            let code = generate_room_code(&mut rng);
            assert!(is_room_code_valid(&code), "generated invalid code {code}");
        }
    }

    #[test]
    fn room_code_validation_handles_expected_formats() {
        assert!(is_room_code_valid("QC-COMET42"));
        assert!(is_room_code_valid("QC-VAULT07"));
        assert!(!is_room_code_valid("QC-COMET4"));
        assert!(!is_room_code_valid("qc-comet42"));
        assert!(!is_room_code_valid("INVALID"));
        assert!(!is_room_code_valid("XX-COMET42x"));
    }

    #[test]
    fn seed_is_stable_and_case_insensitive() {
        assert_eq!(seed_from_room_code("QC-COMET42"), seed_from_room_code("qc-comet42"));
        assert_ne!(seed_from_room_code("QC-COMET42"), seed_from_room_code("QC-COMET43"));
    }

    #[test]
    fn default_config_matches_product_defaults() {
        let cfg = BattleConfig::default();
        assert_eq!(cfg.total_questions, 10);
        assert_eq!(cfg.time_per_question, 15);
        assert_eq!(cfg.mode, BattleMode::Group);
        assert!(cfg.room_code.is_none());
    }
}
