use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A single multiple-choice trivia item. Static, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct: usize,
}

/// An ordered, fixed set of questions for one battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuestionPack {
    pub questions: Vec<Question>,
}

impl QuestionPack {
    /// Parse a pack from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or any question's
    /// correct index is out of range for its options.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        use serde::de::Error;
        let pack: Self = serde_json::from_str(json)?;
        for (i, q) in pack.questions.iter().enumerate() {
            if q.correct >= q.options.len() {
                return Err(serde_json::Error::custom(format!(
                    "question {i}: correct index {} out of range for {} options",
                    q.correct,
                    q.options.len()
                )));
            }
        }
        Ok(pack)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Take the first `n` questions of the pack for a session.
    #[must_use]
    pub fn take(&self, n: usize) -> Vec<Question> {
        self.questions.iter().take(n).cloned().collect()
    }
}

/// The bundled question pack shared by every battle.
///
/// # Panics
///
/// Panics if the embedded asset is malformed, which is a build defect.
#[must_use]
pub fn question_pack() -> &'static QuestionPack {
    static PACK: OnceLock<QuestionPack> = OnceLock::new();
    PACK.get_or_init(|| {
        QuestionPack::from_json(include_str!("../assets/questions.json"))
            .expect("bundled questions.json should be valid")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_pack_has_ten_valid_questions() {
        let pack = question_pack();
        assert_eq!(pack.len(), 10);
        for q in &pack.questions {
            assert_eq!(q.options.len(), 4);
            assert!(q.correct < q.options.len());
        }
    }

    #[test]
    fn bundled_pack_matches_known_answer_key() {
        let pack = question_pack();
        let first = &pack.questions[0];
        assert_eq!(first.options[first.correct], "Paris");
    }

    #[test]
    fn from_json_rejects_out_of_range_answer() {
        let json = r#"{ "questions": [ { "text": "?", "options": ["a", "b"], "correct": 2 } ] }"#;
        assert!(QuestionPack::from_json(json).is_err());
    }

    #[test]
    fn take_clamps_to_pack_size() {
        let pack = question_pack();
        assert_eq!(pack.take(3).len(), 3);
        assert_eq!(pack.take(99).len(), pack.len());
    }
}
