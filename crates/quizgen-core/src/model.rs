//! Core data model types for quizgen.
//!
//! A [`Question`] is immutable once loaded. Its JSON shape is the question
//! bank file format: the answer fields depend on the `type` tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Question identifier, unique within a bank.
pub type QuestionId = u64;

/// A single question in a bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier.
    pub id: QuestionId,
    /// The prompt shown to the user.
    #[serde(rename = "question", alias = "text")]
    pub text: String,
    /// Question type together with its choices and correct answer.
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// Difficulty bucket.
    pub difficulty: Difficulty,
    /// Topic used for filtering.
    pub topic: String,
    /// Free-form tags used for filtering.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Shown after an incorrect answer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// The answer shape of a question, tagged by `type` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    /// Pick one of several choices; `correct` is the zero-based index.
    #[serde(rename = "mcq", alias = "multiple-choice")]
    MultipleChoice { choices: Vec<String>, correct: usize },
    /// Free text answer compared case-insensitively.
    #[serde(rename = "short", alias = "short-answer")]
    ShortAnswer { answer: String },
}

impl Question {
    /// Returns `true` if `response` answers this question correctly.
    ///
    /// Short answers are compared trimmed and case-insensitively. For
    /// multiple choice, a 1-based choice number or the choice text itself
    /// both count.
    pub fn is_correct(&self, response: &str) -> bool {
        let response = response.trim();
        match &self.kind {
            QuestionKind::ShortAnswer { answer } => {
                response.to_lowercase() == answer.trim().to_lowercase()
            }
            QuestionKind::MultipleChoice { choices, correct } => {
                if let Ok(n) = response.parse::<usize>() {
                    if (1..=choices.len()).contains(&n) {
                        return n - 1 == *correct;
                    }
                }
                choices
                    .get(*correct)
                    .is_some_and(|c| c.trim().to_lowercase() == response.to_lowercase())
            }
        }
    }

    /// Returns `true` if the question carries every tag in `tags`.
    pub fn has_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|t| self.tags.contains(t))
    }

    /// The correct answer rendered for display.
    pub fn correct_answer(&self) -> &str {
        match &self.kind {
            QuestionKind::ShortAnswer { answer } => answer,
            QuestionKind::MultipleChoice { choices, correct } => {
                choices.get(*correct).map(String::as_str).unwrap_or("")
            }
        }
    }
}

/// Difficulty bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All buckets, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}
