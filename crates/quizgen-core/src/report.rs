//! Quiz report types with JSON persistence.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{QuizError, Result};
use crate::model::QuestionId;

/// The outcome of one quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique run identifier.
    pub id: Uuid,
    /// When the session finished.
    pub completed_at: DateTime<Utc>,
    /// One entry per question actually asked, in order.
    pub answers: Vec<AnsweredQuestion>,
    /// Questions asked.
    pub asked: usize,
    /// Questions answered correctly.
    pub correct: usize,
    /// Percentage of correct answers.
    pub score: f64,
}

/// A single question as it was answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub id: QuestionId,
    pub question: String,
    pub user_answer: String,
    pub is_correct: bool,
    #[serde(default)]
    pub explanation: Option<String>,
}

impl QuizReport {
    pub fn new(answers: Vec<AnsweredQuestion>) -> Self {
        let asked = answers.len();
        let correct = answers.iter().filter(|a| a.is_correct).count();
        let score = if asked == 0 {
            0.0
        } else {
            correct as f64 / asked as f64 * 100.0
        };
        Self {
            id: Uuid::new_v4(),
            completed_at: Utc::now(),
            answers,
            asked,
            correct,
            score,
        }
    }

    /// `"<correct>/<asked> correct (<score>%)"`.
    pub fn summary_line(&self) -> String {
        format!(
            "{}/{} correct ({:.1}%)",
            self.correct, self.asked, self.score
        )
    }

    /// Questions answered incorrectly.
    pub fn misses(&self) -> impl Iterator<Item = &AnsweredQuestion> {
        self.answers.iter().filter(|a| !a.is_correct)
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QuizError::format("report", e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| QuizError::io(parent, e))?;
        }
        std::fs::write(path, json).map_err(|e| QuizError::io(path, e))
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| QuizError::io(path, e))?;
        serde_json::from_str(&content)
            .map_err(|e| QuizError::format(path.display().to_string(), e.to_string()))
    }
}
