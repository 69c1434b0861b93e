//! Question bank loading, filtering and export.
//!
//! A bank file is a JSON array of question objects. The older
//! `{"questions": [...]}` wrapper is accepted on input too; export always
//! writes the bare array.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::error::{QuizError, Result};
use crate::model::{Difficulty, Question, QuestionId, QuestionKind};

/// An ordered collection of questions with unique ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build a bank from already-parsed questions, checking ids and answers.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        check_questions(&questions, "question bank")?;
        Ok(Self { questions })
    }

    /// Load a bank from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| QuizError::io(path, e))?;
        let bank = Self::parse(&content, &path.display().to_string())?;
        tracing::debug!(
            "loaded {} questions from {}",
            bank.questions.len(),
            path.display()
        );
        Ok(bank)
    }

    /// Parse a bank from a JSON string (useful for testing).
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, source_name: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| QuizError::format(source_name, e.to_string()))?;

        let items = match value {
            list @ Value::Array(_) => list,
            Value::Object(mut map) => match map.remove("questions") {
                Some(list @ Value::Array(_)) => list,
                _ => {
                    return Err(QuizError::format(
                        source_name,
                        "expected an array of questions or an object with a \"questions\" array",
                    ))
                }
            },
            _ => {
                return Err(QuizError::format(
                    source_name,
                    "expected an array of questions",
                ))
            }
        };

        let questions: Vec<Question> = serde_json::from_value(items)
            .map_err(|e| QuizError::format(source_name, e.to_string()))?;
        check_questions(&questions, source_name)?;

        Ok(Self { questions })
    }

    /// Write the bank to `path` as pretty-printed JSON.
    pub fn export(&self, path: &Path) -> Result<()> {
        let json = self.to_json_string()?;
        std::fs::write(path, json).map_err(|e| QuizError::io(path, e))?;
        tracing::debug!(
            "exported {} questions to {}",
            self.questions.len(),
            path.display()
        );
        Ok(())
    }

    /// Serialize the bank to a pretty-printed JSON array.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.questions)
            .map_err(|e| QuizError::format("question bank", e.to_string()))
    }

    /// Return a new bank holding only the matching questions, in order.
    ///
    /// `None`, an empty topic and an empty tag list mean "no constraint". A
    /// question matches the tag constraint when it carries every requested
    /// tag.
    pub fn filter(
        &self,
        topic: Option<&str>,
        difficulty: Option<Difficulty>,
        tags: &[String],
    ) -> QuestionBank {
        let topic = topic.filter(|t| !t.is_empty());
        let questions = self
            .questions
            .iter()
            .filter(|q| topic.is_none_or(|t| q.topic == t))
            .filter(|q| difficulty.is_none_or(|d| q.difficulty == d))
            .filter(|q| q.has_tags(tags))
            .cloned()
            .collect();
        QuestionBank { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Distinct topics in first-seen order.
    pub fn topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .map(|q| q.topic.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Check the bank for suspicious but loadable content.
    pub fn validate(&self) -> Vec<BankWarning> {
        let mut warnings = Vec::new();

        for q in &self.questions {
            if q.text.trim().is_empty() {
                warnings.push(BankWarning::new(q.id, "question text is empty"));
            }

            let mut seen_tags = HashSet::new();
            for tag in &q.tags {
                if !seen_tags.insert(tag) {
                    warnings.push(BankWarning::new(q.id, format!("duplicate tag: {tag}")));
                }
            }

            match &q.kind {
                QuestionKind::ShortAnswer { answer } if answer.trim().is_empty() => {
                    warnings.push(BankWarning::new(q.id, "short answer is blank"));
                }
                QuestionKind::MultipleChoice { choices, .. } => {
                    let mut seen = HashSet::new();
                    for choice in choices {
                        if !seen.insert(choice.trim().to_lowercase()) {
                            warnings
                                .push(BankWarning::new(q.id, format!("duplicate choice: {choice}")));
                        }
                    }
                }
                _ => {}
            }
        }

        warnings
    }
}

/// A non-fatal issue found by [`QuestionBank::validate`].
#[derive(Debug, Clone)]
pub struct BankWarning {
    pub question_id: QuestionId,
    pub message: String,
}

impl BankWarning {
    fn new(question_id: QuestionId, message: impl Into<String>) -> Self {
        Self {
            question_id,
            message: message.into(),
        }
    }
}

fn check_questions(questions: &[Question], source_name: &str) -> Result<()> {
    let mut seen_ids = HashSet::new();
    for q in questions {
        if !seen_ids.insert(q.id) {
            return Err(QuizError::format(
                source_name,
                format!("duplicate question id: {}", q.id),
            ));
        }
        if let QuestionKind::MultipleChoice { choices, correct } = &q.kind {
            if choices.is_empty() {
                return Err(QuizError::format(
                    source_name,
                    format!("question {} has no choices", q.id),
                ));
            }
            if *correct >= choices.len() {
                return Err(QuizError::format(
                    source_name,
                    format!(
                        "question {}: correct index {} out of range for {} choices",
                        q.id,
                        correct,
                        choices.len()
                    ),
                ));
            }
        }
    }
    Ok(())
}
