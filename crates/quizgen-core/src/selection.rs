//! Question selection.
//!
//! Draws questions without replacement, either per difficulty bucket or as a
//! flat count, after applying the topic and tag filters.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bank::QuestionBank;
use crate::error::{Bucket, QuizError, Result};
use crate::model::{Difficulty, Question};

/// What to draw from a bank.
#[derive(Debug, Clone, Default)]
pub struct SelectionRequest {
    /// Only questions with this topic.
    pub topic: Option<String>,
    /// Only questions carrying all of these tags.
    pub tags: Vec<String>,
    /// Questions to draw from the easy bucket.
    pub easy: usize,
    /// Questions to draw from the medium bucket.
    pub medium: usize,
    /// Questions to draw from the hard bucket.
    pub hard: usize,
    /// Flat count when no per-difficulty count is set. `None` takes every
    /// matching question.
    pub total: Option<usize>,
}

impl SelectionRequest {
    /// Requested count for a difficulty bucket.
    pub fn count_for(&self, difficulty: Difficulty) -> usize {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Returns `true` if any per-difficulty count is set.
    pub fn has_difficulty_counts(&self) -> bool {
        Difficulty::ALL.iter().any(|&d| self.count_for(d) > 0)
    }

    fn total(&self) -> Option<usize> {
        self.total.filter(|&n| n > 0)
    }
}

/// Select questions from `bank` according to `request`, in random order.
///
/// Fails with [`QuizError::ConflictingCounts`] if both per-difficulty counts
/// and a total are set, and with [`QuizError::InsufficientQuestions`] if any
/// requested count exceeds what the filtered bank holds. Nothing is drawn
/// unless every count can be satisfied.
pub fn select<R: Rng + ?Sized>(
    bank: &QuestionBank,
    request: &SelectionRequest,
    rng: &mut R,
) -> Result<Vec<Question>> {
    if request.has_difficulty_counts() && request.total().is_some() {
        return Err(QuizError::ConflictingCounts);
    }

    let topic = request.topic.as_deref();
    let mut selection = Vec::new();

    if request.has_difficulty_counts() {
        let mut plan = Vec::new();
        for difficulty in Difficulty::ALL {
            let requested = request.count_for(difficulty);
            if requested == 0 {
                continue;
            }
            let pool = bank.filter(topic, Some(difficulty), &request.tags);
            ensure_available(Bucket::Difficulty(difficulty), requested, pool.len())?;
            plan.push((pool, requested));
        }
        for (pool, requested) in &plan {
            selection.extend(pool.questions().choose_multiple(rng, *requested).cloned());
        }
    } else {
        let pool = bank.filter(topic, None, &request.tags);
        match request.total() {
            Some(requested) => {
                ensure_available(Bucket::Any, requested, pool.len())?;
                selection.extend(pool.questions().choose_multiple(rng, requested).cloned());
            }
            None => selection.extend(pool.questions().iter().cloned()),
        }
    }

    selection.shuffle(rng);
    tracing::debug!(
        "selected {} questions (topic: {:?}, tags: {:?})",
        selection.len(),
        request.topic,
        request.tags
    );
    Ok(selection)
}

fn ensure_available(bucket: Bucket, requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(QuizError::InsufficientQuestions {
            bucket,
            requested,
            available,
        });
    }
    Ok(())
}
