//! Per-question usage metrics and their JSON persistence.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{QuizError, Result};
use crate::model::QuestionId;
use crate::session::QuizRunner;

/// How often a question was asked and answered correctly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionStats {
    pub asked: u64,
    pub correct: u64,
}

impl QuestionStats {
    /// Fraction answered correctly, `0.0` if never asked.
    pub fn accuracy(&self) -> f64 {
        if self.asked == 0 {
            0.0
        } else {
            self.correct as f64 / self.asked as f64
        }
    }
}

/// Counters keyed by question id. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metrics {
    entries: BTreeMap<QuestionId, QuestionStats>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempt at `id`.
    pub fn record(&mut self, id: QuestionId, correct: bool) {
        let stats = self.entries.entry(id).or_default();
        stats.asked += 1;
        if correct {
            stats.correct += 1;
        }
    }

    pub fn get(&self, id: QuestionId) -> Option<QuestionStats> {
        self.entries.get(&id).copied()
    }

    /// Accuracy for one question, if it was ever asked.
    pub fn accuracy(&self, id: QuestionId) -> Option<f64> {
        self.get(id).map(|s| s.accuracy())
    }

    /// Add every counter in `other` to this one.
    pub fn merge(&mut self, other: &Metrics) {
        for (id, stats) in &other.entries {
            let entry = self.entries.entry(*id).or_default();
            entry.asked += stats.asked;
            entry.correct += stats.correct;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, QuestionStats)> + '_ {
        self.entries.iter().map(|(id, s)| (*id, *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total attempts across all questions.
    pub fn total_asked(&self) -> u64 {
        self.entries.values().map(|s| s.asked).sum()
    }

    /// Total correct answers across all questions.
    pub fn total_correct(&self) -> u64 {
        self.entries.values().map(|s| s.correct).sum()
    }

    /// Save the counters as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| QuizError::format("metrics", e.to_string()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| QuizError::io(parent, e))?;
        }
        std::fs::write(path, json).map_err(|e| QuizError::io(path, e))?;
        tracing::info!(
            "saved metrics for {} questions to {}",
            self.len(),
            path.display()
        );
        Ok(())
    }

    /// Load counters saved by [`Metrics::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| QuizError::io(path, e))?;
        let source_name = path.display().to_string();
        let metrics: Metrics = serde_json::from_str(&content)
            .map_err(|e| QuizError::format(&source_name, e.to_string()))?;

        if let Some((id, s)) = metrics.iter().find(|(_, s)| s.correct > s.asked) {
            return Err(QuizError::format(
                source_name,
                format!(
                    "question {id}: correct ({}) exceeds asked ({})",
                    s.correct, s.asked
                ),
            ));
        }

        tracing::info!(
            "loaded metrics for {} questions from {}",
            metrics.len(),
            path.display()
        );
        Ok(metrics)
    }
}

/// Write the runner's counters to `path`.
pub fn save_metrics(runner: &QuizRunner, path: &Path) -> Result<()> {
    runner.metrics().save(path)
}

/// Read counters previously written by [`save_metrics`].
pub fn load_metrics(path: &Path) -> Result<Metrics> {
    Metrics::load(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metrics {
        let mut m = Metrics::new();
        m.record(1, true);
        m.record(1, false);
        m.record(2, false);
        m.record(10, true);
        m
    }

    #[test]
    fn record_counts_asked_and_correct() {
        let m = sample();
        assert_eq!(m.get(1), Some(QuestionStats { asked: 2, correct: 1 }));
        assert_eq!(m.get(2), Some(QuestionStats { asked: 1, correct: 0 }));
        assert_eq!(m.get(3), None);
        assert_eq!(m.total_asked(), 4);
        assert_eq!(m.total_correct(), 2);
        assert_eq!(m.accuracy(1), Some(0.5));
    }

    #[test]
    fn save_then_load_is_identical() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("metrics.json");
        let m = sample();
        m.save(&path).unwrap();
        assert_eq!(Metrics::load(&path).unwrap(), m);
    }

    #[test]
    fn file_is_an_object_keyed_by_id() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["10"]["asked"], 1);
        assert_eq!(json["1"]["correct"], 1);
    }

    #[test]
    fn merge_sums_counters() {
        let mut a = sample();
        let mut b = Metrics::new();
        b.record(1, true);
        b.record(3, true);
        a.merge(&b);
        assert_eq!(a.get(1), Some(QuestionStats { asked: 3, correct: 2 }));
        assert_eq!(a.get(3), Some(QuestionStats { asked: 1, correct: 1 }));
        assert_eq!(a.len(), 4);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Metrics::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, QuizError::Io { .. }));
    }

    #[test]
    fn corrupt_file_is_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.json");

        std::fs::write(&path, "{\"1\": {\"asked\": 1").unwrap();
        assert!(matches!(
            Metrics::load(&path).unwrap_err(),
            QuizError::Format { .. }
        ));

        std::fs::write(&path, r#"{"1": {"asked": 1, "correct": 2}}"#).unwrap();
        let err = Metrics::load(&path).unwrap_err();
        assert!(err.to_string().contains("exceeds asked"));
    }
}
