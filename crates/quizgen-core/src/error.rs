//! Error types for quizgen.
//!
//! Every fallible library operation returns [`QuizError`]; the binary wraps
//! these in `anyhow` for display.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::model::Difficulty;

/// Convenience alias used throughout the crate.
pub type Result<T, E = QuizError> = std::result::Result<T, E>;

/// Errors that can occur while loading, selecting or persisting quiz data.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Malformed JSON, a missing required field, or an invalid value.
    #[error("invalid format in {source_name}: {message}")]
    Format {
        source_name: String,
        message: String,
    },

    /// Not enough matching questions to satisfy a requested count.
    #[error("not enough {bucket} questions: requested {requested}, only {available} available")]
    InsufficientQuestions {
        bucket: Bucket,
        requested: usize,
        available: usize,
    },

    /// Per-difficulty counts were combined with a flat total.
    #[error("per-difficulty counts cannot be combined with a total question count")]
    ConflictingCounts,

    /// A file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl QuizError {
    pub(crate) fn format(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        QuizError::Format {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        QuizError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// The pool a selection was drawn from, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// A single difficulty bucket.
    Difficulty(Difficulty),
    /// The whole (topic-filtered) bank.
    Any,
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bucket::Difficulty(d) => write!(f, "{d}"),
            Bucket::Any => write!(f, "matching"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_message_names_bucket() {
        let err = QuizError::InsufficientQuestions {
            bucket: Bucket::Difficulty(Difficulty::Easy),
            requested: 4,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "not enough easy questions: requested 4, only 3 available"
        );
    }

    #[test]
    fn io_error_includes_path() {
        let err = QuizError::io(
            Path::new("missing.json"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("missing.json"));
    }
}
