//! quizgen-core — question bank, quiz selection, scoring and metrics.
//!
//! This crate holds everything the `quiz` binary needs apart from argument
//! parsing: loading and exporting question banks, building a quiz from
//! per-difficulty counts, administering it over any line-based input, and
//! persisting per-question metrics.

pub mod bank;
pub mod config;
pub mod error;
pub mod metrics;
pub mod model;
pub mod report;
pub mod selection;
pub mod session;

pub use error::{QuizError, Result};
