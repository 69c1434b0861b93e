//! The `quiz validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgen_core::bank::QuestionBank;
use quizgen_core::model::Difficulty;

pub fn execute(bank_path: PathBuf) -> Result<()> {
    let bank = QuestionBank::load(&bank_path)?;

    println!(
        "Question bank: {} ({} questions)",
        bank_path.display(),
        bank.len()
    );
    println!("Topics: {}", bank.topics().join(", "));
    for difficulty in Difficulty::ALL {
        let count = bank.filter(None, Some(difficulty), &[]).len();
        println!("  {difficulty}: {count}");
    }

    let warnings = bank.validate();
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.question_id, w.message);
    }

    if warnings.is_empty() {
        println!("Question bank valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
