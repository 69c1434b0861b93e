//! The `quiz export` command.

use std::path::PathBuf;

use anyhow::Result;

use quizgen_core::bank::QuestionBank;
use quizgen_core::model::Difficulty;

pub fn execute(
    bank_path: PathBuf,
    output: PathBuf,
    topic: Option<String>,
    difficulty: Option<String>,
    tags: Vec<String>,
) -> Result<()> {
    let difficulty = difficulty
        .map(|d| d.parse::<Difficulty>().map_err(|e| anyhow::anyhow!("{e}")))
        .transpose()?;

    let bank = QuestionBank::load(&bank_path)?;
    let filtered = bank.filter(topic.as_deref(), difficulty, &tags);
    filtered.export(&output)?;

    println!(
        "Exported {} of {} questions to {}",
        filtered.len(),
        bank.len(),
        output.display()
    );
    Ok(())
}
