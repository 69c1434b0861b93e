//! The `quiz stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizgen_core::bank::QuestionBank;
use quizgen_core::metrics::load_metrics;

pub fn execute(metrics_path: PathBuf, bank_path: Option<PathBuf>) -> Result<()> {
    let metrics = load_metrics(&metrics_path)?;
    let bank = bank_path.map(|p| QuestionBank::load(&p)).transpose()?;

    if metrics.is_empty() {
        println!("No metrics recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    let mut header = vec!["ID"];
    if bank.is_some() {
        header.push("Question");
    }
    header.extend(["Asked", "Correct", "Accuracy"]);
    table.set_header(header);

    for (id, stats) in metrics.iter() {
        let mut row = vec![Cell::new(id)];
        if let Some(bank) = &bank {
            let text = bank.get(id).map(|q| q.text.as_str()).unwrap_or("(not in bank)");
            row.push(Cell::new(text));
        }
        row.extend([
            Cell::new(stats.asked),
            Cell::new(stats.correct),
            Cell::new(format!("{:.1}%", stats.accuracy() * 100.0)),
        ]);
        table.add_row(row);
    }

    println!("{table}");

    let asked = metrics.total_asked();
    let correct = metrics.total_correct();
    let overall = if asked == 0 {
        0.0
    } else {
        correct as f64 / asked as f64 * 100.0
    };
    println!(
        "{} questions, {correct}/{asked} answered correctly ({overall:.1}%)",
        metrics.len()
    );
    Ok(())
}
