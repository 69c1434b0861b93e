//! The default `quiz` command: take a quiz.

use std::io;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use quizgen_core::bank::QuestionBank;
use quizgen_core::config::load_config_from;
use quizgen_core::metrics::{load_metrics, save_metrics};
use quizgen_core::report::QuizReport;
use quizgen_core::selection::SelectionRequest;
use quizgen_core::session::QuizRunner;

use crate::RunArgs;

pub fn execute(args: RunArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;

    let request = SelectionRequest {
        topic: args.topic,
        tags: args.tags,
        easy: args.easy,
        medium: args.medium,
        hard: args.hard,
        total: args.num_questions,
    };
    anyhow::ensure!(
        !(request.has_difficulty_counts() && request.total.is_some_and(|n| n > 0)),
        "--num-questions cannot be combined with --easy/--medium/--hard"
    );

    let bank_path = args.bank.unwrap_or(config.bank);
    let bank = QuestionBank::load(&bank_path)
        .with_context(|| format!("failed to load question bank {}", bank_path.display()))?;

    let metrics_path = args.metrics.or(config.metrics_file);
    let previous = match &metrics_path {
        Some(path) if path.exists() => Some(
            load_metrics(path)
                .with_context(|| format!("failed to read metrics {}", path.display()))?,
        ),
        _ => None,
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut runner = QuizRunner::build(&bank, &request, &mut rng)?
        .with_explanations(config.show_explanations);

    if runner.questions().is_empty() {
        println!("No questions match the requested filters.");
        return Ok(());
    }
    tracing::debug!("starting quiz with {} questions", runner.questions().len());

    let report = {
        let mut input = io::stdin().lock();
        let mut output = io::stdout().lock();
        runner.run(&mut input, &mut output)?
    };
    print_details(&report);

    if let Some(path) = metrics_path {
        if let Some(previous) = &previous {
            runner.metrics_mut().merge(previous);
        }
        save_metrics(&runner, &path)?;
        eprintln!("Metrics saved to: {}", path.display());
    }

    if let Some(path) = args.report {
        report.save_json(&path)?;
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn print_details(report: &QuizReport) {
    if report.answers.is_empty() {
        return;
    }
    println!("Details:");
    for answer in &report.answers {
        let mark = if answer.is_correct { "correct" } else { "wrong" };
        println!(
            "  [{mark}] {} (you answered: {})",
            answer.question, answer.user_answer
        );
        if !answer.is_correct {
            if let Some(explanation) = &answer.explanation {
                println!("           {explanation}");
            }
        }
    }
}
