//! quiz CLI — practice quizzes from a JSON question bank.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "quiz",
    version,
    about = "Practice test generator",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

/// Options for taking a quiz (the default command).
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the question bank JSON file
    #[arg(long)]
    pub bank: Option<PathBuf>,

    /// Only ask questions on this topic
    #[arg(long)]
    pub topic: Option<String>,

    /// Only ask questions carrying this tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Number of easy questions
    #[arg(long, default_value = "0")]
    pub easy: usize,

    /// Number of medium questions
    #[arg(long, default_value = "0")]
    pub medium: usize,

    /// Number of hard questions
    #[arg(long, default_value = "0")]
    pub hard: usize,

    /// Number of questions when no difficulty counts are given
    #[arg(long = "num-questions", alias = "num_questions")]
    pub num_questions: Option<usize>,

    /// Seed for reproducible question order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Metrics file to merge this run's counters into
    #[arg(long)]
    pub metrics: Option<PathBuf>,

    /// Save the quiz report as JSON
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a question bank for errors and warnings
    Validate {
        /// Path to the question bank JSON file
        #[arg(long)]
        bank: PathBuf,
    },

    /// Write a (filtered) copy of a question bank
    Export {
        /// Path to the question bank JSON file
        #[arg(long)]
        bank: PathBuf,

        /// Output JSON file
        #[arg(long)]
        output: PathBuf,

        /// Only export questions on this topic
        #[arg(long)]
        topic: Option<String>,

        /// Only export questions of this difficulty: easy, medium, hard
        #[arg(long)]
        difficulty: Option<String>,

        /// Only export questions carrying this tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
    },

    /// Show accumulated per-question metrics
    Stats {
        /// Metrics JSON file
        #[arg(long)]
        metrics: PathBuf,

        /// Question bank used to show question text
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Create a starter config and question bank
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("quizgen=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::run::execute(cli.run),
        Some(Commands::Validate { bank }) => commands::validate::execute(bank),
        Some(Commands::Export {
            bank,
            output,
            topic,
            difficulty,
            tags,
        }) => commands::export::execute(bank, output, topic, difficulty, tags),
        Some(Commands::Stats { metrics, bank }) => commands::stats::execute(metrics, bank),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
