//! The `quiz init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizgen.toml"), SAMPLE_CONFIG)?;
    write_if_missing(Path::new("questions.json"), SAMPLE_BANK)?;

    println!("\nNext steps:");
    println!("  1. Add your own questions to questions.json");
    println!("  2. Run: quiz validate --bank questions.json");
    println!("  3. Run: quiz --easy 2 --medium 1");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizgen configuration

bank = "questions.json"
metrics_file = "metrics.json"
show_explanations = true
"#;

const SAMPLE_BANK: &str = r#"[
  {
    "id": 1,
    "question": "What is the capital of France?",
    "type": "mcq",
    "choices": ["Berlin", "Paris", "Madrid", "Rome"],
    "correct": 1,
    "difficulty": "easy",
    "topic": "geography",
    "tags": ["europe", "capitals"],
    "explanation": "Paris has been the capital of France for most of its history."
  },
  {
    "id": 2,
    "question": "Which river flows through Cairo?",
    "type": "short",
    "answer": "Nile",
    "difficulty": "easy",
    "topic": "geography",
    "tags": ["africa", "rivers"],
    "explanation": "Cairo lies on the banks of the Nile."
  },
  {
    "id": 3,
    "question": "What is the largest ocean on Earth?",
    "type": "short",
    "answer": "Pacific",
    "difficulty": "easy",
    "topic": "geography",
    "tags": ["oceans"],
    "explanation": "The Pacific covers about a third of the Earth's surface."
  },
  {
    "id": 4,
    "question": "What is the derivative of x^2?",
    "type": "short",
    "answer": "2x",
    "difficulty": "medium",
    "topic": "math",
    "tags": ["calculus"],
    "explanation": "By the power rule, d/dx x^n = n x^(n-1)."
  },
  {
    "id": 5,
    "question": "Which of these numbers is prime?",
    "type": "mcq",
    "choices": ["21", "27", "29", "33"],
    "correct": 2,
    "difficulty": "hard",
    "topic": "math",
    "tags": ["number-theory"],
    "explanation": "29 has no divisors other than 1 and itself."
  }
]
"#;
