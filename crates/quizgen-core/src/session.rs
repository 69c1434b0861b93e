//! Interactive quiz sessions.
//!
//! [`QuizRunner`] owns the selected questions and the metrics gathered while
//! asking them. It talks to the user through any `BufRead`/`Write` pair so
//! sessions can be driven from a terminal or from a test buffer.

use std::io::{BufRead, Write};
use std::path::Path;

use rand::Rng;

use crate::bank::QuestionBank;
use crate::error::{QuizError, Result};
use crate::metrics::Metrics;
use crate::model::{Question, QuestionKind};
use crate::report::{AnsweredQuestion, QuizReport};
use crate::selection::{select, SelectionRequest};

/// Administers a fixed list of questions and tracks per-question metrics.
#[derive(Debug, Clone)]
pub struct QuizRunner {
    questions: Vec<Question>,
    metrics: Metrics,
    show_explanations: bool,
}

impl QuizRunner {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            metrics: Metrics::new(),
            show_explanations: true,
        }
    }

    /// Select questions from `bank` and prepare a runner for them.
    pub fn build<R: Rng + ?Sized>(
        bank: &QuestionBank,
        request: &SelectionRequest,
        rng: &mut R,
    ) -> Result<Self> {
        Ok(Self::new(select(bank, request, rng)?))
    }

    /// Whether explanations are printed after incorrect answers.
    pub fn with_explanations(mut self, show: bool) -> Self {
        self.show_explanations = show;
        self
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }

    /// Ask every question in order, reading one line of input per question.
    ///
    /// End of input stops the session early; questions answered so far are
    /// still scored and reported.
    pub fn run<R, W>(&mut self, input: &mut R, output: &mut W) -> Result<QuizReport>
    where
        R: BufRead + ?Sized,
        W: Write + ?Sized,
    {
        let total = self.questions.len();
        let mut answers = Vec::with_capacity(total);

        for (index, question) in self.questions.iter().enumerate() {
            present(question, index + 1, total, output).map_err(terminal_error)?;

            let Some(response) = read_answer(input)? else {
                tracing::warn!(
                    "input ended after {} of {} questions",
                    answers.len(),
                    total
                );
                writeln!(output).map_err(terminal_error)?;
                break;
            };

            let is_correct = question.is_correct(&response);
            self.metrics.record(question.id, is_correct);
            feedback(question, is_correct, self.show_explanations, output)
                .map_err(terminal_error)?;

            answers.push(AnsweredQuestion {
                id: question.id,
                question: question.text.clone(),
                user_answer: response,
                is_correct,
                explanation: question.explanation.clone(),
            });
        }

        let report = QuizReport::new(answers);
        writeln!(output, "\nQuiz complete: {}", report.summary_line()).map_err(terminal_error)?;
        output.flush().map_err(terminal_error)?;
        Ok(report)
    }
}

fn present<W: Write + ?Sized>(
    question: &Question,
    number: usize,
    total: usize,
    output: &mut W,
) -> std::io::Result<()> {
    writeln!(
        output,
        "\nQuestion {number}/{total} ({}, {}): {}",
        question.difficulty, question.topic, question.text
    )?;
    match &question.kind {
        QuestionKind::MultipleChoice { choices, .. } => {
            for (i, choice) in choices.iter().enumerate() {
                writeln!(output, "  {}. {choice}", i + 1)?;
            }
            write!(output, "Your choice (number or text): ")?;
        }
        QuestionKind::ShortAnswer { .. } => {
            write!(output, "Your answer: ")?;
        }
    }
    output.flush()
}

fn feedback<W: Write + ?Sized>(
    question: &Question,
    is_correct: bool,
    show_explanation: bool,
    output: &mut W,
) -> std::io::Result<()> {
    if is_correct {
        return writeln!(output, "Correct!");
    }
    writeln!(output, "Incorrect. Answer: {}", question.correct_answer())?;
    if show_explanation {
        if let Some(explanation) = &question.explanation {
            writeln!(output, "Explanation: {explanation}")?;
        }
    }
    Ok(())
}

/// Read one trimmed line, or `None` at end of input.
fn read_answer<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| QuizError::io(Path::new("<stdin>"), e))?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn terminal_error(e: std::io::Error) -> QuizError {
    QuizError::io(Path::new("<stdout>"), e)
}
