//! Multiple-choice quiz engine
//!
//! This module provides:
//! - Question: one prompt with options, an answer key, optional code and
//!   explanation
//! - Quiz: answering state machine accumulating a score
//! - AnswerOutcome with the audio feedback tone as plain data
//! - QuizResults with the pass gate
//!
//! Rendering, timers between questions, and actually playing the tones
//! belong to the surrounding page.

use coursekit_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Minimum score percentage to pass a quiz
pub const PASS_THRESHOLD: f32 = 70.0;

// ============================================================================
// Question
// ============================================================================

/// One multiple-choice question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Question prompt
    pub prompt: String,

    /// Optional code snippet shown with the prompt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Answer options, in display order
    pub options: Vec<String>,

    /// Index of the correct option
    pub correct: usize,

    /// Optional explanation revealed after answering
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

// ============================================================================
// Feedback tones
// ============================================================================

/// Audio feedback for an answer, as data
///
/// The page's audio layer decides whether and how to play it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackTone {
    /// Oscillator frequency in hertz
    pub frequency_hz: f32,
    /// Tone duration in milliseconds
    pub duration_ms: u32,
}

impl FeedbackTone {
    /// Tone played for a correct answer
    pub const CORRECT: FeedbackTone = FeedbackTone {
        frequency_hz: 800.0,
        duration_ms: 200,
    };

    /// Tone played for an incorrect answer
    pub const INCORRECT: FeedbackTone = FeedbackTone {
        frequency_hz: 200.0,
        duration_ms: 300,
    };
}

// ============================================================================
// Answer records and outcomes
// ============================================================================

/// One recorded answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Prompt of the answered question
    pub prompt: String,
    /// Option the learner selected
    pub selected: usize,
    /// Index of the correct option
    pub correct: usize,
    /// Whether the selection was correct
    pub is_correct: bool,
}

/// Immediate feedback for one answer
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    /// Whether the selection was correct
    pub is_correct: bool,
    /// Text of the correct option, for the feedback line
    pub correct_option: String,
    /// Explanation to reveal, when the question carries one
    pub explanation: Option<String>,
    /// Feedback tone to play
    pub tone: FeedbackTone,
}

// ============================================================================
// QuizResults
// ============================================================================

/// Final (or partial) quiz results
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResults {
    /// Correct answers so far
    pub score: usize,
    /// Total questions in the quiz
    pub total: usize,
    /// Score percentage, 0–100
    pub percent: f32,
    /// Whether the score meets [`PASS_THRESHOLD`]
    pub passed: bool,
    /// Recorded answers in order
    pub answers: Vec<AnswerRecord>,
}

// ============================================================================
// Quiz
// ============================================================================

/// Multiple-choice quiz state machine
///
/// Questions are answered in order; each answer records an
/// [`AnswerRecord`], bumps the score when correct, and advances to the
/// next question.
#[derive(Debug, Clone)]
pub struct Quiz {
    questions: Vec<Question>,
    current: usize,
    score: usize,
    answers: Vec<AnswerRecord>,
}

impl Quiz {
    /// Create a quiz over a question list
    pub fn new(questions: Vec<Question>) -> Self {
        Quiz {
            questions,
            current: 0,
            score: 0,
            answers: Vec::new(),
        }
    }

    /// Question currently being asked, if the quiz is not finished
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// Zero-based index of the current question
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Total number of questions
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Correct answers so far
    pub fn score(&self) -> usize {
        self.score
    }

    /// Check whether every question has been answered
    pub fn is_finished(&self) -> bool {
        self.current >= self.questions.len()
    }

    /// Progress through the quiz as a percentage of questions asked
    pub fn progress_percent(&self) -> f32 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current as f32 / self.questions.len() as f32) * 100.0
    }

    /// Answer the current question by option index
    ///
    /// Records the answer, scores it, and advances. Errors when the quiz
    /// is already finished or the option index is out of range; neither
    /// mutates any state.
    pub fn answer(&mut self, selected: usize) -> Result<AnswerOutcome> {
        let question = self
            .questions
            .get(self.current)
            .ok_or_else(|| Error::InvalidOperation("quiz is already finished".to_string()))?;
        if selected >= question.options.len() {
            return Err(Error::InvalidOperation(format!(
                "answer index {selected} out of range for {} options",
                question.options.len()
            )));
        }

        let is_correct = selected == question.correct;
        self.answers.push(AnswerRecord {
            prompt: question.prompt.clone(),
            selected,
            correct: question.correct,
            is_correct,
        });

        let outcome = AnswerOutcome {
            is_correct,
            correct_option: question.options[question.correct].clone(),
            explanation: question.explanation.clone(),
            tone: if is_correct {
                FeedbackTone::CORRECT
            } else {
                FeedbackTone::INCORRECT
            },
        };

        if is_correct {
            self.score += 1;
        }
        self.current += 1;
        Ok(outcome)
    }

    /// Results so far
    ///
    /// Callable at any point; the pass gate compares against the full
    /// question count, so an unfinished quiz can only pass once enough
    /// questions have been answered correctly.
    pub fn results(&self) -> QuizResults {
        let total = self.questions.len();
        let percent = if total == 0 {
            0.0
        } else {
            (self.score as f32 / total as f32) * 100.0
        };
        QuizResults {
            score: self.score,
            total,
            percent,
            passed: percent >= PASS_THRESHOLD,
            answers: self.answers.clone(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
