//! Quiz progression over a fixed question bank.
//!
//! A [`QuizSession`] walks the questions in order. Each question accepts
//! exactly one answer; the learner then advances to the next question, and
//! advancing past the last one completes the quiz. Calls made at the wrong
//! time are rejected with a [`QuizError`] and leave the session untouched.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{CenteringError, Result};

/// Number of answer options every question carries.
pub const OPTION_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: usize,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_option
    }
}

/// Immutable, validated list of questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(CenteringError::invalid_bank("no questions"));
        }
        for (i, q) in questions.iter().enumerate() {
            if q.correct_option >= OPTION_COUNT {
                return Err(CenteringError::invalid_bank(format!(
                    "question {} marks option {} as correct, but only {OPTION_COUNT} options exist",
                    i + 1,
                    q.correct_option
                )));
            }
            if q.prompt.trim().is_empty() {
                return Err(CenteringError::invalid_bank(format!("question {} has an empty prompt", i + 1)));
            }
        }
        Ok(Self { questions })
    }

    /// The three questions the site ships with.
    pub fn builtin() -> Self {
        Self {
            questions: vec![
                question(
                    "Which CSS property is used for one-line perfect centering in CSS Grid?",
                    ["center-items", "place-items", "grid-center", "align-content"],
                    1,
                    "place-items is the magical one-line centering technique in CSS Grid! \
                     It centers items both horizontally and vertically.",
                ),
                question(
                    "In Flexbox, which property centers items horizontally?",
                    ["align-items", "justify-content", "flex-center", "center-horizontal"],
                    1,
                    "justify-content centers flex items along the main axis \
                     (horizontally in row direction).",
                ),
                question(
                    "What transform is typically used with absolute positioning to center a div?",
                    ["scale(0.5)", "translate(50%, 50%)", "translate(-50%, -50%)", "rotate(45deg)"],
                    2,
                    "translate(-50%, -50%) shifts the div back by half its own width and height, \
                     creating a perfect center.",
                ),
            ],
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let questions: Vec<Question> = serde_json::from_str(json)?;
        Self::new(questions)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}

fn question(prompt: &str, options: [&str; OPTION_COUNT], correct_option: usize, explanation: &str) -> Question {
    Question {
        prompt: prompt.to_string(),
        options: options.map(str::to_string),
        correct_option,
        explanation: explanation.to_string(),
    }
}

/// Why a quiz operation was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("this question has already been answered")]
    AlreadyAnswered,
    #[error("answer the current question before moving on")]
    NotAnswered,
    #[error("option {option} does not exist (question has {count} options)")]
    OptionOutOfRange { option: usize, count: usize },
    #[error("the quiz is already completed")]
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QuizState {
    InProgress {
        index: usize,
        selected: Option<usize>,
        score: usize,
    },
    Completed {
        score: usize,
    },
}

impl QuizState {
    const START: Self = Self::InProgress {
        index: 0,
        selected: None,
        score: 0,
    };
}

/// Result of a first answer on a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerFeedback {
    pub option: usize,
    pub correct: bool,
    pub correct_option: usize,
    pub explanation: String,
}

/// Result of a successful `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Progress {
    Next { index: usize },
    Finished { score: usize, total: usize },
}

/// Status of one question in the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressMark {
    Done,
    Current,
    Upcoming,
}

/// Serializable view of a session for JSON clients.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSnapshot {
    #[serde(flatten)]
    pub state: QuizState,
    pub total: usize,
    pub question: Option<Question>,
    pub progress: Vec<ProgressMark>,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    bank: Arc<QuestionBank>,
    state: QuizState,
}

impl QuizSession {
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            state: QuizState::START,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn total(&self) -> usize {
        self.bank.len()
    }

    /// Index of the question on screen; after completion, the question count.
    pub fn current_index(&self) -> usize {
        match self.state {
            QuizState::InProgress { index, .. } => index,
            QuizState::Completed { .. } => self.bank.len(),
        }
    }

    pub fn selected_option(&self) -> Option<usize> {
        match self.state {
            QuizState::InProgress { selected, .. } => selected,
            QuizState::Completed { .. } => None,
        }
    }

    pub fn score(&self) -> usize {
        match self.state {
            QuizState::InProgress { score, .. } | QuizState::Completed { score } => score,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, QuizState::Completed { .. })
    }

    pub fn is_last_question(&self) -> bool {
        matches!(self.state, QuizState::InProgress { index, .. } if index + 1 == self.bank.len())
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress { index, .. } => self.bank.get(index),
            QuizState::Completed { .. } => None,
        }
    }

    /// Record the answer for the current question. Only the first answer counts.
    pub fn select_answer(&mut self, option: usize) -> std::result::Result<AnswerFeedback, QuizError> {
        let QuizState::InProgress { index, selected, score } = self.state else {
            return Err(QuizError::Completed);
        };
        if selected.is_some() {
            log::debug!("quiz: ignoring second answer {option} on question {index}");
            return Err(QuizError::AlreadyAnswered);
        }
        if option >= OPTION_COUNT {
            return Err(QuizError::OptionOutOfRange {
                option,
                count: OPTION_COUNT,
            });
        }
        let question = &self.bank.questions[index];
        let correct = question.is_correct(option);
        self.state = QuizState::InProgress {
            index,
            selected: Some(option),
            score: if correct { score + 1 } else { score },
        };
        log::debug!("quiz: question {index} answered with {option} (correct: {correct})");
        Ok(AnswerFeedback {
            option,
            correct,
            correct_option: question.correct_option,
            explanation: question.explanation.clone(),
        })
    }

    /// Move past an answered question, completing the quiz after the last one.
    pub fn advance(&mut self) -> std::result::Result<Progress, QuizError> {
        let QuizState::InProgress { index, selected, score } = self.state else {
            return Err(QuizError::Completed);
        };
        if selected.is_none() {
            return Err(QuizError::NotAnswered);
        }
        let total = self.bank.len();
        if index + 1 >= total {
            self.state = QuizState::Completed { score };
            log::debug!("quiz: completed with {score}/{total}");
            Ok(Progress::Finished { score, total })
        } else {
            self.state = QuizState::InProgress {
                index: index + 1,
                selected: None,
                score,
            };
            Ok(Progress::Next { index: index + 1 })
        }
    }

    pub fn reset(&mut self) {
        self.state = QuizState::START;
        log::debug!("quiz: reset");
    }

    pub fn progress_marks(&self) -> Vec<ProgressMark> {
        let current = self.current_index();
        (0..self.bank.len())
            .map(|i| match i.cmp(&current) {
                std::cmp::Ordering::Less => ProgressMark::Done,
                std::cmp::Ordering::Equal => ProgressMark::Current,
                std::cmp::Ordering::Greater => ProgressMark::Upcoming,
            })
            .collect()
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            state: self.state,
            total: self.total(),
            question: self.current_question().cloned(),
            progress: self.progress_marks(),
        }
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(Arc::new(QuestionBank::builtin()))
    }
}
