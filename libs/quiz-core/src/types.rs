//! Core types for parsed quizzes.

use serde::{Deserialize, Serialize};

/// Options assigned to a yes/no question that declares none of its own.
pub const YES_NO_OPTIONS: [&str; 2] = ["はい", "いいえ"];

/// Default `max_selections` for ranking questions.
pub const DEFAULT_RANKING_MAX: i64 = 3;

/// Answer semantics of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    MultipleChoice,
    Text,
    YesNo,
    Ranking,
    Rating,
}

impl QuestionType {
    /// Get the question type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::Text => "text",
            Self::YesNo => "yes_no",
            Self::Ranking => "ranking",
            Self::Rating => "rating",
        }
    }
}

/// A single question inside a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question_text: String,
    pub question_type: QuestionType,
    pub options: Vec<String>,
    pub required: bool,
    /// Zero-based position within the owning quiz.
    pub order_index: usize,
    pub is_multiple_select: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<i64>,
    /// Canonical `", "`-joined list of correct values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,
}

impl Question {
    /// Create a question with no options and no correct answer.
    pub fn new(
        question_text: impl Into<String>,
        question_type: QuestionType,
        order_index: usize,
    ) -> Self {
        Self {
            question_text: question_text.into(),
            question_type,
            options: Vec::new(),
            required: true,
            order_index,
            is_multiple_select: false,
            max_selections: None,
            correct_answer: None,
        }
    }
}

/// A finalized quiz. Always has a title and at least one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub questions: Vec<Question>,
}
