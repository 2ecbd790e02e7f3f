//! API request and response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::types::Quiz;

/// Body of POST /api/quizzes/parse
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    pub content: String,
}

/// A line the parser skipped, rendered for authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub line: usize,
    pub message: String,
}

impl From<&quiz_core::Diagnostic> for ParseWarning {
    fn from(diag: &quiz_core::Diagnostic) -> Self {
        Self {
            line: diag.line(),
            message: diag.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    pub quizzes: Vec<Quiz>,
    pub question_count: usize,
    pub warnings: Vec<ParseWarning>,
}
