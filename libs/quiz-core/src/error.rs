//! Diagnostics for quiz-core.
//!
//! Parsing never fails. Lines the parser has to skip are reported here so
//! callers can surface them to authors without changing the parsed output.

use thiserror::Error;

/// A recoverable problem found while parsing. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("malformed question heading at line {line}: {text}")]
    MalformedHeading { line: usize, text: String },

    #[error("question heading at line {line} has no quiz title above it")]
    HeadingOutsideQuiz { line: usize },

    #[error("option at line {line} has no open question")]
    OrphanedOption { line: usize },

    #[error("answer at line {line} has no open question")]
    OrphanedAnswer { line: usize },

    #[error("description at line {line} has no open quiz")]
    OrphanedDescription { line: usize },

    #[error("description at line {line} ignored, quiz already has one")]
    DuplicateDescription { line: usize },

    /// A quiz needs a title and at least one question to be kept.
    #[error("quiz \"{title}\" at line {line} was dropped: it needs a title and at least one question")]
    QuizDropped { line: usize, title: String },
}

impl Diagnostic {
    /// Line the diagnostic points at.
    pub fn line(&self) -> usize {
        match self {
            Self::MalformedHeading { line, .. }
            | Self::HeadingOutsideQuiz { line }
            | Self::OrphanedOption { line }
            | Self::OrphanedAnswer { line }
            | Self::OrphanedDescription { line }
            | Self::DuplicateDescription { line }
            | Self::QuizDropped { line, .. } => *line,
        }
    }
}
