//! Core quiz markdown library shared by the import service.
//!
//! Provides:
//! - Line classifier for the quiz markdown format
//! - Question heading grammar (hash-count defaults and `[type key=value]` tags)
//! - Parser assembling quizzes and questions, with an optional diagnostic channel
//! - Shared types (Quiz, Question, QuestionType)

pub mod classify;
pub mod error;
pub mod heading;
pub mod parser;
pub mod types;

pub use classify::{classify_line, LineKind};
pub use error::Diagnostic;
pub use heading::HeadingResolution;
pub use parser::{parse, parse_with_diagnostics, ClassifiedLine, ParseOutcome, ParserState};
pub use types::{Question, QuestionType, Quiz};
