//! Import service turning authored quiz markdown into API responses.

use crate::error::{ApiError, Result};
use crate::models::{ParseResponse, ParseWarning};

/// Parse quiz markdown for preview or import.
///
/// Blank content is a bad request. Content that yields no quiz is
/// [`ApiError::NoQuizContent`].
pub fn import_content(content: &str) -> Result<ParseResponse> {
    if content.trim().is_empty() {
        return Err(ApiError::BadRequest("content is empty".to_string()));
    }

    let outcome = quiz_core::parse_with_diagnostics(content);
    let warnings: Vec<ParseWarning> = outcome.diagnostics.iter().map(ParseWarning::from).collect();

    if outcome.quizzes.is_empty() {
        tracing::info!("No quiz content found ({} warnings)", warnings.len());
        return Err(ApiError::NoQuizContent);
    }

    let question_count = outcome.quizzes.iter().map(|q| q.questions.len()).sum();
    tracing::info!(
        "Parsed {} quizzes with {} questions ({} warnings)",
        outcome.quizzes.len(),
        question_count,
        warnings.len()
    );

    Ok(ParseResponse {
        quizzes: outcome.quizzes,
        question_count,
        warnings,
    })
}
