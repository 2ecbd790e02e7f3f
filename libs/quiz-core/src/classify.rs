//! Line classification for quiz markdown.
//!
//! Every input line maps to exactly one [`LineKind`]. Rules are checked in
//! priority order:
//!
//! ```markdown
//! ---                      separator
//! # Title                  quiz title
//! # （補足）               annotation, ignored
//! ## Description           quiz description
//! ### Question             question heading (also ####, #####, $$$)
//! □ Option                 option
//! 正解: A, B               answer (also 答え:)
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// `#` followed by a full-width parenthetical is an annotation, not a title.
static ANNOTATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*（.+）").unwrap());

const HEADING_PREFIXES: [&str; 4] = ["#####", "####", "###", "$$$"];
const ANSWER_PREFIXES: [&str; 2] = ["正解:", "答え:"];

/// Classification of a single trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Separator,
    QuizTitle(&'a str),
    QuizDescription(&'a str),
    /// Raw heading line, resolved later by [`crate::heading::resolve`].
    QuestionHeading(&'a str),
    Option(&'a str),
    Answer(&'a str),
    Ignore,
}

/// Classify one line of input. The line is trimmed first.
pub fn classify_line(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::Ignore;
    }

    if is_separator(trimmed) {
        LineKind::Separator
    } else if let Some(rest) = trimmed.strip_prefix("# ") {
        if ANNOTATION.is_match(trimmed) {
            LineKind::Ignore
        } else {
            LineKind::QuizTitle(rest.trim())
        }
    } else if let Some(rest) = trimmed.strip_prefix("## ") {
        LineKind::QuizDescription(rest.trim())
    } else if HEADING_PREFIXES.iter().any(|p| trimmed.starts_with(p)) {
        LineKind::QuestionHeading(trimmed)
    } else if let Some(rest) = trimmed.strip_prefix("□ ") {
        LineKind::Option(rest.trim())
    } else if let Some(rest) = ANSWER_PREFIXES
        .iter()
        .find_map(|p| trimmed.strip_prefix(p))
    {
        LineKind::Answer(rest.trim())
    } else {
        LineKind::Ignore
    }
}

fn is_separator(trimmed: &str) -> bool {
    trimmed.len() >= 3 && trimmed.bytes().all(|b| b == b'-')
}
