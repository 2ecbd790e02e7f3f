//! Question heading grammar.
//!
//! # Format
//! ```markdown
//! ### Single choice question            (required)
//! #### Multiple choice question         (required)
//! ##### Free text question              (optional)
//! ### [multi max=2] Pick two
//! #### [single required=false] Optional pick one
//! ##### [yesno] Do you agree?
//! $$$ Rank these items                  (ranking, top 3)
//! $$$-5 Rank these items                (ranking, top 5)
//! ```
//!
//! The number of `#` sets the defaults. A bracket tag replaces the type
//! defaults, and `required=false` inside the tag always makes the question
//! optional.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::{Question, QuestionType, DEFAULT_RANKING_MAX};

static HASH_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#{3,5})\s*(?:\[(.+?)\])?\s*(.+)$").unwrap());

/// Outcome of resolving a heading line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingResolution {
    Opened(Question),
    Invalid,
}

#[cfg(test)]
impl HeadingResolution {
    fn into_question(self) -> Option<Question> {
        match self {
            Self::Opened(question) => Some(question),
            Self::Invalid => None,
        }
    }
}

/// Resolve a heading line into a new, empty question at `order_index`.
pub fn resolve(line: &str, order_index: usize) -> HeadingResolution {
    let line = line.trim();
    match line.strip_prefix("$$$") {
        Some(rest) => HeadingResolution::Opened(resolve_ranking(rest, order_index)),
        None => resolve_hash(line, order_index),
    }
}

/// `$$$[-N] text`. Never invalid.
fn resolve_ranking(rest: &str, order_index: usize) -> Question {
    let (prefix, text) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };

    let max_selections = prefix
        .split_once('-')
        .and_then(|(_, n)| n.parse::<i64>().ok())
        .unwrap_or(DEFAULT_RANKING_MAX);

    let mut question = Question::new(text, QuestionType::Ranking, order_index);
    question.is_multiple_select = true;
    question.max_selections = Some(max_selections);
    question
}

fn resolve_hash(line: &str, order_index: usize) -> HeadingResolution {
    let Some(caps) = HASH_HEADING.captures(line) else {
        return HeadingResolution::Invalid;
    };

    let hash_count = caps.get(1).map_or(0, |m| m.as_str().len());
    let text = caps.get(3).map_or("", |m| m.as_str()).trim();

    let mut question = defaults_for_hash_count(hash_count, text, order_index);
    if let Some(tag) = caps.get(2) {
        apply_tag(&mut question, &TypeTag::parse(tag.as_str()));
    }

    HeadingResolution::Opened(question)
}

fn defaults_for_hash_count(hash_count: usize, text: &str, order_index: usize) -> Question {
    let mut question = match hash_count {
        5 => Question::new(text, QuestionType::Text, order_index),
        _ => Question::new(text, QuestionType::MultipleChoice, order_index),
    };
    match hash_count {
        4 => question.is_multiple_select = true,
        5 => question.required = false,
        _ => {}
    }
    question
}

/// Contents of `[type key=value ...]`.
#[derive(Debug)]
struct TypeTag {
    type_token: String,
    params: HashMap<String, String>,
}

impl TypeTag {
    fn parse(raw: &str) -> Self {
        let mut tokens = raw.split_whitespace();
        let type_token = tokens.next().unwrap_or_default().to_lowercase();
        let params = tokens
            .filter_map(|token| token.split_once('='))
            .map(|(key, value)| (key.to_lowercase(), value.to_string()))
            .collect();
        Self { type_token, params }
    }

    fn max(&self) -> Option<i64> {
        self.params.get("max").and_then(|v| v.parse().ok())
    }

    fn forces_optional(&self) -> bool {
        self.params.get("required").is_some_and(|v| v == "false")
    }
}

fn apply_tag(question: &mut Question, tag: &TypeTag) {
    question.max_selections = None;

    match tag.type_token.as_str() {
        "single" => {
            question.question_type = QuestionType::MultipleChoice;
            question.is_multiple_select = false;
        }
        "multi" => {
            question.question_type = QuestionType::MultipleChoice;
            question.is_multiple_select = true;
            question.max_selections = tag.max();
        }
        "text" => {
            question.question_type = QuestionType::Text;
            question.is_multiple_select = false;
            question.required = false;
        }
        "yesno" | "yes_no" => {
            question.question_type = QuestionType::YesNo;
            question.is_multiple_select = false;
        }
        "ranking" => {
            question.question_type = QuestionType::Ranking;
            question.is_multiple_select = true;
            question.required = true;
            question.max_selections = Some(tag.max().unwrap_or(DEFAULT_RANKING_MAX));
        }
        "rating" => {
            question.question_type = QuestionType::Rating;
            question.is_multiple_select = false;
        }
        _ => {}
    }

    if tag.forces_optional() {
        question.required = false;
    }
}
