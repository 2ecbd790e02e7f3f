//! Test fixtures and factory functions for quiz markdown.

use serde_json::json;

/// Generate a quiz with a specified number of single-choice questions.
///
/// # Arguments
/// * `title` - Quiz title
/// * `num_questions` - Number of `###` questions to generate
pub fn sample_quiz(title: &str, num_questions: usize) -> String {
    let questions = (0..num_questions)
        .map(|i| {
            format!(
                "### Question {}?\n□ Option A{}\n□ Option B{}\n正解: Option A{}\n",
                i + 1,
                i + 1,
                i + 1,
                i + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("# {}\n## Sample description\n\n{}", title, questions)
}

/// A survey covering every question type.
pub fn mixed_survey() -> String {
    [
        "# Customer survey",
        "## Tell us about your visit",
        "",
        "### Which store did you visit?",
        "□ Shibuya",
        "□ Shinjuku",
        "",
        "#### [multi max=2] What did you buy?",
        "□ Coffee",
        "□ Tea",
        "□ Cake",
        "",
        "##### Anything else?",
        "",
        "### [yesno] Would you come back?",
        "",
        "### [rating] How was the service?",
        "",
        "$$$-2 Rank our products",
        "□ Coffee",
        "□ Tea",
        "□ Cake",
    ]
    .join("\n")
}

/// JSON body for POST /api/quizzes/parse.
pub fn parse_request(content: &str) -> serde_json::Value {
    json!({ "content": content })
}
