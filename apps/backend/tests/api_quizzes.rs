//! Quiz import API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use common::fixtures;
use common::TestContext;
use quiz_import_backend::config::ServerConfig;

/// Test health check responds.
#[tokio::test]
async fn test_health_check() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "OK");
}

/// Test parsing a single quiz sent as JSON.
#[tokio::test]
async fn test_parse_single_quiz() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quizzes/parse")
        .json(&fixtures::parse_request(&fixtures::sample_quiz("Rust", 3)))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["question_count"], 3);
    assert_eq!(body["quizzes"][0]["title"], "Rust");
    assert_eq!(body["quizzes"][0]["description"], "Sample description");

    let questions = body["quizzes"][0]["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 3);
    for (idx, question) in questions.iter().enumerate() {
        assert_eq!(question["order_index"], idx);
        assert_eq!(question["question_type"], "multiple_choice");
        assert_eq!(question["is_multiple_select"], false);
        assert_eq!(question["required"], true);
    }
    assert_eq!(questions[0]["correct_answer"], "Option A1");
    assert!(body["warnings"].as_array().unwrap().is_empty());
}

/// Test every question type survives the JSON round trip.
#[tokio::test]
async fn test_parse_mixed_survey() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quizzes/parse")
        .json(&fixtures::parse_request(&fixtures::mixed_survey()))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let questions = body["quizzes"][0]["questions"].as_array().unwrap();
    let types: Vec<&str> = questions
        .iter()
        .map(|q| q["question_type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec!["multiple_choice", "multiple_choice", "text", "yes_no", "rating", "ranking"]
    );

    assert_eq!(questions[1]["max_selections"], 2);
    assert_eq!(questions[2]["required"], false);
    assert_eq!(questions[3]["options"], serde_json::json!(["はい", "いいえ"]));
    assert!(questions[4].get("max_selections").is_none());
    assert_eq!(questions[5]["max_selections"], 2);
    assert_eq!(questions[5]["options"].as_array().unwrap().len(), 3);
}

/// Test plain text bodies are accepted.
#[tokio::test]
async fn test_parse_raw_text() {
    let server = TestContext::new().server();
    let content = format!(
        "{}\n---\n{}",
        fixtures::sample_quiz("First", 1),
        fixtures::sample_quiz("Second", 2)
    );

    let response = server.post("/api/quizzes/parse/raw").text(content).await;

    response.assert_status_ok();
    let body: Value = response.json();
    let quizzes = body["quizzes"].as_array().unwrap();
    assert_eq!(quizzes.len(), 2);
    assert_eq!(quizzes[1]["title"], "Second");
    assert_eq!(quizzes[1]["questions"][1]["order_index"], 1);
}

/// Test skipped lines come back as warnings.
#[tokio::test]
async fn test_parse_reports_warnings() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quizzes/parse")
        .json(&fixtures::parse_request("# Quiz\n### Q1\n### \n□ lost"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let warnings = body["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0]["line"], 3);
    assert_eq!(warnings[1]["line"], 4);
    assert_eq!(body["quizzes"][0]["questions"][0]["options"], serde_json::json!([]));
}

/// Test content without any valid quiz is rejected.
#[tokio::test]
async fn test_parse_no_quiz_content() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quizzes/parse")
        .json(&fixtures::parse_request("# Title only\nSome prose."))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "no_quiz_content");
    assert_eq!(body["message"], "No valid quiz content found");
}

/// Test blank content is a bad request.
#[tokio::test]
async fn test_parse_blank_content() {
    let server = TestContext::new().server();

    let response = server
        .post("/api/quizzes/parse")
        .json(&fixtures::parse_request("   "))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "bad_request");
}

/// Test bodies over the configured limit are refused.
#[tokio::test]
async fn test_parse_body_limit() {
    let server = TestContext::with_config(ServerConfig {
        max_content_bytes: 64,
        ..ServerConfig::default()
    })
    .server();

    let response = server
        .post("/api/quizzes/parse/raw")
        .text(fixtures::sample_quiz("Big", 10))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
}

/// Test uploads saved with a byte-order mark keep their first quiz.
#[tokio::test]
async fn test_parse_raw_with_byte_order_mark() {
    let server = TestContext::new().server();
    let content = format!("\u{FEFF}{}", fixtures::sample_quiz("Windows", 1));

    let response = server.post("/api/quizzes/parse/raw").text(content).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["quizzes"][0]["title"], "Windows");
    assert_eq!(body["question_count"], 1);
}
