//! Quiz import endpoints

use axum::Json;

use crate::error::Result;
use crate::models::{ParseRequest, ParseResponse};
use crate::services::import::import_content;

/// POST /api/quizzes/parse
/// Parse quiz markdown sent as JSON
pub async fn parse(Json(payload): Json<ParseRequest>) -> Result<Json<ParseResponse>> {
    import_content(&payload.content).map(Json)
}

/// POST /api/quizzes/parse/raw
/// Parse quiz markdown sent as a plain text body
pub async fn parse_raw(body: String) -> Result<Json<ParseResponse>> {
    import_content(&body).map(Json)
}
