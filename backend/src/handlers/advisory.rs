//! HTTP handler for advisory generation

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use shared::AdvisoryResponse;

use crate::error::{AppError, AppResult};
use crate::services::aggregation::SelectionContext;
use crate::AppState;

/// Request body for an advisory question
#[derive(Debug, Deserialize)]
pub struct AskAdviceInput {
    pub question: String,
    pub selected_polygon_id: Option<String>,
}

/// Ask for advice on behalf of a farmer
pub async fn ask_advice(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(input): Json<AskAdviceInput>,
) -> AppResult<Json<AdvisoryResponse>> {
    if input.question.trim().is_empty() {
        return Err(AppError::Validation {
            field: "question".to_string(),
            message: "Question must not be empty".to_string(),
        });
    }

    let selection = SelectionContext {
        selected_polygon_id: input.selected_polygon_id,
    };
    let response = state.advisory.ask(user_id, &input.question, selection).await?;
    Ok(Json(response))
}
