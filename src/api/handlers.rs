use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension, Form, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{ModelComparison, PredictionRequest},
    services::prediction::{self, PredictionOutcome},
};

use super::{page, AppState};

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Renders the empty form
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render(&page::PageView {
        form: page::FormValues::default(),
        outcome: None,
        input_error: None,
        comparison: &state.comparison,
    }))
}

/// Handles a browser form submit and renders the page with the result
pub async fn submit_form(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: Result<Form<PredictionRequest>, FormRejection>,
) -> Response {
    let Form(request) = match form {
        Ok(form) => form,
        Err(rejection) => {
            tracing::warn!(
                request_id = %request_id,
                error = %rejection.body_text(),
                "Rejected malformed form submit"
            );
            return input_error_page(
                &state,
                page::FormValues::default(),
                &rejection.body_text(),
            );
        }
    };

    tracing::info!(
        request_id = %request_id,
        ongoing = request.ongoing.as_str(),
        "Processing form prediction"
    );

    let form = page::FormValues::from(&request);

    match prediction::predict_category(state.predictor.clone(), request).await {
        Ok(outcome) => Html(page::render(&page::PageView {
            form,
            outcome: Some(&outcome),
            input_error: None,
            comparison: &state.comparison,
        }))
        .into_response(),
        Err(AppError::InvalidInput(msg)) => input_error_page(&state, form, &msg),
    }
}

/// Re-renders the form with a 400 and the input problem in the banner
fn input_error_page(state: &AppState, form: page::FormValues, message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Html(page::render(&page::PageView {
            form,
            outcome: None,
            input_error: Some(message),
            comparison: &state.comparison,
        })),
    )
        .into_response()
}

/// JSON prediction endpoint
pub async fn predict(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<PredictionRequest>,
) -> AppResult<Json<PredictionOutcome>> {
    tracing::info!(
        request_id = %request_id,
        ongoing = request.ongoing.as_str(),
        "Processing prediction request"
    );

    let outcome = prediction::predict_category(state.predictor.clone(), request).await?;
    Ok(Json(outcome))
}

/// Static silhouette score comparison
pub async fn comparison(State(state): State<AppState>) -> Json<ModelComparison> {
    Json(state.comparison.as_ref().clone())
}
