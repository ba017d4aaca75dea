use serde::Serialize;
use std::sync::Arc;

use crate::{
    error::AppResult, models::PredictionRequest, services::providers::Predictor,
};

/// Result of one prediction, ready for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionOutcome {
    /// Category label, absent when the call failed
    pub predicted_category: Option<String>,
    /// Label on success, otherwise the error text
    pub message: String,
}

impl PredictionOutcome {
    pub fn is_success(&self) -> bool {
        self.predicted_category.is_some()
    }
}

/// Validates the request and asks the provider for a category.
///
/// Only invalid input is an `Err`. Provider failures become an outcome carrying
/// the error text so the page stays usable.
pub async fn predict_category(
    provider: Arc<dyn Predictor>,
    request: PredictionRequest,
) -> AppResult<PredictionOutcome> {
    request.validate()?;

    match provider.predict(&request).await {
        Ok(label) => {
            tracing::info!(
                provider = provider.name(),
                category = %label,
                "Prediction completed"
            );
            Ok(PredictionOutcome {
                predicted_category: Some(label.clone()),
                message: label,
            })
        }
        Err(e) => {
            tracing::warn!(
                provider = provider.name(),
                error = %e,
                "Prediction failed"
            );
            Ok(PredictionOutcome {
                predicted_category: None,
                message: e.to_string(),
            })
        }
    }
}
