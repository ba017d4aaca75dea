use std::sync::Arc;

use crate::models::ModelComparison;
use crate::services::Predictor;

/// Shared application state
///
/// Nothing in here changes after startup, so handlers never lock.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
    pub comparison: Arc<ModelComparison>,
}

impl AppState {
    /// Creates state around the given predictor with the built-in model comparison
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            predictor,
            comparison: Arc::new(ModelComparison::default()),
        }
    }
}
