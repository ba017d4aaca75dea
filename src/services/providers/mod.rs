/// Prediction provider abstraction
///
/// The category model lives behind a remote HTTP service. Handlers only see this
/// trait, so the remote client can be swapped for a mock in tests.
use crate::{error::PredictionError, models::PredictionRequest};

pub mod remote;

pub use remote::RemotePredictor;

/// Trait for show category predictors
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Predictor: Send + Sync {
    /// Predict the category label for a show
    ///
    /// Exactly one call to the backing service is made; failures are not retried.
    async fn predict(&self, request: &PredictionRequest) -> Result<String, PredictionError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
