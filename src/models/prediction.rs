use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const MIN_IMDB_RATING: f64 = 0.0;
pub const MAX_IMDB_RATING: f64 = 10.0;
pub const MIN_RUN_LENGTH: u32 = 1;

/// Whether a show is still airing
///
/// The prediction service expects the literal strings "Yes" / "No" on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Ongoing {
    Yes,
    No,
}

impl Ongoing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Ongoing::Yes => "Yes",
            Ongoing::No => "No",
        }
    }
}

/// Show details collected from the user for a single prediction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    /// IMDb rating, 0.0 to 10.0
    pub imdb_rating: f64,
    /// Number of ratings the show received
    pub total_ratings: u64,
    /// Run length in years
    pub run_length: u32,
    pub ongoing: Ongoing,
}

impl PredictionRequest {
    /// Checks the same bounds the form widgets enforce.
    pub fn validate(&self) -> AppResult<()> {
        if !self.imdb_rating.is_finite()
            || !(MIN_IMDB_RATING..=MAX_IMDB_RATING).contains(&self.imdb_rating)
        {
            return Err(AppError::InvalidInput(format!(
                "imdb_rating must be between {} and {}, got {}",
                MIN_IMDB_RATING, MAX_IMDB_RATING, self.imdb_rating
            )));
        }

        if self.run_length < MIN_RUN_LENGTH {
            return Err(AppError::InvalidInput(format!(
                "run_length must be at least {} year",
                MIN_RUN_LENGTH
            )));
        }

        Ok(())
    }

    /// Builds the body sent to the prediction service
    pub fn to_payload(&self) -> PredictionPayload {
        PredictionPayload {
            run_length: self.run_length,
            ongoing: self.ongoing,
            imdb_rating: self.imdb_rating,
            total_ratings: self.total_ratings,
        }
    }
}

/// Wire format expected by the remote prediction service
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PredictionPayload {
    pub run_length: u32,
    pub ongoing: Ongoing,
    pub imdb_rating: f64,
    pub total_ratings: u64,
}

/// Raw success body returned by the prediction service
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPredictionResponse {
    #[serde(default)]
    pub predicted_category: Option<PredictedCategory>,
}

/// The service normally answers with a label, but older deployments
/// returned the raw cluster id.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum PredictedCategory {
    Label(String),
    Cluster(i64),
}
