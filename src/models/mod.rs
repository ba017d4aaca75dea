pub mod category;
pub mod comparison;
pub mod prediction;

pub use category::ShowCategory;
pub use comparison::{ModelComparison, ModelScore};
pub use prediction::{
    ApiPredictionResponse, Ongoing, PredictedCategory, PredictionPayload, PredictionRequest,
};
