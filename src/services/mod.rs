pub mod prediction;
pub mod providers;

pub use providers::{Predictor, RemotePredictor};
