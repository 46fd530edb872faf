pub mod weighted;
pub mod predictor;

pub use weighted::{FeatureWeight, WeightedRegressor};
pub use predictor::{Predictor, SpendInput};

use crate::error::PredictionError;

/// Model, ktorý z rozpočtov na kanály odhadne tržby
pub trait RevenueModel {
    fn get_name(&self) -> &str;

    fn predict(&self, spend: &SpendInput) -> Result<f64, PredictionError>;
}
