use thiserror::Error;

use crate::weight::Weight;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Plate weight must be positive, got {0}.")]
    NonPositivePlate(Weight),
    #[error("Plate {0} appears more than once in the catalog.")]
    DuplicatePlate(Weight),
    #[error("Bar weight cannot be negative, got {0}.")]
    NegativeBarWeight(Weight),
    #[error("Invalid settings: {0}")]
    Json(#[from] serde_json::Error),
}
