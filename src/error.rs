use thiserror::Error;

use crate::models::PlantId;

/// Errors raised while turning user input into store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlantError {
    #[error("invalid watering interval {0:?}: expected a whole number of days greater than zero")]
    InvalidInterval(String),

    #[error("invalid date {0:?}: expected YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("unknown filter {0:?}: expected all, thirsty or watered")]
    UnknownFilter(String),

    #[error("unknown plant field {0:?}: expected text, recommendedWatering or lastWatered")]
    UnknownField(String),

    #[error("{0} must not be empty")]
    EmptyValue(&'static str),

    #[error("plant not found: {0}")]
    PlantNotFound(PlantId),
}

pub type PlantResult<T> = Result<T, PlantError>;
