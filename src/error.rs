use thiserror::Error;

use crate::models::MealCategory;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A required derived value was not supplied by the caller.
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("No unused meal left for category {0}")]
    CatalogExhausted(MealCategory),

    #[error("No profile stored for user '{0}'")]
    ProfileNotFound(String),

    #[error("No diet stored for user '{0}'")]
    DietNotFound(String),

    #[error("Meal slot {slot} is out of range (plan has {len} meals)")]
    SlotOutOfRange { slot: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, PlannerError>;
