pub mod calculator;
pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod replacer;
pub mod state;

pub use error::{PlannerError, Result};
pub use models::{MealPlanResult, ScaledMeal, UserProfile};
