pub mod adjust;
pub mod constants;
pub mod generator;
pub mod validation;

pub use adjust::{Adjustment, adjust_meal_macro};
pub use constants::*;
pub use generator::{
    AttemptReport, Correction, GenerationOutcome, GenerationReport, GeneratorConfig,
    MealPlanGenerator, PlanRequest, generate_meal_plan,
};
pub use validation::{Band, Compliance, percent_of};
