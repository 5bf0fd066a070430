pub mod food;
pub mod meal;
pub mod nutrients;
pub mod plan;
pub mod profile;

pub use food::{CapKind, ClampEvent, DisplayUnit, FoodClass, FoodItem, FoodPortion};
pub use meal::{MealCategory, MealItem, PredefinedMeal, ScaledMeal};
pub use nutrients::{Nutrients, Quantity, format_nutrition_value, round_to_5g, round1};
pub use plan::{MealPlanResult, day_totals};
pub use profile::{ActivityLevel, Goal, MealStructure, Sex, UserProfile};
