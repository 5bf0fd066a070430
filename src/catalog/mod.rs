//! The single immutable catalog shared by the generator and the replacer.

mod alternatives;
mod foods;
mod meals;
mod portion;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, MealCategory, PredefinedMeal};

pub use alternatives::builtin_alternatives;
pub use foods::builtin_foods;
pub use meals::builtin_meals;

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(builtin_foods(), builtin_meals(), builtin_alternatives()));

/// Foods, predefined meals and curated alternates.
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: HashMap<String, FoodItem>,
    meals: Vec<PredefinedMeal>,
    alternatives: HashMap<String, Vec<PredefinedMeal>>,
}

impl Catalog {
    pub fn new(
        foods: Vec<FoodItem>,
        meals: Vec<PredefinedMeal>,
        alternatives: HashMap<String, Vec<PredefinedMeal>>,
    ) -> Self {
        let foods = foods.into_iter().map(|f| (f.name.clone(), f)).collect();
        Self {
            foods,
            meals,
            alternatives,
        }
    }

    /// The catalog compiled into the crate.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn food(&self, name: &str) -> Result<&FoodItem> {
        self.foods
            .get(name)
            .ok_or_else(|| PlannerError::FoodNotFound(name.to_string()))
    }

    pub fn foods(&self) -> impl Iterator<Item = &FoodItem> {
        self.foods.values()
    }

    pub fn meals(&self) -> &[PredefinedMeal] {
        &self.meals
    }

    pub fn meals_in(&self, category: MealCategory) -> impl Iterator<Item = &PredefinedMeal> {
        self.meals.iter().filter(move |m| m.category == category)
    }

    pub fn meal_by_id(&self, id: &str) -> Option<&PredefinedMeal> {
        self.meals.iter().find(|m| m.id == id)
    }

    /// Curated substitutes for the meal with this display name (may be empty).
    pub fn alternatives_for(&self, meal_name: &str) -> &[PredefinedMeal] {
        self.alternatives
            .get(meal_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn alternatives(&self) -> impl Iterator<Item = (&String, &Vec<PredefinedMeal>)> {
        self.alternatives.iter()
    }
}
