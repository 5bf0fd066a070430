use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::meal::ScaledMeal;
use crate::models::nutrients::{Nutrients, round1};

/// A generated day of meals, in the shape persisted as the current diet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanResult {
    #[serde(rename = "repas")]
    pub meals: Vec<ScaledMeal>,

    #[serde(rename = "totalCalories")]
    pub total_calories: f64,

    #[serde(rename = "totalProteines")]
    pub total_protein: f64,

    #[serde(rename = "totalGlucides")]
    pub total_carbs: f64,

    #[serde(rename = "totalLipides")]
    pub total_fat: f64,

    pub success: bool,

    #[serde(rename = "validationMessage")]
    pub validation_message: String,
}

impl MealPlanResult {
    pub fn new(meals: Vec<ScaledMeal>, success: bool, validation_message: String) -> Self {
        let mut plan = Self {
            meals,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
            success,
            validation_message,
        };
        plan.recompute_totals();
        plan
    }

    /// A plan with no meals, returned when every attempt failed.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::new(Vec::new(), false, message.into())
    }

    /// Day totals: sum of per-meal totals, one decimal.
    pub fn recompute_totals(&mut self) {
        let sum = day_totals(&self.meals);
        self.total_calories = sum.calories;
        self.total_protein = sum.protein;
        self.total_carbs = sum.carbs;
        self.total_fat = sum.fat;
    }

    pub fn totals(&self) -> Nutrients {
        Nutrients::new(
            self.total_calories,
            self.total_protein,
            self.total_carbs,
            self.total_fat,
            0.0,
        )
    }

    /// Return a new plan with the meal at `slot` swapped for `meal`.
    ///
    /// Totals are recomputed; `success` and the message are carried over
    /// unchanged, so callers that know the targets must re-validate.
    pub fn with_meal_replaced(&self, slot: usize, meal: ScaledMeal) -> Result<Self> {
        if slot >= self.meals.len() {
            return Err(PlannerError::SlotOutOfRange {
                slot,
                len: self.meals.len(),
            });
        }
        let mut meals = self.meals.clone();
        meals[slot] = meal;
        Ok(Self::new(
            meals,
            self.success,
            self.validation_message.clone(),
        ))
    }

    /// Total nutrition removed by fruit and egg caps.
    pub fn clamp_drift(&self) -> Nutrients {
        self.meals
            .iter()
            .fold(Nutrients::default(), |acc, m| acc + m.clamp_drift())
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Sum of per-meal totals, rounded to one decimal.
pub fn day_totals(meals: &[ScaledMeal]) -> Nutrients {
    let sum = meals
        .iter()
        .fold(Nutrients::default(), |acc, m| acc + m.totals());
    Nutrients::new(
        round1(sum.calories),
        round1(sum.protein),
        round1(sum.carbs),
        round1(sum.fat),
        0.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealCategory;

    fn meal(id: &str, calories: f64, protein: f64) -> ScaledMeal {
        ScaledMeal {
            id: id.to_string(),
            category: MealCategory::Lunch,
            name: id.to_string(),
            foods: Vec::new(),
            total_calories: calories,
            total_protein: protein,
            total_carbs: 10.0,
            total_fat: 5.05,
        }
    }

    #[test]
    fn test_day_totals_sum_meals() {
        let plan = MealPlanResult::new(
            vec![meal("a", 500.0, 30.2), meal("b", 650.0, 40.3)],
            true,
            String::new(),
        );
        assert_eq!(plan.total_calories, 1150.0);
        assert_eq!(plan.total_protein, 70.5);
        assert_eq!(plan.total_fat, 10.1);
    }

    #[test]
    fn test_replace_returns_new_value() {
        let plan = MealPlanResult::new(
            vec![meal("a", 500.0, 30.0), meal("b", 650.0, 40.0)],
            true,
            "ok".to_string(),
        );
        let updated = plan.with_meal_replaced(1, meal("c", 700.0, 45.0)).unwrap();

        assert_eq!(plan.meals[1].id, "b");
        assert_eq!(plan.total_calories, 1150.0);
        assert_eq!(updated.meals[1].id, "c");
        assert_eq!(updated.total_calories, 1200.0);
        assert_eq!(updated.total_protein, 75.0);
    }

    #[test]
    fn test_replace_out_of_range() {
        let plan = MealPlanResult::new(vec![meal("a", 500.0, 30.0)], true, String::new());
        let err = plan.with_meal_replaced(3, meal("c", 1.0, 1.0)).unwrap_err();
        assert!(matches!(err, PlannerError::SlotOutOfRange { slot: 3, len: 1 }));
    }

    #[test]
    fn test_persisted_field_names() {
        let plan = MealPlanResult::failed("nothing");
        let value = serde_json::to_value(&plan).unwrap();
        for key in [
            "repas",
            "totalCalories",
            "totalProteines",
            "totalGlucides",
            "totalLipides",
            "success",
            "validationMessage",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }
}
