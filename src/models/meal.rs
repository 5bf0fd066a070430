use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::food::FoodPortion;
use crate::models::nutrients::{Nutrients, format_nutrition_value};

/// Meal-time tag shared by catalog meals, alternates and plan slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealCategory {
    #[serde(rename = "petit_dejeuner")]
    Breakfast,
    #[serde(rename = "dejeuner")]
    Lunch,
    #[serde(rename = "diner")]
    Dinner,
    #[serde(rename = "souper")]
    Supper,
    #[serde(rename = "collation")]
    Snack,
}

impl MealCategory {
    /// Main-meal slot order; a fifth meal wraps around to breakfast.
    pub const MAIN: [MealCategory; 4] = [
        MealCategory::Breakfast,
        MealCategory::Lunch,
        MealCategory::Dinner,
        MealCategory::Supper,
    ];

    pub fn for_main_slot(index: usize) -> MealCategory {
        Self::MAIN[index % Self::MAIN.len()]
    }

    pub fn label(&self) -> &'static str {
        match self {
            MealCategory::Breakfast => "Petit-déjeuner",
            MealCategory::Lunch => "Déjeuner",
            MealCategory::Dinner => "Dîner",
            MealCategory::Supper => "Souper",
            MealCategory::Snack => "Collation",
        }
    }
}

impl fmt::Display for MealCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A food reference and its base quantity inside a catalog meal.
#[derive(Debug, Clone, PartialEq)]
pub struct MealItem {
    pub food: String,
    pub grams: f64,
}

/// A catalog meal (or curated alternate) at its base quantities.
#[derive(Debug, Clone, PartialEq)]
pub struct PredefinedMeal {
    pub id: String,
    pub category: MealCategory,
    pub name: String,
    pub items: Vec<MealItem>,
}

impl PredefinedMeal {
    pub fn new(id: &str, category: MealCategory, name: &str, items: &[(&str, f64)]) -> Self {
        Self {
            id: id.to_string(),
            category,
            name: name.to_string(),
            items: items
                .iter()
                .map(|(food, grams)| MealItem {
                    food: food.to_string(),
                    grams: *grams,
                })
                .collect(),
        }
    }
}

/// A meal with concrete portions and totals.
///
/// Totals are always the rounded sum of the portion values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaledMeal {
    pub id: String,
    pub category: MealCategory,
    pub name: String,
    pub foods: Vec<FoodPortion>,

    #[serde(rename = "totalCalories")]
    pub total_calories: f64,

    #[serde(rename = "totalProteines")]
    pub total_protein: f64,

    #[serde(rename = "totalGlucides")]
    pub total_carbs: f64,

    #[serde(rename = "totalLipides")]
    pub total_fat: f64,
}

impl ScaledMeal {
    pub fn from_portions(
        id: &str,
        category: MealCategory,
        name: &str,
        foods: Vec<FoodPortion>,
    ) -> Self {
        let mut meal = Self {
            id: id.to_string(),
            category,
            name: name.to_string(),
            foods,
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
        };
        meal.recompute_totals();
        meal
    }

    pub fn recompute_totals(&mut self) {
        let sum = self
            .foods
            .iter()
            .fold(Nutrients::default(), |acc, p| acc + p.nutrients);
        self.total_calories = format_nutrition_value(sum.calories);
        self.total_protein = format_nutrition_value(sum.protein);
        self.total_carbs = format_nutrition_value(sum.carbs);
        self.total_fat = format_nutrition_value(sum.fat);
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

    /// Nutrition removed by hard caps across this meal's portions.
    pub fn clamp_drift(&self) -> Nutrients {
        self.foods
            .iter()
            .filter_map(|p| p.clamp.map(|c| c.drift))
            .fold(Nutrients::default(), |acc, d| acc + d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portion(name: &str, n: Nutrients) -> FoodPortion {
        FoodPortion {
            name: name.to_string(),
            quantity: 100.0,
            display_quantity: "100g".to_string(),
            nutrients: n,
            clamp: None,
        }
    }

    #[test]
    fn test_totals_are_rounded_portion_sums() {
        let meal = ScaledMeal::from_portions(
            "t1",
            MealCategory::Lunch,
            "Test",
            vec![
                portion("a", Nutrients::new(165.0, 31.0, 0.0, 3.6, 0.0)),
                portion("b", Nutrients::new(25.0, 3.0, 4.0, 0.4, 3.0)),
                portion("c", Nutrients::new(88.4, 0.0, 0.0, 10.0, 0.0)),
            ],
        );
        assert_eq!(meal.total_calories, 278.0);
        assert_eq!(meal.total_protein, 34.0);
        assert_eq!(meal.total_carbs, 4.0);
        assert_eq!(meal.total_fat, 14.0);
    }

    #[test]
    fn test_category_slots_wrap() {
        assert_eq!(MealCategory::for_main_slot(0), MealCategory::Breakfast);
        assert_eq!(MealCategory::for_main_slot(3), MealCategory::Supper);
        assert_eq!(MealCategory::for_main_slot(4), MealCategory::Breakfast);
    }

    #[test]
    fn test_serialized_meal_shape() {
        let meal = ScaledMeal::from_portions(
            "col1",
            MealCategory::Snack,
            "Fruits et noix",
            vec![portion("Pomme", Nutrients::new(52.0, 0.3, 14.0, 0.2, 2.4))],
        );
        let value = serde_json::to_value(&meal).unwrap();
        assert_eq!(value["category"], "collation");
        assert_eq!(value["totalCalories"], 52.0);
        assert_eq!(value["foods"][0]["displayQuantity"], "100g");
        assert_eq!(value["foods"][0]["fiber"], 2.4);
        assert!(value["foods"][0].get("clamp").is_none());
    }
}
