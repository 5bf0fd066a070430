use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{FoodClass, Quantity, ScaledMeal, round_to_5g};
use crate::planner::constants::{CORRECTION_STOP_RATIO, MAX_FOOD_CHANGE, MIN_FOOD_GRAMS};

/// Result of a targeted macro correction on one meal.
#[derive(Debug, Clone)]
pub struct Adjustment {
    pub meal: ScaledMeal,
    /// Macro grams actually added (negative when removed).
    pub achieved: f64,
    pub changed: bool,
}

/// Foods eligible to move a given macro.
fn class_for(quantity: Quantity) -> Option<FoodClass> {
    match quantity {
        Quantity::Protein => Some(FoodClass::HighProtein),
        Quantity::Carbs => Some(FoodClass::HighCarb),
        Quantity::Fat => Some(FoodClass::HighFat),
        Quantity::Calories => None,
    }
}

/// Shift `quantity` in `meal` by about `change` grams.
///
/// Foods of the matching class are changed one at a time, largest
/// contributor first, each by at most 30 % and never below 10 g. Stops
/// once 80 % of the change has been reached.
pub fn adjust_meal_macro(
    catalog: &Catalog,
    meal: &ScaledMeal,
    quantity: Quantity,
    change: f64,
) -> Result<Adjustment> {
    let mut current = meal.clone();
    let mut achieved = 0.0;
    let mut changed = false;

    let Some(class) = class_for(quantity) else {
        return Ok(Adjustment {
            meal: current,
            achieved,
            changed,
        });
    };

    let mut candidates: Vec<(usize, f64)> = Vec::new();
    for (index, portion) in meal.foods.iter().enumerate() {
        let amount = portion.nutrients.get(quantity);
        if amount > 0.0 && catalog.food(&portion.name)?.has(class) {
            candidates.push((index, amount));
        }
    }
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

    for (index, _) in candidates {
        if achieved.abs() >= CORRECTION_STOP_RATIO * change.abs() {
            break;
        }

        let portion = &current.foods[index];
        let amount = portion.nutrients.get(quantity);
        if amount <= 0.0 {
            continue;
        }

        let needed = (change - achieved) / amount * portion.quantity;
        let limit = portion.quantity * MAX_FOOD_CHANGE;
        let delta = needed.clamp(-limit, limit);
        let mut grams = round_to_5g(portion.quantity + delta).max(MIN_FOOD_GRAMS);

        let food = catalog.food(&portion.name)?;
        if food.has(FoodClass::WholeFruit) {
            if let Some(unit) = &food.unit {
                // Keep at least one whole fruit if there was half of one
                if unit.units(grams) < 1.0 && portion.quantity >= unit.grams_per_unit / 2.0 {
                    grams = unit.grams_per_unit;
                }
            }
        }

        if grams == portion.quantity {
            continue;
        }

        let updated = catalog.with_portion_quantity(&current, index, grams)?;
        // Unit caps can pin the portion where it already was
        if updated.foods[index].quantity == portion.quantity {
            continue;
        }
        let delta_macro = updated.foods[index].nutrients.get(quantity) - amount;
        debug!(
            meal = %current.name,
            food = %updated.foods[index].name,
            from = current.foods[index].quantity,
            to = updated.foods[index].quantity,
            %quantity,
            delta_macro,
            "adjusted portion"
        );
        achieved += delta_macro;
        changed = true;
        current = updated;
    }

    Ok(Adjustment {
        meal: current,
        achieved,
        changed,
    })
}
