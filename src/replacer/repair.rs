use tracing::debug;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{FoodClass, Nutrients, Quantity, ScaledMeal, round_to_5g};
use crate::planner::{MIN_FOOD_GRAMS, STRICT_HIGH};

const REDUCTION_STEPS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Bring carbs and fat back under 110 % of `target`.
///
/// High-carb and high-fat sources are reduced first (non-essential foods
/// before the rest, richest first); if that is not enough, non-essential
/// foods are dropped.
pub fn optimize_for_constraints(
    catalog: &Catalog,
    meal: &ScaledMeal,
    target: &Nutrients,
) -> Result<ScaledMeal> {
    let max_carbs = target.carbs * STRICT_HIGH / 100.0;
    let max_fat = target.fat * STRICT_HIGH / 100.0;
    let over = |m: &ScaledMeal| m.total_carbs > max_carbs || m.total_fat > max_fat;

    if !over(meal) {
        return Ok(meal.clone());
    }

    let mut current = meal.clone();
    if current.total_carbs > max_carbs {
        current = reduce_sources(catalog, &current, Quantity::Carbs, FoodClass::HighCarb, max_carbs)?;
    }
    if current.total_fat > max_fat {
        current = reduce_sources(catalog, &current, Quantity::Fat, FoodClass::HighFat, max_fat)?;
    }
    if over(&current) {
        current = remove_non_essential(catalog, &current, max_carbs, max_fat)?;
    }
    Ok(current)
}

fn reduce_sources(
    catalog: &Catalog,
    meal: &ScaledMeal,
    quantity: Quantity,
    class: FoodClass,
    max: f64,
) -> Result<ScaledMeal> {
    let mut sources: Vec<(usize, bool, f64)> = Vec::new();
    for (index, portion) in meal.foods.iter().enumerate() {
        let food = catalog.food(&portion.name)?;
        if food.has(class) {
            sources.push((
                index,
                food.has(FoodClass::NonEssential),
                portion.nutrients.get(quantity),
            ));
        }
    }
    sources.sort_by(|a, b| b.1.cmp(&a.1).then(b.2.total_cmp(&a.2)));

    let mut current = meal.clone();
    for (index, _, _) in sources {
        if current.totals().get(quantity) <= max {
            break;
        }
        let original = current.foods[index].quantity;
        for step in REDUCTION_STEPS {
            let grams = round_to_5g(original * (1.0 - step));
            if grams < MIN_FOOD_GRAMS {
                continue;
            }
            let candidate = catalog.with_portion_quantity(&current, index, grams)?;
            if candidate.totals().get(quantity) <= max {
                debug!(
                    food = %candidate.foods[index].name,
                    from = original,
                    to = grams,
                    %quantity,
                    "reduced source"
                );
                current = candidate;
                break;
            }
        }
    }
    Ok(current)
}

fn remove_non_essential(
    catalog: &Catalog,
    meal: &ScaledMeal,
    max_carbs: f64,
    max_fat: f64,
) -> Result<ScaledMeal> {
    let carbs_over = meal.total_carbs > max_carbs;
    let fat_over = meal.total_fat > max_fat;

    let mut removable: Vec<(String, f64)> = Vec::new();
    for portion in &meal.foods {
        if catalog.food(&portion.name)?.has(FoodClass::NonEssential) {
            let impact = if carbs_over { portion.nutrients.carbs } else { 0.0 }
                + if fat_over { portion.nutrients.fat } else { 0.0 };
            removable.push((portion.name.clone(), impact));
        }
    }
    removable.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut current = meal.clone();
    for (name, _) in removable {
        if current.total_carbs <= max_carbs && current.total_fat <= max_fat {
            break;
        }
        debug!(food = %name, "dropping non-essential food");
        let foods = current.foods.into_iter().filter(|p| p.name != name).collect();
        current = ScaledMeal::from_portions(&current.id, current.category, &current.name, foods);
    }
    Ok(current)
}
