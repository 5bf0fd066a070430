use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::MealPlanResult;

/// One CSV row: a portion within a meal slot.
#[derive(Debug, Serialize)]
struct PortionRow<'a> {
    slot: usize,
    category: &'a str,
    meal: &'a str,
    food: &'a str,
    grams: f64,
    display: &'a str,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
}

/// Write the plan as CSV, one row per portion.
pub fn write_plan_csv<W: Write>(plan: &MealPlanResult, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for (slot, meal) in plan.meals.iter().enumerate() {
        for portion in &meal.foods {
            csv.serialize(PortionRow {
                slot: slot + 1,
                category: meal.category.label(),
                meal: &meal.name,
                food: &portion.name,
                grams: portion.quantity,
                display: &portion.display_quantity,
                calories: portion.nutrients.calories,
                protein: portion.nutrients.protein,
                carbs: portion.nutrients.carbs,
                fat: portion.nutrients.fat,
                fiber: portion.nutrients.fiber,
            })?;
        }
    }
    csv.flush()?;
    Ok(())
}

pub fn export_plan_csv<P: AsRef<Path>>(plan: &MealPlanResult, path: P) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(plan, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use tempfile::NamedTempFile;

    #[test]
    fn test_one_row_per_portion() {
        let catalog = Catalog::builtin();
        let meal = catalog.base_meal(catalog.meal_by_id("col1").unwrap()).unwrap();
        let plan = MealPlanResult::new(vec![meal], true, String::new());

        let mut buffer = Vec::new();
        write_plan_csv(&plan, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("slot,category,meal,food,grams"));
        assert!(lines[1].contains("Pomme"));
        assert!(lines[2].contains("Amandes"));
    }

    #[test]
    fn test_export_to_file() {
        let catalog = Catalog::builtin();
        let meal = catalog.base_meal(catalog.meal_by_id("dej1").unwrap()).unwrap();
        let plan = MealPlanResult::new(vec![meal], true, String::new());

        let file = NamedTempFile::new().unwrap();
        export_plan_csv(&plan, file.path()).unwrap();

        let mut reader = csv::Reader::from_path(file.path()).unwrap();
        assert_eq!(reader.records().count(), 5);
    }
}
