use crate::calculator::{BodyMetrics, HEALTHY_BMI_RANGE, MaintenanceBaseline, NutritionTargets};
use crate::models::{MealPlanResult, ScaledMeal};
use crate::planner::{Compliance, Correction, GenerationReport};

/// Display baseline needs and goal-adjusted targets.
pub fn display_targets(
    baseline: &MaintenanceBaseline,
    targets: &NutritionTargets,
    metrics: &BodyMetrics,
) {
    println!();
    println!("=== Nutrition Targets ===");
    println!();
    println!("Lean mass:            {:.1} kg", baseline.lean_mass_kg);
    println!("BMR:                  {:.0} kcal", baseline.bmr);
    println!("Maintenance:          {:.0} kcal", baseline.maintenance_calories);
    println!("Reference weight:     {:.1} kg", baseline.reference_weight_kg);
    println!();
    println!("Daily calories:       {:.0} kcal", targets.calories);
    println!("Protein:              {:.0} g", targets.protein_g);
    println!("Carbs:                {:.0} g", targets.carbs_g);
    println!("Fat:                  {:.0} g", targets.fat_g);
    println!();

    println!("--- Reference ---");
    println!(
        "BMI:                  {:.1} ({}; healthy {:.1}-{:.1})",
        metrics.bmi.bmi, metrics.bmi.category, HEALTHY_BMI_RANGE.0, HEALTHY_BMI_RANGE.1
    );
    for tip in metrics.bmi.category.recommendations() {
        println!("  - {}", tip);
    }
    let estimate = &metrics.metabolism;
    println!("Mifflin-St Jeor BMR:  {:.0} kcal", estimate.bmr);
    println!("  maintenance         {:.0} kcal", estimate.maintenance_calories);
    println!("  loss (-500)         {:.0} kcal", estimate.weight_loss_calories);
    println!("  gain (+500)         {:.0} kcal", estimate.weight_gain_calories);
    println!();
}

pub fn display_meal(index: usize, meal: &ScaledMeal) {
    println!(
        "{:>2}. [{}] {} - {:.0} kcal | P {:.1} g  C {:.1} g  F {:.1} g",
        index + 1,
        meal.category,
        meal.name,
        meal.total_calories,
        meal.total_protein,
        meal.total_carbs,
        meal.total_fat
    );

    let width = meal.foods.iter().map(|p| p.name.len()).max().unwrap_or(10);
    for portion in &meal.foods {
        let capped = if portion.clamp.is_some() { "  (capped)" } else { "" };
        println!(
            "      {:<width$}  {:>28}  {:>5.0} kcal{}",
            portion.name,
            portion.display_quantity,
            portion.nutrients.calories,
            capped,
            width = width
        );
    }
}

/// Display a day plan with per-meal breakdown and day totals.
pub fn display_plan(plan: &MealPlanResult, targets: Option<&NutritionTargets>) {
    if plan.is_empty() {
        println!("No meal plan available: {}", plan.validation_message);
        return;
    }

    println!();
    println!("=== Meal Plan ===");
    println!();
    for (i, meal) in plan.meals.iter().enumerate() {
        display_meal(i, meal);
        println!();
    }

    println!("--- Day Totals ---");
    println!(
        "Calories: {:.0} kcal | Protein: {:.1} g | Carbs: {:.1} g | Fat: {:.1} g",
        plan.total_calories, plan.total_protein, plan.total_carbs, plan.total_fat
    );
    if let Some(targets) = targets {
        let target = crate::models::Nutrients::new(
            targets.calories,
            targets.protein_g,
            targets.carbs_g,
            targets.fat_g,
            0.0,
        );
        let compliance = Compliance::against(&plan.totals(), &target);
        println!("Versus targets: {}", compliance.summary());
    }

    let status = if plan.success { "OK" } else { "WARNING" };
    println!("[{}] {}", status, plan.validation_message);
    println!();
}

/// Summary of generation attempts, shown in verbose mode.
pub fn display_generation_report(report: &GenerationReport) {
    println!("--- Generation Report ---");
    for attempt in &report.attempts {
        match &attempt.failure {
            Some(reason) => println!("Attempt {}: failed ({})", attempt.attempt + 1, reason),
            None => {
                let adjusted = attempt
                    .corrections
                    .iter()
                    .filter(|c| matches!(c, Correction::Adjusted { .. }))
                    .count();
                let replaced = attempt.corrections.len() - adjusted;
                println!(
                    "Attempt {}: score {:.1}, {} iterations, {} adjustments, {} swaps{}",
                    attempt.attempt + 1,
                    attempt.score,
                    attempt.iterations,
                    adjusted,
                    replaced,
                    if attempt.compliant { " (within band)" } else { "" }
                );
            }
        }
    }
    if report.clamp_drift.calories > 0.0 {
        println!(
            "Unit caps removed {:.0} kcal{}",
            report.clamp_drift.calories,
            if report.met_band_before_clamp {
                " (plan was within band before caps)"
            } else {
                ""
            }
        );
    }
    println!();
}
