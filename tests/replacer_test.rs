use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;

use nutri_plan_rs::catalog::{Catalog, builtin_foods};
use nutri_plan_rs::models::{MealCategory, PredefinedMeal};
use nutri_plan_rs::planner::{Band, Compliance};
use nutri_plan_rs::replacer::{MealReplacer, ReplacementTier, Strategy, replace_meal};

const CHICKEN_BOWL: &[(&str, f64)] = &[
    ("Blanc de poulet", 150.0),
    ("Riz basmati cuit", 150.0),
    ("Brocolis", 200.0),
    ("Huile d'olive", 10.0),
];

const DOUBLE_CHICKEN_BOWL: &[(&str, f64)] = &[
    ("Blanc de poulet", 300.0),
    ("Riz basmati cuit", 300.0),
    ("Brocolis", 400.0),
    ("Huile d'olive", 20.0),
];

const HALF_CHICKEN_BOWL: &[(&str, f64)] = &[
    ("Blanc de poulet", 75.0),
    ("Riz basmati cuit", 75.0),
    ("Brocolis", 100.0),
    ("Huile d'olive", 5.0),
];

fn bowl() -> PredefinedMeal {
    PredefinedMeal::new("bowl", MealCategory::Lunch, "Bol de poulet", CHICKEN_BOWL)
}

fn catalog(extra: Vec<PredefinedMeal>, alternates: Vec<PredefinedMeal>) -> Catalog {
    let mut meals = vec![bowl()];
    meals.extend(extra);
    let mut alternatives = HashMap::new();
    if !alternates.is_empty() {
        alternatives.insert("Bol de poulet".to_string(), alternates);
    }
    Catalog::new(builtin_foods(), meals, alternatives)
}

#[test]
fn test_curated_alternate_is_tried_first() {
    let alternate = PredefinedMeal::new(
        "bowl-alt1",
        MealCategory::Lunch,
        "Grand bol de poulet",
        DOUBLE_CHICKEN_BOWL,
    );
    let half = PredefinedMeal::new("half", MealCategory::Lunch, "Petit bol", HALF_CHICKEN_BOWL);
    let catalog = catalog(vec![half], vec![alternate]);
    let current = catalog.base_meal(&bowl()).unwrap();

    let outcome = MealReplacer::new(&catalog)
        .replace_with_report(&current, &mut StdRng::seed_from_u64(1));

    assert_eq!(outcome.tier, Some(ReplacementTier::Alternate));
    assert_eq!(outcome.strategy, Some(Strategy::Calories));
    assert_eq!(outcome.alternates_tried, 1);
    assert_eq!(outcome.catalog_tried, 0);

    let meal = outcome.meal.unwrap();
    assert_eq!(meal.id, "bowl-alt1");
    let grams: Vec<f64> = meal.foods.iter().map(|p| p.quantity).collect();
    assert_eq!(grams, vec![150.0, 150.0, 200.0, 10.0]);
}

#[test]
fn test_catalog_fallback_within_strict_band() {
    let half = PredefinedMeal::new("half", MealCategory::Lunch, "Petit bol", HALF_CHICKEN_BOWL);
    let catalog = catalog(vec![half], Vec::new());
    let current = catalog.base_meal(&bowl()).unwrap();

    let outcome = MealReplacer::new(&catalog)
        .replace_with_report(&current, &mut StdRng::seed_from_u64(1));

    assert_eq!(outcome.tier, Some(ReplacementTier::Catalog));
    assert_eq!(outcome.alternates_tried, 0);
    assert_eq!(outcome.catalog_tried, 1);

    let meal = outcome.meal.unwrap();
    assert_eq!(meal.id, "half");
    let compliance = Compliance::against(&meal.totals(), &current.totals());
    assert!(compliance.within(Band::STRICT), "{}", compliance.summary());
}

#[test]
fn test_failed_alternates_fall_back_to_catalog() {
    let unfit = PredefinedMeal::new(
        "bowl-alt1",
        MealCategory::Lunch,
        "Huile seule",
        &[("Huile d'olive", 10.0)],
    );
    let half = PredefinedMeal::new("half", MealCategory::Lunch, "Petit bol", HALF_CHICKEN_BOWL);
    let catalog = catalog(vec![half], vec![unfit]);
    let current = catalog.base_meal(&bowl()).unwrap();

    let outcome = MealReplacer::new(&catalog)
        .replace_with_report(&current, &mut StdRng::seed_from_u64(4));

    assert_eq!(outcome.alternates_tried, 1);
    assert_eq!(outcome.catalog_tried, 1);
    assert_eq!(outcome.tier, Some(ReplacementTier::Catalog));

    let meal = outcome.meal.unwrap();
    assert_eq!(meal.id, "half");
    let compliance = Compliance::against(&meal.totals(), &current.totals());
    assert!(compliance.within(Band::STRICT), "{}", compliance.summary());
}

#[test]
fn test_unfit_candidates_yield_none() {
    let oil = PredefinedMeal::new(
        "oil",
        MealCategory::Lunch,
        "Huile seule",
        &[("Huile d'olive", 10.0)],
    );
    let snack = PredefinedMeal::new("snack", MealCategory::Snack, "Snack", CHICKEN_BOWL);
    let catalog = catalog(vec![oil, snack], Vec::new());
    let current = catalog.base_meal(&bowl()).unwrap();

    let outcome = MealReplacer::new(&catalog)
        .replace_with_report(&current, &mut StdRng::seed_from_u64(1));

    assert!(outcome.meal.is_none());
    assert!(outcome.tier.is_none());
    // Meals of other categories are never considered.
    assert_eq!(outcome.catalog_tried, 1);
}

#[test]
fn test_exhausted_catalog_yields_none() {
    let catalog = catalog(Vec::new(), Vec::new());
    let current = catalog.base_meal(&bowl()).unwrap();

    let outcome = MealReplacer::new(&catalog)
        .replace_with_report(&current, &mut StdRng::seed_from_u64(1));

    assert!(outcome.meal.is_none());
    assert_eq!(outcome.alternates_tried, 0);
    assert_eq!(outcome.catalog_tried, 0);
}

#[test]
fn test_builtin_replacements_keep_category_and_band() {
    let catalog = Catalog::builtin();
    let replacer = MealReplacer::new(catalog);

    for (seed, base) in catalog.meals().iter().enumerate() {
        let current = catalog.base_meal(base).unwrap();
        let outcome = replacer.replace_with_report(&current, &mut StdRng::seed_from_u64(seed as u64));

        if catalog.alternatives_for(&current.name).is_empty() {
            assert_eq!(outcome.alternates_tried, 0, "{}", current.name);
        }

        let Some(meal) = outcome.meal else { continue };
        assert_eq!(meal.category, current.category);
        assert_ne!(meal.id, current.id);

        let compliance = Compliance::against(&meal.totals(), &current.totals());
        let band = match outcome.tier {
            Some(ReplacementTier::Alternate) => Band::FLEXIBLE,
            _ => Band::STRICT,
        };
        assert!(compliance.within(band), "{} -> {}: {}", current.name, meal.name, compliance.summary());
    }
}

#[test]
fn test_replace_meal_uses_builtin_catalog() {
    let catalog = Catalog::builtin();
    let base = catalog.meal_by_id("dej1").unwrap();
    let current = catalog.base_meal(base).unwrap();

    for seed in 0..5 {
        if let Some(meal) = replace_meal(&current, &mut StdRng::seed_from_u64(seed)) {
            assert_eq!(meal.category, MealCategory::Lunch);
            assert_ne!(meal.id, "dej1");
        }
    }
    // Same seed, same result.
    let a = replace_meal(&current, &mut StdRng::seed_from_u64(9));
    let b = replace_meal(&current, &mut StdRng::seed_from_u64(9));
    assert_eq!(a, b);
}
