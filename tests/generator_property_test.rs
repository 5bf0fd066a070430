use rand::SeedableRng;
use rand::rngs::StdRng;

use nutri_plan_rs::calculator::{CalorieAdjustment, targets_for};
use nutri_plan_rs::catalog::Catalog;
use nutri_plan_rs::models::{
    ActivityLevel, Goal, MealCategory, MealPlanResult, MealStructure, Sex, UserProfile, day_totals,
};
use nutri_plan_rs::planner::{
    Band, Compliance, GeneratorConfig, MealPlanGenerator, PlanRequest, generate_meal_plan,
};

fn profile(sex: Sex, weight: f64, goal: Goal, structure: MealStructure) -> UserProfile {
    UserProfile {
        sex,
        weight_kg: weight,
        height_cm: 172.0,
        age: 35,
        activity: ActivityLevel::Light,
        body_fat_pct: 22.0,
        goal,
        structure,
    }
}

fn structures() -> Vec<MealStructure> {
    vec![
        MealStructure::default(),
        MealStructure {
            meals_per_day: 4,
            snacks_per_day: 2,
        },
        MealStructure {
            meals_per_day: 2,
            snacks_per_day: 0,
        },
    ]
}

fn check_plan_invariants(plan: &MealPlanResult, request: &PlanRequest) {
    let catalog = Catalog::builtin();
    let expected_slots = (request.meals_per_day + request.snacks_per_day) as usize;
    assert_eq!(plan.meals.len(), expected_slots);

    for (slot, meal) in plan.meals.iter().enumerate() {
        let expected_category = if slot < request.meals_per_day as usize {
            MealCategory::for_main_slot(slot)
        } else {
            MealCategory::Snack
        };
        assert_eq!(meal.category, expected_category, "slot {}", slot);

        for portion in &meal.foods {
            assert!(portion.quantity >= 0.0);
            assert!(
                (portion.quantity / 5.0).fract().abs() < 1e-9,
                "{} at {} g is not a multiple of 5",
                portion.name,
                portion.quantity
            );
            let food = catalog.food(&portion.name).unwrap();
            if let Some((_, cap)) = food.cap() {
                assert!(portion.quantity <= cap, "{} exceeds its cap", portion.name);
            }
        }

        let portions: f64 = meal.foods.iter().map(|p| p.nutrients.calories).sum();
        assert!((portions - meal.total_calories).abs() <= 0.5 + 1e-9);
    }

    let totals = day_totals(&plan.meals);
    assert!((totals.calories - plan.total_calories).abs() < 1e-6);
    assert!((totals.protein - plan.total_protein).abs() < 1e-6);
    assert!((totals.carbs - plan.total_carbs).abs() < 1e-6);
    assert!((totals.fat - plan.total_fat).abs() < 1e-6);

    if plan.success {
        let compliance = Compliance::against(&plan.totals(), &request.targets);
        assert!(compliance.within(Band::STRICT), "{}", compliance.summary());
    }
}

#[test]
fn test_invariants_across_seeds_and_profiles() {
    let mut successes = 0;
    let mut runs = 0;

    for structure in structures() {
        for (sex, weight, goal) in [
            (Sex::Male, 80.0, Goal::Maintain),
            (Sex::Female, 60.0, Goal::Loss),
            (Sex::Male, 70.0, Goal::Gain),
        ] {
            let p = profile(sex, weight, goal, structure);
            let targets = targets_for(&p, CalorieAdjustment::Percentage).unwrap();
            let request = PlanRequest::new(&targets, structure);

            for seed in 0..8 {
                let mut rng = StdRng::seed_from_u64(seed);
                let plan = generate_meal_plan(&targets, structure, &mut rng);
                check_plan_invariants(&plan, &request);
                runs += 1;
                if plan.success {
                    successes += 1;
                }
            }
        }
    }

    assert_eq!(runs, 72);
    // Failures are legitimate, but a working loop should land most plans in band.
    assert!(successes > 0);
}

#[test]
fn test_same_seed_same_plan() {
    let structure = MealStructure::default();
    let p = profile(Sex::Female, 65.0, Goal::Maintain, structure);
    let targets = targets_for(&p, CalorieAdjustment::Percentage).unwrap();

    let a = generate_meal_plan(&targets, structure, &mut StdRng::seed_from_u64(42));
    let b = generate_meal_plan(&targets, structure, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}

#[test]
fn test_report_matches_plan() {
    let structure = MealStructure::default();
    let p = profile(Sex::Male, 75.0, Goal::Maintain, structure);
    let targets = targets_for(&p, CalorieAdjustment::Percentage).unwrap();
    let request = PlanRequest::new(&targets, structure);

    let generator = MealPlanGenerator::new(Catalog::builtin());
    let outcome = generator.generate_with_report(&request, &mut StdRng::seed_from_u64(3));

    assert!(!outcome.report.attempts.is_empty());
    assert!(outcome.report.attempts.len() <= GeneratorConfig::default().max_attempts);
    let chosen = outcome.report.chosen_attempt.unwrap();
    let attempt = &outcome.report.attempts[chosen];
    assert_eq!(attempt.compliant, outcome.plan.success);
    assert!(attempt.iterations <= GeneratorConfig::default().max_iterations);

    if outcome.plan.success {
        // A compliant attempt ends the search.
        assert_eq!(chosen, outcome.report.attempts.len() - 1);
    }
}

#[test]
fn test_no_slots_fails_cleanly() {
    let structure = MealStructure {
        meals_per_day: 0,
        snacks_per_day: 0,
    };
    let p = profile(Sex::Male, 75.0, Goal::Maintain, MealStructure::default());
    let targets = targets_for(&p, CalorieAdjustment::Percentage).unwrap();
    let plan = generate_meal_plan(&targets, structure, &mut StdRng::seed_from_u64(1));

    assert!(!plan.success);
    assert!(plan.is_empty());
    assert_eq!(plan.total_calories, 0.0);
}
