use rand::SeedableRng;
use rand::rngs::StdRng;
use tempfile::TempDir;

use nutri_plan_rs::PlannerError;
use nutri_plan_rs::models::{ActivityLevel, Goal, MealStructure, Sex, UserProfile};
use nutri_plan_rs::planner::{Band, Compliance, GeneratorConfig, PlanRequest};
use nutri_plan_rs::state::{DietManager, JsonFileStore, MemoryStore};

fn profile() -> UserProfile {
    UserProfile {
        sex: Sex::Female,
        weight_kg: 62.0,
        height_cm: 166.0,
        age: 29,
        activity: ActivityLevel::Moderate,
        body_fat_pct: 25.0,
        goal: Goal::Maintain,
        structure: MealStructure::default(),
    }
}

/// A band every plan falls into, so generation always succeeds.
fn lenient() -> GeneratorConfig {
    GeneratorConfig {
        band: Band {
            low: 0.0,
            high: 10_000.0,
        },
        ..GeneratorConfig::default()
    }
}

fn meal_ids(manager: &DietManager<'_, impl nutri_plan_rs::state::DocumentStore>) -> Vec<String> {
    manager
        .current_diet()
        .unwrap()
        .map(|d| d.plan.meals.into_iter().map(|m| m.id).collect())
        .unwrap_or_default()
}

#[test]
fn test_missing_profile() {
    let manager = DietManager::new(MemoryStore::new(), "nobody");
    assert!(matches!(
        manager.load_profile(),
        Err(PlannerError::ProfileNotFound(ref id)) if id == "nobody"
    ));
    assert!(manager.targets().is_err());
    assert!(manager.current_diet().unwrap().is_none());
}

#[test]
fn test_invalid_profile_is_rejected() {
    let mut manager = DietManager::new(MemoryStore::new(), "u1");
    let mut bad = profile();
    bad.age = 5;
    assert!(matches!(
        manager.save_profile(&bad),
        Err(PlannerError::InvalidInput(_))
    ));
    assert!(manager.store().is_empty());
}

#[test]
fn test_profile_updates_merge() {
    let mut manager = DietManager::new(MemoryStore::new(), "u1");
    manager.save_profile(&profile()).unwrap();

    let mut lighter = profile();
    lighter.weight_kg = 60.0;
    manager.save_profile(&lighter).unwrap();

    let loaded = manager.load_profile().unwrap();
    assert_eq!(loaded, lighter);
    assert_eq!(manager.store().len(), 1);
}

#[test]
fn test_failed_plan_is_not_saved() {
    let config = GeneratorConfig {
        max_attempts: 0,
        ..GeneratorConfig::default()
    };
    let mut manager =
        DietManager::new(MemoryStore::new(), "u1").with_generator_config(config);
    manager.save_profile(&profile()).unwrap();

    let generation = manager.generate_diet(&mut StdRng::seed_from_u64(1)).unwrap();
    assert!(!generation.saved);
    assert!(!generation.diet.plan.success);
    assert!(generation.diet.plan.is_empty());
    assert!(manager.current_diet().unwrap().is_none());
}

#[test]
fn test_generate_replace_regenerate() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut manager = DietManager::new(MemoryStore::new(), "u1").with_generator_config(lenient());
    manager.save_profile(&profile()).unwrap();

    let generation = manager.generate_diet(&mut rng).unwrap();
    assert!(generation.saved);
    assert!(generation.diet.auto_generated);
    assert_eq!(generation.diet.plan.meals.len(), 4);
    assert_eq!(generation.diet.structure, MealStructure::default());

    let before = meal_ids(&manager);
    assert_eq!(
        before,
        generation
            .diet
            .plan
            .meals
            .iter()
            .map(|m| m.id.clone())
            .collect::<Vec<_>>()
    );

    // ensure_diet returns the stored diet untouched
    let ensured = manager.ensure_diet(&mut rng).unwrap();
    assert_eq!(ensured.generated_at, generation.diet.generated_at);

    if let Some(updated) = manager.replace_meal(1, &mut rng).unwrap() {
        let after = meal_ids(&manager);
        assert_ne!(after[1], before[1]);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2..], before[2..]);
        assert_eq!(updated.plan.meals[1].category, generation.diet.plan.meals[1].category);

        let summed: f64 = updated.plan.meals.iter().map(|m| m.total_calories).sum();
        assert!((summed - updated.plan.total_calories).abs() < 0.1);
    } else {
        assert_eq!(meal_ids(&manager), before);
    }

    assert!(matches!(
        manager.replace_meal(9, &mut rng),
        Err(PlannerError::SlotOutOfRange { slot: 9, len: 4 })
    ));

    let regenerated = manager.regenerate_diet(&mut rng).unwrap();
    assert!(regenerated.saved);
    assert!(regenerated.diet.generated_at >= generation.diet.generated_at);
    assert_eq!(meal_ids(&manager).len(), 4);
}

#[test]
fn test_replace_without_diet() {
    let mut manager = DietManager::new(MemoryStore::new(), "u1");
    manager.save_profile(&profile()).unwrap();
    assert!(matches!(
        manager.replace_meal(0, &mut StdRng::seed_from_u64(1)),
        Err(PlannerError::DietNotFound(_))
    ));
}

#[test]
fn test_file_store_survives_restart() {
    let dir = TempDir::new().unwrap();
    let ids = {
        let mut manager =
            DietManager::new(JsonFileStore::new(dir.path()), "carol").with_generator_config(lenient());
        manager.save_profile(&profile()).unwrap();
        manager.generate_diet(&mut StdRng::seed_from_u64(5)).unwrap();
        meal_ids(&manager)
    };

    assert!(dir.path().join("carol").join("profile.json").exists());
    assert!(dir.path().join("carol").join("diet.json").exists());

    let manager = DietManager::new(JsonFileStore::new(dir.path()), "carol");
    assert_eq!(manager.load_profile().unwrap(), profile());
    assert_eq!(meal_ids(&manager), ids);
    assert!(!ids.is_empty());
}

#[test]
fn test_file_store_rejects_bad_user_id() {
    let dir = TempDir::new().unwrap();
    let mut manager = DietManager::new(JsonFileStore::new(dir.path()), "../etc");
    assert!(matches!(
        manager.save_profile(&profile()),
        Err(PlannerError::InvalidInput(_))
    ));
}

#[test]
fn test_replacement_revalidates_success() {
    let dir = TempDir::new().unwrap();
    {
        let mut manager =
            DietManager::new(JsonFileStore::new(dir.path()), "dana").with_generator_config(lenient());
        manager.save_profile(&profile()).unwrap();
        let generation = manager.generate_diet(&mut StdRng::seed_from_u64(8)).unwrap();
        assert!(generation.diet.plan.success);
    }

    // Same stored plan, judged against the strict band from here on
    let mut manager = DietManager::new(JsonFileStore::new(dir.path()), "dana");
    let request = PlanRequest::new(&manager.targets().unwrap(), profile().structure);

    for seed in 0..4 {
        let Some(updated) = manager
            .replace_meal(0, &mut StdRng::seed_from_u64(seed))
            .unwrap()
        else {
            continue;
        };
        let compliance = Compliance::against(&updated.plan.totals(), &request.targets);
        assert_eq!(updated.plan.success, compliance.within(Band::STRICT));

        let stored = manager.current_diet().unwrap().unwrap();
        assert_eq!(stored.plan.success, updated.plan.success);
        assert_eq!(stored.plan.validation_message, updated.plan.validation_message);
    }
}
