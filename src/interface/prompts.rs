use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{PlannerError, Result};
use crate::models::profile::{
    AGE_RANGE, HEIGHT_RANGE_CM, MAX_MEALS_PER_DAY, MAX_SNACKS_PER_DAY, WEIGHT_RANGE_KG,
};
use crate::models::{ActivityLevel, Goal, MealStructure, ScaledMeal, Sex, UserProfile};

/// Minimum similarity for a fuzzy meal-name match.
const MATCH_THRESHOLD: f64 = 0.7;

fn prompt_in_range(prompt: &str, default: f64, (min, max): (f64, f64)) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .validate_with(|s: &String| -> std::result::Result<(), String> {
            match s.trim().replace(',', ".").parse::<f64>() {
                Ok(v) if v >= min && v <= max => Ok(()),
                Ok(_) => Err(format!("Enter a value between {} and {}", min, max)),
                Err(_) => Err("Invalid number".to_string()),
            }
        })
        .interact_text()?;

    input
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

pub fn prompt_sex() -> Result<Sex> {
    let selection = Select::new()
        .with_prompt("Sex")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;
    Ok(if selection == 0 { Sex::Male } else { Sex::Female })
}

pub fn prompt_activity() -> Result<ActivityLevel> {
    let options = [
        "Sedentary (desk job, little exercise)",
        "Light (1-3 sessions per week)",
        "Moderate (3-5 sessions per week)",
        "High (6+ sessions per week or physical job)",
    ];
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(1)
        .interact()?;
    Ok(ActivityLevel::ALL[selection.min(ActivityLevel::ALL.len() - 1)])
}

/// Body-fat estimate chosen from the sex-specific presets.
pub fn prompt_body_fat(sex: Sex) -> Result<f64> {
    let presets = sex.body_fat_options();
    let options: Vec<String> = presets.iter().map(|bf| format!("~{:.0}%", bf)).collect();
    let selection = Select::new()
        .with_prompt("Which silhouette is closest to yours? (estimated body fat)")
        .items(&options)
        .default(2)
        .interact()?;
    Ok(presets[selection.min(presets.len() - 1)])
}

pub fn prompt_goal() -> Result<Goal> {
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&["Lose weight", "Maintain", "Gain weight"])
        .default(1)
        .interact()?;
    Ok(match selection {
        0 => Goal::Loss,
        2 => Goal::Gain,
        _ => Goal::Maintain,
    })
}

pub fn prompt_meal_structure() -> Result<MealStructure> {
    let defaults = MealStructure::default();
    let meals = prompt_in_range(
        "Main meals per day",
        defaults.meals_per_day as f64,
        (1.0, MAX_MEALS_PER_DAY as f64),
    )?;
    let snacks = prompt_in_range(
        "Snacks per day",
        defaults.snacks_per_day as f64,
        (0.0, MAX_SNACKS_PER_DAY as f64),
    )?;
    Ok(MealStructure {
        meals_per_day: meals.round() as u32,
        snacks_per_day: snacks.round() as u32,
    })
}

/// Run the onboarding questionnaire.
pub fn collect_profile() -> Result<UserProfile> {
    let sex = prompt_sex()?;
    let age = prompt_in_range("Age", 30.0, (AGE_RANGE.0 as f64, AGE_RANGE.1 as f64))?;
    let weight_kg = prompt_in_range("Weight (kg)", 70.0, WEIGHT_RANGE_KG)?;
    let height_cm = prompt_in_range("Height (cm)", 170.0, HEIGHT_RANGE_CM)?;
    let activity = prompt_activity()?;
    let body_fat_pct = prompt_body_fat(sex)?;
    let goal = prompt_goal()?;
    let structure = prompt_meal_structure()?;

    let profile = UserProfile {
        sex,
        weight_kg,
        height_cm,
        age: age.round() as u32,
        activity,
        body_fat_pct,
        goal,
        structure,
    };
    profile.validate()?;
    Ok(profile)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Meals whose name resembles `query`, best first.
pub fn match_meal_name(meals: &[ScaledMeal], query: &str) -> Vec<(usize, f64)> {
    let query = query.trim().to_lowercase();
    let mut candidates: Vec<(usize, f64)> = meals
        .iter()
        .enumerate()
        .map(|(i, m)| (i, jaro_winkler(&m.name.to_lowercase(), &query)))
        .filter(|(_, score)| *score > MATCH_THRESHOLD)
        .collect();
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates
}

/// Resolve a 1-based slot number or a (fuzzy) meal name to a slot index.
pub fn resolve_meal_slot(meals: &[ScaledMeal], query: &str) -> Result<usize> {
    if let Ok(number) = query.trim().parse::<usize>() {
        if number == 0 || number > meals.len() {
            return Err(PlannerError::SlotOutOfRange {
                slot: number,
                len: meals.len(),
            });
        }
        return Ok(number - 1);
    }

    if let Some(i) = meals
        .iter()
        .position(|m| m.name.to_lowercase() == query.trim().to_lowercase())
    {
        return Ok(i);
    }

    let candidates = match_meal_name(meals, query);
    match candidates.as_slice() {
        [] => Err(PlannerError::InvalidInput(format!(
            "No meal matching '{}'",
            query
        ))),
        [(index, _)] => {
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", meals[*index].name), true)?;
            if confirm {
                Ok(*index)
            } else {
                Err(PlannerError::InvalidInput("No meal selected".to_string()))
            }
        }
        many => {
            let options: Vec<String> = many
                .iter()
                .take(5)
                .map(|(i, _)| meals[*i].name.clone())
                .collect();
            let mut selection_options = options.clone();
            selection_options.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&selection_options)
                .default(0)
                .interact()?;

            if selection < options.len() {
                Ok(many[selection].0)
            } else {
                Err(PlannerError::InvalidInput("No meal selected".to_string()))
            }
        }
    }
}
