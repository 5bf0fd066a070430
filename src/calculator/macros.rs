use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculator::maintenance::MaintenanceBaseline;
use crate::calculator::{FAT_FLOOR_G, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Goal, UserProfile};

const FAT_CEILING_RATIO: f64 = 1.1;
const LOSS_CALORIE_RATIO: f64 = 0.85;
const GAIN_CALORIE_RATIO: f64 = 1.10;
const FIXED_CALORIE_DELTA: f64 = 300.0;
const MAX_CARB_SHARE: f64 = 0.5;
const LOSS_DEVIATION_LIMIT: f64 = 0.10;
const GAIN_PROTEIN_PER_KG_LEAN_PROFILE: f64 = 2.2;
const GAIN_PROTEIN_PER_KG: f64 = 2.0;

/// How the goal shifts maintenance calories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CalorieAdjustment {
    /// -15 % for loss, +10 % for gain.
    #[default]
    Percentage,
    /// -300 kcal for loss, +300 kcal for gain.
    Fixed,
}

impl CalorieAdjustment {
    pub fn apply(&self, maintenance: f64, goal: Goal) -> f64 {
        let adjusted = match (self, goal) {
            (_, Goal::Maintain) => maintenance,
            (CalorieAdjustment::Percentage, Goal::Loss) => maintenance * LOSS_CALORIE_RATIO,
            (CalorieAdjustment::Percentage, Goal::Gain) => maintenance * GAIN_CALORIE_RATIO,
            (CalorieAdjustment::Fixed, Goal::Loss) => maintenance - FIXED_CALORIE_DELTA,
            (CalorieAdjustment::Fixed, Goal::Gain) => maintenance + FIXED_CALORIE_DELTA,
        };
        adjusted.round()
    }
}

/// Goal-adjusted daily targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub bmr: f64,
    pub maintenance_calories: f64,
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub lean_mass_kg: f64,
}

/// Inputs for [`distribute_macros`].
///
/// `current_weight_kg` is required for the loss and gain formulas.
#[derive(Debug, Clone, Copy)]
pub struct MacroRequest<'a> {
    pub baseline: &'a MaintenanceBaseline,
    pub goal: Goal,
    pub activity: ActivityLevel,
    pub body_fat_pct: f64,
    pub current_weight_kg: Option<f64>,
    pub policy: CalorieAdjustment,
}

/// Goal-adjusted targets for a profile.
pub fn optimize_macronutrient_distribution(
    baseline: &MaintenanceBaseline,
    goal: Goal,
    profile: &UserProfile,
    policy: CalorieAdjustment,
) -> Result<NutritionTargets> {
    distribute_macros(&MacroRequest {
        baseline,
        goal,
        activity: profile.activity,
        body_fat_pct: profile.body_fat_pct,
        current_weight_kg: Some(profile.weight_kg),
        policy,
    })
}

pub fn distribute_macros(request: &MacroRequest<'_>) -> Result<NutritionTargets> {
    let baseline = request.baseline;
    let calories = request
        .policy
        .apply(baseline.maintenance_calories, request.goal);
    let fat_ceiling = baseline.reference_weight_kg * FAT_CEILING_RATIO;
    let bound_fat = |fat: f64| fat.min(fat_ceiling).max(FAT_FLOOR_G);

    let protein = match request.goal {
        Goal::Gain => {
            let weight = required_weight(request)?;
            let per_kg = if lean_profile(request.body_fat_pct) {
                GAIN_PROTEIN_PER_KG_LEAN_PROFILE
            } else {
                GAIN_PROTEIN_PER_KG
            };
            (weight * per_kg).round()
        }
        Goal::Loss | Goal::Maintain => baseline.protein_g,
    };

    let mut fat = bound_fat(baseline.fat_g);
    let carbs = match request.goal {
        Goal::Loss => {
            let weight = required_weight(request)?;
            let per_kg = if request.activity == ActivityLevel::High {
                2.5
            } else {
                2.0
            };
            let carbs = (weight * per_kg).round();
            let total = protein * KCAL_PER_G_PROTEIN + carbs * KCAL_PER_G_CARBS + fat * KCAL_PER_G_FAT;
            if calories > 0.0 && ((total - calories) / calories).abs() > LOSS_DEVIATION_LIMIT {
                let absorbed = (calories - protein * KCAL_PER_G_PROTEIN - carbs * KCAL_PER_G_CARBS)
                    / KCAL_PER_G_FAT;
                fat = bound_fat(absorbed);
                debug!(total, calories, fat, "loss targets off by more than 10%, fat adjusted");
            }
            carbs
        }
        Goal::Maintain | Goal::Gain => {
            let remaining = calories - protein * KCAL_PER_G_PROTEIN - fat * KCAL_PER_G_FAT;
            let carbs = (remaining / KCAL_PER_G_CARBS).max(0.0);
            let cap = calories * MAX_CARB_SHARE / KCAL_PER_G_CARBS;
            if carbs > cap {
                let freed = (carbs - cap) * KCAL_PER_G_CARBS;
                fat = (fat + freed / KCAL_PER_G_FAT).min(fat_ceiling.max(FAT_FLOOR_G));
                debug!(carbs, cap, fat, "carbs capped at half of calories");
                cap
            } else {
                carbs
            }
        }
    };

    Ok(NutritionTargets {
        bmr: baseline.bmr,
        maintenance_calories: baseline.maintenance_calories,
        calories,
        protein_g: protein,
        carbs_g: carbs.round(),
        fat_g: fat.round(),
        lean_mass_kg: baseline.lean_mass_kg,
    })
}

/// Whether a gaining profile is lean enough for the higher protein ratio:
/// lean share above 80 % under 20 % body fat, or above 73 % under 27 %.
pub fn lean_profile(body_fat_pct: f64) -> bool {
    let lean_share = 1.0 - body_fat_pct / 100.0;
    (lean_share > 0.8 && body_fat_pct < 20.0) || (lean_share > 0.73 && body_fat_pct < 27.0)
}

fn required_weight(request: &MacroRequest<'_>) -> Result<f64> {
    request
        .current_weight_kg
        .ok_or(PlannerError::MissingInput("current weight is required for this goal"))
}
