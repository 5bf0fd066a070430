pub mod bmi;
pub mod macros;
pub mod maintenance;
pub mod metabolism;

pub use bmi::{BmiCategory, BmiResult, HEALTHY_BMI_RANGE, calculate_bmi};

pub use macros::{
    CalorieAdjustment, MacroRequest, NutritionTargets, distribute_macros, lean_profile,
    optimize_macronutrient_distribution,
};
pub use maintenance::{
    MaintenanceBaseline, calculate_maintenance_needs, lean_mass, reference_weight,
};
pub use metabolism::{MetabolismEstimate, estimate_metabolism, mifflin_st_jeor};

use crate::error::Result;
use crate::models::UserProfile;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Minimum daily fat regardless of body size.
pub const FAT_FLOOR_G: f64 = 50.0;

/// Baseline and goal targets in one call, using the profile's own goal.
pub fn targets_for(profile: &UserProfile, policy: CalorieAdjustment) -> Result<NutritionTargets> {
    let baseline = calculate_maintenance_needs(profile);
    optimize_macronutrient_distribution(&baseline, profile.goal, profile, policy)
}

/// Reference figures shown next to the targets: BMI and a Mifflin-St Jeor estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub bmi: BmiResult,
    pub metabolism: MetabolismEstimate,
}

pub fn body_metrics(profile: &UserProfile) -> Result<BodyMetrics> {
    Ok(BodyMetrics {
        bmi: calculate_bmi(profile.weight_kg, profile.height_cm)?,
        metabolism: estimate_metabolism(profile),
    })
}
