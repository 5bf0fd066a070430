use serde::{Deserialize, Serialize};

use crate::calculator::{FAT_FLOOR_G, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN};
use crate::models::{UserProfile, round1};

/// Katch-McArdle intercept and slope.
const BMR_INTERCEPT: f64 = 370.0;
const BMR_PER_KG_LEAN: f64 = 21.6;

/// BMI used to derive the reference weight.
const REFERENCE_BMI: f64 = 23.0;

const BASELINE_PROTEIN_PER_KG_LEAN: f64 = 2.0;

/// Goal-independent energy needs derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceBaseline {
    pub lean_mass_kg: f64,
    pub bmr: f64,
    pub maintenance_calories: f64,
    /// Weight at the reference BMI for this height; drives the fat target.
    pub reference_weight_kg: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

pub fn lean_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    weight_kg * (1.0 - body_fat_pct / 100.0)
}

pub fn reference_weight(height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    REFERENCE_BMI * height_m * height_m
}

/// BMR, maintenance calories and baseline macros for a profile.
pub fn calculate_maintenance_needs(profile: &UserProfile) -> MaintenanceBaseline {
    let lean = lean_mass(profile.weight_kg, profile.body_fat_pct);
    let bmr = (BMR_INTERCEPT + BMR_PER_KG_LEAN * lean).round();
    let maintenance_calories = (bmr * profile.activity.multiplier()).round();
    let reference_weight_kg = reference_weight(profile.height_cm);

    let protein_g = (lean * BASELINE_PROTEIN_PER_KG_LEAN).round();
    let fat_g = reference_weight_kg.max(FAT_FLOOR_G).round();
    let carbs_g = ((maintenance_calories
        - protein_g * KCAL_PER_G_PROTEIN
        - fat_g * KCAL_PER_G_FAT)
        / KCAL_PER_G_CARBS)
        .max(0.0)
        .round();

    MaintenanceBaseline {
        lean_mass_kg: round1(lean),
        bmr,
        maintenance_calories,
        reference_weight_kg,
        protein_g,
        fat_g,
        carbs_g,
    }
}
