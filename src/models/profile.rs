use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlannerError, Result};

pub const AGE_RANGE: (u32, u32) = (16, 120);
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 300.0);
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 250.0);
pub const BODY_FAT_RANGE: (f64, f64) = (3.0, 60.0);
pub const MAX_MEALS_PER_DAY: u32 = 5;
pub const MAX_SNACKS_PER_DAY: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "homme")]
    Male,
    #[serde(rename = "femme")]
    Female,
}

impl Sex {
    /// Body-fat estimates offered during onboarding.
    pub fn body_fat_options(&self) -> &'static [f64] {
        match self {
            Sex::Male => &[11.0, 14.0, 18.0, 26.0, 35.0],
            Sex::Female => &[17.0, 20.0, 25.0, 32.0, 38.0],
        }
    }
}

/// Ordered activity level. Unknown labels fall back to `Sedentary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    High,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::High,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sédentaire",
            ActivityLevel::Light => "léger",
            ActivityLevel::Moderate => "modéré",
            ActivityLevel::High => "élevé",
        }
    }

    /// Parse a stored or typed label.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "sédentaire" | "sedentaire" | "sedentary" => ActivityLevel::Sedentary,
            "léger" | "leger" | "light" | "légèrement actif" => ActivityLevel::Light,
            "modéré" | "modere" | "moderate" | "modérément actif" => ActivityLevel::Moderate,
            "élevé" | "eleve" | "high" | "très actif" | "extrêmement actif" => {
                ActivityLevel::High
            }
            other => {
                debug!(label = other, "unknown activity level, using sedentary");
                ActivityLevel::Sedentary
            }
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        ActivityLevel::from_label(&value)
    }
}

impl From<ActivityLevel> for String {
    fn from(value: ActivityLevel) -> Self {
        value.label().to_string()
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    #[serde(rename = "perte")]
    Loss,
    #[serde(rename = "maintien")]
    Maintain,
    #[serde(rename = "prise")]
    Gain,
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Goal::Loss => "weight loss",
            Goal::Maintain => "maintenance",
            Goal::Gain => "weight gain",
        };
        f.write_str(label)
    }
}

fn default_meals() -> u32 {
    3
}

fn default_snacks() -> u32 {
    1
}

/// How many main meals and snacks a day should hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealStructure {
    #[serde(rename = "repasParJour", default = "default_meals")]
    pub meals_per_day: u32,

    #[serde(rename = "collationsParJour", default = "default_snacks")]
    pub snacks_per_day: u32,
}

impl Default for MealStructure {
    fn default() -> Self {
        Self {
            meals_per_day: default_meals(),
            snacks_per_day: default_snacks(),
        }
    }
}

/// Anthropometric profile as stored in the profile collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "sexe")]
    pub sex: Sex,

    #[serde(rename = "poids")]
    pub weight_kg: f64,

    #[serde(rename = "taille")]
    pub height_cm: f64,

    #[serde(rename = "age")]
    pub age: u32,

    #[serde(rename = "activite")]
    pub activity: ActivityLevel,

    #[serde(rename = "estimatedBodyFat")]
    pub body_fat_pct: f64,

    #[serde(rename = "objectif")]
    pub goal: Goal,

    #[serde(flatten)]
    pub structure: MealStructure,
}

impl UserProfile {
    /// Range checks applied by the onboarding layer.
    pub fn validate(&self) -> Result<()> {
        if self.age < AGE_RANGE.0 || self.age > AGE_RANGE.1 {
            return Err(PlannerError::InvalidInput(format!(
                "age must be between {} and {}",
                AGE_RANGE.0, AGE_RANGE.1
            )));
        }
        check_range("weight", self.weight_kg, WEIGHT_RANGE_KG)?;
        check_range("height", self.height_cm, HEIGHT_RANGE_CM)?;
        check_range("body fat", self.body_fat_pct, BODY_FAT_RANGE)?;

        if self.structure.meals_per_day == 0 || self.structure.meals_per_day > MAX_MEALS_PER_DAY {
            return Err(PlannerError::InvalidInput(format!(
                "meals per day must be between 1 and {}",
                MAX_MEALS_PER_DAY
            )));
        }
        if self.structure.snacks_per_day > MAX_SNACKS_PER_DAY {
            return Err(PlannerError::InvalidInput(format!(
                "snacks per day must be at most {}",
                MAX_SNACKS_PER_DAY
            )));
        }
        Ok(())
    }
}

fn check_range(field: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !value.is_finite() || value < min || value > max {
        return Err(PlannerError::InvalidInput(format!(
            "{} must be between {} and {}",
            field, min, max
        )));
    }
    Ok(())
}
