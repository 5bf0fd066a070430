use std::fmt;

use crate::error::{PlannerError, Result};
use crate::models::round1;

/// BMI range shown as healthy.
pub const HEALTHY_BMI_RANGE: (f64, f64) = (18.5, 24.9);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Category of an unrounded BMI value.
    pub fn of(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        }
    }

    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            BmiCategory::Underweight => &[
                "See a health professional",
                "Raise calorie intake with nutrient-dense foods",
                "Add strength training to build mass",
            ],
            BmiCategory::Normal => &[
                "Keep your current weight",
                "Stay with a balanced diet and regular activity",
            ],
            BmiCategory::Overweight => &[
                "Reduce portions and calories",
                "Increase physical activity",
                "Favour vegetables and lean proteins",
            ],
            BmiCategory::Obese => &[
                "See a doctor before changing your diet",
                "Follow a supervised weight-loss programme",
            ],
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// One decimal.
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Body-mass index from weight and height.
///
/// The category comes from the unrounded value, so 24.96 reads as 25.0 but
/// stays in the normal range.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<BmiResult> {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return Err(PlannerError::InvalidInput(
            "weight and height must be positive".to_string(),
        ));
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok(BmiResult {
        bmi: round1(bmi),
        category: BmiCategory::of(bmi),
    })
}
