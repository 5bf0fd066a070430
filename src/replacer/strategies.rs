use std::fmt;

use crate::models::Nutrients;

/// A way of picking one scale factor for a candidate meal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Match calories.
    Calories,
    /// Match protein.
    Protein,
    /// Weighted blend: 40 % calories, 30 % protein, 15 % carbs, 15 % fat.
    Weighted,
    /// Calorie factor × 0.8.
    Conservative,
    /// Calorie factor × 1.2.
    Progressive,
}

impl Strategy {
    /// Order tried for curated alternates.
    pub const FLEXIBLE: [Strategy; 5] = [
        Strategy::Calories,
        Strategy::Protein,
        Strategy::Weighted,
        Strategy::Conservative,
        Strategy::Progressive,
    ];

    /// Order tried for generic catalog meals.
    pub const STANDARD: [Strategy; 3] = [Strategy::Calories, Strategy::Protein, Strategy::Weighted];

    /// Unclamped factor taking `base` toward `target`.
    pub fn factor(&self, base: &Nutrients, target: &Nutrients) -> f64 {
        let calories = safe_ratio(target.calories, base.calories);
        match self {
            Strategy::Calories => calories,
            Strategy::Protein => safe_ratio(target.protein, base.protein),
            Strategy::Weighted => {
                calories * 0.4
                    + safe_ratio(target.protein, base.protein) * 0.3
                    + safe_ratio(target.carbs, base.carbs) * 0.15
                    + safe_ratio(target.fat, base.fat) * 0.15
            }
            Strategy::Conservative => calories * 0.8,
            Strategy::Progressive => calories * 1.2,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strategy::Calories => "calories",
            Strategy::Protein => "protein",
            Strategy::Weighted => "weighted",
            Strategy::Conservative => "conservative",
            Strategy::Progressive => "progressive",
        };
        f.write_str(label)
    }
}

/// Allowed scale factors for a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorRange {
    pub min: f64,
    pub max: f64,
}

impl FactorRange {
    pub const FLEXIBLE: FactorRange = FactorRange { min: 0.3, max: 3.0 };
    pub const STANDARD: FactorRange = FactorRange { min: 0.5, max: 2.0 };

    #[inline]
    pub fn clamp(&self, factor: f64) -> f64 {
        if factor.is_finite() {
            factor.clamp(self.min, self.max)
        } else {
            1.0
        }
    }
}

/// `target / base`, or 1.0 when the base has none of it.
#[inline]
fn safe_ratio(target: f64, base: f64) -> f64 {
    if base > 0.0 { target / base } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factors() {
        let base = Nutrients::new(400.0, 20.0, 50.0, 10.0, 0.0);
        let target = Nutrients::new(600.0, 40.0, 50.0, 10.0, 0.0);

        assert_eq!(Strategy::Calories.factor(&base, &target), 1.5);
        assert_eq!(Strategy::Protein.factor(&base, &target), 2.0);
        // 0.6 + 0.6 + 0.15 + 0.15
        assert!((Strategy::Weighted.factor(&base, &target) - 1.5).abs() < 1e-9);
        assert!((Strategy::Conservative.factor(&base, &target) - 1.2).abs() < 1e-9);
        assert!((Strategy::Progressive.factor(&base, &target) - 1.8).abs() < 1e-9);
    }

    #[test]
    fn test_zero_base_is_neutral() {
        let base = Nutrients::new(100.0, 0.0, 20.0, 0.0, 0.0);
        let target = Nutrients::new(100.0, 10.0, 20.0, 5.0, 0.0);
        assert_eq!(Strategy::Protein.factor(&base, &target), 1.0);
    }

    #[test]
    fn test_factor_ranges() {
        assert_eq!(FactorRange::FLEXIBLE.clamp(5.0), 3.0);
        assert_eq!(FactorRange::FLEXIBLE.clamp(0.1), 0.3);
        assert_eq!(FactorRange::STANDARD.clamp(2.5), 2.0);
        assert_eq!(FactorRange::STANDARD.clamp(0.7), 0.7);
    }
}
