use crate::models::{Nutrients, Quantity};
use crate::planner::constants::*;

/// An inclusive [low %, high %] window around a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub const STRICT: Band = Band {
        low: STRICT_LOW,
        high: STRICT_HIGH,
    };

    pub const FLEXIBLE: Band = Band {
        low: FLEXIBLE_LOW,
        high: FLEXIBLE_HIGH,
    };

    #[inline]
    pub fn contains(&self, pct: f64) -> bool {
        pct >= self.low && pct <= self.high
    }
}

/// `actual` as a percentage of `target`.
///
/// A non-positive target counts as met only when `actual` is also non-positive.
pub fn percent_of(actual: f64, target: f64) -> f64 {
    if target > 0.0 {
        actual / target * 100.0
    } else if actual <= 0.0 {
        100.0
    } else {
        f64::INFINITY
    }
}

/// Percent-of-target for the four tracked quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Compliance {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Compliance {
    pub fn against(actual: &Nutrients, target: &Nutrients) -> Self {
        Self {
            calories: percent_of(actual.calories, target.calories),
            protein: percent_of(actual.protein, target.protein),
            carbs: percent_of(actual.carbs, target.carbs),
            fat: percent_of(actual.fat, target.fat),
        }
    }

    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Calories => self.calories,
            Quantity::Protein => self.protein,
            Quantity::Carbs => self.carbs,
            Quantity::Fat => self.fat,
        }
    }

    pub fn within(&self, band: Band) -> bool {
        Quantity::ALL.iter().all(|q| band.contains(self.get(*q)))
    }

    /// Mean over the four quantities of `max(0, 100 - 2 * |pct - 100|)`.
    pub fn score(&self) -> f64 {
        let total: f64 = Quantity::ALL
            .iter()
            .map(|q| {
                let deviation = (self.get(*q) - 100.0).abs();
                (100.0 - SCORE_PENALTY_PER_PCT * deviation).max(0.0)
            })
            .sum();
        total / Quantity::ALL.len() as f64
    }

    pub fn summary(&self) -> String {
        format!(
            "calories {:.0}%, protein {:.0}%, carbs {:.0}%, fat {:.0}%",
            self.calories, self.protein, self.carbs, self.fat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_inclusive() {
        assert!(Band::STRICT.contains(90.0));
        assert!(Band::STRICT.contains(110.0));
        assert!(!Band::STRICT.contains(110.01));
        assert!(Band::FLEXIBLE.contains(86.0));
        assert!(!Band::FLEXIBLE.contains(84.9));
    }

    #[test]
    fn test_percent_of_zero_target() {
        assert_eq!(percent_of(0.0, 0.0), 100.0);
        assert!(percent_of(3.0, 0.0).is_infinite());
        assert_eq!(percent_of(45.0, 50.0), 90.0);
    }

    #[test]
    fn test_score() {
        let perfect = Compliance {
            calories: 100.0,
            protein: 100.0,
            carbs: 100.0,
            fat: 100.0,
        };
        assert_eq!(perfect.score(), 100.0);

        let mixed = Compliance {
            calories: 105.0,
            protein: 80.0,
            carbs: 200.0,
            fat: f64::INFINITY,
        };
        // 90 + 60 + 0 + 0
        assert_eq!(mixed.score(), 37.5);
        assert!(!mixed.within(Band::STRICT));
    }
}
