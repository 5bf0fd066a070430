use std::fmt;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// Nutrition values for some amount of food (per 100 g in the catalog).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrients {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub fiber: f64,
}

impl Nutrients {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            fiber,
        }
    }

    /// Scale every value by `factor` without rounding.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            calories: self.calories * factor,
            protein: self.protein * factor,
            carbs: self.carbs * factor,
            fat: self.fat * factor,
            fiber: self.fiber * factor,
        }
    }

    /// Apply the display rounding rule to every value.
    pub fn formatted(&self) -> Self {
        Self {
            calories: format_nutrition_value(self.calories),
            protein: format_nutrition_value(self.protein),
            carbs: format_nutrition_value(self.carbs),
            fat: format_nutrition_value(self.fat),
            fiber: format_nutrition_value(self.fiber),
        }
    }

    #[inline]
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::Calories => self.calories,
            Quantity::Protein => self.protein,
            Quantity::Carbs => self.carbs,
            Quantity::Fat => self.fat,
        }
    }
}

impl Add for Nutrients {
    type Output = Nutrients;

    fn add(self, rhs: Nutrients) -> Nutrients {
        Nutrients {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
            fiber: self.fiber + rhs.fiber,
        }
    }
}

impl AddAssign for Nutrients {
    fn add_assign(&mut self, rhs: Nutrients) {
        *self = *self + rhs;
    }
}

/// The four tracked quantities checked against the acceptance band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantity {
    Calories,
    Protein,
    Carbs,
    Fat,
}

impl Quantity {
    pub const ALL: [Quantity; 4] = [
        Quantity::Calories,
        Quantity::Protein,
        Quantity::Carbs,
        Quantity::Fat,
    ];

    /// The three macronutrients, in the order the generator repairs them.
    pub const MACROS: [Quantity; 3] = [Quantity::Protein, Quantity::Carbs, Quantity::Fat];
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Quantity::Calories => "calories",
            Quantity::Protein => "protein",
            Quantity::Carbs => "carbs",
            Quantity::Fat => "fat",
        };
        f.write_str(label)
    }
}

/// Round a quantity in grams to the nearest multiple of 5.
#[inline]
pub fn round_to_5g(quantity: f64) -> f64 {
    (quantity / 5.0).round() * 5.0
}

/// Values under 100 keep one decimal; larger values are whole numbers.
#[inline]
pub fn format_nutrition_value(value: f64) -> f64 {
    if value < 100.0 {
        (value * 10.0).round() / 10.0
    } else {
        value.round()
    }
}

#[inline]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
