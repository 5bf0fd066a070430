use serde::{Deserialize, Serialize};

use crate::models::nutrients::Nutrients;

/// Static classification used by the repair passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodClass {
    HighCarb,
    HighProtein,
    HighFat,
    Vegetable,
    NonEssential,
    WholeFruit,
    Egg,
}

/// A discrete counting unit (slices, eggs, fruits) used for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayUnit {
    pub plural: String,
    pub singular: String,
    pub grams_per_unit: f64,
    /// Render "½" below half a unit instead of rounding.
    pub half_unit: bool,
}

impl DisplayUnit {
    pub fn new(plural: &str, singular: &str, grams_per_unit: f64) -> Self {
        Self {
            plural: plural.to_string(),
            singular: singular.to_string(),
            grams_per_unit,
            half_unit: false,
        }
    }

    pub fn with_half_unit(mut self) -> Self {
        self.half_unit = true;
        self
    }

    #[inline]
    pub fn units(&self, grams: f64) -> f64 {
        (grams / self.grams_per_unit).round()
    }
}

/// A catalog food with per-100 g nutrition.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub name: String,
    pub per_100g: Nutrients,
    pub unit: Option<DisplayUnit>,
    pub classes: Vec<FoodClass>,
}

impl FoodItem {
    pub fn new(name: &str, per_100g: Nutrients) -> Self {
        Self {
            name: name.to_string(),
            per_100g,
            unit: None,
            classes: Vec::new(),
        }
    }

    pub fn with_unit(mut self, unit: DisplayUnit) -> Self {
        self.unit = Some(unit);
        self
    }

    pub fn with_classes(mut self, classes: &[FoodClass]) -> Self {
        self.classes.extend_from_slice(classes);
        self
    }

    #[inline]
    pub fn has(&self, class: FoodClass) -> bool {
        self.classes.contains(&class)
    }

    /// Nutrition for `grams` of this food, rounded for display.
    pub fn nutrition_for(&self, grams: f64) -> Nutrients {
        self.per_100g.scaled(grams / 100.0).formatted()
    }

    /// Hard cap on grams per portion, if this food has one.
    pub fn cap(&self) -> Option<(CapKind, f64)> {
        let unit = self.unit.as_ref()?;
        if self.has(FoodClass::WholeFruit) {
            Some((CapKind::WholeFruit, MAX_FRUIT_UNITS * unit.grams_per_unit))
        } else if self.has(FoodClass::Egg) {
            Some((CapKind::Egg, MAX_EGG_UNITS * unit.grams_per_unit))
        } else {
            None
        }
    }

    /// Human-readable quantity: units when the food has one, grams otherwise.
    pub fn display_quantity(&self, grams: f64) -> String {
        let Some(unit) = &self.unit else {
            return format!("{:.0}g", grams);
        };

        if unit.half_unit && grams > 0.0 {
            if grams <= unit.grams_per_unit / 2.0 {
                return format!("½ {}", unit.singular);
            }
            if grams <= unit.grams_per_unit {
                return format!("1 {}", unit.singular);
            }
        }

        let units = unit.units(grams);
        if units == 0.0 {
            format!("{:.0}g", grams)
        } else if units == 1.0 {
            format!("1 {}", unit.singular)
        } else {
            format!("{:.0} {}", units, unit.plural)
        }
    }
}

pub const MAX_FRUIT_UNITS: f64 = 2.0;
pub const MAX_EGG_UNITS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapKind {
    WholeFruit,
    Egg,
}

/// Record of a hard cap overriding a requested quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClampEvent {
    pub kind: CapKind,
    pub requested_grams: f64,
    pub clamped_grams: f64,
    /// Nutrition removed by the clamp (requested minus kept).
    pub drift: Nutrients,
}

/// One food at a concrete quantity inside a meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodPortion {
    pub name: String,

    /// Grams, always a multiple of 5.
    pub quantity: f64,

    #[serde(rename = "displayQuantity")]
    pub display_quantity: String,

    #[serde(flatten)]
    pub nutrients: Nutrients,

    #[serde(skip)]
    pub clamp: Option<ClampEvent>,
}
