use tracing::warn;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{ClampEvent, FoodPortion, PredefinedMeal, ScaledMeal, round_to_5g};

impl Catalog {
    /// Build a portion of `food_name` at `requested_grams`.
    ///
    /// The quantity is rounded to 5 g, then fruit and egg caps are applied.
    pub fn portion(&self, food_name: &str, requested_grams: f64) -> Result<FoodPortion> {
        let food = self.food(food_name)?;
        let requested = round_to_5g(requested_grams.max(0.0));

        let (quantity, clamp) = match food.cap() {
            Some((kind, cap)) if requested > cap => {
                warn!(
                    food = %food.name,
                    requested,
                    cap,
                    "portion clamped to unit cap"
                );
                let event = ClampEvent {
                    kind,
                    requested_grams: requested,
                    clamped_grams: cap,
                    drift: food.per_100g.scaled((requested - cap) / 100.0),
                };
                (cap, Some(event))
            }
            _ => (requested, None),
        };

        Ok(FoodPortion {
            name: food.name.clone(),
            quantity,
            display_quantity: food.display_quantity(quantity),
            nutrients: food.nutrition_for(quantity),
            clamp,
        })
    }

    /// A catalog meal at its base quantities.
    pub fn base_meal(&self, meal: &PredefinedMeal) -> Result<ScaledMeal> {
        self.scale_meal(meal, 1.0)
    }

    /// Multiply every base quantity by `factor`.
    pub fn scale_meal(&self, meal: &PredefinedMeal, factor: f64) -> Result<ScaledMeal> {
        let portions = meal
            .items
            .iter()
            .map(|item| self.portion(&item.food, item.grams * factor))
            .collect::<Result<Vec<_>>>()?;
        Ok(ScaledMeal::from_portions(
            &meal.id,
            meal.category,
            &meal.name,
            portions,
        ))
    }

    /// Scale a meal so its base calories match `target_calories`.
    pub fn scale_meal_to_calories(
        &self,
        meal: &PredefinedMeal,
        target_calories: f64,
    ) -> Result<ScaledMeal> {
        let base = self.base_meal(meal)?;
        let factor = if base.total_calories > 0.0 {
            target_calories / base.total_calories
        } else {
            0.0
        };
        self.scale_meal(meal, factor)
    }

    /// Rebuild `meal` with one portion set to a new quantity.
    pub fn with_portion_quantity(
        &self,
        meal: &ScaledMeal,
        index: usize,
        grams: f64,
    ) -> Result<ScaledMeal> {
        let mut foods = meal.foods.clone();
        if let Some(slot) = foods.get_mut(index) {
            *slot = self.portion(&slot.name, grams)?;
        }
        Ok(ScaledMeal::from_portions(
            &meal.id,
            meal.category,
            &meal.name,
            foods,
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::models::CapKind;

    #[test]
    fn test_portion_rounds_to_5g() {
        let catalog = Catalog::builtin();
        let portion = catalog.portion("Brocolis", 123.0).unwrap();
        assert_eq!(portion.quantity, 125.0);
        assert_eq!(portion.display_quantity, "125g");
        assert_eq!(portion.nutrients.calories, 31.3);
    }

    #[test]
    fn test_fruit_cap() {
        let catalog = Catalog::builtin();
        let portion = catalog.portion("Banane", 400.0).unwrap();
        assert_eq!(portion.quantity, 240.0);
        assert_eq!(portion.display_quantity, "2 bananes");

        let clamp = portion.clamp.unwrap();
        assert_eq!(clamp.kind, CapKind::WholeFruit);
        assert_eq!(clamp.requested_grams, 400.0);
        assert!((clamp.drift.calories - 142.4).abs() < 1e-9);
    }

    #[test]
    fn test_egg_cap() {
        let catalog = Catalog::builtin();
        let portion = catalog.portion("Œufs entiers", 330.0).unwrap();
        assert_eq!(portion.quantity, 240.0);
        assert_eq!(portion.display_quantity, "4 œufs");
        assert_eq!(portion.clamp.unwrap().kind, CapKind::Egg);
    }

    #[test]
    fn test_unknown_food_is_an_error() {
        let catalog = Catalog::builtin();
        assert!(catalog.portion("Licorne", 100.0).is_err());
    }

    #[test]
    fn test_scale_to_calories_preserves_ratios() {
        let catalog = Catalog::builtin();
        let meal = catalog.meal_by_id("dej1").unwrap();
        let base = catalog.base_meal(meal).unwrap();
        let doubled = catalog
            .scale_meal_to_calories(meal, base.total_calories * 2.0)
            .unwrap();

        for (b, d) in base.foods.iter().zip(&doubled.foods) {
            assert_eq!(d.quantity, b.quantity * 2.0);
        }
        assert!((doubled.total_calories / base.total_calories - 2.0).abs() < 0.02);
    }
}
