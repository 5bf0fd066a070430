//! Same-category meal substitution: curated alternates first, then the catalog.

pub mod repair;
pub mod strategies;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Nutrients, PredefinedMeal, ScaledMeal};
use crate::planner::{Band, Compliance};

pub use repair::optimize_for_constraints;
pub use strategies::{FactorRange, Strategy};

/// Where an accepted replacement came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementTier {
    Alternate,
    Catalog,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementOutcome {
    pub meal: Option<ScaledMeal>,
    pub tier: Option<ReplacementTier>,
    pub strategy: Option<Strategy>,
    pub alternates_tried: usize,
    pub catalog_tried: usize,
}

/// Acceptance settings for one tier.
struct Tier {
    strategies: &'static [Strategy],
    range: FactorRange,
    accept: Band,
}

const ALTERNATE_TIER: Tier = Tier {
    strategies: &Strategy::FLEXIBLE,
    range: FactorRange::FLEXIBLE,
    accept: Band::FLEXIBLE,
};

const CATALOG_TIER: Tier = Tier {
    strategies: &Strategy::STANDARD,
    range: FactorRange::STANDARD,
    accept: Band::STRICT,
};

pub struct MealReplacer<'a> {
    catalog: &'a Catalog,
}

impl<'a> MealReplacer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn replace<R: Rng + ?Sized>(&self, current: &ScaledMeal, rng: &mut R) -> Option<ScaledMeal> {
        self.replace_with_report(current, rng).meal
    }

    /// Find a substitute whose totals track `current`'s own totals.
    ///
    /// Returns no meal when neither tier produced an acceptable result.
    pub fn replace_with_report<R: Rng + ?Sized>(
        &self,
        current: &ScaledMeal,
        rng: &mut R,
    ) -> ReplacementOutcome {
        let target = current.totals();
        let mut outcome = ReplacementOutcome {
            meal: None,
            tier: None,
            strategy: None,
            alternates_tried: 0,
            catalog_tried: 0,
        };

        let mut alternates: Vec<&PredefinedMeal> =
            self.catalog.alternatives_for(&current.name).iter().collect();
        alternates.shuffle(rng);

        for candidate in alternates {
            outcome.alternates_tried += 1;
            if let Some((meal, strategy)) = self.attempt(candidate, &target, &ALTERNATE_TIER) {
                info!(from = %current.name, to = %meal.name, %strategy, "replaced with curated alternate");
                outcome.meal = Some(meal);
                outcome.tier = Some(ReplacementTier::Alternate);
                outcome.strategy = Some(strategy);
                return outcome;
            }
        }

        let mut fallback: Vec<&PredefinedMeal> = self
            .catalog
            .meals_in(current.category)
            .filter(|m| m.id != current.id)
            .collect();
        fallback.shuffle(rng);

        for candidate in fallback {
            outcome.catalog_tried += 1;
            if let Some((meal, strategy)) = self.attempt(candidate, &target, &CATALOG_TIER) {
                info!(from = %current.name, to = %meal.name, %strategy, "replaced with catalog meal");
                outcome.meal = Some(meal);
                outcome.tier = Some(ReplacementTier::Catalog);
                outcome.strategy = Some(strategy);
                return outcome;
            }
        }

        warn!(
            meal = %current.name,
            alternates = outcome.alternates_tried,
            catalog = outcome.catalog_tried,
            "no acceptable replacement"
        );
        outcome
    }

    fn attempt(
        &self,
        candidate: &PredefinedMeal,
        target: &Nutrients,
        tier: &Tier,
    ) -> Option<(ScaledMeal, Strategy)> {
        match self.fit_candidate(candidate, target, tier) {
            Ok(found) => found,
            Err(e) => {
                warn!(candidate = %candidate.id, error = %e, "skipping candidate");
                None
            }
        }
    }

    fn fit_candidate(
        &self,
        candidate: &PredefinedMeal,
        target: &Nutrients,
        tier: &Tier,
    ) -> Result<Option<(ScaledMeal, Strategy)>> {
        let base = self.catalog.base_meal(candidate)?.totals();

        for &strategy in tier.strategies {
            let factor = tier.range.clamp(strategy.factor(&base, target));
            let mut scaled = self.catalog.scale_meal(candidate, factor)?;
            let mut compliance = Compliance::against(&scaled.totals(), target);

            if !compliance.within(Band::STRICT) {
                scaled = optimize_for_constraints(self.catalog, &scaled, target)?;
                compliance = Compliance::against(&scaled.totals(), target);
            }

            debug!(
                candidate = %candidate.id,
                %strategy,
                factor,
                result = %compliance.summary(),
                "tried strategy"
            );
            if compliance.within(tier.accept) {
                return Ok(Some((scaled, strategy)));
            }
        }
        Ok(None)
    }
}

/// Replace a meal using the built-in catalog.
pub fn replace_meal<R: Rng + ?Sized>(current: &ScaledMeal, rng: &mut R) -> Option<ScaledMeal> {
    MealReplacer::new(Catalog::builtin()).replace(current, rng)
}
