use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};

use crate::calculator::NutritionTargets;
use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{
    MealCategory, MealPlanResult, MealStructure, Nutrients, PredefinedMeal, Quantity, ScaledMeal,
    day_totals,
};
use crate::planner::adjust::adjust_meal_macro;
use crate::planner::constants::*;
use crate::planner::validation::{Band, Compliance, percent_of};

/// Tunables for the bounded repair loop.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub max_attempts: usize,
    pub max_iterations: usize,
    pub replace_after_iterations: usize,
    pub band: Band,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_iterations: MAX_ITERATIONS,
            replace_after_iterations: REPLACE_AFTER_ITERATIONS,
            band: Band::STRICT,
        }
    }
}

/// Day targets and meal structure for one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRequest {
    pub targets: Nutrients,
    pub meals_per_day: u32,
    pub snacks_per_day: u32,
}

impl PlanRequest {
    pub fn new(targets: &NutritionTargets, structure: MealStructure) -> Self {
        Self {
            targets: Nutrients::new(
                targets.calories,
                targets.protein_g,
                targets.carbs_g,
                targets.fat_g,
                0.0,
            ),
            meals_per_day: structure.meals_per_day,
            snacks_per_day: structure.snacks_per_day,
        }
    }
}

/// A change applied during an inner correction iteration.
#[derive(Debug, Clone, PartialEq)]
pub enum Correction {
    Adjusted {
        slot: usize,
        quantity: Quantity,
        requested: f64,
        achieved: f64,
    },
    Replaced {
        slot: usize,
        old_id: String,
        new_id: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttemptReport {
    pub attempt: usize,
    pub iterations: usize,
    pub score: f64,
    pub compliant: bool,
    pub corrections: Vec<Correction>,
    /// Set when the attempt aborted (e.g. a category ran out of meals).
    pub failure: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub attempts: Vec<AttemptReport>,
    /// Index into `attempts` of the plan that was returned.
    pub chosen_attempt: Option<usize>,
    /// Nutrition removed from the returned plan by fruit and egg caps.
    pub clamp_drift: Nutrients,
    /// Whether the returned plan would be within the band without the caps.
    pub met_band_before_clamp: bool,
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub plan: MealPlanResult,
    pub report: GenerationReport,
}

struct Attempt {
    meals: Vec<ScaledMeal>,
    compliance: Compliance,
    report: AttemptReport,
}

/// Builds day plans from a catalog.
pub struct MealPlanGenerator<'a> {
    catalog: &'a Catalog,
    config: GeneratorConfig,
}

impl<'a> MealPlanGenerator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, GeneratorConfig::default())
    }

    pub fn with_config(catalog: &'a Catalog, config: GeneratorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn generate<R: Rng + ?Sized>(&self, request: &PlanRequest, rng: &mut R) -> MealPlanResult {
        self.generate_with_report(request, rng).plan
    }

    /// Run up to `max_attempts` attempts and return the first compliant plan,
    /// or the best-scoring one flagged as unsuccessful.
    pub fn generate_with_report<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> GenerationOutcome {
        let mut report = GenerationReport::default();

        if request.meals_per_day == 0 && request.snacks_per_day == 0 {
            warn!("no meals or snacks requested");
            return GenerationOutcome {
                plan: MealPlanResult::failed("No meals or snacks requested"),
                report,
            };
        }

        let mut best: Option<(usize, Vec<ScaledMeal>, Compliance)> = None;

        for attempt in 0..self.config.max_attempts {
            match self.run_attempt(attempt, request, rng) {
                Ok(done) => {
                    let score = done.report.score;
                    let compliant = done.report.compliant;
                    let index = report.attempts.len();
                    report.attempts.push(done.report);

                    if compliant {
                        info!(attempt = attempt + 1, score, "plan within band");
                        let message = format!(
                            "All targets within {:.0}-{:.0}% ({})",
                            self.config.band.low,
                            self.config.band.high,
                            done.compliance.summary()
                        );
                        let plan = MealPlanResult::new(done.meals, true, message);
                        return self.finish(plan, index, report, request);
                    }

                    debug!(attempt = attempt + 1, score, "attempt outside band");
                    let better = match &best {
                        Some((i, _, _)) => score > report.attempts[*i].score,
                        None => true,
                    };
                    if better {
                        best = Some((index, done.meals, done.compliance));
                    }
                }
                Err(e) => {
                    warn!(attempt = attempt + 1, error = %e, "generation attempt failed");
                    report.attempts.push(AttemptReport {
                        attempt,
                        iterations: 0,
                        score: 0.0,
                        compliant: false,
                        corrections: Vec::new(),
                        failure: Some(e.to_string()),
                    });
                }
            }
        }

        match best {
            Some((index, meals, compliance)) => {
                let message = format!(
                    "Best plan after {} attempts is outside {:.0}-{:.0}%: {}",
                    self.config.max_attempts,
                    self.config.band.low,
                    self.config.band.high,
                    compliance.summary()
                );
                warn!(%message, "returning best-effort plan");
                let plan = MealPlanResult::new(meals, false, message);
                self.finish(plan, index, report, request)
            }
            None => {
                warn!("every generation attempt failed");
                GenerationOutcome {
                    plan: MealPlanResult::failed(
                        "Unable to generate a meal plan: every attempt failed",
                    ),
                    report,
                }
            }
        }
    }

    fn finish(
        &self,
        plan: MealPlanResult,
        chosen: usize,
        mut report: GenerationReport,
        request: &PlanRequest,
    ) -> GenerationOutcome {
        let drift = plan.clamp_drift();
        let unclamped = plan.totals() + drift;
        report.chosen_attempt = Some(chosen);
        report.clamp_drift = drift;
        report.met_band_before_clamp =
            Compliance::against(&unclamped, &request.targets).within(self.config.band);
        GenerationOutcome { plan, report }
    }

    /// Per-slot calorie budgets, before jitter.
    fn slot_budgets(&self, request: &PlanRequest) -> Vec<(MealCategory, f64)> {
        let calories = request.targets.calories;
        let meals = request.meals_per_day as usize;
        let snacks = request.snacks_per_day as usize;

        let meal_share = match (meals, snacks) {
            (_, 0) => 1.0,
            (0, _) => 0.0,
            _ => MEAL_CALORIE_SHARE,
        };
        let mut budgets = Vec::with_capacity(meals + snacks);
        if meals > 0 {
            let per_meal = (calories * meal_share / meals as f64).round();
            budgets.extend((0..meals).map(|i| (MealCategory::for_main_slot(i), per_meal)));
        }
        if snacks > 0 {
            let per_snack = (calories * (1.0 - meal_share) / snacks as f64).round();
            budgets.extend((0..snacks).map(|_| (MealCategory::Snack, per_snack)));
        }
        budgets
    }

    fn run_attempt<R: Rng + ?Sized>(
        &self,
        attempt: usize,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Result<Attempt> {
        let targets = &request.targets;
        let mut used: HashSet<String> = HashSet::new();
        let mut meals = Vec::new();

        for (category, budget) in self.slot_budgets(request) {
            let span = if category == MealCategory::Snack {
                SNACK_JITTER_SPAN
            } else {
                MEAL_JITTER_SPAN
            };
            let slot_calories = budget + rng.gen_range(-0.5..0.5) * budget * span;
            let meal = self.pick_unused(category, &used, None, rng)?;
            used.insert(meal.id.clone());
            meals.push(self.catalog.scale_meal_to_calories(meal, slot_calories)?);
        }

        let mut corrections = Vec::new();
        let mut iterations = 0;

        for iteration in 0..self.config.max_iterations {
            iterations = iteration + 1;
            let totals = day_totals(&meals);
            let compliance = Compliance::against(&totals, targets);
            if compliance.within(self.config.band) {
                break;
            }

            let mut applied = false;
            for quantity in Quantity::MACROS {
                let pct = compliance.get(quantity);
                let target = targets.get(quantity);
                let current = totals.get(quantity);

                let (change, slot) = if pct < self.config.band.low {
                    let slot = extreme_slot(&meals, quantity, false);
                    (target * CORRECTION_AIM_LOW - current, slot)
                } else if pct > self.config.band.high {
                    let slot = extreme_slot(&meals, quantity, true);
                    (-(current - target * CORRECTION_AIM_HIGH), slot)
                } else {
                    continue;
                };

                let Some(slot) = slot else { continue };
                let adjustment = adjust_meal_macro(self.catalog, &meals[slot], quantity, change)?;
                if adjustment.changed {
                    debug!(
                        slot,
                        %quantity,
                        requested = change,
                        achieved = adjustment.achieved,
                        "macro correction"
                    );
                    corrections.push(Correction::Adjusted {
                        slot,
                        quantity,
                        requested: change,
                        achieved: adjustment.achieved,
                    });
                    meals[slot] = adjustment.meal;
                    applied = true;
                }
            }

            if !applied && iterations >= self.config.replace_after_iterations {
                if let Some(correction) = self.replace_worst(&mut meals, &mut used, targets, rng)? {
                    corrections.push(correction);
                    applied = true;
                }
            }

            if !applied {
                break;
            }
        }

        let compliance = Compliance::against(&day_totals(&meals), targets);
        let compliant = compliance.within(self.config.band);
        Ok(Attempt {
            meals,
            compliance,
            report: AttemptReport {
                attempt,
                iterations,
                score: compliance.score(),
                compliant,
                corrections,
                failure: None,
            },
        })
    }

    /// Swap the meal that strays furthest from its even share of the targets.
    fn replace_worst<R: Rng + ?Sized>(
        &self,
        meals: &mut [ScaledMeal],
        used: &mut HashSet<String>,
        targets: &Nutrients,
        rng: &mut R,
    ) -> Result<Option<Correction>> {
        let share = meals.len() as f64;
        let worst = meals
            .iter()
            .enumerate()
            .map(|(slot, meal)| {
                let deviation = Quantity::MACROS
                    .iter()
                    .map(|q| {
                        let pct = percent_of(meal.totals().get(*q), targets.get(*q) / share);
                        (pct - 100.0).abs()
                    })
                    .fold(0.0, f64::max);
                (slot, deviation)
            })
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(slot, _)| slot);

        let Some(slot) = worst else { return Ok(None) };
        let current = &meals[slot];
        let replacement = match self.pick_unused(current.category, used, Some(&current.id), rng) {
            Ok(meal) => meal,
            Err(PlannerError::CatalogExhausted(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let scaled = self
            .catalog
            .scale_meal_to_calories(replacement, current.total_calories)?;
        debug!(slot, old = %current.id, new = %scaled.id, "replacing worst meal");
        let correction = Correction::Replaced {
            slot,
            old_id: current.id.clone(),
            new_id: scaled.id.clone(),
        };
        used.insert(scaled.id.clone());
        meals[slot] = scaled;
        Ok(Some(correction))
    }

    fn pick_unused<R: Rng + ?Sized>(
        &self,
        category: MealCategory,
        used: &HashSet<String>,
        exclude: Option<&str>,
        rng: &mut R,
    ) -> Result<&'a PredefinedMeal> {
        let candidates: Vec<_> = self
            .catalog
            .meals_in(category)
            .filter(|m| !used.contains(&m.id) && exclude != Some(m.id.as_str()))
            .collect();
        candidates
            .choose(rng)
            .copied()
            .ok_or(PlannerError::CatalogExhausted(category))
    }
}

/// Slot holding the most (or least) of a macro.
fn extreme_slot(meals: &[ScaledMeal], quantity: Quantity, most: bool) -> Option<usize> {
    let values = meals
        .iter()
        .enumerate()
        .map(|(i, m)| (i, m.totals().get(quantity)));
    if most {
        values.max_by(|a, b| a.1.total_cmp(&b.1)).map(|(i, _)| i)
    } else {
        values.min_by(|a, b| a.1.total_cmp(&b.1)).map(|(i, _)| i)
    }
}

/// Generate a plan from the built-in catalog with default settings.
pub fn generate_meal_plan<R: Rng + ?Sized>(
    targets: &NutritionTargets,
    structure: MealStructure,
    rng: &mut R,
) -> MealPlanResult {
    MealPlanGenerator::new(Catalog::builtin()).generate(&PlanRequest::new(targets, structure), rng)
}
