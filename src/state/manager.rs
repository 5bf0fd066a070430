use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::calculator::{CalorieAdjustment, NutritionTargets, targets_for};
use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{MealPlanResult, MealStructure, UserProfile};
use crate::planner::{
    Compliance, GenerationReport, GeneratorConfig, MealPlanGenerator, PlanRequest,
};
use crate::replacer::MealReplacer;
use crate::state::store::{Collection, DocumentStore};

/// The stored "current diet": a plan plus generation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DietDocument {
    #[serde(flatten)]
    pub plan: MealPlanResult,

    #[serde(flatten)]
    pub structure: MealStructure,

    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,

    #[serde(rename = "autoGenerated", default)]
    pub auto_generated: bool,
}

/// Result of a generate or regenerate request.
#[derive(Debug, Clone)]
pub struct DietGeneration {
    pub diet: DietDocument,
    pub report: GenerationReport,
    /// Only successful plans are written to the store.
    pub saved: bool,
}

/// Profile and diet workflows for one user over a document store.
pub struct DietManager<'a, S: DocumentStore> {
    store: S,
    user_id: String,
    catalog: &'a Catalog,
    policy: CalorieAdjustment,
    config: GeneratorConfig,
}

impl<S: DocumentStore> DietManager<'static, S> {
    pub fn new(store: S, user_id: &str) -> Self {
        DietManager::with_catalog(store, user_id, Catalog::builtin())
    }
}

impl<'a, S: DocumentStore> DietManager<'a, S> {
    pub fn with_catalog(store: S, user_id: &str, catalog: &'a Catalog) -> Self {
        Self {
            store,
            user_id: user_id.to_string(),
            catalog,
            policy: CalorieAdjustment::default(),
            config: GeneratorConfig::default(),
        }
    }

    pub fn with_policy(mut self, policy: CalorieAdjustment) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_generator_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn load_profile(&self) -> Result<UserProfile> {
        let document = self
            .store
            .get(Collection::Profiles, &self.user_id)?
            .ok_or_else(|| PlannerError::ProfileNotFound(self.user_id.clone()))?;
        Ok(serde_json::from_value(document)?)
    }

    /// Validate and merge the profile into the stored one.
    pub fn save_profile(&mut self, profile: &UserProfile) -> Result<()> {
        profile.validate()?;
        let document = serde_json::to_value(profile)?;
        self.store
            .set(Collection::Profiles, &self.user_id, document, true)
    }

    pub fn targets(&self) -> Result<NutritionTargets> {
        targets_for(&self.load_profile()?, self.policy)
    }

    pub fn current_diet(&self) -> Result<Option<DietDocument>> {
        match self.store.get(Collection::Diets, &self.user_id)? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    /// Generate a plan from the stored profile, saving it only on success.
    pub fn generate_diet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DietGeneration> {
        let profile = self.load_profile()?;
        let targets = targets_for(&profile, self.policy)?;
        let request = PlanRequest::new(&targets, profile.structure);

        let generator = MealPlanGenerator::with_config(self.catalog, self.config.clone());
        let outcome = generator.generate_with_report(&request, rng);

        let diet = DietDocument {
            plan: outcome.plan,
            structure: profile.structure,
            generated_at: Utc::now(),
            auto_generated: true,
        };

        let saved = diet.plan.success;
        if saved {
            self.save_diet(&diet)?;
            info!(user = %self.user_id, meals = diet.plan.meals.len(), "diet saved");
        } else {
            warn!(user = %self.user_id, message = %diet.plan.validation_message, "diet not saved");
        }

        Ok(DietGeneration {
            diet,
            report: outcome.report,
            saved,
        })
    }

    /// Delete the stored diet and generate a fresh one.
    pub fn regenerate_diet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DietGeneration> {
        self.store.delete(Collection::Diets, &self.user_id)?;
        self.generate_diet(rng)
    }

    /// Return the stored diet, generating one first if none exists.
    pub fn ensure_diet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<DietDocument> {
        match self.current_diet()? {
            Some(diet) => Ok(diet),
            None => Ok(self.generate_diet(rng)?.diet),
        }
    }

    /// Replace the meal at `slot` of the stored diet.
    ///
    /// The updated plan is re-checked against the profile's targets, so a
    /// swap can turn a successful plan into an unsuccessful one. Returns
    /// `None` (and leaves the store untouched) when no acceptable substitute
    /// exists.
    pub fn replace_meal<R: Rng + ?Sized>(
        &mut self,
        slot: usize,
        rng: &mut R,
    ) -> Result<Option<DietDocument>> {
        let diet = self
            .current_diet()?
            .ok_or_else(|| PlannerError::DietNotFound(self.user_id.clone()))?;
        let current = diet
            .plan
            .meals
            .get(slot)
            .ok_or(PlannerError::SlotOutOfRange {
                slot,
                len: diet.plan.meals.len(),
            })?;

        let Some(replacement) = MealReplacer::new(self.catalog).replace(current, rng) else {
            return Ok(None);
        };

        let targets = PlanRequest::new(&self.targets()?, diet.structure).targets;
        let mut plan = diet.plan.with_meal_replaced(slot, replacement)?;
        let compliance = Compliance::against(&plan.totals(), &targets);
        let band = self.config.band;
        plan.success = compliance.within(band);
        plan.validation_message = if plan.success {
            format!(
                "All targets within {:.0}-{:.0}% ({})",
                band.low,
                band.high,
                compliance.summary()
            )
        } else {
            format!(
                "After replacing meal {}, targets are outside {:.0}-{:.0}%: {}",
                slot + 1,
                band.low,
                band.high,
                compliance.summary()
            )
        };
        if !plan.success {
            warn!(user = %self.user_id, slot, "replacement moved the plan out of band");
        }

        let updated = DietDocument { plan, ..diet };
        self.save_diet(&updated)?;
        Ok(Some(updated))
    }

    fn save_diet(&mut self, diet: &DietDocument) -> Result<()> {
        let document = serde_json::to_value(diet)?;
        self.store
            .set(Collection::Diets, &self.user_id, document, false)
    }
}
