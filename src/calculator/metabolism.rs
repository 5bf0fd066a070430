use crate::models::{Sex, UserProfile};

/// Flat daily deficit or surplus for the loss and gain estimates.
pub const METABOLISM_GOAL_DELTA_KCAL: f64 = 500.0;

/// Mifflin-St Jeor estimate, independent of body composition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetabolismEstimate {
    pub bmr: f64,
    pub maintenance_calories: f64,
    pub weight_loss_calories: f64,
    pub weight_gain_calories: f64,
}

/// Unrounded Mifflin-St Jeor BMR.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age);
    match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    }
}

pub fn estimate_metabolism(profile: &UserProfile) -> MetabolismEstimate {
    let bmr = mifflin_st_jeor(profile.weight_kg, profile.height_cm, profile.age, profile.sex);
    let maintenance = bmr * profile.activity.multiplier();
    MetabolismEstimate {
        bmr: bmr.round(),
        maintenance_calories: maintenance.round(),
        weight_loss_calories: (maintenance - METABOLISM_GOAL_DELTA_KCAL).round(),
        weight_gain_calories: (maintenance + METABOLISM_GOAL_DELTA_KCAL).round(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Goal, MealStructure};

    fn profile(sex: Sex) -> UserProfile {
        UserProfile {
            sex,
            weight_kg: 70.0,
            height_cm: 175.0,
            age: 30,
            activity: ActivityLevel::Moderate,
            body_fat_pct: 20.0,
            goal: Goal::Maintain,
            structure: MealStructure::default(),
        }
    }

    #[test]
    fn test_mifflin_st_jeor_by_sex() {
        assert!((mifflin_st_jeor(70.0, 175.0, 30, Sex::Male) - 1648.75).abs() < 1e-9);
        assert!((mifflin_st_jeor(70.0, 175.0, 30, Sex::Female) - 1482.75).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_rounds_from_unrounded_maintenance() {
        let estimate = estimate_metabolism(&profile(Sex::Male));
        assert_eq!(estimate.bmr, 1649.0);
        // 1648.75 x 1.55 = 2555.5625
        assert_eq!(estimate.maintenance_calories, 2556.0);
        assert_eq!(estimate.weight_loss_calories, 2056.0);
        assert_eq!(estimate.weight_gain_calories, 3056.0);

        let estimate = estimate_metabolism(&profile(Sex::Female));
        assert_eq!(estimate.bmr, 1483.0);
    }
}
