/// Outer attempts before settling for the best-scoring plan.
pub const MAX_ATTEMPTS: usize = 5;

/// Correction iterations per attempt.
pub const MAX_ITERATIONS: usize = 5;

/// Iterations that must have run before a whole meal may be swapped.
pub const REPLACE_AFTER_ITERATIONS: usize = 3;

/// Share of daily calories given to main meals when snacks are planned.
pub const MEAL_CALORIE_SHARE: f64 = 0.75;

/// Jitter spans: meals vary by ±10 %, snacks by ±15 %.
pub const MEAL_JITTER_SPAN: f64 = 0.2;
pub const SNACK_JITTER_SPAN: f64 = 0.3;

// ─────────────────────────────────────────────────────────────────────────────
// Acceptance bands (percent of target)
// ─────────────────────────────────────────────────────────────────────────────

pub const STRICT_LOW: f64 = 90.0;
pub const STRICT_HIGH: f64 = 110.0;
pub const FLEXIBLE_LOW: f64 = 85.0;
pub const FLEXIBLE_HIGH: f64 = 115.0;

/// Points lost per percent of deviation when scoring an attempt.
pub const SCORE_PENALTY_PER_PCT: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Targeted macro correction
// ─────────────────────────────────────────────────────────────────────────────

/// An under-target macro is pushed toward 95 %, an over-target one toward 105 %.
pub const CORRECTION_AIM_LOW: f64 = 0.95;
pub const CORRECTION_AIM_HIGH: f64 = 1.05;

/// Largest relative change to a single food in one correction.
pub const MAX_FOOD_CHANGE: f64 = 0.3;

/// Corrections never shrink a food below this many grams.
pub const MIN_FOOD_GRAMS: f64 = 10.0;

/// A correction stops once this share of the requested change is reached.
pub const CORRECTION_STOP_RATIO: f64 = 0.8;
