pub mod export;
pub mod prompts;
pub mod render;

pub use export::{export_plan_csv, write_plan_csv};
pub use prompts::{collect_profile, match_meal_name, prompt_yes_no, resolve_meal_slot};
pub use render::{display_generation_report, display_meal, display_plan, display_targets};
