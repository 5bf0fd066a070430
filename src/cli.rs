use clap::{Parser, Subcommand};

use crate::calculator::CalorieAdjustment;

/// NutriPlan: personalised daily meal plans from a fixed food and meal catalog.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding per-user profile and diet documents.
    #[arg(short, long, default_value = "nutri_data")]
    pub store: String,

    /// User identifier (letters, digits, '-' and '_').
    #[arg(short, long, default_value = "default")]
    pub user: String,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Seed for reproducible plans.
    #[arg(long)]
    pub seed: Option<u64>,

    /// How the goal adjusts maintenance calories.
    #[arg(long, value_enum, default_value_t = CalorieAdjustment::Percentage)]
    pub policy: CalorieAdjustment,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Answer the profile questionnaire and generate a first plan.
    Onboard,

    /// Show maintenance needs and goal-adjusted targets.
    Targets,

    /// Show the current plan, generating one if needed.
    #[default]
    Plan,

    /// Discard the current plan and generate a new one.
    Regenerate,

    /// Swap one meal of the current plan.
    Replace {
        /// Slot number (1-based) or meal name.
        meal: String,
    },

    /// Write the current plan to a CSV file.
    Export {
        /// Output CSV path.
        path: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["nutri_plan"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.store, "nutri_data");
        assert_eq!(cli.user, "default");
        assert_eq!(cli.policy, CalorieAdjustment::Percentage);
        assert!(matches!(cli.command.unwrap_or_default(), Command::Plan));
    }

    #[test]
    fn test_replace_and_flags() {
        let cli = Cli::parse_from([
            "nutri_plan",
            "--user",
            "alice",
            "--seed",
            "7",
            "--policy",
            "fixed",
            "replace",
            "2",
        ]);
        assert_eq!(cli.user, "alice");
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.policy, CalorieAdjustment::Fixed);
        assert!(matches!(cli.command, Some(Command::Replace { ref meal }) if meal == "2"));
    }
}
