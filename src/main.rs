use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use nutri_plan_rs::calculator::{body_metrics, calculate_maintenance_needs};
use nutri_plan_rs::cli::{Cli, Command};
use nutri_plan_rs::error::{PlannerError, Result};
use nutri_plan_rs::interface::{
    collect_profile, display_generation_report, display_meal, display_plan, display_targets,
    export_plan_csv, prompt_yes_no, resolve_meal_slot,
};
use nutri_plan_rs::state::{DietManager, JsonFileStore};

type Manager = DietManager<'static, JsonFileStore>;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = JsonFileStore::new(&cli.store);
    let mut manager = DietManager::new(store, &cli.user).with_policy(cli.policy);
    debug!(store = %cli.store, user = %cli.user, policy = ?cli.policy, "starting");

    match cli.command.unwrap_or_default() {
        Command::Onboard => cmd_onboard(&mut manager, &mut rng, cli.verbose),
        Command::Targets => cmd_targets(&manager),
        Command::Plan => cmd_plan(&mut manager, &mut rng),
        Command::Regenerate => cmd_regenerate(&mut manager, &mut rng, cli.verbose),
        Command::Replace { meal } => cmd_replace(&mut manager, &mut rng, &meal),
        Command::Export { path } => cmd_export(&manager, &path),
    }
}

/// Collect a profile, save it, and generate a first plan.
fn cmd_onboard(manager: &mut Manager, rng: &mut StdRng, verbose: bool) -> Result<()> {
    if manager.load_profile().is_ok()
        && !prompt_yes_no("A profile already exists. Replace it?", false)?
    {
        return Ok(());
    }

    let profile = collect_profile()?;
    manager.save_profile(&profile)?;
    println!("Profile saved for '{}'.", manager.user_id());

    cmd_targets(manager)?;
    cmd_regenerate(manager, rng, verbose)
}

fn cmd_targets(manager: &Manager) -> Result<()> {
    let profile = manager.load_profile()?;
    let baseline = calculate_maintenance_needs(&profile);
    let targets = manager.targets()?;
    let metrics = body_metrics(&profile)?;
    display_targets(&baseline, &targets, &metrics);
    Ok(())
}

fn cmd_plan(manager: &mut Manager, rng: &mut StdRng) -> Result<()> {
    let diet = manager.ensure_diet(rng)?;
    let targets = manager.targets()?;
    display_plan(&diet.plan, Some(&targets));
    println!(
        "Generated {}",
        diet.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    Ok(())
}

fn cmd_regenerate(manager: &mut Manager, rng: &mut StdRng, verbose: bool) -> Result<()> {
    let generation = manager.regenerate_diet(rng)?;
    if verbose {
        display_generation_report(&generation.report);
    }
    let targets = manager.targets()?;
    display_plan(&generation.diet.plan, Some(&targets));
    if !generation.saved {
        println!("The plan was not saved. Run 'regenerate' to try again.");
    }
    Ok(())
}

fn cmd_replace(manager: &mut Manager, rng: &mut StdRng, query: &str) -> Result<()> {
    let diet = manager
        .current_diet()?
        .ok_or_else(|| PlannerError::DietNotFound(manager.user_id().to_string()))?;
    let slot = resolve_meal_slot(&diet.plan.meals, query)?;
    let old_name = diet.plan.meals[slot].name.clone();

    match manager.replace_meal(slot, rng)? {
        Some(updated) => {
            println!("Replaced '{}' with:", old_name);
            display_meal(slot, &updated.plan.meals[slot]);
            println!();
            println!(
                "Day totals: {:.0} kcal | P {:.1} g  C {:.1} g  F {:.1} g",
                updated.plan.total_calories,
                updated.plan.total_protein,
                updated.plan.total_carbs,
                updated.plan.total_fat
            );
        }
        None => println!("No acceptable replacement found for '{}'.", old_name),
    }
    Ok(())
}

fn cmd_export(manager: &Manager, path: &str) -> Result<()> {
    let diet = manager
        .current_diet()?
        .ok_or_else(|| PlannerError::DietNotFound(manager.user_id().to_string()))?;
    export_plan_csv(&diet.plan, path)?;
    println!("Exported {} meals to {}", diet.plan.meals.len(), path);
    Ok(())
}
