//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and sets up logging
//! - parses CLI arguments
//! - validates the configuration and resolves the catalog
//! - runs the search and prints the report
//! - writes optional exports

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::catalog::{Catalog, CatalogEntry, builtin_entries};
use crate::cli::{CatalogArgs, Command, FitArgs};
use crate::domain::{FitConfig, FitOutcome, Skills};
use crate::error::{AppError, EXIT_INFEASIBLE};
use crate::fit::Fitter;

/// Entry point for the `gridfit` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Fit(args) => handle_fit(&args),
        Command::Catalog(args) => handle_catalog(&args),
    }
}

/// Log to stderr so stdout only carries the report. `RUST_LOG` overrides `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_fit(args: &FitArgs) -> Result<(), AppError> {
    let config = fit_config_from_args(args)?;
    let catalog = load_catalog(config.catalog_path.as_deref(), &config.skills)?;

    let outcome = run_fit(&config, &catalog);

    if let Some(path) = &config.export {
        crate::io::export::write_outcome_json(path, &config, &outcome)?;
    }

    print!("{}", fit_report(&config, &outcome)?);
    Ok(())
}

/// Report text for a fit, or an [`EXIT_INFEASIBLE`] error when none was found.
pub fn fit_report(config: &FitConfig, outcome: &FitOutcome) -> Result<String, AppError> {
    match outcome {
        FitOutcome::Fitted(result) => Ok(crate::report::format_fit(result)),
        FitOutcome::Infeasible => Err(AppError::new(
            EXIT_INFEASIBLE,
            crate::report::format_infeasible(config.grid_start, config.grid_needed, &config.slots),
        )),
    }
}

fn handle_catalog(args: &CatalogArgs) -> Result<(), AppError> {
    let skills = args.skills.to_skills();
    let entries = load_entries(args.catalog.as_deref())?;
    let catalog = Catalog::build(&entries, &skills)?;
    print!("{}", crate::report::format_catalog(&catalog));

    if let Some(path) = &args.export {
        crate::io::catalog::write_catalog_json(path, &entries)?;
    }
    Ok(())
}

/// Run the search for a validated configuration.
pub fn run_fit(config: &FitConfig, catalog: &Catalog) -> FitOutcome {
    tracing::info!(
        grid_start = config.grid_start,
        grid_needed = config.grid_needed,
        low = config.slots.low,
        rig = config.slots.rig,
        pds = config.slots.pds,
        modules = catalog.enabled_count(),
        "searching for cheapest fit"
    );
    Fitter::new(catalog, config.grid_needed).fit(config.slots, config.grid_start)
}

/// Resolve the catalog from a JSON file, or the built-in list when `path` is `None`.
pub fn load_catalog(path: Option<&Path>, skills: &Skills) -> Result<Catalog, AppError> {
    let entries = load_entries(path)?;
    Catalog::build(&entries, skills)
}

fn load_entries(path: Option<&Path>) -> Result<Vec<CatalogEntry>, AppError> {
    match path {
        Some(path) => crate::io::catalog::read_catalog_json(path),
        None => Ok(builtin_entries()),
    }
}

/// Build and validate a `FitConfig` from CLI flags.
pub fn fit_config_from_args(args: &FitArgs) -> Result<FitConfig, AppError> {
    let grid_start = args
        .grid_start
        .ok_or_else(|| AppError::config("No grid-start specified."))?;
    let grid_needed = args
        .grid_needed
        .ok_or_else(|| AppError::config("No grid-needed specified."))?;

    let config = FitConfig {
        grid_start,
        grid_needed,
        slots: args.slots(),
        skills: args.skills.to_skills(),
        catalog_path: args.catalog.clone(),
        export: args.export.clone(),
    };
    config.validate()?;
    Ok(config)
}

/// Rewrite argv so `gridfit` defaults to `gridfit fit`.
///
/// Rules:
/// - `gridfit --grid-start 90 ...` -> `gridfit fit --grid-start 90 ...`
/// - `gridfit --help/--version/-h` -> unchanged (show top-level help/version)
/// - `gridfit` with no arguments   -> unchanged (clap prints usage)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "fit" | "catalog");
    if is_subcommand {
        return argv;
    }

    if arg1.starts_with('-') {
        argv.insert(1, "fit".to_string());
    }
    argv
}
