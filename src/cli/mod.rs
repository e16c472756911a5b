//! Command-line parsing for the power grid fitter.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the search code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{Skills, SlotCounts};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "gridfit",
    version,
    about = "Cheapest power grid upgrades for an EVE Online hull"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the cheapest modules that lift the hull grid to the target.
    Fit(FitArgs),
    /// Print the resolved module catalog for the given skills.
    Catalog(CatalogArgs),
}

/// Skill levels shared by all subcommands.
#[derive(Debug, Args, Clone, Copy)]
pub struct SkillArgs {
    /// Power Grid Management skill level.
    #[arg(long = "pgm", default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub power_grid_management: u8,

    /// Energy Grid Upgrades skill level.
    #[arg(long = "egu", default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub energy_grid_upgrades: u8,

    /// Capacitor Management skill level.
    #[arg(long = "cm", default_value_t = 5, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub capacitor_management: u8,
}

impl SkillArgs {
    pub fn to_skills(self) -> Skills {
        Skills {
            power_grid_management: self.power_grid_management,
            energy_grid_upgrades: self.energy_grid_upgrades,
            capacitor_management: self.capacitor_management,
        }
    }
}

/// Options for a fit.
#[derive(Debug, Args, Clone)]
pub struct FitArgs {
    /// Base hull power grid before any bonuses (MW).
    #[arg(long)]
    pub grid_start: Option<f64>,

    /// Minimum resulting power grid for the fit (MW).
    #[arg(long)]
    pub grid_needed: Option<f64>,

    /// Available low slots for non-PDS modules.
    #[arg(long, default_value_t = 0)]
    pub low: u32,

    /// Available rig slots.
    #[arg(long, default_value_t = 0)]
    pub rig: u32,

    /// Available low slots for Power Diagnostic Systems.
    #[arg(long, default_value_t = 0)]
    pub pds: u32,

    #[command(flatten)]
    pub skills: SkillArgs,

    /// Catalog JSON replacing the built-in module list.
    #[arg(long, value_name = "JSON")]
    pub catalog: Option<PathBuf>,

    /// Write the outcome to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}

impl FitArgs {
    pub fn slots(&self) -> SlotCounts {
        SlotCounts::new(self.low, self.rig, self.pds)
    }
}

/// Options for printing the catalog.
#[derive(Debug, Args, Clone)]
pub struct CatalogArgs {
    #[command(flatten)]
    pub skills: SkillArgs,

    /// Catalog JSON replacing the built-in module list.
    #[arg(long, value_name = "JSON")]
    pub catalog: Option<PathBuf>,

    /// Write the catalog entries to a JSON file (a template for `--catalog`).
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
