//! Shared domain types.
//!
//! Slot counts and skills are small `Copy` values so the search can hand each
//! branch its own copy without sharing state between siblings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Number of independent slot pools.
pub const CATEGORY_COUNT: usize = 3;

/// Slot pool a module is fitted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Low slots available to general modules.
    #[default]
    Low,
    /// Rig slots.
    Rig,
    /// Low slots reserved for Power Diagnostic Systems.
    Pds,
}

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [Category::Low, Category::Rig, Category::Pds];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Low => "low",
            Category::Rig => "rig",
            Category::Pds => "pds",
        }
    }
}

/// Remaining slots per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCounts {
    pub low: u32,
    pub rig: u32,
    pub pds: u32,
}

impl SlotCounts {
    pub const fn new(low: u32, rig: u32, pds: u32) -> Self {
        Self { low, rig, pds }
    }

    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Low => self.low,
            Category::Rig => self.rig,
            Category::Pds => self.pds,
        }
    }

    fn get_mut(&mut self, category: Category) -> &mut u32 {
        match category {
            Category::Low => &mut self.low,
            Category::Rig => &mut self.rig,
            Category::Pds => &mut self.pds,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|&c| self.get(c)).sum()
    }

    /// True when no category has a free slot left.
    pub fn is_exhausted(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c) == 0)
    }

    /// Copy with `count` slots of `category` consumed.
    ///
    /// Returns `None` if that would take the category below zero.
    pub fn take(self, category: Category, count: u32) -> Option<Self> {
        let mut out = self;
        let slot = out.get_mut(category);
        *slot = slot.checked_sub(count)?;
        Some(out)
    }

    /// Copy with one extra slot of `category`.
    pub fn with_extra(self, category: Category) -> Self {
        let mut out = self;
        *out.get_mut(category) += 1;
        out
    }
}

/// Skills that affect which modules can be fitted and how strong they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Scales additive bonuses by 5% per level.
    PowerGridManagement,
    EnergyGridUpgrades,
    CapacitorManagement,
}

impl Skill {
    pub const ALL: [Skill; 3] = [
        Skill::PowerGridManagement,
        Skill::EnergyGridUpgrades,
        Skill::CapacitorManagement,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Skill::PowerGridManagement => "Power Grid Management",
            Skill::EnergyGridUpgrades => "Energy Grid Upgrades",
            Skill::CapacitorManagement => "Capacitor Management",
        }
    }
}

/// Trained skill levels (0-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skills {
    pub power_grid_management: u8,
    pub energy_grid_upgrades: u8,
    pub capacitor_management: u8,
}

impl Skills {
    pub const MAX_LEVEL: u8 = 5;

    pub fn level(&self, skill: Skill) -> u8 {
        match skill {
            Skill::PowerGridManagement => self.power_grid_management,
            Skill::EnergyGridUpgrades => self.energy_grid_upgrades,
            Skill::CapacitorManagement => self.capacitor_management,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for skill in Skill::ALL {
            let level = self.level(skill);
            if level > Self::MAX_LEVEL {
                return Err(AppError::config(format!(
                    "{} level must be 0-{}, got {level}.",
                    skill.display_name(),
                    Self::MAX_LEVEL
                )));
            }
        }
        Ok(())
    }
}

impl Default for Skills {
    fn default() -> Self {
        Self {
            power_grid_management: Self::MAX_LEVEL,
            energy_grid_upgrades: Self::MAX_LEVEL,
            capacitor_management: Self::MAX_LEVEL,
        }
    }
}

/// A full run's configuration as understood by the fitter.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct FitConfig {
    /// Hull power grid before any module.
    pub grid_start: f64,
    /// Minimum grid the fit must reach.
    pub grid_needed: f64,
    pub slots: SlotCounts,
    pub skills: Skills,
    /// Replacement catalog (JSON). `None` uses the built-in catalog.
    pub catalog_path: Option<PathBuf>,
    /// Where to write the outcome as JSON.
    pub export: Option<PathBuf>,
}

impl FitConfig {
    /// Check the configuration before any search runs.
    pub fn validate(&self) -> Result<(), AppError> {
        if !(self.grid_start.is_finite() && self.grid_start > 0.0) {
            return Err(AppError::config(format!(
                "grid-start must be a positive number, got {}.",
                self.grid_start
            )));
        }
        if !(self.grid_needed.is_finite() && self.grid_needed > 0.0) {
            return Err(AppError::config(format!(
                "grid-needed must be a positive number, got {}.",
                self.grid_needed
            )));
        }
        if self.slots.total() == 0 {
            return Err(AppError::config(
                "Slot counts should be non-negative integers; at least one positive.",
            ));
        }
        self.skills.validate()
    }
}

/// A successful fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitResult {
    /// Grid reached with the chosen modules.
    pub final_grid: f64,
    pub total_cost: f64,
    /// Chosen module names in application order, one entry per unit.
    pub modules: Vec<String>,
}

/// Result of a search: either a fit or a proof that none exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FitOutcome {
    Fitted(FitResult),
    Infeasible,
}

impl FitOutcome {
    pub fn fitted(&self) -> Option<&FitResult> {
        match self {
            FitOutcome::Fitted(result) => Some(result),
            FitOutcome::Infeasible => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, FitOutcome::Fitted(_))
    }

    /// Total cost, or `+inf` when infeasible (handy for comparisons).
    pub fn cost_or_infinity(&self) -> f64 {
        self.fitted().map_or(f64::INFINITY, |r| r.total_cost)
    }
}
