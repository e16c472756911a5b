//! Module catalog.
//!
//! A catalog is built in two steps:
//!
//! - `CatalogEntry`: raw, serializable data (unscaled bonus, optional skill gate)
//! - `Catalog::build`: resolve entries against `Skills` into `ModuleSpec`s
//!
//! The resulting `Catalog` is always sorted by bonus rank, so a search over it
//! applies additive bonuses before multiplicative ones.

use serde::{Deserialize, Serialize};

use crate::domain::{Bonus, Category, Skill, Skills};
use crate::error::AppError;

pub mod builtin;

pub use builtin::builtin_entries;

/// Unresolved bonus as written in a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BonusSpec {
    /// Flat MW before skill scaling.
    Additive { amount: f64 },
    Percent { percent: f64 },
}

impl BonusSpec {
    pub fn resolve(self, skills: &Skills) -> Bonus {
        match self {
            BonusSpec::Additive { amount } => Bonus::additive(amount, skills.power_grid_management),
            BonusSpec::Percent { percent } => Bonus::percent(percent),
        }
    }

    fn is_valid(self) -> bool {
        match self {
            BonusSpec::Additive { amount } => amount.is_finite(),
            // Below -100% the grid would change sign.
            BonusSpec::Percent { percent } => percent.is_finite() && percent > -100.0,
        }
    }
}

/// Minimum skill level needed to fit a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub skill: Skill,
    pub level: u8,
}

impl SkillRequirement {
    pub fn is_met(&self, skills: &Skills) -> bool {
        skills.level(self.skill) >= self.level
    }
}

/// One catalog row as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub bonus: BonusSpec,
    pub cost: f64,
    #[serde(default)]
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<SkillRequirement>,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, bonus: BonusSpec, cost: f64) -> Self {
        Self {
            name: name.into(),
            bonus,
            cost,
            category: Category::Low,
            requires: None,
        }
    }

    pub fn in_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn requires(mut self, skill: Skill, level: u8) -> Self {
        self.requires = Some(SkillRequirement { skill, level });
        self
    }

    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::config("Catalog entry with an empty name."));
        }
        if !(self.cost.is_finite() && self.cost >= 0.0) {
            return Err(AppError::config(format!(
                "Catalog entry '{}' has invalid cost {} (must be finite and >= 0).",
                self.name, self.cost
            )));
        }
        if !self.bonus.is_valid() {
            return Err(AppError::config(format!(
                "Catalog entry '{}' has an invalid bonus: {:?}.",
                self.name, self.bonus
            )));
        }
        Ok(())
    }
}

/// A resolved module, ready for the search.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleSpec {
    pub name: String,
    pub bonus: Bonus,
    pub cost: f64,
    pub category: Category,
    pub enabled: bool,
}

impl ModuleSpec {
    pub fn new(name: impl Into<String>, bonus: Bonus, cost: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            bonus,
            cost,
            category,
            enabled: true,
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// Modules in application order (additive before multiplicative).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    modules: Vec<ModuleSpec>,
}

impl Catalog {
    /// Resolve raw entries for the given skill levels.
    pub fn build(entries: &[CatalogEntry], skills: &Skills) -> Result<Self, AppError> {
        let mut modules = Vec::with_capacity(entries.len());
        for entry in entries {
            entry.validate()?;
            let enabled = entry.requires.is_none_or(|req| req.is_met(skills));
            modules.push(ModuleSpec {
                name: entry.name.clone(),
                bonus: entry.bonus.resolve(skills),
                cost: entry.cost,
                category: entry.category,
                enabled,
            });
        }

        let catalog = Self::from_modules(modules);
        tracing::debug!(
            modules = catalog.len(),
            enabled = catalog.enabled_count(),
            "catalog resolved"
        );
        Ok(catalog)
    }

    /// Wrap already-resolved modules, sorting them into application order.
    ///
    /// The sort is stable: modules of the same bonus kind keep their relative order.
    pub fn from_modules(mut modules: Vec<ModuleSpec>) -> Self {
        modules.sort_by_key(|m| m.bonus.rank());
        Self { modules }
    }

    pub fn modules(&self) -> &[ModuleSpec] {
        &self.modules
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn enabled_count(&self) -> usize {
        self.modules.iter().filter(|m| m.enabled).count()
    }

    /// Copy of this catalog with the named module switched off.
    pub fn without(&self, name: &str) -> Self {
        let modules = self
            .modules
            .iter()
            .cloned()
            .map(|m| {
                let keep = m.enabled && m.name != name;
                m.enabled(keep)
            })
            .collect();
        Self { modules }
    }
}
