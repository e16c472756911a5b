//! Built-in catalog of EVE Online power grid upgrades.
//!
//! Costs are approximate market prices in thousands of ISK.

use crate::catalog::{BonusSpec, CatalogEntry};
use crate::domain::{Category, Skill};

fn flat(amount: f64) -> BonusSpec {
    BonusSpec::Additive { amount }
}

fn pct(percent: f64) -> BonusSpec {
    BonusSpec::Percent { percent }
}

/// The default module list, in listing order (not yet sorted by bonus kind).
pub fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        // Micro Auxiliary Power Cores
        CatalogEntry::new("Micro Auxiliary Power Core I", flat(10.0), 200.0),
        CatalogEntry::new("Vigor Compact Micro Auxiliary Power Core", flat(11.0), 13_500.0),
        CatalogEntry::new("Micro Auxiliary Power Core II", flat(12.0), 1_080.0)
            .requires(Skill::CapacitorManagement, 5),
        CatalogEntry::new("Navy Micro Auxiliary Power Core", flat(13.0), 7_900.0),
        CatalogEntry::new("Thukker Micro Auxiliary Power Core", flat(12.0), 55_000.0),
        // Reactor Control Units
        CatalogEntry::new("Reactor Control Unit I", pct(10.0), 6.0),
        CatalogEntry::new("Mark I Compact Reactor Control Unit", pct(12.0), 37.0),
        CatalogEntry::new("Reactor Control Unit II", pct(15.0), 592.0)
            .requires(Skill::EnergyGridUpgrades, 5),
        CatalogEntry::new("Dark Blood Reactor Control Unit", pct(15.5), 8_880.0),
        CatalogEntry::new("Brokara's Modified Reactor Control Unit", pct(16.27), 500_000.0),
        CatalogEntry::new("Chelm's Modified Reactor Control Unit", pct(18.6), 1_000_000.0),
        // Rigs
        CatalogEntry::new("Small Ancillary Current Router I", pct(10.0), 550.0)
            .in_category(Category::Rig),
        CatalogEntry::new("Small Ancillary Current Router II", pct(15.0), 4_100.0)
            .in_category(Category::Rig),
        // Power Diagnostic Systems
        CatalogEntry::new("Power Diagnostic System I", pct(5.0), 8.75).in_category(Category::Pds),
        CatalogEntry::new("Mark I Compact Power Diagnostic System", pct(5.5), 40.0)
            .in_category(Category::Pds),
        CatalogEntry::new("Power Diagnostic System II", pct(6.0), 1_160.0)
            .in_category(Category::Pds)
            .requires(Skill::EnergyGridUpgrades, 4),
    ]
}
