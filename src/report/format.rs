//! Formatted terminal output.
//!
//! We keep formatting code in one place so the search stays free of I/O and
//! output changes are localized.

use crate::catalog::Catalog;
use crate::domain::{FitResult, SlotCounts};

/// Format a successful fit: a summary line, a blank line, one module per line.
///
/// Catalog costs are in thousands of ISK, so the total is printed in millions.
pub fn format_fit(result: &FitResult) -> String {
    let mut out = format!(
        "grid: {:.2} MW  cost: {:.3}M ISK\n",
        result.final_grid,
        result.total_cost / 1_000.0
    );
    out.push('\n');
    for name in &result.modules {
        out.push_str(name);
        out.push('\n');
    }
    out
}

/// Message for a search that found no fit.
pub fn format_infeasible(grid_start: f64, grid_needed: f64, slots: &SlotCounts) -> String {
    format!(
        "No fit reaches {grid_needed:.2} MW from {grid_start:.2} MW with the available slots \
         (low={}, rig={}, pds={}).",
        slots.low, slots.rig, slots.pds
    )
}

/// One row per module in application order.
pub fn format_catalog(catalog: &Catalog) -> String {
    let name_width = catalog
        .modules()
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut out = format!(
        "{:<name_width$}  {:<4}  {:>10}  {:>14}  {}\n",
        "name", "slot", "bonus", "cost (k ISK)", "enabled"
    );
    for m in catalog.modules() {
        out.push_str(&format!(
            "{:<name_width$}  {:<4}  {:>10}  {:>14.2}  {}\n",
            m.name,
            m.category.display_name(),
            m.bonus.describe(),
            m.cost,
            if m.enabled { "yes" } else { "no" }
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ModuleSpec, builtin_entries};
    use crate::domain::{Bonus, Category, Skills};
    use crate::fit::fit_modules;

    #[test]
    fn format_fit_lists_each_unit() {
        let result = FitResult {
            final_grid: 102.5,
            total_cost: 1_400.0,
            modules: vec!["Micro Auxiliary Power Core I".to_string(); 2],
        };
        assert_eq!(
            format_fit(&result),
            "grid: 102.50 MW  cost: 1.400M ISK\n\n\
             Micro Auxiliary Power Core I\n\
             Micro Auxiliary Power Core I\n"
        );
    }

    #[test]
    fn format_fit_empty_fit_has_summary_only() {
        let result = FitResult {
            final_grid: 120.0,
            total_cost: 0.0,
            modules: vec![],
        };
        assert_eq!(format_fit(&result), "grid: 120.00 MW  cost: 0.000M ISK\n\n");
    }

    #[test]
    fn cheap_builtin_fit_is_not_printed_as_free() {
        let catalog = Catalog::build(&builtin_entries(), &Skills::default()).unwrap();
        let outcome = fit_modules(&catalog, SlotCounts::new(1, 0, 0), 40.0, 43.9);
        let result = outcome.fitted().unwrap();
        assert!((result.total_cost - 6.0).abs() < 1e-12);
        assert_eq!(
            format_fit(result),
            "grid: 44.00 MW  cost: 0.006M ISK\n\nReactor Control Unit I\n"
        );
    }

    #[test]
    fn format_infeasible_mentions_target_and_slots() {
        let msg = format_infeasible(90.0, 500.0, &SlotCounts::new(2, 0, 1));
        assert!(msg.contains("500.00 MW"));
        assert!(msg.contains("low=2, rig=0, pds=1"));
    }

    #[test]
    fn format_catalog_marks_disabled_modules() {
        let catalog = Catalog::from_modules(vec![
            ModuleSpec::new("Reactor Control Unit II", Bonus::percent(15.0), 592.0, Category::Low)
                .enabled(false),
        ]);
        let text = format_catalog(&catalog);
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("Reactor Control Unit II"));
        assert!(row.contains("+15.00%"));
        assert!(row.ends_with("no"));
    }
}
