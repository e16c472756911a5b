//! Cheapest-fit search over a module catalog.
//!
//! Given:
//! - a catalog sorted in application order
//! - free slots per category
//! - a starting grid and a target grid
//!
//! we walk the catalog with an index cursor and, for each module, try every
//! quantity from zero up to the free slots of its category. Each branch gets
//! its own copy of the slot counts, so siblings never see each other's picks.
//!
//! A branch stops as soon as its grid reaches the target; modules past that
//! point would only add cost.
//!
//! Ties on total cost keep the first branch found. Quantities are tried in
//! ascending order, so a tie resolves to fewer units of the earlier module
//! (and therefore more of a later one).

use crate::catalog::{Catalog, ModuleSpec};
use crate::domain::{FitOutcome, FitResult, SlotCounts};

/// Search driver bound to one catalog and one target grid.
#[derive(Debug, Clone, Copy)]
pub struct Fitter<'a> {
    catalog: &'a Catalog,
    grid_needed: f64,
}

impl<'a> Fitter<'a> {
    pub fn new(catalog: &'a Catalog, grid_needed: f64) -> Self {
        Self {
            catalog,
            grid_needed,
        }
    }

    /// Find the cheapest module combination lifting `grid_start` to the target.
    pub fn fit(&self, slots: SlotCounts, grid_start: f64) -> FitOutcome {
        let mut search = Search {
            modules: self.catalog.modules(),
            grid_needed: self.grid_needed,
            nodes: 0,
        };
        let best = search.branch(0, slots, grid_start);

        let outcome = match best {
            Some(branch) => FitOutcome::Fitted(branch.into_result(search.modules)),
            None => FitOutcome::Infeasible,
        };
        tracing::debug!(
            nodes = search.nodes,
            feasible = outcome.is_feasible(),
            cost = outcome.cost_or_infinity(),
            "grid search finished"
        );
        outcome
    }
}

/// Convenience wrapper around [`Fitter::fit`].
pub fn fit_modules(
    catalog: &Catalog,
    slots: SlotCounts,
    grid_start: f64,
    grid_needed: f64,
) -> FitOutcome {
    Fitter::new(catalog, grid_needed).fit(slots, grid_start)
}

/// A feasible partial solution: everything chosen from some cursor onward.
#[derive(Debug, Clone)]
struct Branch {
    grid: f64,
    cost: f64,
    /// `(catalog index, quantity)` in catalog order, quantities > 0 only.
    picks: Vec<(usize, u32)>,
}

impl Branch {
    fn reached(grid: f64) -> Self {
        Self {
            grid,
            cost: 0.0,
            picks: Vec::new(),
        }
    }

    fn into_result(self, modules: &[ModuleSpec]) -> FitResult {
        let names = self
            .picks
            .iter()
            .flat_map(|&(idx, count)| std::iter::repeat_n(modules[idx].name.clone(), count as usize))
            .collect();
        FitResult {
            final_grid: self.grid,
            total_cost: self.cost,
            modules: names,
        }
    }
}

struct Search<'a> {
    modules: &'a [ModuleSpec],
    grid_needed: f64,
    nodes: u64,
}

impl Search<'_> {
    fn branch(&mut self, cursor: usize, slots: SlotCounts, grid: f64) -> Option<Branch> {
        self.nodes += 1;

        if grid >= self.grid_needed {
            return Some(Branch::reached(grid));
        }
        let module = self.modules.get(cursor)?;
        if slots.is_exhausted() {
            return None;
        }
        if !module.enabled {
            return self.branch(cursor + 1, slots, grid);
        }

        let mut best: Option<Branch> = None;
        // Grid after `count` units of this module; one more application per step.
        let mut stacked = grid;
        for count in 0..=slots.get(module.category) {
            let Some(remaining) = slots.take(module.category, count) else {
                break;
            };
            if let Some(mut rest) = self.branch(cursor + 1, remaining, stacked) {
                rest.cost += module.cost * f64::from(count);
                if best.as_ref().is_none_or(|b| rest.cost < b.cost) {
                    if count > 0 {
                        rest.picks.insert(0, (cursor, count));
                    }
                    best = Some(rest);
                }
            }
            stacked = module.bonus.apply(stacked);
        }
        best
    }
}
