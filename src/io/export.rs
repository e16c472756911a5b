//! Export a fit outcome to JSON.
//!
//! The export records the inputs alongside the outcome so a file is
//! self-describing when compared later.

use std::fs::File;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{FitConfig, FitOutcome, Skills, SlotCounts};
use crate::error::AppError;

/// JSON document written by `gridfit fit --export`.
#[derive(Debug, Clone, Serialize)]
pub struct FitExport<'a> {
    pub tool: &'static str,
    pub generated: DateTime<Utc>,
    pub grid_start: f64,
    pub grid_needed: f64,
    pub slots: SlotCounts,
    pub skills: Skills,
    pub outcome: &'a FitOutcome,
}

impl<'a> FitExport<'a> {
    pub fn new(config: &FitConfig, outcome: &'a FitOutcome, generated: DateTime<Utc>) -> Self {
        Self {
            tool: "gridfit",
            generated,
            grid_start: config.grid_start,
            grid_needed: config.grid_needed,
            slots: config.slots,
            skills: config.skills,
            outcome,
        }
    }
}

/// Write the outcome of a run to `path`.
pub fn write_outcome_json(path: &Path, config: &FitConfig, outcome: &FitOutcome) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::config(format!("Failed to create export JSON '{}': {e}", path.display())))?;

    let export = FitExport::new(config, outcome, Utc::now());
    serde_json::to_writer_pretty(file, &export)
        .map_err(|e| AppError::config(format!("Failed to write export JSON: {e}")))?;

    tracing::info!(path = %path.display(), "wrote fit export");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::domain::FitResult;

    fn config() -> FitConfig {
        FitConfig {
            grid_start: 90.0,
            grid_needed: 95.0,
            slots: SlotCounts::new(1, 0, 0),
            skills: Skills::default(),
            catalog_path: None,
            export: None,
        }
    }

    fn generated() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn fitted_export_carries_status_and_modules() {
        let outcome = FitOutcome::Fitted(FitResult {
            final_grid: 102.5,
            total_cost: 200.0,
            modules: vec!["Micro Auxiliary Power Core I".to_string()],
        });
        let value = serde_json::to_value(FitExport::new(&config(), &outcome, generated())).unwrap();
        assert_eq!(value["tool"], "gridfit");
        assert_eq!(value["outcome"]["status"], "fitted");
        assert_eq!(value["outcome"]["modules"][0], "Micro Auxiliary Power Core I");
        assert_eq!(value["slots"]["low"], 1);
        assert_eq!(value["skills"]["power_grid_management"], 5);
    }

    #[test]
    fn infeasible_export_is_distinct_from_zero_cost_fit() {
        let outcome = FitOutcome::Infeasible;
        let value = serde_json::to_value(FitExport::new(&config(), &outcome, generated())).unwrap();
        assert_eq!(value["outcome"]["status"], "infeasible");
        assert!(value["outcome"].get("total_cost").is_none());
    }
}
