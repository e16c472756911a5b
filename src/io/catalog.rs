//! Read/write catalog JSON files.
//!
//! A catalog file is a JSON array of `CatalogEntry` objects:
//!
//! ```json
//! [
//!   { "name": "Reactor Control Unit I", "bonus": { "kind": "percent", "percent": 10.0 }, "cost": 6.0 },
//!   { "name": "Power Diagnostic System II", "bonus": { "kind": "percent", "percent": 6.0 },
//!     "cost": 1160.0, "category": "pds",
//!     "requires": { "skill": "energy_grid_upgrades", "level": 4 } }
//! ]
//! ```
//!
//! `category` defaults to `low`; `requires` is optional.

use std::fs::File;
use std::path::Path;

use crate::catalog::CatalogEntry;
use crate::error::AppError;

/// Read catalog entries from a JSON file.
pub fn read_catalog_json(path: &Path) -> Result<Vec<CatalogEntry>, AppError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::config(format!("Failed to open catalog JSON '{}': {e}", path.display())))?;
    let entries = parse_catalog_json(&text).map_err(|e| {
        AppError::config(format!("{} ('{}')", e.message(), path.display()))
    })?;
    tracing::info!(path = %path.display(), entries = entries.len(), "loaded catalog file");
    Ok(entries)
}

/// Parse catalog entries from a JSON string.
pub fn parse_catalog_json(text: &str) -> Result<Vec<CatalogEntry>, AppError> {
    serde_json::from_str(text).map_err(|e| AppError::config(format!("Invalid catalog JSON: {e}")))
}

/// Write catalog entries as pretty-printed JSON (a starting point for custom catalogs).
pub fn write_catalog_json(path: &Path, entries: &[CatalogEntry]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create catalog JSON '{}': {e}", path.display()))
    })?;
    serde_json::to_writer_pretty(file, entries)
        .map_err(|e| AppError::config(format!("Failed to write catalog JSON: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BonusSpec, SkillRequirement};
    use crate::domain::{Category, Skill};

    #[test]
    fn parse_applies_defaults() {
        let text = r#"[
            { "name": "Reactor Control Unit I", "bonus": { "kind": "percent", "percent": 10.0 }, "cost": 6 },
            { "name": "Power Diagnostic System II", "bonus": { "kind": "percent", "percent": 6.0 },
              "cost": 1160, "category": "pds",
              "requires": { "skill": "energy_grid_upgrades", "level": 4 } },
            { "name": "Micro Auxiliary Power Core I", "bonus": { "kind": "additive", "amount": 10 }, "cost": 200 }
        ]"#;
        let entries = parse_catalog_json(text).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].category, Category::Low);
        assert_eq!(entries[0].requires, None);
        assert_eq!(entries[1].category, Category::Pds);
        assert_eq!(
            entries[1].requires,
            Some(SkillRequirement {
                skill: Skill::EnergyGridUpgrades,
                level: 4
            })
        );
        assert_eq!(entries[2].bonus, BonusSpec::Additive { amount: 10.0 });
    }

    #[test]
    fn parse_rejects_unknown_bonus_kind() {
        let text = r#"[{ "name": "x", "bonus": { "kind": "exponential", "rate": 2 }, "cost": 1 }]"#;
        let err = parse_catalog_json(text).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }

    #[test]
    fn read_reports_parse_errors_with_path() {
        let path = std::env::temp_dir().join(format!("gridfit-bad-catalog-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{ "name": "x", "cost": 1 }]"#).unwrap();
        let err = read_catalog_json(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(err.message().starts_with("Invalid catalog JSON"));
        assert!(err.message().contains("gridfit-bad-catalog"));
        assert_eq!(err.exit_code(), crate::error::EXIT_CONFIG);
    }

    #[test]
    fn read_missing_file_is_config_error() {
        let err = read_catalog_json(Path::new("/nonexistent/gridfit-catalog.json")).unwrap_err();
        assert!(err.message().contains("Failed to open catalog JSON"));
    }

    #[test]
    fn written_builtin_catalog_keeps_gates_and_categories() {
        let entries = crate::catalog::builtin_entries();
        let path = std::env::temp_dir().join(format!("gridfit-catalog-{}.json", std::process::id()));
        write_catalog_json(&path, &entries).unwrap();
        let back = read_catalog_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back.len(), entries.len());
        for (a, b) in back.iter().zip(&entries) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.category, b.category);
            assert_eq!(a.requires, b.requires);
            assert!((a.cost - b.cost).abs() < 1e-9);
        }
    }
}
