//! Domain types used throughout the fitter.
//!
//! This module defines:
//!
//! - grid bonuses (`Bonus`)
//! - slot categories and counts (`Category`, `SlotCounts`)
//! - skill levels (`Skill`, `Skills`)
//! - run configuration and fit outputs (`FitConfig`, `FitResult`, `FitOutcome`)

pub mod bonus;
pub mod types;

pub use bonus::*;
pub use types::*;
