//! Fit search.
//!
//! Responsibilities:
//!
//! - walk a sorted catalog with bounded quantities per slot category
//! - keep the cheapest branch that reaches the target grid
//! - report infeasibility as an ordinary outcome

pub mod fitter;

pub use fitter::*;
