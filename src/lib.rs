//! `gridfit` library crate.
//!
//! The binary (`gridfit`) is a thin wrapper around this library so that:
//!
//! - the search is testable without spawning processes
//! - catalogs can be swapped in by callers and tests

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod report;
