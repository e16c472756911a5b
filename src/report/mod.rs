//! Reporting utilities: formatted terminal output for fits and catalogs.

pub mod format;

pub use format::*;
