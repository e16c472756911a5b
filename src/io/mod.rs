//! Input/output helpers.
//!
//! - catalog JSON read/write (`catalog`)
//! - fit outcome export (`export`)

pub mod catalog;
pub mod export;

pub use catalog::*;
pub use export::*;
