//! Pipeline module - load, inspect and aggregate the Iris table

pub mod dataset;
pub mod error;
pub mod grouping;
pub mod inspect;
pub mod loader;
pub mod stats;

pub use dataset::*;
pub use error::LoadError;
pub use grouping::*;
pub use inspect::*;
pub use loader::*;
pub use stats::*;
