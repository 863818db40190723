//! Report module - console tables, observations and the JSON summary

pub mod analysis;
pub mod findings;
pub mod tables;

pub use analysis::*;
pub use findings::*;
pub use tables::*;
