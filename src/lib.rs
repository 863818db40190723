//! iris-eda: Exploratory Data Analysis Library
//!
//! Loads the Iris dataset into a polars `DataFrame`, inspects and aggregates
//! it, builds four exploratory charts and checks a fixed set of observations
//! against the computed statistics.

pub mod charts;
pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
