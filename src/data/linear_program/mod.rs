//! # Representing linear programs
//!
//! The model in this module is what gets written: variables with bounds, integrality and a cost,
//! constraints with a lower and an upper bound on a sparse linear expression, and an objective
//! direction with a constant offset.
pub mod elements;
pub mod model;
