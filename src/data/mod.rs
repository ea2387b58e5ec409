//! # Storing of linear programs in memory
//!
//! This module provides the data structures used to represent linear programs in memory. The
//! writers in `io` only read from them.

pub mod linear_program;
pub mod linear_algebra;
