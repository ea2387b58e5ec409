//! # Writing linear programs
//!
//! Mixed integer linear programs are written in the CPLEX LP format and in the MPS format, in
//! either its fixed or its free layout.
//!
//! Names given to variables and constraints are made legal and unique before writing, or replaced
//! by generated names altogether when obfuscating. The model itself is never modified.
#![warn(missing_docs)]

pub mod data;
pub mod io;

pub use crate::data::linear_program::elements::{Objective, VariableCategory, VariableType};
pub use crate::data::linear_program::model::{Constraint, Model, Variable};
pub use crate::io::{export, export_as_lp, export_as_mps, FileFormat};
pub use crate::io::error::ExportError;
pub use crate::io::export::{ExportConfig, Exporter, MpsFormat};
