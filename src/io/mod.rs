//! # Writing of linear programs
//!
//! This module provides write functionality for the LP and MPS formats.
use std::path::Path;

use enum_map::EnumMap;

use crate::data::linear_program::elements::VariableCategory;
use crate::data::linear_program::model::Model;
use crate::io::error::ExportError;
use crate::io::export::{ExportConfig, Exporter};
use crate::io::names::sanitize;

pub mod error;
pub mod export;
pub mod lp;
pub mod mps;
pub mod names;
pub mod number;

/// Number of variables in each category.
pub type CategoryCounts = EnumMap<VariableCategory, usize>;

/// A text format for linear programs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FileFormat {
    /// The CPLEX LP format.
    Lp,
    /// The MPS format, in fixed or free layout.
    Mps,
}

impl FileFormat {
    /// Recognise a format from a file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        if extension.eq_ignore_ascii_case("lp") {
            Some(FileFormat::Lp)
        } else if extension.eq_ignore_ascii_case("mps") {
            Some(FileFormat::Mps)
        } else {
            None
        }
    }

    /// Recognise a format from the extension of a file path.
    pub fn from_path(file_path: &Path) -> Option<Self> {
        file_path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Self::from_extension)
    }
}

/// Write a model in the LP format.
///
/// # Errors
///
/// See `Exporter::export_as_lp`.
pub fn export_as_lp(model: &Model, obfuscate: bool) -> Result<String, ExportError> {
    Exporter::new(model).export_as_lp(obfuscate)
}

/// Write a model in the MPS format.
///
/// # Errors
///
/// See `Exporter::export_as_mps`.
pub fn export_as_mps(model: &Model, prefer_fixed: bool, obfuscate: bool) -> Result<String, ExportError> {
    Exporter::new(model).export_as_mps(prefer_fixed, obfuscate)
}

/// Write a model in any supported format.
///
/// # Errors
///
/// See `Exporter::export`.
pub fn export(model: &Model, format: FileFormat, config: &ExportConfig) -> Result<String, ExportError> {
    Exporter::new(model).export(format, config)
}

/// Lines of the comment header at the top of each written file, without comment markers.
fn comment_lines(model: &Model, categories: &CategoryCounts, format: &str) -> Vec<String> {
    let name = model.name.as_deref()
        .filter(|name| !name.is_empty())
        .map_or_else(|| "(unnamed)".to_string(), sanitize);

    vec![
        format!("Generated by {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        format!("Name: {}", name),
        format!("Format: {}", format),
        format!("Constraints: {}", model.nr_constraints()),
        format!("Variables: {}", model.nr_variables()),
        format!("Binary: {}", categories[VariableCategory::Binary]),
        format!("Integer: {}", categories[VariableCategory::Integer]),
        format!("Continuous: {}", categories[VariableCategory::Continuous]),
    ]
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use crate::data::linear_program::elements::Objective;
    use crate::data::linear_program::model::{Model, Variable};
    use crate::io::{comment_lines, FileFormat};

    #[test]
    fn from_extension() {
        assert_eq!(FileFormat::from_extension("lp"), Some(FileFormat::Lp));
        assert_eq!(FileFormat::from_extension("MPS"), Some(FileFormat::Mps));
        assert_eq!(FileFormat::from_extension("sol"), None);
        assert_eq!(FileFormat::from_path(Path::new("model/afiro.mps")), Some(FileFormat::Mps));
        assert_eq!(FileFormat::from_path(Path::new("afiro")), None);
    }

    #[test]
    fn comments() {
        let mut model = Model::new(Objective::Minimize).with_name("a model");
        model.add_variable(Variable::binary());
        model.add_variable(Variable::continuous());

        let lines = comment_lines(&model, &model.category_counts(), "LP");
        assert_eq!(&lines[1..], [
            "Name: a_model",
            "Format: LP",
            "Constraints: 0",
            "Variables: 2",
            "Binary: 1",
            "Integer: 0",
            "Continuous: 1",
        ]);
    }
}
