//! # Exporting a model
//!
//! Combines the name tables, the layout decision and the writers. An `Exporter` keeps the derived
//! data of its model between exports.
use tracing::debug;

use crate::data::linear_program::model::Model;
use crate::io::{CategoryCounts, FileFormat, lp, mps};
use crate::io::error::ExportError;
use crate::io::mps::{can_use_fixed_format, check_fixed_format, FIXED_NAME_LENGTH, Layout};
use crate::io::names::ModelNames;

/// How to choose the layout of MPS files.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum MpsFormat {
    /// Always use the free layout.
    Free,
    /// Use the fixed layout when all names fit, the free layout otherwise.
    #[default]
    PreferFixed,
    /// Always use the fixed layout, failing when a name doesn't fit.
    Fixed,
}

impl MpsFormat {
    /// Translate the boolean preference of the simple interface.
    pub fn preferring_fixed(prefer_fixed: bool) -> Self {
        if prefer_fixed {
            MpsFormat::PreferFixed
        } else {
            MpsFormat::Free
        }
    }
}

/// Settings of a single export.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct ExportConfig {
    /// Replace all names by a prefix followed by the 1-based index.
    pub obfuscate: bool,
    /// Layout of MPS files, ignored for other formats.
    pub mps_format: MpsFormat,
}

/// Data derived from the model that doesn't depend on the format.
#[derive(Debug)]
struct Derived {
    names: ModelNames,
    categories: CategoryCounts,
}

/// Writes a model, possibly several times and in different formats.
///
/// The names and category counts are computed on the first export, and computed again only when
/// an export asks for different obfuscation.
#[derive(Debug)]
pub struct Exporter<'a> {
    model: &'a Model,
    cache: Option<Derived>,
}

impl<'a> Exporter<'a> {
    #[allow(missing_docs)]
    pub fn new(model: &'a Model) -> Self {
        Self { model, cache: None }
    }

    /// Write the model in the LP format.
    ///
    /// # Errors
    ///
    /// If a constraint references a variable that doesn't exist, or names can't be made unique.
    pub fn export_as_lp(&mut self, obfuscate: bool) -> Result<String, ExportError> {
        self.export(FileFormat::Lp, &ExportConfig { obfuscate, mps_format: MpsFormat::default() })
    }

    /// Write the model in the MPS format.
    ///
    /// # Arguments
    ///
    /// * `prefer_fixed`: Use the fixed layout if all names fit. When they don't, the free layout is
    /// used instead.
    /// * `obfuscate`: Replace all names by a prefix followed by the 1-based index.
    ///
    /// # Errors
    ///
    /// If the model is a maximization problem, a constraint references a variable that doesn't
    /// exist, or names can't be made unique.
    pub fn export_as_mps(&mut self, prefer_fixed: bool, obfuscate: bool) -> Result<String, ExportError> {
        let config = ExportConfig { obfuscate, mps_format: MpsFormat::preferring_fixed(prefer_fixed) };
        self.export(FileFormat::Mps, &config)
    }

    /// Write the model in the requested format.
    ///
    /// # Errors
    ///
    /// Any of the errors of the format's writer. With `MpsFormat::Fixed`, also when a name is too
    /// long for the fixed layout.
    pub fn export(&mut self, format: FileFormat, config: &ExportConfig) -> Result<String, ExportError> {
        debug!(
            ?format,
            obfuscate = config.obfuscate,
            variables = self.model.nr_variables(),
            constraints = self.model.nr_constraints(),
            "exporting model"
        );

        let model = self.model;
        let Derived { names, categories } = self.derived(config.obfuscate)?;
        match format {
            FileFormat::Lp => lp::write(model, names, categories),
            FileFormat::Mps => {
                let layout = choose_layout(names, config.mps_format)?;
                mps::write(model, names, categories, layout)
            },
        }
    }

    /// The derived data for the requested obfuscation, from the cache if possible.
    fn derived(&mut self, obfuscate: bool) -> Result<&Derived, ExportError> {
        let derived = match self.cache.take() {
            Some(derived) if derived.names.is_obfuscated() == obfuscate => derived,
            _ => {
                debug!(obfuscate, "building name tables");
                Derived {
                    names: ModelNames::build(self.model, obfuscate)?,
                    categories: self.model.category_counts(),
                }
            },
        };

        Ok(&*self.cache.insert(derived))
    }
}

/// Decide on the layout of an MPS file.
///
/// # Errors
///
/// When the fixed layout is required but a name doesn't fit.
fn choose_layout(names: &ModelNames, mps_format: MpsFormat) -> Result<Layout, ExportError> {
    match mps_format {
        MpsFormat::Free => Ok(Layout::Free),
        MpsFormat::PreferFixed => {
            if can_use_fixed_format(&names.variables, &names.constraints, names.is_obfuscated()) {
                Ok(Layout::Fixed)
            } else {
                debug!("names longer than {} characters, using the free layout", FIXED_NAME_LENGTH);
                Ok(Layout::Free)
            }
        },
        MpsFormat::Fixed => check_fixed_format(names).map(|()| Layout::Fixed),
    }
}
