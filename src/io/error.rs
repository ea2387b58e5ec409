//! # Error reporting for writing of linear program files
//!
//! All problems that can be encountered while converting a model into text.
use std::error::Error;
use std::fmt;
use std::fmt::Display;

/// An `ExportError` is created when a model can't be written in the requested format.
///
/// None of the variants is recoverable by retrying: writing is deterministic, so either the model
/// or the requested format has to change.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ExportError {
    /// A constraint has a coefficient for a variable that doesn't exist.
    InvalidReference {
        /// Index of the constraint containing the coefficient.
        constraint: usize,
        /// The variable index that was referenced.
        variable: usize,
        /// Number of variables in the model.
        nr_variables: usize,
    },
    /// The MPS format can only describe minimization problems.
    UnsupportedObjective,
    /// A name doesn't fit in the fixed MPS format.
    ///
    /// Only returned when the fixed format was explicitly required, otherwise the free format is
    /// used instead.
    NameTooLong {
        /// The first name found that is too long.
        name: String,
        /// The maximum length of a name in this format.
        limit: usize,
    },
    /// No unique name could be derived for an entity.
    NamingCollisionUnresolvable {
        /// The name that all attempted alternatives were derived from.
        name: String,
    },
}

impl Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportError::InvalidReference { constraint, variable, nr_variables } => write!(
                f,
                "Constraint {} references variable {}, but there are only {} variables",
                constraint, variable, nr_variables,
            ),
            ExportError::UnsupportedObjective => {
                f.write_str("The MPS format can only describe minimization problems")
            },
            ExportError::NameTooLong { name, limit } => write!(
                f,
                "Name \"{}\" is longer than {} characters and doesn't fit the fixed MPS format",
                name, limit,
            ),
            ExportError::NamingCollisionUnresolvable { name } => write!(
                f, "Could not derive a unique name from \"{}\"", name,
            ),
        }
    }
}

impl Error for ExportError {}

#[cfg(test)]
mod test {
    use crate::io::error::ExportError;

    #[test]
    fn display() {
        let error = ExportError::InvalidReference { constraint: 1, variable: 5, nr_variables: 2 };
        assert_eq!(
            error.to_string(),
            "Constraint 1 references variable 5, but there are only 2 variables",
        );

        let error = ExportError::NameTooLong { name: "abcdefghi".to_string(), limit: 8 };
        assert!(error.to_string().contains("abcdefghi"));
    }
}
