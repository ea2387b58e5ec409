//! # Building blocks to describe linear programs.
use enum_map::Enum;

/// A variable is either continuous or integer.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum VariableType {
    Continuous,
    Integer,
}

/// Finer classification of a variable than its `VariableType`.
///
/// Integer variables with bounds of exactly `[0, 1]` are binary; all other integer variables are
/// general integers. These categories are disjoint.
#[allow(missing_docs)]
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum VariableCategory {
    Continuous,
    Integer,
    Binary,
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

/// How the bounds of a constraint restrict its activity.
///
/// Derived from a `(lower, upper)` pair, where infinite values mean "no bound".
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BoundKind {
    /// Both bounds are infinite.
    Free,
    /// Only the lower bound is finite.
    Lower,
    /// Only the upper bound is finite.
    Upper,
    /// The bounds are equal.
    Fixed,
    /// Both bounds are finite and distinct.
    Range,
}

impl BoundKind {
    /// Classify a pair of bounds.
    ///
    /// Equal bounds are `Fixed` even when they are both infinite; such a pair is inconsistent
    /// anyway and writing it as an equality keeps it visible.
    #[allow(clippy::float_cmp)]
    pub fn classify(lower: f64, upper: f64) -> Self {
        if lower == upper {
            BoundKind::Fixed
        } else {
            match (lower == f64::NEG_INFINITY, upper == f64::INFINITY) {
                (true, true) => BoundKind::Free,
                (true, false) => BoundKind::Upper,
                (false, true) => BoundKind::Lower,
                (false, false) => BoundKind::Range,
            }
        }
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::BoundKind;

    #[test]
    fn classify() {
        assert_eq!(BoundKind::classify(f64::NEG_INFINITY, f64::INFINITY), BoundKind::Free);
        assert_eq!(BoundKind::classify(1.0, f64::INFINITY), BoundKind::Lower);
        assert_eq!(BoundKind::classify(f64::NEG_INFINITY, 3.0), BoundKind::Upper);
        assert_eq!(BoundKind::classify(2.0, 2.0), BoundKind::Fixed);
        assert_eq!(BoundKind::classify(2.0, 5.0), BoundKind::Range);
    }
}
