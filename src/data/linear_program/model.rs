//! # Model
//!
//! A (mixed integer) linear program as supplied by the user. Nothing in this crate modifies it.
use enum_map::EnumMap;

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::{BoundKind, Objective, VariableCategory, VariableType};

/// A decision variable.
///
/// Bounds are inclusive, infinite values mean that there is no bound in that direction. The
/// default bounds are `[0, inf)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    /// Name as given by the user, it might not be a valid name in any file format.
    pub name: Option<String>,
    /// Whether the variable is restricted to integer values.
    pub variable_type: VariableType,
    /// Coefficient in the objective function.
    pub cost: f64,
    #[allow(missing_docs)]
    pub lower_bound: f64,
    #[allow(missing_docs)]
    pub upper_bound: f64,
}

impl Variable {
    /// Create a continuous variable with the default bounds `[0, inf)` and a zero cost.
    pub fn continuous() -> Self {
        Self {
            name: None,
            variable_type: VariableType::Continuous,
            cost: 0_f64,
            lower_bound: 0_f64,
            upper_bound: f64::INFINITY,
        }
    }

    /// Create an integer variable with the default bounds `[0, inf)` and a zero cost.
    pub fn integer() -> Self {
        Self {
            variable_type: VariableType::Integer,
            ..Self::continuous()
        }
    }

    /// Create an integer variable with bounds `[0, 1]`.
    pub fn binary() -> Self {
        Self::integer().with_bounds(0_f64, 1_f64)
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn with_bounds(mut self, lower_bound: f64, upper_bound: f64) -> Self {
        self.lower_bound = lower_bound;
        self.upper_bound = upper_bound;
        self
    }

    /// Whether this variable is an integer variable with bounds of exactly `[0, 1]`.
    #[allow(clippy::float_cmp)]
    pub fn is_binary(&self) -> bool {
        self.variable_type == VariableType::Integer
            && self.lower_bound == 0_f64
            && self.upper_bound == 1_f64
    }

    /// Classify this variable as continuous, general integer or binary.
    pub fn category(&self) -> VariableCategory {
        match self.variable_type {
            VariableType::Continuous => VariableCategory::Continuous,
            VariableType::Integer if self.is_binary() => VariableCategory::Binary,
            VariableType::Integer => VariableCategory::Integer,
        }
    }

    /// Whether the bounds are the default `[0, inf)`.
    #[allow(clippy::float_cmp)]
    pub fn has_default_bounds(&self) -> bool {
        self.lower_bound == 0_f64 && self.upper_bound == f64::INFINITY
    }
}

/// A linear constraint `lower_bound <= sum_j a_j x_j <= upper_bound`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    /// Name as given by the user, it might not be a valid name in any file format.
    pub name: Option<String>,
    /// Coefficients by variable index.
    ///
    /// Each variable index should appear at most once. Explicitly stored zeros are allowed and
    /// are never written.
    pub coefficients: Vec<SparseTuple<f64>>,
    #[allow(missing_docs)]
    pub lower_bound: f64,
    #[allow(missing_docs)]
    pub upper_bound: f64,
}

impl Constraint {
    /// Create a new constraint.
    ///
    /// # Arguments
    ///
    /// * `coefficients`: (variable index, coefficient) tuples.
    /// * `lower_bound`: Lower bound on the activity, may be `f64::NEG_INFINITY`.
    /// * `upper_bound`: Upper bound on the activity, may be `f64::INFINITY`.
    pub fn new(coefficients: Vec<SparseTuple<f64>>, lower_bound: f64, upper_bound: f64) -> Self {
        Self { name: None, coefficients, lower_bound, upper_bound }
    }

    /// Create a constraint `activity <= rhs`.
    pub fn less(coefficients: Vec<SparseTuple<f64>>, rhs: f64) -> Self {
        Self::new(coefficients, f64::NEG_INFINITY, rhs)
    }

    /// Create a constraint `activity >= rhs`.
    pub fn greater(coefficients: Vec<SparseTuple<f64>>, rhs: f64) -> Self {
        Self::new(coefficients, rhs, f64::INFINITY)
    }

    /// Create a constraint `activity == rhs`.
    pub fn equal(coefficients: Vec<SparseTuple<f64>>, rhs: f64) -> Self {
        Self::new(coefficients, rhs, rhs)
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[allow(missing_docs)]
    pub fn bound_kind(&self) -> BoundKind {
        BoundKind::classify(self.lower_bound, self.upper_bound)
    }
}

/// A (mixed integer) linear program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    /// Name of the problem, used in file headers only.
    pub name: Option<String>,
    /// Direction of optimization.
    pub objective: Objective,
    /// Constant term in the objective function.
    pub objective_offset: f64,
    /// Variables, their position is their index.
    pub variables: Vec<Variable>,
    /// Constraints, their position is their index.
    pub constraints: Vec<Constraint>,
}

impl Model {
    /// Create an empty model.
    pub fn new(objective: Objective) -> Self {
        Self { objective, ..Self::default() }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a variable and return its index.
    pub fn add_variable(&mut self, variable: Variable) -> usize {
        self.variables.push(variable);
        self.variables.len() - 1
    }

    /// Add a constraint and return its index.
    ///
    /// The variable indices in the constraint are not checked here; writing a model that
    /// references an unknown variable fails.
    pub fn add_constraint(&mut self, constraint: Constraint) -> usize {
        self.constraints.push(constraint);
        self.constraints.len() - 1
    }

    #[allow(missing_docs)]
    pub fn nr_variables(&self) -> usize {
        self.variables.len()
    }

    #[allow(missing_docs)]
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Count the variables in each `VariableCategory`.
    pub fn category_counts(&self) -> EnumMap<VariableCategory, usize> {
        let mut counts = EnumMap::default();
        for variable in &self.variables {
            counts[variable.category()] += 1;
        }

        counts
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{BoundKind, Objective, VariableCategory};
    use crate::data::linear_program::model::{Constraint, Model, Variable};

    #[test]
    fn category() {
        assert_eq!(Variable::continuous().category(), VariableCategory::Continuous);
        assert_eq!(Variable::integer().category(), VariableCategory::Integer);
        assert_eq!(Variable::binary().category(), VariableCategory::Binary);
        assert_eq!(Variable::integer().with_bounds(0.0, 2.0).category(), VariableCategory::Integer);
        assert_eq!(Variable::integer().with_bounds(-1.0, 1.0).category(), VariableCategory::Integer);
        assert_eq!(Variable::continuous().with_bounds(0.0, 1.0).category(), VariableCategory::Continuous);
    }

    #[test]
    fn category_counts() {
        let mut model = Model::new(Objective::Minimize);
        model.add_variable(Variable::continuous());
        model.add_variable(Variable::binary());
        model.add_variable(Variable::binary());
        model.add_variable(Variable::integer());

        let counts = model.category_counts();
        assert_eq!(counts[VariableCategory::Continuous], 1);
        assert_eq!(counts[VariableCategory::Integer], 1);
        assert_eq!(counts[VariableCategory::Binary], 2);
    }

    #[test]
    fn constraint_constructors() {
        assert_eq!(Constraint::less(vec![(0, 1.0)], 3.0).bound_kind(), BoundKind::Upper);
        assert_eq!(Constraint::greater(vec![(0, 1.0)], 3.0).bound_kind(), BoundKind::Lower);
        assert_eq!(Constraint::equal(vec![(0, 1.0)], 3.0).bound_kind(), BoundKind::Fixed);
        assert_eq!(Constraint::new(vec![(0, 1.0)], 2.0, 5.0).bound_kind(), BoundKind::Range);
    }

    #[test]
    fn indices() {
        let mut model = Model::default();
        assert_eq!(model.add_variable(Variable::continuous()), 0);
        assert_eq!(model.add_variable(Variable::continuous()), 1);
        assert_eq!(model.add_constraint(Constraint::less(vec![(1, 1.0)], 1.0)), 0);
        assert_eq!(model.nr_variables(), 2);
        assert_eq!(model.nr_constraints(), 1);
        assert_eq!(model.objective, Objective::Minimize);
    }
}
