//! # Writing LP files
//!
//! Writing of `.lp` files in the CPLEX LP format.
//!
//! A file consists of the objective, the constraints under `Subject To`, and the optional
//! `Bounds`, `General` and `Binary` sections, closed by `End`. Statements are not terminated,
//! and may span several lines as long as continuation lines start with whitespace.
use itertools::Itertools;
use tracing::{debug, trace};

use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::elements::{BoundKind, Objective, VariableCategory};
use crate::data::linear_program::model::{Model, Variable};
use crate::io::CategoryCounts;
use crate::io::comment_lines;
use crate::io::error::ExportError;
use crate::io::names::{CONSTRAINT_PREFIX, generated_name, ModelNames, NameRegistry, NameTable};
use crate::io::number;

/// Readers are not required to accept lines longer than this.
///
/// A label or a term of a name of the maximum length fits on a line.
pub const MAX_LINE_LENGTH: usize = 560;

/// Description of the format, used in the comment header.
const DESCRIPTION: &str = "LP";

/// Label of the objective function.
pub(crate) const OBJECTIVE_LABEL: &str = "obj";

/// Suffix of the label of the lower bound half of a range constraint.
const RANGE_LOWER_SUFFIX: &str = "_lhs";
/// Suffix of the label of the upper bound half of a range constraint.
const RANGE_UPPER_SUFFIX: &str = "_rhs";

/// Write a model in the LP format.
///
/// # Arguments
///
/// * `model`: Problem to write, both minimization and maximization are supported.
/// * `names`: Names for all variables and constraints of the model.
/// * `categories`: Number of variables in each category, for the comment header.
///
/// # Return value
///
/// The complete file contents.
///
/// # Errors
///
/// If a constraint references a variable that doesn't exist, or no unique label can be derived
/// for the halves of a range constraint.
pub fn write(
    model: &Model,
    names: &ModelNames,
    categories: &CategoryCounts,
) -> Result<String, ExportError> {
    check_references(model)?;
    debug!(
        variables = model.nr_variables(),
        constraints = model.nr_constraints(),
        "writing LP"
    );

    let mut text = Text::default();
    for comment in comment_lines(model, categories, DESCRIPTION) {
        text.line(&format!("\\* {} *\\", comment));
    }

    write_objective(&mut text, model, &names.variables);
    write_constraints(&mut text, model, names)?;
    write_bounds(&mut text, model, &names.variables);
    write_names(&mut text, "General", model, &names.variables, VariableCategory::Integer);
    write_names(&mut text, "Binary", model, &names.variables, VariableCategory::Binary);
    text.line("End");

    Ok(text.into_string())
}

/// Every coefficient should belong to an existing variable.
fn check_references(model: &Model) -> Result<(), ExportError> {
    let nr_variables = model.nr_variables();
    for (i, constraint) in model.constraints.iter().enumerate() {
        if let Some(&(j, _)) = constraint.coefficients.iter().find(|&&(j, _)| j >= nr_variables) {
            return Err(ExportError::InvalidReference { constraint: i, variable: j, nr_variables });
        }
    }

    Ok(())
}

fn write_objective(text: &mut Text, model: &Model, variable_names: &NameTable) {
    text.line(match model.objective {
        Objective::Maximize => "Maximize",
        Objective::Minimize => "Minimize",
    });

    text.start(&format!(" {}:", OBJECTIVE_LABEL));
    let terms = model.variables.iter()
        .enumerate()
        .map(|(j, variable)| (j, variable.cost))
        .collect_vec();
    let has_terms = write_expression(text, &terms, variable_names);
    if model.objective_offset != 0_f64 {
        text.push(&format!(" {}", signed(model.objective_offset)));
    } else if !has_terms {
        text.push(" 0");
    }
    text.end();
}

/// Write all constraints, splitting range constraints in two.
///
/// The labels of the halves of a range constraint are unique among all constraint names and
/// each other.
fn write_constraints(text: &mut Text, model: &Model, names: &ModelNames) -> Result<(), ExportError> {
    text.line("Subject To");

    let mut labels = NameRegistry::from_table(&names.constraints);
    for (i, constraint) in model.constraints.iter().enumerate() {
        let name = &names.constraints[i];
        let (lower, upper) = (constraint.lower_bound, constraint.upper_bound);
        let emit = |text: &mut Text, label: &str, operator: &str, rhs: f64| {
            write_constraint(text, label, &constraint.coefficients, operator, rhs, &names.variables)
        };

        match constraint.bound_kind() {
            BoundKind::Range => {
                let generated = generated_name(CONSTRAINT_PREFIX, i);
                let label = |suffix: &str| (format!("{}{}", name, suffix), format!("{}{}", generated, suffix));

                let (base, fallback) = label(RANGE_LOWER_SUFFIX);
                let lower_label = labels.derive(&base, &fallback)?;
                let (base, fallback) = label(RANGE_UPPER_SUFFIX);
                let upper_label = labels.derive(&base, &fallback)?;
                trace!(constraint = i, "splitting range into {} and {}", lower_label, upper_label);

                emit(text, &lower_label, ">=", lower);
                emit(text, &upper_label, "<=", upper);
            },
            BoundKind::Fixed => emit(text, name, "=", lower),
            BoundKind::Upper => emit(text, name, "<=", upper),
            // A free row is written with a bound of minus infinity
            BoundKind::Lower | BoundKind::Free => emit(text, name, ">=", lower),
        }
    }

    Ok(())
}

fn write_constraint(
    text: &mut Text,
    label: &str,
    coefficients: &[SparseTuple<f64>],
    operator: &str,
    rhs: f64,
    variable_names: &NameTable,
) {
    text.start(&format!(" {}:", label));
    if !write_expression(text, coefficients, variable_names) {
        text.push(" 0");
    }
    text.push(&format!(" {} {}", operator, number::format(rhs)));
    text.end();
}

/// Write the nonzero terms of a linear expression, returning whether any term was written.
fn write_expression(text: &mut Text, terms: &[SparseTuple<f64>], variable_names: &NameTable) -> bool {
    let mut has_terms = false;
    for &(j, value) in terms.iter().filter(|&&(_, value)| value != 0_f64) {
        text.push(&format!(" {} {}", signed(value), &variable_names[j]));
        has_terms = true;
    }

    has_terms
}

/// Write the bounds of all variables that don't have the default bounds `[0, inf)`.
///
/// Binary variables get their bounds from the `Binary` section.
fn write_bounds(text: &mut Text, model: &Model, variable_names: &NameTable) {
    let lines = model.variables.iter()
        .enumerate()
        .filter(|(_, variable)| !variable.is_binary() && !variable.has_default_bounds())
        .map(|(j, variable)| bound_line(variable, &variable_names[j]))
        .collect_vec();
    if lines.is_empty() {
        return;
    }

    text.line("Bounds");
    for line in lines {
        text.line(&line);
    }
}

/// A line of the `Bounds` section.
///
/// When the lower bound is zero and the upper bound is negative, the lower bound is written
/// explicitly, as readers otherwise take the lower bound to be minus infinity.
#[allow(clippy::float_cmp)]
fn bound_line(variable: &Variable, name: &str) -> String {
    let (lower, upper) = (variable.lower_bound, variable.upper_bound);

    match BoundKind::classify(lower, upper) {
        BoundKind::Free => format!(" {} free", name),
        BoundKind::Fixed => format!(" {} = {}", name, number::format(lower)),
        BoundKind::Upper => format!(" -inf <= {} <= {}", name, number::format(upper)),
        BoundKind::Lower => format!(" {} >= {}", name, number::format(lower)),
        BoundKind::Range if lower == 0_f64 && upper >= 0_f64 => {
            format!(" {} <= {}", name, number::format(upper))
        },
        BoundKind::Range => {
            format!(" {} <= {} <= {}", number::format(lower), name, number::format(upper))
        },
    }
}

/// Write a section listing the names of all variables of one category.
fn write_names(
    text: &mut Text,
    header: &str,
    model: &Model,
    variable_names: &NameTable,
    category: VariableCategory,
) {
    let names = model.variables.iter()
        .enumerate()
        .filter(|(_, variable)| variable.category() == category)
        .map(|(j, _)| &variable_names[j])
        .collect_vec();
    if names.is_empty() {
        return;
    }

    text.line(header);
    text.start("");
    for name in names {
        text.push(&format!(" {}", name));
    }
    text.end();
}

/// A number with an explicit sign.
fn signed(value: f64) -> String {
    if value < 0_f64 {
        number::format(value)
    } else {
        format!("+{}", number::format(value))
    }
}

/// Text of an LP file under construction.
///
/// Statements are built from tokens that each start with a space. A line is broken before a
/// token that would make it exceed `MAX_LINE_LENGTH`, such that the token starts the
/// continuation line with a space.
#[derive(Debug, Default)]
struct Text {
    text: String,
    line_length: usize,
}

impl Text {
    /// Write a complete line.
    fn line(&mut self, content: &str) {
        self.start(content);
        self.end();
    }

    /// Start a statement.
    fn start(&mut self, head: &str) {
        debug_assert_eq!(self.line_length, 0);

        self.text.push_str(head);
        self.line_length = head.len();
    }

    /// Append a token to the current statement.
    fn push(&mut self, token: &str) {
        if self.line_length > 0 && self.line_length + token.len() > MAX_LINE_LENGTH {
            self.text.push('\n');
            self.line_length = 0;
        }

        self.text.push_str(token);
        self.line_length += token.len();
    }

    /// End the current statement.
    fn end(&mut self) {
        self.text.push('\n');
        self.line_length = 0;
    }

    fn into_string(self) -> String {
        self.text
    }
}
