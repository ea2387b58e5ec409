//! # Writing MPS files
//!
//! Writing of `.mps` files, or files of the Mathematical Programming System format.
//!
//! The format only describes minimization problems. Both the fixed format, which has fields at
//! fixed character positions and allows names of at most eight characters, and the free format,
//! which separates fields by whitespace, are supported.
use tracing::debug;

use crate::data::linear_program::elements::{BoundKind, Objective, VariableType};
use crate::data::linear_program::model::{Model, Variable};
use crate::io::CategoryCounts;
use crate::io::comment_lines;
use crate::io::error::ExportError;
use crate::io::mps::line::Lines;
use crate::io::mps::token::{
    BOUND_NAME, BOUNDS, COLUMNS, END_OF_INTEGER, ENDATA, RANGE_NAME, RANGES, RHS,
    RHS_NAME, ROWS, START_OF_INTEGER,
};
use crate::io::mps::transpose::transpose;
use crate::io::names::{ModelNames, NameTable, sanitize};

pub use crate::io::mps::line::Layout;
pub(crate) use crate::io::mps::token::COST_ROW;

mod line;
mod token;
mod transpose;

/// Longest name that fits in a name field of the fixed format.
pub const FIXED_NAME_LENGTH: usize = 8;

/// Largest index for which an obfuscated name, a single character prefix followed by the 1-based
/// index, fits in a name field of the fixed format.
const MAX_FIXED_OBFUSCATED_INDEX: usize = 9_999_999;

/// Every row is either a cost row or some constraint.
///
/// Constraints without any bounds are written as free rows, with the same type as the cost row.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum RowType {
    Free,
    Less,
    Greater,
    Equal,
}

impl RowType {
    fn code(self) -> &'static str {
        match self {
            RowType::Free => "N",
            RowType::Less => "L",
            RowType::Greater => "G",
            RowType::Equal => "E",
        }
    }
}

impl From<BoundKind> for RowType {
    /// Range constraints are written as a `G` row with the lower bound as right-hand side and the
    /// width of the range in the `RANGES` section.
    fn from(kind: BoundKind) -> Self {
        match kind {
            BoundKind::Free => RowType::Free,
            BoundKind::Upper => RowType::Less,
            BoundKind::Lower | BoundKind::Range => RowType::Greater,
            BoundKind::Fixed => RowType::Equal,
        }
    }
}

/// The MPS format defines the `BoundType`s described in this enum.
#[derive(Copy, Clone, Debug, PartialEq)]
enum BoundType {
    /// b <= x (< +inf)
    LowerContinuous(f64),
    /// (0 <=) x <= b
    UpperContinuous(f64),
    /// x = b
    Fixed(f64),
    /// -inf < x < +inf
    Free,
    /// -inf < x
    LowerMinusInfinity,
    /// x < +inf
    UpperInfinity,
    /// x = 0 or 1
    Binary,
}

impl BoundType {
    fn code(self) -> &'static str {
        match self {
            BoundType::LowerContinuous(_) => "LO",
            BoundType::UpperContinuous(_) => "UP",
            BoundType::Fixed(_) => "FX",
            BoundType::Free => "FR",
            BoundType::LowerMinusInfinity => "MI",
            BoundType::UpperInfinity => "PL",
            BoundType::Binary => "BV",
        }
    }

    fn value(self) -> Option<f64> {
        match self {
            BoundType::LowerContinuous(value)
            | BoundType::UpperContinuous(value)
            | BoundType::Fixed(value) => Some(value),
            BoundType::Free
            | BoundType::LowerMinusInfinity
            | BoundType::UpperInfinity
            | BoundType::Binary => None,
        }
    }
}

/// Whether the names fit in the fixed format.
///
/// # Arguments
///
/// * `variable_names`: Names of all variables.
/// * `constraint_names`: Names of all constraints.
/// * `obfuscated`: Whether the names are a one character prefix followed by the 1-based index, in
/// which case only the number of names needs to be checked.
pub fn can_use_fixed_format(
    variable_names: &NameTable,
    constraint_names: &NameTable,
    obfuscated: bool,
) -> bool {
    if obfuscated {
        variable_names.len() <= MAX_FIXED_OBFUSCATED_INDEX
            && constraint_names.len() <= MAX_FIXED_OBFUSCATED_INDEX
    } else {
        variable_names.max_length() <= FIXED_NAME_LENGTH
            && constraint_names.max_length() <= FIXED_NAME_LENGTH
    }
}

/// Check that all names of a model fit in the fixed format.
///
/// # Errors
///
/// When a name is too long, reporting the first such variable name, or constraint name if all
/// variable names fit.
pub fn check_fixed_format(names: &ModelNames) -> Result<(), ExportError> {
    if can_use_fixed_format(&names.variables, &names.constraints, names.is_obfuscated()) {
        return Ok(());
    }

    let name = names.variables.iter()
        .chain(names.constraints.iter())
        .find(|name| name.len() > FIXED_NAME_LENGTH)
        .unwrap_or_default();
    Err(ExportError::NameTooLong { name: name.to_string(), limit: FIXED_NAME_LENGTH })
}

/// Write a model in the MPS format.
///
/// # Arguments
///
/// * `model`: Minimization problem to write.
/// * `names`: Names for all variables and constraints of the model.
/// * `categories`: Number of variables in each category, for the comment header.
/// * `layout`: Whether to use the fixed or the free format.
///
/// # Return value
///
/// The complete file contents.
///
/// # Errors
///
/// If the model is a maximization problem, if the fixed layout is requested but a name is too
/// long, or if a constraint references a variable that doesn't exist.
pub fn write(
    model: &Model,
    names: &ModelNames,
    categories: &CategoryCounts,
    layout: Layout,
) -> Result<String, ExportError> {
    if model.objective == Objective::Maximize {
        return Err(ExportError::UnsupportedObjective);
    }
    if layout == Layout::Fixed {
        check_fixed_format(names)?;
    }

    let columns = transpose(model)?;
    debug!(
        variables = model.nr_variables(),
        constraints = model.nr_constraints(),
        nonzeros = columns.iter().map(Vec::len).sum::<usize>(),
        ?layout,
        "writing MPS"
    );

    let mut lines = Lines::new(layout);
    for comment in comment_lines(model, categories, layout.description()) {
        lines.comment(&comment);
    }
    let problem_name = model.name.as_deref()
        .filter(|name| !name.is_empty())
        .map(sanitize)
        .unwrap_or_default();
    lines.name(&problem_name);

    write_rows(&mut lines, model, &names.constraints);
    write_columns(&mut lines, model, names, &columns);
    write_rhs(&mut lines, model, &names.constraints);
    write_ranges(&mut lines, model, &names.constraints);
    write_bounds(&mut lines, model, &names.variables, &columns);
    lines.section(ENDATA);

    Ok(lines.into_text())
}

fn write_rows(lines: &mut Lines, model: &Model, constraint_names: &NameTable) {
    lines.section(ROWS);
    lines.row(RowType::Free.code(), COST_ROW);
    for (i, constraint) in model.constraints.iter().enumerate() {
        lines.row(RowType::from(constraint.bound_kind()).code(), &constraint_names[i]);
    }
}

/// Write the columns of the continuous variables, followed by those of the integer variables
/// between markers.
///
/// Variables without any nonzero value are left out.
fn write_columns(
    lines: &mut Lines,
    model: &Model,
    names: &ModelNames,
    columns: &[Vec<(usize, f64)>],
) {
    lines.section(COLUMNS);

    for (j, variable) in written(model, columns, VariableType::Continuous) {
        write_column(lines, variable, &columns[j], names, j);
    }

    let mut integer_columns = written(model, columns, VariableType::Integer).peekable();
    if integer_columns.peek().is_some() {
        lines.marker(START_OF_INTEGER);
        for (j, variable) in integer_columns {
            write_column(lines, variable, &columns[j], names, j);
        }
        lines.marker(END_OF_INTEGER);
    }
}

fn write_column(
    lines: &mut Lines,
    variable: &Variable,
    column: &[(usize, f64)],
    names: &ModelNames,
    j: usize,
) {
    let name = &names.variables[j];
    if variable.cost != 0_f64 {
        lines.term(name, COST_ROW, variable.cost);
    }
    for &(i, value) in column {
        lines.term(name, &names.constraints[i], value);
    }
    lines.finish_line();
}

/// Variables of one type that appear in the file, with their index.
fn written<'a>(
    model: &'a Model,
    columns: &'a [Vec<(usize, f64)>],
    variable_type: VariableType,
) -> impl Iterator<Item = (usize, &'a Variable)> {
    model.variables.iter()
        .enumerate()
        .filter(move |&(j, variable)| {
            variable.variable_type == variable_type && is_written(variable, &columns[j])
        })
}

/// A variable appears in the file only if it has a nonzero cost or constraint coefficient.
fn is_written(variable: &Variable, column: &[(usize, f64)]) -> bool {
    variable.cost != 0_f64 || !column.is_empty()
}

/// Write the right-hand side of each row, omitting zeros.
///
/// The objective offset is written as the negated right-hand side of the cost row.
fn write_rhs(lines: &mut Lines, model: &Model, constraint_names: &NameTable) {
    lines.section(RHS);

    if model.objective_offset != 0_f64 {
        lines.term(RHS_NAME, COST_ROW, -model.objective_offset);
    }
    for (i, constraint) in model.constraints.iter().enumerate() {
        let rhs = match constraint.bound_kind() {
            BoundKind::Free => continue,
            BoundKind::Upper => constraint.upper_bound,
            BoundKind::Lower | BoundKind::Range | BoundKind::Fixed => constraint.lower_bound,
        };
        if rhs != 0_f64 {
            lines.term(RHS_NAME, &constraint_names[i], rhs);
        }
    }
    lines.finish_line();
}

/// Write the width of each range constraint.
///
/// These rows are of type `G`, so the range `R` gives the constraint `rhs <= activity <= rhs + R`.
fn write_ranges(lines: &mut Lines, model: &Model, constraint_names: &NameTable) {
    let mut ranges = model.constraints.iter()
        .enumerate()
        .filter(|(_, constraint)| constraint.bound_kind() == BoundKind::Range)
        .peekable();
    if ranges.peek().is_none() {
        return;
    }

    lines.section(RANGES);
    for (i, constraint) in ranges {
        lines.term(RANGE_NAME, &constraint_names[i], constraint.upper_bound - constraint.lower_bound);
    }
    lines.finish_line();
}

fn write_bounds(
    lines: &mut Lines,
    model: &Model,
    variable_names: &NameTable,
    columns: &[Vec<(usize, f64)>],
) {
    let bounds = model.variables.iter()
        .enumerate()
        .filter(|&(j, variable)| is_written(variable, &columns[j]))
        .flat_map(|(j, variable)| bound_types(variable).into_iter().map(move |bound| (j, bound)))
        .collect::<Vec<_>>();
    if bounds.is_empty() {
        return;
    }

    lines.section(BOUNDS);
    for (j, bound) in bounds {
        lines.bound(bound.code(), BOUND_NAME, &variable_names[j], bound.value());
    }
}

/// The bound lines needed to describe the bounds of a variable, relative to the default bounds
/// `[0, inf)`.
///
/// Integer variables without upper bound get an explicit `PL`, as some readers default the upper
/// bound of integer variables to `1`. An upper bound below zero on a variable with lower bound
/// zero is preceded by an explicit lower bound, as some readers otherwise make the lower bound
/// minus infinity.
#[allow(clippy::float_cmp)]
fn bound_types(variable: &Variable) -> Vec<BoundType> {
    let (lower, upper) = (variable.lower_bound, variable.upper_bound);
    let is_integer = variable.variable_type == VariableType::Integer;

    if variable.is_binary() {
        return vec![BoundType::Binary];
    }

    match BoundKind::classify(lower, upper) {
        BoundKind::Fixed => vec![BoundType::Fixed(lower)],
        BoundKind::Free => vec![BoundType::Free],
        BoundKind::Upper => vec![BoundType::LowerMinusInfinity, BoundType::UpperContinuous(upper)],
        BoundKind::Lower => {
            let mut bounds = Vec::with_capacity(2);
            if lower != 0_f64 {
                bounds.push(BoundType::LowerContinuous(lower));
            }
            if is_integer {
                bounds.push(BoundType::UpperInfinity);
            }
            bounds
        },
        BoundKind::Range => {
            let mut bounds = Vec::with_capacity(2);
            if lower != 0_f64 || upper < 0_f64 {
                bounds.push(BoundType::LowerContinuous(lower));
            }
            bounds.push(BoundType::UpperContinuous(upper));
            bounds
        },
    }
}
