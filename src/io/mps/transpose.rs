//! # Transposing the constraint matrix
//!
//! Constraints store their coefficients by row, while the `COLUMNS` section lists them by
//! variable.
use crate::data::linear_algebra::SparseTuple;
use crate::data::linear_program::model::Model;
use crate::io::error::ExportError;

/// For each variable, the (constraint index, coefficient) tuples of its nonzero coefficients.
///
/// Every column is sorted by constraint index, because the constraints are visited in order.
/// Stored zeros are dropped.
///
/// # Errors
///
/// If a constraint references a variable index that doesn't exist.
pub fn transpose(model: &Model) -> Result<Vec<Vec<SparseTuple<f64>>>, ExportError> {
    let nr_variables = model.nr_variables();
    let mut columns = vec![Vec::new(); nr_variables];

    for (i, constraint) in model.constraints.iter().enumerate() {
        for &(j, value) in &constraint.coefficients {
            let column = columns.get_mut(j).ok_or(ExportError::InvalidReference {
                constraint: i,
                variable: j,
                nr_variables,
            })?;
            if value != 0_f64 {
                column.push((i, value));
            }
        }
    }

    Ok(columns)
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::Objective;
    use crate::data::linear_program::model::{Constraint, Model, Variable};
    use crate::io::error::ExportError;
    use crate::io::mps::transpose::transpose;

    #[test]
    fn columns() {
        let mut model = Model::new(Objective::Minimize);
        for _ in 0..3 {
            model.add_variable(Variable::continuous());
        }
        model.add_constraint(Constraint::less(vec![(2, 1.0), (0, 2.0)], 1.0));
        model.add_constraint(Constraint::less(vec![(0, 3.0), (1, 0.0)], 1.0));
        model.add_constraint(Constraint::less(vec![], 1.0));
        model.add_constraint(Constraint::less(vec![(2, -4.0)], 1.0));

        assert_eq!(transpose(&model), Ok(vec![
            vec![(0, 2.0), (1, 3.0)],
            vec![],
            vec![(0, 1.0), (3, -4.0)],
        ]));
    }

    #[test]
    fn invalid_reference() {
        let mut model = Model::new(Objective::Minimize);
        model.add_variable(Variable::continuous());
        model.add_constraint(Constraint::less(vec![(0, 1.0)], 1.0));
        model.add_constraint(Constraint::less(vec![(1, 0.0)], 1.0));

        assert_eq!(
            transpose(&model),
            Err(ExportError::InvalidReference { constraint: 1, variable: 1, nr_variables: 1 }),
        );
    }
}
