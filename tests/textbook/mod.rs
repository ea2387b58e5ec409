//! # Textbook problems
//!
//! Small problems written in both formats, compared against the complete expected text.
use lp_export::{Constraint, export_as_lp, export_as_mps, Model, Objective, Variable};

/// Strip the comment header, which mentions the crate version.
fn body(text: &str) -> String {
    text.lines()
        .filter(|line| !line.starts_with('*') && !line.starts_with("\\*"))
        .map(|line| format!("{}\n", line))
        .collect()
}

/// A production planning problem with a range constraint, a binary and a general integer.
fn production() -> Model {
    let mut model = Model::new(Objective::Minimize).with_name("PROD");
    let steel = model.add_variable(Variable::continuous().with_name("steel").with_cost(3.0).with_bounds(0.0, 40.0));
    let open = model.add_variable(Variable::binary().with_name("open").with_cost(100.0));
    let crews = model.add_variable(Variable::integer().with_name("crews").with_cost(25.0));
    let spare = model.add_variable(Variable::continuous().with_name("spare"));

    model.add_constraint(Constraint::new(vec![(steel, 1.0), (crews, 2.0)], 10.0, 60.0).with_name("demand"));
    model.add_constraint(Constraint::less(vec![(steel, 1.0), (open, -40.0)], 0.0).with_name("link"));
    model.add_constraint(Constraint::equal(vec![(crews, 1.0), (spare, 0.0)], 3.0).with_name("staff"));
    model.objective_offset = 7.0;

    model
}

#[test]
fn production_lp() {
    let text = export_as_lp(&production(), false).unwrap();

    assert_eq!(body(&text), "\
Minimize
 obj: +3 steel +100 open +25 crews +7
Subject To
 demand_lhs: +1 steel +2 crews >= 10
 demand_rhs: +1 steel +2 crews <= 60
 link: +1 steel -40 open <= 0
 staff: +1 crews = 3
Bounds
 steel <= 40
General
 crews
Binary
 open
End
");
}

#[test]
fn production_mps() {
    let text = export_as_mps(&production(), true, false).unwrap();

    assert_eq!(body(&text), "\
NAME          PROD
ROWS
 N  COST
 G  demand
 L  link
 E  staff
COLUMNS
    steel     COST                 3   demand               1
    steel     link                 1
    MARKER    'MARKER'                 'INTORG'
    open      COST               100   link               -40
    crews     COST                25   demand               2
    crews     staff                1
    MARKER    'MARKER'                 'INTEND'
RHS
    RHS       COST                -7   demand              10
    RHS       staff                3
RANGES
    RANGE     demand              50
BOUNDS
 UP BOUND     steel               40
 BV BOUND     open
 PL BOUND     crews
ENDATA
");
}

#[test]
fn production_mps_free() {
    let text = export_as_mps(&production(), false, false).unwrap();

    assert_eq!(body(&text), "\
NAME PROD
ROWS
 N COST
 G demand
 L link
 E staff
COLUMNS
 steel COST 3 demand 1
 steel link 1
 MARKER 'MARKER' 'INTORG'
 open COST 100 link -40
 crews COST 25 demand 2
 crews staff 1
 MARKER 'MARKER' 'INTEND'
RHS
 RHS COST -7 demand 10
 RHS staff 3
RANGES
 RANGE demand 50
BOUNDS
 UP BOUND steel 40
 BV BOUND open
 PL BOUND crews
ENDATA
");
}
