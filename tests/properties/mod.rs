//! # Properties of written files
//!
//! Properties that should hold for every model, checked on models with awkward names, ranges and
//! zeros.
use std::collections::HashSet;

use lp_export::{
    Constraint, export, export_as_lp, export_as_mps, ExportConfig, ExportError, Exporter,
    FileFormat, Model, MpsFormat, Objective, Variable,
};

/// Names that need sanitizing, collide after sanitizing or are missing.
fn awkward_names() -> Model {
    let mut model = Model::new(Objective::Minimize).with_name("awkward");
    for name in [Some("x"), Some("x"), Some("x_1"), Some("1st"), None, Some(""), Some("a b"), Some("a_b")] {
        let variable = Variable::continuous().with_cost(1.0);
        model.add_variable(match name {
            Some(name) => variable.with_name(name),
            None => variable,
        });
    }
    let coefficients = (0..model.nr_variables()).map(|j| (j, 1.0)).collect::<Vec<_>>();
    model.add_constraint(Constraint::greater(coefficients.clone(), 1.0).with_name("sum"));
    model.add_constraint(Constraint::less(coefficients, 10.0).with_name("sum"));

    model
}

/// The names in the `COLUMNS` section of a free MPS file, in order of appearance.
fn column_names(mps: &str) -> Vec<String> {
    let mut names = mps.lines()
        .skip_while(|&line| line != "COLUMNS")
        .skip(1)
        .take_while(|line| line.starts_with(' '))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect::<Vec<_>>();
    names.dedup();
    names
}

#[test]
fn unique_names() {
    let text = export_as_mps(&awkward_names(), false, false).unwrap();
    let names = column_names(&text);

    assert_eq!(names, ["x", "x_1", "x_1_1", "_1st", "V5", "V6", "a_b", "a_b_1"]);
    assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    assert!(text.contains(" L sum_1\n"));
}

#[test]
fn idempotent() {
    let model = awkward_names();
    let mut exporter = Exporter::new(&model);

    assert_eq!(exporter.export_as_lp(false), exporter.export_as_lp(false));
    assert_eq!(exporter.export_as_mps(true, true), exporter.export_as_mps(true, true));
    assert_eq!(export_as_lp(&model, false), exporter.export_as_lp(false));
}

#[test]
fn range_expansion() {
    let mut model = Model::new(Objective::Minimize);
    model.add_variable(Variable::continuous().with_name("x"));
    model.add_constraint(Constraint::new(vec![(0, 1.0)], 2.0, 5.0).with_name("r"));

    let lp = export_as_lp(&model, false).unwrap();
    assert!(lp.contains(" r_lhs: +1 x >= 2\n r_rhs: +1 x <= 5\n"));

    let mps = export_as_mps(&model, false, false).unwrap();
    assert!(mps.contains(" G r\n"));
    assert!(mps.contains("RHS\n RHS r 2\n"));
    assert!(mps.contains("RANGES\n RANGE r 3\n"));
}

#[test]
fn fixed_format_gating() {
    let mut model = Model::new(Objective::Minimize);
    model.add_variable(Variable::continuous().with_name("a_twenty_char_name__").with_cost(1.0));

    let preferred = export_as_mps(&model, true, false).unwrap();
    assert!(preferred.contains("MPS (free)"));
    assert!(preferred.contains(" a_twenty_char_name__ COST 1\n"));

    let config = ExportConfig { obfuscate: false, mps_format: MpsFormat::Fixed };
    assert_eq!(
        export(&model, FileFormat::Mps, &config),
        Err(ExportError::NameTooLong { name: "a_twenty_char_name__".to_string(), limit: 8 }),
    );

    let obfuscated = ExportConfig { obfuscate: true, ..config };
    assert!(export(&model, FileFormat::Mps, &obfuscated).unwrap().contains("MPS (fixed)"));
}

#[test]
fn maximize() {
    let mut model = Model::new(Objective::Maximize);
    model.add_variable(Variable::continuous().with_name("x").with_cost(1.0));

    assert_eq!(export_as_mps(&model, true, false), Err(ExportError::UnsupportedObjective));
    assert!(export_as_lp(&model, false).unwrap().contains("\nMaximize\n obj: +1 x\n"));
}

#[test]
fn obfuscation() {
    let mut model = Model::new(Objective::Minimize);
    model.add_variable(Variable::continuous().with_name("secret_x").with_cost(1.0));
    model.add_variable(Variable::continuous().with_name("secret_y").with_cost(2.0));
    model.add_constraint(Constraint::less(vec![(0, 1.0), (1, 1.0)], 4.0).with_name("secret_c"));
    model.add_constraint(Constraint::greater(vec![(0, 1.0)], 1.0).with_name("secret_d"));

    let lp = export_as_lp(&model, true).unwrap();
    assert!(lp.contains(" obj: +1 V1 +2 V2\n"));
    assert!(lp.contains(" C1: +1 V1 +1 V2 <= 4\n C2: +1 V1 >= 1\n"));
    assert!(!lp.contains("secret"));

    let mps = export_as_mps(&model, false, true).unwrap();
    assert_eq!(column_names(&mps), ["V1", "V2"]);
    assert!(!mps.contains("secret"));
}

#[test]
fn zeros_omitted() {
    let mut model = Model::new(Objective::Minimize);
    model.add_variable(Variable::continuous().with_name("x").with_cost(1.0));
    model.add_variable(Variable::continuous().with_name("y").with_cost(0.0));
    model.add_constraint(Constraint::less(vec![(0, 0.0), (1, 3.0)], 0.0).with_name("c"));

    let lp = export_as_lp(&model, false).unwrap();
    assert!(lp.contains(" obj: +1 x\n"));
    assert!(lp.contains(" c: +3 y <= 0\n"));

    let mps = export_as_mps(&model, false, false).unwrap();
    assert!(mps.contains("COLUMNS\n x COST 1\n y c 3\nRHS\nENDATA\n"));
}

#[test]
fn invalid_reference() {
    let mut model = Model::new(Objective::Minimize);
    model.add_variable(Variable::continuous());
    model.add_constraint(Constraint::less(vec![(4, 1.0)], 1.0));

    let expected = Err(ExportError::InvalidReference { constraint: 0, variable: 4, nr_variables: 1 });
    assert_eq!(export_as_lp(&model, false), expected);
    assert_eq!(export_as_mps(&model, false, false), expected);
}
