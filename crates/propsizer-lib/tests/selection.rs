mod common;

use propsizer_lib::{
    select_propulsion, select_propulsion_with, BoatSpecification, Catalog, EngineRecord,
    Error, GearboxRecord, HullClass, PowerRequirement, SelectionOutcome,
};

fn engine(model: &str, power_kw: f64, rated_rpm: f64, price_usd: f64) -> EngineRecord {
    EngineRecord {
        model: model.to_string(),
        manufacturer: "Test".to_string(),
        power_kw,
        rated_rpm,
        dry_weight_kg: 700.0,
        fuel: "diesel".to_string(),
        length_mm: 1100.0,
        width_mm: 650.0,
        height_mm: 800.0,
        price_usd,
    }
}

fn gearbox(model: &str, ratios: &[f64]) -> GearboxRecord {
    GearboxRecord {
        model: model.to_string(),
        ratios: ratios.to_vec(),
        max_input_kw: 2000.0,
        max_input_rpm: 4000.0,
        price_usd: 15_000.0,
    }
}

#[test]
fn builtin_catalog_ranks_workboat_pairings() {
    let report = select_propulsion(&common::workboat()).expect("valid spec");
    assert!(report.is_match());

    let candidates = report.candidates();
    assert!(!candidates.is_empty());
    for window in candidates.windows(2) {
        assert!(window[0].score >= window[1].score);
    }
    for pairing in candidates {
        assert!(pairing.gearbox.ratios.contains(&pairing.chosen_ratio));
        assert!(pairing.engine.power_kw >= report.requirement.per_shaft_kw);
        assert_eq!(
            pairing.achieved_prop_rpm,
            pairing.engine.rated_rpm / pairing.chosen_ratio
        );
    }
}

#[test]
fn low_budget_reports_no_engine_match_with_power_figures() {
    let spec = common::workboat().with_budget(1000.0);
    let report = select_propulsion(&spec).expect("valid spec");

    assert!(matches!(
        report.outcome,
        SelectionOutcome::NoEngineMatch { .. }
    ));
    assert!(report.hint().is_some());
    assert_eq!(
        report.requirement,
        PowerRequirement::for_spec(&spec).unwrap()
    );
    assert!(report.requirement.total_kw > 0.0);
}

#[test]
fn hull_class_labels_are_case_insensitive() {
    assert_eq!(
        HullClass::parse("Displacement").unwrap(),
        HullClass::Displacement
    );

    let err = HullClass::parse("hovercraft").unwrap_err();
    match err {
        Error::InvalidInput { field, .. } => assert_eq!(field, "hull_class"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn unknown_hull_class_in_json_is_invalid_input() {
    let json = r#"{"hull_class": "hovercraft", "displacement_tonnes": 10, "target_speed_kn": 20, "shafts": 1}"#;
    let err = BoatSpecification::from_json(json).unwrap_err();
    assert_eq!(err.field(), Some("hull_class"));
}

#[test]
fn engine_exactly_at_requirement_is_included_with_zero_margin() {
    let spec = common::workboat();
    let requirement = PowerRequirement::for_spec(&spec).unwrap();
    let catalog = Catalog::new(
        vec![engine("Exact", requirement.per_shaft_kw, 2400.0, 40_000.0)],
        vec![gearbox("G", &[2.0, 2.5])],
    );

    let report = select_propulsion_with(&spec, &catalog).unwrap();
    let best = report.best().expect("boundary engine included");
    assert_eq!(best.engine.model, "Exact");
    assert_eq!(best.power_margin, 0.0);
}

#[test]
fn desired_rpm_overrides_heuristic() {
    let spec = common::workboat().with_desired_prop_rpm(Some(800));
    let catalog = Catalog::new(
        vec![engine("E", 400.0, 2400.0, 40_000.0)],
        vec![gearbox("G", &[2.0, 3.0, 4.0])],
    );

    let report = select_propulsion_with(&spec, &catalog).unwrap();
    assert_eq!(report.requirement.target_prop_rpm, 800);
    let best = report.best().unwrap();
    assert_eq!(best.ideal_ratio, 3.0);
    assert_eq!(best.chosen_ratio, 3.0);
    assert_eq!(best.ratio_error, 0.0);
}

#[test]
fn identical_inputs_give_identical_reports() {
    let catalog = common::fixture_catalog();
    let spec = common::workboat();
    let first = select_propulsion_with(&spec, &catalog).unwrap();
    let second = select_propulsion_with(&spec, &catalog).unwrap();
    assert_eq!(first, second);
}

#[test]
fn fixture_catalog_pairs_each_engine_with_compatible_gearbox() {
    let catalog = common::fixture_catalog();
    let report = select_propulsion_with(&common::workboat(), &catalog).unwrap();

    let mut pairs: Vec<(&str, &str)> = report
        .candidates()
        .iter()
        .map(|p| (p.engine.model.as_str(), p.gearbox.model.as_str()))
        .collect();
    pairs.sort();
    assert_eq!(
        pairs,
        vec![
            ("4LHA-STP", "ZF 25A"),
            ("D4-320", "ZF 25A"),
            ("QSB6.7", "ZF 63A"),
            ("QSC8.3", "ZF 63A"),
        ]
    );
}

#[test]
fn high_revving_engines_without_gearbox_report_no_gearbox_match() {
    let catalog = common::fixture_catalog();
    let spec = common::workboat().with_fuel("petrol");
    let report = select_propulsion_with(&spec, &catalog).unwrap();

    assert!(matches!(
        report.outcome,
        SelectionOutcome::NoGearboxMatch { .. }
    ));
    assert!(report.candidates().is_empty());
    assert!(report.requirement.per_shaft_kw > 0.0);
}

#[test]
fn invalid_specification_never_yields_a_report() {
    let cases = [
        common::workboat().with_power_margin(-0.1),
        common::workboat().with_budget(f64::NAN),
        common::workboat().with_desired_prop_rpm(Some(0)),
        BoatSpecification::new(HullClass::Planing, 10.0, 0.0, 1),
        BoatSpecification::new(HullClass::Planing, 10.0, 20.0, 0),
    ];
    for spec in cases {
        let err = select_propulsion(&spec).unwrap_err();
        assert!(err.is_invalid_input(), "{err}");
    }
}
