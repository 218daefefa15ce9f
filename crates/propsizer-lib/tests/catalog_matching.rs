mod common;

use propsizer_lib::{filter_engines, Catalog, EngineConstraints, PowerRequirement};

fn open_constraints() -> EngineConstraints {
    let spec = common::workboat();
    let requirement = PowerRequirement::for_spec(&spec).unwrap();
    EngineConstraints::from_spec(&spec, requirement.per_shaft_kw)
}

fn count(constraints: &EngineConstraints) -> usize {
    filter_engines(Catalog::builtin().engines(), constraints).len()
}

#[test]
fn tightening_budget_never_grows_the_set() {
    let mut constraints = open_constraints();
    let mut previous = count(&constraints);
    for budget in [300_000.0, 165_000.0, 98_000.0, 75_000.0, 60_000.0, 0.0] {
        constraints.max_price_usd = budget;
        let current = count(&constraints);
        assert!(current <= previous, "budget {budget}: {current} > {previous}");
        previous = current;
    }
    assert_eq!(previous, 0);
}

#[test]
fn tightening_length_and_weight_never_grows_the_set() {
    let mut constraints = open_constraints();
    let mut previous = count(&constraints);
    for length in [2300.0, 1700.0, 1350.0, 1200.0, 1000.0] {
        constraints.max_length_mm = length;
        let current = count(&constraints);
        assert!(current <= previous);
        previous = current;
    }

    let mut constraints = open_constraints();
    let mut previous = count(&constraints);
    for weight in [2300.0, 1200.0, 900.0, 650.0, 100.0] {
        constraints.max_weight_kg = weight;
        let current = count(&constraints);
        assert!(current <= previous);
        previous = current;
    }
}

#[test]
fn raising_required_power_never_grows_the_set() {
    let mut constraints = open_constraints();
    let mut previous = count(&constraints);
    for power in [324.0, 353.0, 410.0, 600.0, 900.0, 1200.0, 1200.1] {
        constraints.min_power_kw = power;
        let current = count(&constraints);
        assert!(current <= previous);
        previous = current;
    }
    assert_eq!(previous, 0);
}

#[test]
fn fuel_match_ignores_case() {
    let mut constraints = open_constraints();
    constraints.fuel = "DIESEL".to_string();
    assert_eq!(count(&constraints), Catalog::builtin().engines().len());

    constraints.fuel = "hydrogen".to_string();
    assert_eq!(count(&constraints), 0);
}
