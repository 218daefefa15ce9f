//! Shared fixture helpers for the integration tests.

use std::path::PathBuf;

use propsizer_lib::{BoatSpecification, Catalog, HullClass};

/// Path to the fixtures directory shared by both crates.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Catalog built from the fixture CSV files.
#[allow(dead_code)]
pub fn fixture_catalog() -> Catalog {
    let dir = fixtures_dir();
    Catalog::from_paths(
        Some(&dir.join("engines.csv")),
        Some(&dir.join("gearboxes.csv")),
    )
    .expect("fixture catalog loads")
}

/// 25 t semi-displacement hull at 15 kn on two shafts.
#[allow(dead_code)]
pub fn workboat() -> BoatSpecification {
    BoatSpecification::new(HullClass::SemiDisplacement, 25.0, 15.0, 2)
}
