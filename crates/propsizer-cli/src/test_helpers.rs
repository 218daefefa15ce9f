// Test utilities used across `propsizer-cli` tests.
// Kept under `#[cfg(test)]` so it is not part of the public crate API.
use propsizer_lib::{BoatSpecification, Catalog, EngineRecord, GearboxRecord, HullClass};

fn engine(model: &str, power_kw: f64, rated_rpm: f64, price_usd: f64) -> EngineRecord {
    EngineRecord {
        model: model.to_string(),
        manufacturer: "Test".to_string(),
        power_kw,
        rated_rpm,
        dry_weight_kg: 600.0,
        fuel: "diesel".to_string(),
        length_mm: 1100.0,
        width_mm: 650.0,
        height_mm: 800.0,
        price_usd,
    }
}

/// Two diesel engines and one gearbox that accepts both.
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            engine("Cruiser", 250.0, 3000.0, 50_000.0),
            engine("Sprinter", 180.0, 3300.0, 40_000.0),
        ],
        vec![GearboxRecord {
            model: "Sample Box".to_string(),
            ratios: vec![2.0, 2.5, 3.0],
            max_input_kw: 600.0,
            max_input_rpm: 3600.0,
            price_usd: 12_000.0,
        }],
    )
}

/// 25 t semi-displacement hull at 15 kn on two shafts.
pub fn sample_spec() -> BoatSpecification {
    BoatSpecification::new(HullClass::SemiDisplacement, 25.0, 15.0, 2)
}

/// Run a renderer against an in-memory buffer and return what it wrote.
pub fn render_to_string<F>(render: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<()>,
{
    let mut buffer = Vec::new();
    render(&mut buffer).expect("render succeeds");
    String::from_utf8(buffer).expect("utf-8 output")
}
