//! Reference engine and gearbox tables shipped with the crate.
//!
//! Prices are rough estimates for early-stage comparison. Replace the tables
//! with sourced product data via CSV for real projects.

use once_cell::sync::Lazy;

use super::engine::EngineRecord;
use super::gearbox::GearboxRecord;
use super::Catalog;

/// model, manufacturer, power_kw, rated_rpm, dry_weight_kg, fuel, length_mm, width_mm, height_mm, price_usd
type EngineRow = (
    &'static str,
    &'static str,
    f64,
    f64,
    f64,
    &'static str,
    f64,
    f64,
    f64,
    f64,
);

const ENGINES: &[EngineRow] = &[
    ("D6-480", "Volvo Penta", 353.0, 3500.0, 900.0, "diesel", 1290.0, 750.0, 900.0, 75_000.0),
    ("D8-600", "Volvo Penta", 441.0, 3000.0, 1200.0, "diesel", 1500.0, 850.0, 980.0, 98_000.0),
    ("C12.9", "Caterpillar", 745.0, 2300.0, 1550.0, "diesel", 1700.0, 900.0, 1200.0, 165_000.0),
    ("QSB6.7", "Cummins", 410.0, 3000.0, 650.0, "diesel", 1200.0, 700.0, 900.0, 65_000.0),
    ("QSC8.3", "Cummins", 600.0, 2600.0, 950.0, "diesel", 1350.0, 760.0, 980.0, 92_000.0),
    ("6LY-440", "Yanmar", 324.0, 3300.0, 620.0, "diesel", 1100.0, 650.0, 820.0, 52_000.0),
    ("12V2000", "MTU", 1200.0, 2450.0, 2300.0, "diesel", 2300.0, 1100.0, 1400.0, 300_000.0),
    ("8V2000", "MTU", 900.0, 2450.0, 1900.0, "diesel", 2100.0, 1050.0, 1350.0, 240_000.0),
];

/// model, ratios, max_input_kw, max_input_rpm, price_usd
type GearboxRow = (&'static str, &'static [f64], f64, f64, f64);

const GEARBOXES: &[GearboxRow] = &[
    ("ZF 45A", &[1.5, 1.75, 2.0, 2.5, 3.0], 600.0, 3500.0, 18_000.0),
    ("ZF 63A", &[1.5, 1.75, 2.0, 2.5, 3.0, 3.5], 1000.0, 3000.0, 30_000.0),
    ("Twin Disc MGX", &[1.5, 2.0, 2.5, 3.0, 3.5, 4.0], 1200.0, 3500.0, 35_000.0),
];

pub(crate) static BUILTIN_CATALOG: Lazy<Catalog> =
    Lazy::new(|| Catalog::new(builtin_engines(), builtin_gearboxes()));

/// Fresh copy of the built-in engine table.
pub fn builtin_engines() -> Vec<EngineRecord> {
    ENGINES
        .iter()
        .map(
            |&(model, manufacturer, power_kw, rated_rpm, dry_weight_kg, fuel, length_mm, width_mm, height_mm, price_usd)| {
                EngineRecord {
                    model: model.to_string(),
                    manufacturer: manufacturer.to_string(),
                    power_kw,
                    rated_rpm,
                    dry_weight_kg,
                    fuel: fuel.to_string(),
                    length_mm,
                    width_mm,
                    height_mm,
                    price_usd,
                }
            },
        )
        .collect()
}

/// Fresh copy of the built-in gearbox table.
pub fn builtin_gearboxes() -> Vec<GearboxRecord> {
    GEARBOXES
        .iter()
        .map(
            |&(model, ratios, max_input_kw, max_input_rpm, price_usd)| GearboxRecord {
                model: model.to_string(),
                ratios: ratios.to_vec(),
                max_input_kw,
                max_input_rpm,
                price_usd,
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_validate() {
        for engine in builtin_engines() {
            engine.validate().expect("builtin engine valid");
        }
        for gearbox in builtin_gearboxes() {
            gearbox.validate().expect("builtin gearbox valid");
        }
    }

    #[test]
    fn builtin_catalog_keeps_table_order() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.engines().len(), 8);
        assert_eq!(catalog.gearboxes().len(), 3);
        assert_eq!(catalog.engines()[0].model, "D6-480");
        assert_eq!(catalog.gearboxes()[2].model, "Twin Disc MGX");
    }
}
