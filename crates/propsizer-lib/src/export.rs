//! Delimited-text export of selection reports and catalog tables.
//!
//! Catalog tables are written with the same headers the loader reads, so an
//! exported table can be edited and loaded back as a custom catalog.

use std::io::Write;

use serde::Serialize;

use crate::catalog::{EngineRecord, GearboxRecord};
use crate::error::Result;
use crate::scoring::CandidatePairing;
use crate::selection::SelectionReport;
use crate::units::kw_to_hp;

/// One exported pairing. Field order is the column order.
#[derive(Debug, Serialize)]
struct PairingRow<'a> {
    engine: String,
    engine_power_kw: f64,
    engine_power_hp: i64,
    engine_rated_rpm: i64,
    engine_weight_kg: i64,
    engine_length_mm: i64,
    gearbox: &'a str,
    gear_ratio: f64,
    target_prop_rpm: u32,
    achieved_prop_rpm: i64,
    per_shaft_kw_required: f64,
    power_margin_pct: f64,
    price_est_usd: i64,
    score: f64,
}

#[derive(Debug, Serialize)]
struct StatusRow<'a> {
    status: String,
    total_required_kw_est: f64,
    per_shaft_kw_required_with_margin: f64,
    hint: &'a str,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn whole(value: f64) -> i64 {
    value.round() as i64
}

impl<'a> PairingRow<'a> {
    fn new(pairing: &'a CandidatePairing<'_>, target_prop_rpm: u32, per_shaft_kw: f64) -> Self {
        let engine = pairing.engine;
        Self {
            engine: engine.display_name(),
            engine_power_kw: round_tenth(engine.power_kw),
            engine_power_hp: whole(kw_to_hp(engine.power_kw)),
            engine_rated_rpm: whole(engine.rated_rpm),
            engine_weight_kg: whole(engine.dry_weight_kg),
            engine_length_mm: whole(engine.length_mm),
            gearbox: &pairing.gearbox.model,
            gear_ratio: pairing.chosen_ratio,
            target_prop_rpm,
            achieved_prop_rpm: whole(pairing.achieved_prop_rpm),
            per_shaft_kw_required: round_tenth(per_shaft_kw),
            power_margin_pct: round_tenth(pairing.power_margin_pct()),
            price_est_usd: whole(pairing.price_usd),
            score: pairing.score,
        }
    }
}

/// Write a report as CSV with a header row.
///
/// Ranked outcomes produce one row per pairing in rank order. No-match
/// outcomes produce a single status row carrying the power figures and hint.
pub fn write_csv<W: Write>(report: &SelectionReport<'_>, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    let requirement = &report.requirement;

    match report.hint() {
        None => {
            for pairing in report.candidates() {
                out.serialize(PairingRow::new(
                    pairing,
                    requirement.target_prop_rpm,
                    requirement.per_shaft_kw,
                ))?;
            }
        }
        Some(hint) => {
            out.serialize(StatusRow {
                status: report.status(),
                total_required_kw_est: round_tenth(requirement.total_kw),
                per_shaft_kw_required_with_margin: round_tenth(requirement.per_shaft_kw),
                hint,
            })?;
        }
    }

    out.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct EngineCatalogRow<'a> {
    engine_model: &'a str,
    manufacturer: &'a str,
    power_kw: f64,
    rated_rpm: f64,
    dry_weight_kg: f64,
    fuel: &'a str,
    length_mm: f64,
    width_mm: f64,
    height_mm: f64,
    price_usd_est: f64,
}

#[derive(Debug, Serialize)]
struct GearboxCatalogRow<'a> {
    name: &'a str,
    ratio_options: String,
    max_input_kw_est: f64,
    max_input_rpm: f64,
    price_usd_est: f64,
}

/// Write an engine table in the loader's CSV layout.
pub fn write_engine_catalog<W: Write>(engines: &[EngineRecord], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for engine in engines {
        out.serialize(EngineCatalogRow {
            engine_model: &engine.model,
            manufacturer: &engine.manufacturer,
            power_kw: engine.power_kw,
            rated_rpm: engine.rated_rpm,
            dry_weight_kg: engine.dry_weight_kg,
            fuel: &engine.fuel,
            length_mm: engine.length_mm,
            width_mm: engine.width_mm,
            height_mm: engine.height_mm,
            price_usd_est: engine.price_usd,
        })?;
    }
    out.flush()?;
    Ok(())
}

/// Write a gearbox table in the loader's CSV layout. Ratios are `;`-separated.
pub fn write_gearbox_catalog<W: Write>(gearboxes: &[GearboxRecord], writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for gearbox in gearboxes {
        let ratio_options = gearbox
            .ratios
            .iter()
            .map(f64::to_string)
            .collect::<Vec<_>>()
            .join(";");
        out.serialize(GearboxCatalogRow {
            name: &gearbox.model,
            ratio_options,
            max_input_kw_est: gearbox.max_input_kw,
            max_input_rpm: gearbox.max_input_rpm,
            price_usd_est: gearbox.price_usd,
        })?;
    }
    out.flush()?;
    Ok(())
}
