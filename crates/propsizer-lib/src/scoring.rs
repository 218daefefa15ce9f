//! Gear ratio selection and composite scoring of engine + gearbox pairs.
//!
//! The composite score rewards capacity margin (capped at 100% so oversized
//! engines do not dominate), penalises deviation from the ideal reduction
//! ratio, and lightly penalises price relative to the budget:
//!
//! ```text
//! score = 0.55 * min(margin, 1.0) - 0.35 * ratio_error - 0.10 * price / max(budget, 1)
//! ```

use serde::Serialize;

use crate::catalog::{EngineRecord, GearboxRecord};

pub const MARGIN_WEIGHT: f64 = 0.55;
pub const RATIO_ERROR_WEIGHT: f64 = 0.35;
pub const PRICE_WEIGHT: f64 = 0.10;

/// Power margin above which the score stops improving.
pub const MARGIN_CAP: f64 = 1.0;

/// A feasible engine + gearbox combination and how well it fits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidatePairing<'a> {
    pub engine: &'a EngineRecord,
    pub gearbox: &'a GearboxRecord,
    /// Ratio that would put the engine's rated RPM exactly on the target.
    pub ideal_ratio: f64,
    /// Closest ratio the gearbox offers.
    pub chosen_ratio: f64,
    pub achieved_prop_rpm: f64,
    /// `(engine_kw - per_shaft_kw) / per_shaft_kw`.
    pub power_margin: f64,
    /// `|chosen - ideal| / ideal`.
    pub ratio_error: f64,
    pub price_usd: f64,
    pub score: f64,
}

impl CandidatePairing<'_> {
    pub fn power_margin_pct(&self) -> f64 {
        self.power_margin * 100.0
    }
}

/// Whether the gearbox tolerates the engine's full rated output.
pub fn gearbox_accepts(gearbox: &GearboxRecord, engine: &EngineRecord) -> bool {
    gearbox.max_input_kw >= engine.power_kw && gearbox.max_input_rpm >= engine.rated_rpm
}

/// Closest available ratio to `ideal`. Ties resolve to the first in catalog order.
pub fn nearest_ratio(ideal: f64, ratios: &[f64]) -> Option<f64> {
    let mut best: Option<(f64, f64)> = None;
    for &ratio in ratios {
        let distance = (ratio - ideal).abs();
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((ratio, distance)),
        }
    }
    best.map(|(ratio, _)| ratio)
}

/// Composite score; higher is better.
pub fn composite_score(power_margin: f64, ratio_error: f64, price_usd: f64, budget_usd: f64) -> f64 {
    MARGIN_WEIGHT * power_margin.min(MARGIN_CAP)
        - RATIO_ERROR_WEIGHT * ratio_error
        - PRICE_WEIGHT * (price_usd / budget_usd.max(1.0))
}

/// Score one pair. Returns `None` when the gearbox cannot take the engine or
/// declares no ratios.
pub fn score_pairing<'a>(
    engine: &'a EngineRecord,
    gearbox: &'a GearboxRecord,
    per_shaft_kw: f64,
    target_prop_rpm: u32,
    budget_usd: f64,
) -> Option<CandidatePairing<'a>> {
    if !gearbox_accepts(gearbox, engine) {
        return None;
    }

    let ideal_ratio = engine.rated_rpm / f64::from(target_prop_rpm);
    let Some(chosen_ratio) = nearest_ratio(ideal_ratio, &gearbox.ratios) else {
        tracing::warn!("gearbox '{}' declares no ratios; skipping", gearbox.model);
        return None;
    };

    let power_margin = (engine.power_kw - per_shaft_kw) / per_shaft_kw;
    let ratio_error = (chosen_ratio - ideal_ratio).abs() / ideal_ratio;
    let price_usd = engine.price_usd + gearbox.price_usd;

    Some(CandidatePairing {
        engine,
        gearbox,
        ideal_ratio,
        chosen_ratio,
        achieved_prop_rpm: engine.rated_rpm / chosen_ratio,
        power_margin,
        ratio_error,
        price_usd,
        score: composite_score(power_margin, ratio_error, price_usd, budget_usd),
    })
}

/// Score every feasible engine x gearbox pair and sort by descending score.
///
/// Enumeration is engines (outer) then gearboxes (inner), both in catalog
/// order; the sort is stable so equal scores keep that order.
pub fn rank_pairings<'a>(
    engines: &[&'a EngineRecord],
    gearboxes: &'a [GearboxRecord],
    per_shaft_kw: f64,
    target_prop_rpm: u32,
    budget_usd: f64,
) -> Vec<CandidatePairing<'a>> {
    let mut pairings: Vec<CandidatePairing<'a>> = engines
        .iter()
        .flat_map(|&engine| {
            gearboxes.iter().filter_map(move |gearbox| {
                score_pairing(engine, gearbox, per_shaft_kw, target_prop_rpm, budget_usd)
            })
        })
        .collect();

    pairings.sort_by(|a, b| b.score.total_cmp(&a.score));
    pairings
}
