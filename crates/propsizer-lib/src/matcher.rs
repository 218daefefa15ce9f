//! Hard-constraint filtering of the engine catalog.

use crate::catalog::EngineRecord;
use crate::spec::BoatSpecification;

/// Hard constraints an engine must satisfy to be considered at all.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConstraints {
    pub fuel: String,
    /// Per-shaft power requirement including margin (kW). Inclusive lower bound.
    pub min_power_kw: f64,
    pub max_length_mm: f64,
    pub max_weight_kg: f64,
    pub max_price_usd: f64,
}

impl EngineConstraints {
    /// Constraints for a specification and its per-shaft power requirement.
    pub fn from_spec(spec: &BoatSpecification, per_shaft_kw: f64) -> Self {
        Self {
            fuel: spec.fuel.clone(),
            min_power_kw: per_shaft_kw,
            max_length_mm: spec.max_engine_length_mm,
            max_weight_kg: spec.max_engine_weight_kg,
            max_price_usd: spec.budget_usd,
        }
    }

    /// Whether an engine satisfies every constraint.
    pub fn admits(&self, engine: &EngineRecord) -> bool {
        engine.burns(&self.fuel)
            && engine.power_kw >= self.min_power_kw
            && engine.length_mm <= self.max_length_mm
            && engine.dry_weight_kg <= self.max_weight_kg
            && engine.price_usd <= self.max_price_usd
    }
}

/// Return the engines satisfying all constraints, in catalog order.
///
/// An empty result is a normal outcome, not an error.
pub fn filter_engines<'a>(
    engines: &'a [EngineRecord],
    constraints: &EngineConstraints,
) -> Vec<&'a EngineRecord> {
    let matched: Vec<&EngineRecord> = engines.iter().filter(|e| constraints.admits(e)).collect();
    tracing::debug!(
        "{} of {} engines satisfy constraints (>= {:.1} kW, fuel {})",
        matched.len(),
        engines.len(),
        constraints.min_power_kw,
        constraints.fuel
    );
    matched
}
