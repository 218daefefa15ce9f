//! Selection orchestration: one specification in, a ranked report out.
//!
//! # Example
//!
//! ```
//! use propsizer_lib::{select_propulsion, BoatSpecification, HullClass};
//!
//! let spec = BoatSpecification::new(HullClass::SemiDisplacement, 25.0, 15.0, 2);
//! let report = select_propulsion(&spec).unwrap();
//! assert!(report.requirement.per_shaft_kw > 0.0);
//! for pairing in report.top(3) {
//!     println!("{} + {}", pairing.engine.display_name(), pairing.gearbox.model);
//! }
//! ```

use serde::Serialize;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::matcher::{filter_engines, EngineConstraints};
use crate::power::PowerRequirement;
use crate::scoring::{rank_pairings, CandidatePairing};
use crate::spec::BoatSpecification;

pub const NO_ENGINE_MATCH_STATUS: &str = "No engine matches found with current constraints.";
pub const NO_ENGINE_MATCH_HINT: &str = "Increase budget/space limits, reduce margin, add more engines to catalog, or lower target speed.";
pub const NO_GEARBOX_MATCH_STATUS: &str =
    "Engines matched, but no gearbox matched power/rpm constraints.";
pub const NO_GEARBOX_MATCH_HINT: &str = "Add gearbox models to catalog or raise gearbox limits.";

/// What the search produced. Empty outcomes are results, not errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionOutcome<'a> {
    /// At least one feasible pairing, best first.
    Ranked { candidates: Vec<CandidatePairing<'a>> },
    /// No engine satisfied the hard constraints.
    NoEngineMatch { hint: &'static str },
    /// Engines matched, but no gearbox could take any of them.
    NoGearboxMatch { hint: &'static str },
}

/// Power figures plus the ranked pairings for one specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionReport<'a> {
    pub requirement: PowerRequirement,
    pub outcome: SelectionOutcome<'a>,
}

impl<'a> SelectionReport<'a> {
    /// All ranked pairings; empty for the no-match outcomes.
    pub fn candidates(&self) -> &[CandidatePairing<'a>] {
        match &self.outcome {
            SelectionOutcome::Ranked { candidates } => candidates,
            _ => &[],
        }
    }

    /// The first `n` pairings.
    pub fn top(&self, n: usize) -> &[CandidatePairing<'a>] {
        let candidates = self.candidates();
        &candidates[..n.min(candidates.len())]
    }

    pub fn best(&self) -> Option<&CandidatePairing<'a>> {
        self.candidates().first()
    }

    pub fn is_match(&self) -> bool {
        matches!(self.outcome, SelectionOutcome::Ranked { .. })
    }

    /// Human-readable status line for the outcome.
    pub fn status(&self) -> String {
        match &self.outcome {
            SelectionOutcome::Ranked { candidates } => {
                format!("{} feasible engine + gearbox pairings.", candidates.len())
            }
            SelectionOutcome::NoEngineMatch { .. } => NO_ENGINE_MATCH_STATUS.to_string(),
            SelectionOutcome::NoGearboxMatch { .. } => NO_GEARBOX_MATCH_STATUS.to_string(),
        }
    }

    /// Hint for adjusting constraints, present only for no-match outcomes.
    pub fn hint(&self) -> Option<&'static str> {
        match &self.outcome {
            SelectionOutcome::Ranked { .. } => None,
            SelectionOutcome::NoEngineMatch { hint } | SelectionOutcome::NoGearboxMatch { hint } => {
                Some(hint)
            }
        }
    }
}

/// Run a selection against the built-in catalog.
pub fn select_propulsion(spec: &BoatSpecification) -> Result<SelectionReport<'static>> {
    select_propulsion_with(spec, Catalog::builtin())
}

/// Run a selection against the given catalog.
///
/// # Errors
/// Returns [`Error::InvalidInput`](crate::Error::InvalidInput) when the
/// specification is invalid. No partial result is produced in that case.
pub fn select_propulsion_with<'a>(
    spec: &BoatSpecification,
    catalog: &'a Catalog,
) -> Result<SelectionReport<'a>> {
    let requirement = PowerRequirement::for_spec(spec)?;
    tracing::debug!(
        "required power {:.1} kW ({:.1} kW with margin, {:.1} kW per shaft), target {} rpm",
        requirement.total_kw,
        requirement.total_kw_with_margin,
        requirement.per_shaft_kw,
        requirement.target_prop_rpm
    );

    let constraints = EngineConstraints::from_spec(spec, requirement.per_shaft_kw);
    let engines = filter_engines(catalog.engines(), &constraints);
    if engines.is_empty() {
        return Ok(SelectionReport {
            requirement,
            outcome: SelectionOutcome::NoEngineMatch {
                hint: NO_ENGINE_MATCH_HINT,
            },
        });
    }

    let candidates = rank_pairings(
        &engines,
        catalog.gearboxes(),
        requirement.per_shaft_kw,
        requirement.target_prop_rpm,
        spec.budget_usd,
    );
    tracing::debug!("{} feasible pairings", candidates.len());

    let outcome = if candidates.is_empty() {
        SelectionOutcome::NoGearboxMatch {
            hint: NO_GEARBOX_MATCH_HINT,
        }
    } else {
        SelectionOutcome::Ranked { candidates }
    };

    Ok(SelectionReport {
        requirement,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::HullClass;
    use crate::test_helpers::{EngineBuilder, GearboxBuilder};

    #[test]
    fn top_is_bounded_by_candidate_count() {
        let spec = BoatSpecification::new(HullClass::SemiDisplacement, 25.0, 15.0, 2);
        let report = select_propulsion(&spec).unwrap();
        assert!(report.is_match());
        assert_eq!(report.top(3).len(), 3);
        assert_eq!(report.top(10_000).len(), report.candidates().len());
        assert!(report.hint().is_none());
    }

    #[test]
    fn no_gearbox_match_is_distinct_from_no_engine_match() {
        let catalog = Catalog::new(
            vec![EngineBuilder::new("Huge").power_kw(5000.0).build()],
            vec![GearboxBuilder::new("Small").max_input(600.0, 3500.0).build()],
        );
        let spec = BoatSpecification::new(HullClass::Planing, 25.0, 30.0, 2);
        let report = select_propulsion_with(&spec, &catalog).unwrap();

        assert_eq!(
            report.outcome,
            SelectionOutcome::NoGearboxMatch {
                hint: NO_GEARBOX_MATCH_HINT
            }
        );
        assert!(report.candidates().is_empty());
        assert_eq!(report.status(), NO_GEARBOX_MATCH_STATUS);
        assert!(report.requirement.per_shaft_kw > 0.0);
    }

    #[test]
    fn invalid_spec_yields_error_not_report() {
        let mut spec = BoatSpecification::new(HullClass::Planing, 25.0, 30.0, 2);
        spec.shafts = 0;
        let err = select_propulsion(&spec).unwrap_err();
        assert_eq!(err.field(), Some("shafts"));
    }

    #[test]
    fn outcome_serializes_with_status_tag() {
        let spec = BoatSpecification::new(HullClass::Planing, 25.0, 30.0, 2).with_budget(1000.0);
        let report = select_propulsion(&spec).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["outcome"]["status"], "no_engine_match");
        assert!(json["requirement"]["per_shaft_kw"].as_f64().unwrap() > 0.0);
    }
}
