//! Target propeller shaft speed heuristic.
//!
//! The lookup is advisory. [`target_prop_rpm`] works on an already validated
//! [`HullClass`]; [`target_rpm_for_label`] accepts a raw label and falls back to
//! [`NEUTRAL_PROP_RPM`] for labels it does not recognise instead of failing.
//! Strict hull class validation lives in [`HullClass::parse`] and runs before
//! any estimate in the selection path.

use crate::hull::HullClass;
use crate::spec::BoatSpecification;

/// Displacement (tonnes) below which a hull is considered small.
pub const SMALL_HULL_TONNES: f64 = 30.0;

/// Fallback target RPM for unrecognised hull labels.
pub const NEUTRAL_PROP_RPM: u32 = 1000;

/// Lookup-table RPM for a hull class and displacement bucket.
pub fn lookup_prop_rpm(hull: HullClass, displacement_tonnes: f64) -> u32 {
    let small = displacement_tonnes < SMALL_HULL_TONNES;
    match (hull, small) {
        (HullClass::Displacement, true) => 900,
        (HullClass::Displacement, false) => 750,
        (HullClass::SemiDisplacement, true) => 1100,
        (HullClass::SemiDisplacement, false) => 950,
        (HullClass::Planing, true) => 1300,
        (HullClass::Planing, false) => 1150,
    }
}

/// Target propeller RPM for a specification. An explicit desired RPM wins.
pub fn target_prop_rpm(spec: &BoatSpecification) -> u32 {
    spec.desired_prop_rpm
        .unwrap_or_else(|| lookup_prop_rpm(spec.hull_class, spec.displacement_tonnes))
}

/// Lenient variant of [`target_prop_rpm`] keyed by a raw hull label.
pub fn target_rpm_for_label(
    hull_label: &str,
    displacement_tonnes: f64,
    desired_prop_rpm: Option<u32>,
) -> u32 {
    if let Some(rpm) = desired_prop_rpm {
        return rpm;
    }

    match HullClass::parse(hull_label) {
        Ok(hull) => lookup_prop_rpm(hull, displacement_tonnes),
        Err(_) => {
            tracing::debug!(
                "unrecognised hull label '{}', using neutral {} rpm",
                hull_label,
                NEUTRAL_PROP_RPM
            );
            NEUTRAL_PROP_RPM
        }
    }
}
