//! Empirical propulsion power estimation.
//!
//! Two classic rule-of-thumb models are combined:
//!
//! - displacement hulls: admiralty-coefficient estimate,
//!   `hp = D^(2/3) * V^3 / C_admiralty`
//! - planing hulls: Crouch-style estimate, `hp = W * (V / C_crouch)^2`
//!
//! Semi-displacement hulls blend the two linearly between 12 kn (pure
//! displacement) and 30 kn (pure planing). These are early-stage sizing
//! figures, not resistance predictions.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::hull::HullClass;
use crate::rpm::target_prop_rpm;
use crate::spec::BoatSpecification;
use crate::units::{hp_to_kw, tonnes_to_lb, ADMIRALTY_COEFFICIENT, CROUCH_CONSTANT};

/// Speed (knots) at and below which a semi-displacement hull is treated as displacement.
pub const BLEND_START_KN: f64 = 12.0;

/// Speed (knots) at and above which a semi-displacement hull is treated as planing.
pub const BLEND_END_KN: f64 = 30.0;

/// Displacement-regime estimate in horsepower.
pub fn displacement_hp(displacement_tonnes: f64, speed_kn: f64) -> f64 {
    displacement_tonnes.powf(2.0 / 3.0) * speed_kn.powi(3) / ADMIRALTY_COEFFICIENT
}

/// Planing-regime estimate in horsepower.
pub fn planing_hp(displacement_tonnes: f64, speed_kn: f64) -> f64 {
    tonnes_to_lb(displacement_tonnes) * (speed_kn / CROUCH_CONSTANT).powi(2)
}

/// Interpolation factor toward the planing estimate, clamped to `[0, 1]`.
pub fn semi_displacement_blend(speed_kn: f64) -> f64 {
    ((speed_kn - BLEND_START_KN) / (BLEND_END_KN - BLEND_START_KN)).clamp(0.0, 1.0)
}

/// Estimate total required propulsive power (kW, no margin) for a hull.
///
/// # Errors
/// Returns [`Error::InvalidInput`] when displacement or speed is not a finite
/// positive number.
pub fn estimate_total_power_kw(
    hull: HullClass,
    displacement_tonnes: f64,
    speed_kn: f64,
) -> Result<f64> {
    if !displacement_tonnes.is_finite() || displacement_tonnes <= 0.0 {
        return Err(Error::invalid(
            "displacement_tonnes",
            format!("must be a finite positive number, got {displacement_tonnes}"),
        ));
    }
    if !speed_kn.is_finite() || speed_kn <= 0.0 {
        return Err(Error::invalid(
            "target_speed_kn",
            format!("must be a finite positive number, got {speed_kn}"),
        ));
    }

    let hp = match hull {
        HullClass::Displacement => displacement_hp(displacement_tonnes, speed_kn),
        HullClass::Planing => planing_hp(displacement_tonnes, speed_kn),
        HullClass::SemiDisplacement => {
            let t = semi_displacement_blend(speed_kn);
            (1.0 - t) * displacement_hp(displacement_tonnes, speed_kn)
                + t * planing_hp(displacement_tonnes, speed_kn)
        }
    };

    Ok(hp_to_kw(hp))
}

/// Power figures derived once per selection request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerRequirement {
    /// Total required power without margin (kW).
    pub total_kw: f64,
    /// Total required power including the power margin (kW).
    pub total_kw_with_margin: f64,
    /// Required power per shaft including the margin (kW).
    pub per_shaft_kw: f64,
    /// Target propeller shaft speed (RPM).
    pub target_prop_rpm: u32,
}

impl PowerRequirement {
    /// Compute the power figures and target RPM for a specification.
    ///
    /// The specification is validated first; nothing is computed for an
    /// invalid one.
    pub fn for_spec(spec: &BoatSpecification) -> Result<Self> {
        spec.validate()?;

        let total_kw = estimate_total_power_kw(
            spec.hull_class,
            spec.displacement_tonnes,
            spec.target_speed_kn,
        )?;
        let total_kw_with_margin = total_kw * (1.0 + spec.power_margin);
        let per_shaft_kw = total_kw_with_margin / f64::from(spec.shafts);

        Ok(Self {
            total_kw,
            total_kw_with_margin,
            per_shaft_kw,
            target_prop_rpm: target_prop_rpm(spec),
        })
    }
}
