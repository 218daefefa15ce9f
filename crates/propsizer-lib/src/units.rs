//! Unit conversions and empirical constants shared by the power model.

/// Mechanical horsepower per kilowatt.
pub const HP_PER_KW: f64 = 1.34102209;

/// Pounds-mass per metric tonne.
pub const LB_PER_TONNE: f64 = 2204.62;

/// Admiralty coefficient for the displacement-regime estimate.
pub const ADMIRALTY_COEFFICIENT: f64 = 130.0;

/// Crouch constant for the planing-regime estimate.
pub const CROUCH_CONSTANT: f64 = 185.0;

pub fn kw_to_hp(kw: f64) -> f64 {
    kw * HP_PER_KW
}

pub fn hp_to_kw(hp: f64) -> f64 {
    hp / HP_PER_KW
}

pub fn tonnes_to_lb(tonnes: f64) -> f64 {
    tonnes * LB_PER_TONNE
}
