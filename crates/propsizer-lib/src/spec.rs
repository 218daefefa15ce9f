//! Boat specification supplied by the caller for a single selection request.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hull::HullClass;

/// Default fuel type when none is specified.
pub const DEFAULT_FUEL: &str = "diesel";

/// Default budget ceiling, effectively unbounded.
pub const DEFAULT_BUDGET_USD: f64 = 1e9;

/// Default engine length ceiling in millimetres, effectively unbounded.
pub const DEFAULT_MAX_ENGINE_LENGTH_MM: f64 = 1e9;

/// Default engine dry weight ceiling in kilograms, effectively unbounded.
pub const DEFAULT_MAX_ENGINE_WEIGHT_KG: f64 = 1e9;

/// Default power margin (15%).
pub const DEFAULT_POWER_MARGIN: f64 = 0.15;

/// Coarse boat specification used to size and select propulsion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoatSpecification {
    pub hull_class: HullClass,
    pub displacement_tonnes: f64,
    pub target_speed_kn: f64,
    pub shafts: u32,
    pub fuel: String,
    /// Engine price ceiling per shaft (USD).
    pub budget_usd: f64,
    pub max_engine_length_mm: f64,
    pub max_engine_weight_kg: f64,
    /// Overrides the target RPM heuristic when present.
    pub desired_prop_rpm: Option<u32>,
    pub power_margin: f64,
}

/// JSON shape of a specification before the hull class is resolved.
#[derive(Debug, Deserialize)]
struct RawSpecification {
    hull_class: String,
    displacement_tonnes: f64,
    target_speed_kn: f64,
    shafts: u32,
    #[serde(default = "default_fuel")]
    fuel: String,
    #[serde(default = "default_budget")]
    budget_usd: f64,
    #[serde(default = "default_max_length")]
    max_engine_length_mm: f64,
    #[serde(default = "default_max_weight")]
    max_engine_weight_kg: f64,
    #[serde(default)]
    desired_prop_rpm: Option<u32>,
    #[serde(default = "default_margin")]
    power_margin: f64,
}

fn default_fuel() -> String {
    DEFAULT_FUEL.to_string()
}

fn default_budget() -> f64 {
    DEFAULT_BUDGET_USD
}

fn default_max_length() -> f64 {
    DEFAULT_MAX_ENGINE_LENGTH_MM
}

fn default_max_weight() -> f64 {
    DEFAULT_MAX_ENGINE_WEIGHT_KG
}

fn default_margin() -> f64 {
    DEFAULT_POWER_MARGIN
}

impl BoatSpecification {
    /// Create a specification with the required fields and defaults for the rest.
    pub fn new(
        hull_class: HullClass,
        displacement_tonnes: f64,
        target_speed_kn: f64,
        shafts: u32,
    ) -> Self {
        Self {
            hull_class,
            displacement_tonnes,
            target_speed_kn,
            shafts,
            fuel: default_fuel(),
            budget_usd: DEFAULT_BUDGET_USD,
            max_engine_length_mm: DEFAULT_MAX_ENGINE_LENGTH_MM,
            max_engine_weight_kg: DEFAULT_MAX_ENGINE_WEIGHT_KG,
            desired_prop_rpm: None,
            power_margin: DEFAULT_POWER_MARGIN,
        }
    }

    pub fn with_fuel(mut self, fuel: impl Into<String>) -> Self {
        self.fuel = fuel.into();
        self
    }

    pub fn with_budget(mut self, budget_usd: f64) -> Self {
        self.budget_usd = budget_usd;
        self
    }

    pub fn with_max_engine_length(mut self, length_mm: f64) -> Self {
        self.max_engine_length_mm = length_mm;
        self
    }

    pub fn with_max_engine_weight(mut self, weight_kg: f64) -> Self {
        self.max_engine_weight_kg = weight_kg;
        self
    }

    pub fn with_desired_prop_rpm(mut self, rpm: Option<u32>) -> Self {
        self.desired_prop_rpm = rpm;
        self
    }

    pub fn with_power_margin(mut self, margin: f64) -> Self {
        self.power_margin = margin;
        self
    }

    /// Parse a specification from JSON. The result is validated.
    ///
    /// The hull class is resolved after the document is read so that an
    /// unknown class surfaces as [`Error::InvalidInput`], not a JSON error.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawSpecification = serde_json::from_str(json)?;
        let spec = Self {
            hull_class: HullClass::parse(&raw.hull_class)?,
            displacement_tonnes: raw.displacement_tonnes,
            target_speed_kn: raw.target_speed_kn,
            shafts: raw.shafts,
            fuel: raw.fuel,
            budget_usd: raw.budget_usd,
            max_engine_length_mm: raw.max_engine_length_mm,
            max_engine_weight_kg: raw.max_engine_weight_kg,
            desired_prop_rpm: raw.desired_prop_rpm,
            power_margin: raw.power_margin,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Load and validate a JSON specification file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Validate specification invariants.
    ///
    /// Every failure is an [`Error::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            (self.displacement_tonnes, "displacement_tonnes"),
            (self.target_speed_kn, "target_speed_kn"),
        ];
        for (value, field) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(
                    field,
                    format!("must be a finite positive number, got {value}"),
                ));
            }
        }

        if self.shafts == 0 {
            return Err(Error::invalid("shafts", "must be at least 1"));
        }

        if !self.power_margin.is_finite() || self.power_margin < 0.0 {
            return Err(Error::invalid(
                "power_margin",
                format!(
                    "must be a finite non-negative fraction, got {}",
                    self.power_margin
                ),
            ));
        }

        let ceilings = [
            (self.budget_usd, "budget_usd"),
            (self.max_engine_length_mm, "max_engine_length_mm"),
            (self.max_engine_weight_kg, "max_engine_weight_kg"),
        ];
        for (value, field) in ceilings {
            if value.is_nan() || value < 0.0 {
                return Err(Error::invalid(
                    field,
                    format!("must be a non-negative number, got {value}"),
                ));
            }
        }

        if self.fuel.trim().is_empty() {
            return Err(Error::invalid("fuel", "must not be empty"));
        }

        if self.desired_prop_rpm == Some(0) {
            return Err(Error::invalid(
                "desired_prop_rpm",
                "must be positive when provided",
            ));
        }

        Ok(())
    }
}
