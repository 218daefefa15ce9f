//! Engine catalog records.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::units::kw_to_hp;

/// Marine engine reference data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineRecord {
    pub model: String,
    pub manufacturer: String,
    pub power_kw: f64,
    pub rated_rpm: f64,
    pub dry_weight_kg: f64,
    pub fuel: String,
    pub length_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
    pub price_usd: f64,
}

impl EngineRecord {
    /// Manufacturer and model, e.g. `Volvo Penta D6-480`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }

    pub fn power_hp(&self) -> f64 {
        kw_to_hp(self.power_kw)
    }

    /// Case-insensitive fuel comparison.
    pub fn burns(&self, fuel: &str) -> bool {
        self.fuel.trim().eq_ignore_ascii_case(fuel.trim())
    }

    /// Validate engine attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "engine model must not be empty".to_string(),
            });
        }
        if self.fuel.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("engine '{}' has no fuel type", self.model),
            });
        }

        let fields = [
            (self.power_kw, "power_kw"),
            (self.rated_rpm, "rated_rpm"),
            (self.dry_weight_kg, "dry_weight_kg"),
            (self.length_mm, "length_mm"),
            (self.width_mm, "width_mm"),
            (self.height_mm, "height_mm"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::CatalogValidation {
                    message: format!(
                        "{field} of engine '{}' must be a finite positive number",
                        self.model
                    ),
                });
            }
        }

        if !self.price_usd.is_finite() || self.price_usd < 0.0 {
            return Err(Error::CatalogValidation {
                message: format!(
                    "price_usd of engine '{}' must be a finite non-negative number",
                    self.model
                ),
            });
        }

        Ok(())
    }
}
