//! Reduction gearbox catalog records.

use serde::Serialize;

use crate::error::{Error, Result};

/// Marine reduction gearbox reference data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GearboxRecord {
    pub model: String,
    /// Available ratios (input RPM / output RPM) in catalog order.
    pub ratios: Vec<f64>,
    pub max_input_kw: f64,
    pub max_input_rpm: f64,
    pub price_usd: f64,
}

impl GearboxRecord {
    /// Validate gearbox attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::CatalogValidation {
                message: "gearbox model must not be empty".to_string(),
            });
        }

        if self.ratios.is_empty() {
            return Err(Error::CatalogValidation {
                message: format!("gearbox '{}' declares no ratios", self.model),
            });
        }

        if let Some(bad) = self.ratios.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            return Err(Error::CatalogValidation {
                message: format!(
                    "gearbox '{}' has invalid ratio {bad}; ratios must be finite and positive",
                    self.model
                ),
            });
        }

        let fields = [
            (self.max_input_kw, "max_input_kw"),
            (self.max_input_rpm, "max_input_rpm"),
        ];
        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::CatalogValidation {
                    message: format!(
                        "{field} of gearbox '{}' must be a finite positive number",
                        self.model
                    ),
                });
            }
        }

        if !self.price_usd.is_finite() || self.price_usd < 0.0 {
            return Err(Error::CatalogValidation {
                message: format!(
                    "price_usd of gearbox '{}' must be a finite non-negative number",
                    self.model
                ),
            });
        }

        Ok(())
    }

    /// Format the ratio list as `1.5:1, 2:1, ...`.
    pub fn ratio_summary(&self) -> String {
        self.ratios
            .iter()
            .map(|r| format!("{r}:1"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Parse a ratio list such as `1.5;1.75;2.0`, `1.5|2.0` or `1.5 2.0`.
pub fn parse_ratio_list(value: &str) -> Result<Vec<f64>> {
    value
        .split(|c: char| c == ';' || c == '|' || c.is_whitespace())
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| Error::CatalogValidation {
                    message: format!("invalid gear ratio '{}': {}", part.trim(), e),
                })
        })
        .collect()
}
