//! Hull classes and the label parser that resolves user input to them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{format_suggestions, Error, Result};

/// Hull regime used to select the power estimation formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum HullClass {
    /// Slow, heavy hull; admiralty-coefficient estimate.
    Displacement,
    /// Transition hull; blends the displacement and planing estimates by speed.
    SemiDisplacement,
    /// Planing hull; Crouch-style estimate.
    Planing,
}

/// Accepted labels per class, after trimming and lowercasing.
const LABELS: &[(&str, HullClass)] = &[
    ("displacement", HullClass::Displacement),
    ("semi-displacement", HullClass::SemiDisplacement),
    ("semi displacement", HullClass::SemiDisplacement),
    ("semi", HullClass::SemiDisplacement),
    ("planing", HullClass::Planing),
];

impl HullClass {
    pub const ALL: [HullClass; 3] = [
        HullClass::Displacement,
        HullClass::SemiDisplacement,
        HullClass::Planing,
    ];

    /// Canonical label, as accepted by [`HullClass::parse`].
    pub fn label(self) -> &'static str {
        match self {
            HullClass::Displacement => "displacement",
            HullClass::SemiDisplacement => "semi-displacement",
            HullClass::Planing => "planing",
        }
    }

    /// Resolve a user-supplied label, case-insensitively and with aliases.
    ///
    /// Unknown labels fail with [`Error::InvalidInput`] on the `hull_class`
    /// field, suggesting the closest canonical labels.
    pub fn parse(label: &str) -> Result<Self> {
        let normalized = label.trim().to_lowercase();
        if let Some((_, class)) = LABELS.iter().find(|(alias, _)| *alias == normalized) {
            return Ok(*class);
        }

        let suggestions = suggest(&normalized);
        Err(Error::invalid(
            "hull_class",
            format!(
                "unknown hull class '{}'; expected one of displacement, semi-displacement, planing{}",
                label.trim(),
                format_suggestions(&suggestions)
            ),
        ))
    }
}

fn suggest(normalized: &str) -> Vec<String> {
    let mut scored: Vec<(f64, &str)> = HullClass::ALL
        .iter()
        .map(|class| {
            let label = class.label();
            (strsim::jaro_winkler(normalized, label), label)
        })
        .filter(|(score, _)| *score >= 0.8)
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .map(|(_, label)| label.to_string())
        .collect()
}

impl FromStr for HullClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        HullClass::parse(s)
    }
}

impl TryFrom<String> for HullClass {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        HullClass::parse(&value)
    }
}

impl fmt::Display for HullClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
