//! Propsizer library entry points.
//!
//! This crate estimates the propulsive power a hull needs, derives a target
//! propeller shaft speed, and ranks engine + gearbox pairings from a catalog.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod export;
pub mod hull;
pub mod matcher;
pub mod power;
pub mod rpm;
pub mod scoring;
pub mod selection;
pub mod spec;
pub mod units;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use catalog::{Catalog, EngineRecord, GearboxRecord};
pub use error::{Error, Result};
pub use export::{write_csv, write_engine_catalog, write_gearbox_catalog};
pub use hull::HullClass;
pub use matcher::{filter_engines, EngineConstraints};
pub use power::{estimate_total_power_kw, PowerRequirement};
pub use rpm::{target_prop_rpm, target_rpm_for_label};
pub use scoring::{nearest_ratio, rank_pairings, score_pairing, CandidatePairing};
pub use selection::{select_propulsion, select_propulsion_with, SelectionOutcome, SelectionReport};
pub use spec::BoatSpecification;
