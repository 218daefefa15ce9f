//! Engine and gearbox catalogs.
//!
//! This module is organized into focused submodules:
//!
//! - [`engine`] - Engine reference records
//! - [`gearbox`] - Gearbox reference records and ratio parsing
//! - [`loader`] - CSV loading with header synonyms
//! - [`builtin`] - The reference tables shipped with the crate
//!
//! Catalogs are read-only once built. Selection borrows records from them and
//! never copies them, so a single catalog can serve any number of concurrent
//! selection calls without locking.
//!
//! # Example
//!
//! ```no_run
//! use propsizer_lib::catalog::Catalog;
//!
//! let catalog = Catalog::from_paths(
//!     Some(std::path::Path::new("engines.csv")),
//!     None,
//! ).unwrap();
//! println!("{} engines", catalog.engines().len());
//! ```

pub mod builtin;
pub mod engine;
pub mod gearbox;
pub mod loader;

pub use engine::EngineRecord;
pub use gearbox::{parse_ratio_list, GearboxRecord};
pub use loader::{load_engines, load_gearboxes};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Engine and gearbox reference tables in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    engines: Vec<EngineRecord>,
    gearboxes: Vec<GearboxRecord>,
    engine_source: Option<PathBuf>,
    gearbox_source: Option<PathBuf>,
}

impl Catalog {
    /// Build a catalog from already validated records.
    pub fn new(engines: Vec<EngineRecord>, gearboxes: Vec<GearboxRecord>) -> Self {
        Self {
            engines,
            gearboxes,
            engine_source: None,
            gearbox_source: None,
        }
    }

    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static Catalog {
        &builtin::BUILTIN_CATALOG
    }

    /// Load a catalog, reading each table from CSV when a path is given and
    /// falling back to the built-in table otherwise.
    pub fn from_paths(engines: Option<&Path>, gearboxes: Option<&Path>) -> Result<Self> {
        let builtin = Self::builtin();

        let (engine_records, engine_source) = match engines {
            Some(path) => (load_engines(fs::File::open(path)?)?, Some(path.to_path_buf())),
            None => (builtin.engines.clone(), None),
        };
        let (gearbox_records, gearbox_source) = match gearboxes {
            Some(path) => (
                load_gearboxes(fs::File::open(path)?)?,
                Some(path.to_path_buf()),
            ),
            None => (builtin.gearboxes.clone(), None),
        };

        Ok(Self {
            engines: engine_records,
            gearboxes: gearbox_records,
            engine_source,
            gearbox_source,
        })
    }

    pub fn engines(&self) -> &[EngineRecord] {
        &self.engines
    }

    pub fn gearboxes(&self) -> &[GearboxRecord] {
        &self.gearboxes
    }

    /// Get an engine by model name (case-insensitive).
    pub fn engine(&self, model: &str) -> Option<&EngineRecord> {
        self.engines
            .iter()
            .find(|e| e.model.trim().eq_ignore_ascii_case(model.trim()))
    }

    /// Get a gearbox by model name (case-insensitive).
    pub fn gearbox(&self, model: &str) -> Option<&GearboxRecord> {
        self.gearboxes
            .iter()
            .find(|g| g.model.trim().eq_ignore_ascii_case(model.trim()))
    }

    /// Path the engine table was loaded from, if it did not come from the built-in set.
    pub fn engine_source(&self) -> Option<&Path> {
        self.engine_source.as_deref()
    }

    /// Path the gearbox table was loaded from, if it did not come from the built-in set.
    pub fn gearbox_source(&self) -> Option<&Path> {
        self.gearbox_source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.engine("d6-480").is_some());
        assert!(catalog.gearbox("twin disc mgx").is_some());
        assert!(catalog.engine("nope").is_none());
    }

    #[test]
    fn from_paths_without_overrides_matches_builtin() {
        let catalog = Catalog::from_paths(None, None).unwrap();
        assert_eq!(&catalog, Catalog::builtin());
        assert!(catalog.engine_source().is_none());
    }
}
