//! Catalog resolution and the `engines` / `gearboxes` listings.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;

use propsizer_cli::output::{render_engines, render_gearboxes, OutputFormat};
use propsizer_cli::terminal::ColorPalette;
use propsizer_lib::Catalog;

pub const ENGINE_CATALOG_FILENAME: &str = "engines.csv";
pub const GEARBOX_CATALOG_FILENAME: &str = "gearboxes.csv";

/// Catalog paths given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CatalogPaths {
    pub engines: Option<PathBuf>,
    pub gearboxes: Option<PathBuf>,
}

/// Per-user configuration directory that may hold custom catalog tables.
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "propsizer", "propsizer").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Pick the CSV file for one table.
///
/// Resolution order:
/// 1. The explicit path (flag or environment variable), which must exist
/// 2. `filename` inside the config directory, when present
/// 3. `None`, meaning the built-in table
fn resolve_table(explicit: Option<&Path>, filename: &str, config_dir: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    config_dir
        .map(|dir| dir.join(filename))
        .filter(|path| path.is_file())
}

/// Load the catalog for this invocation.
pub fn load_catalog(paths: &CatalogPaths) -> Result<Catalog> {
    let config = config_dir();
    let engines = resolve_table(
        paths.engines.as_deref(),
        ENGINE_CATALOG_FILENAME,
        config.as_deref(),
    );
    let gearboxes = resolve_table(
        paths.gearboxes.as_deref(),
        GEARBOX_CATALOG_FILENAME,
        config.as_deref(),
    );

    let describe = |path: &Option<PathBuf>| {
        path.as_ref()
            .map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
    };
    tracing::debug!(
        "engine catalog: {}, gearbox catalog: {}",
        describe(&engines),
        describe(&gearboxes)
    );

    Catalog::from_paths(engines.as_deref(), gearboxes.as_deref()).with_context(|| {
        format!(
            "failed to load catalog (engines: {}, gearboxes: {})",
            describe(&engines),
            describe(&gearboxes)
        )
    })
}

/// Handle the `engines` subcommand.
pub fn handle_list_engines(paths: &CatalogPaths, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(paths)?;
    let mut out = io::stdout().lock();
    render_engines(&mut out, &catalog, format, ColorPalette::detect())
}

/// Handle the `gearboxes` subcommand.
pub fn handle_list_gearboxes(paths: &CatalogPaths, format: OutputFormat) -> Result<()> {
    let catalog = load_catalog(paths)?;
    let mut out = io::stdout().lock();
    render_gearboxes(&mut out, &catalog, format, ColorPalette::detect())
}
