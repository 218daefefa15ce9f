//! The `select` subcommand: estimate power and rank engine + gearbox pairings.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use propsizer_cli::output::{render_selection, OutputFormat};
use propsizer_cli::terminal::ColorPalette;
use propsizer_lib::spec::{DEFAULT_FUEL, DEFAULT_POWER_MARGIN};
use propsizer_lib::{select_propulsion_with, write_csv, BoatSpecification, HullClass};

use super::catalog::{load_catalog, CatalogPaths};

#[derive(Args, Debug)]
pub struct SelectArgs {
    /// Hull class: displacement, semi-displacement (alias: semi) or planing.
    #[arg(long, required_unless_present = "spec")]
    pub hull: Option<String>,
    /// Displacement in tonnes.
    #[arg(long, required_unless_present = "spec")]
    pub displacement: Option<f64>,
    /// Target speed in knots.
    #[arg(long, required_unless_present = "spec")]
    pub speed: Option<f64>,
    /// Number of propeller shafts.
    #[arg(long, default_value_t = 1)]
    pub shafts: u32,
    /// Fuel type engines must burn.
    #[arg(long, default_value = DEFAULT_FUEL)]
    pub fuel: String,
    /// Maximum engine price per shaft (USD).
    #[arg(long)]
    pub budget: Option<f64>,
    /// Maximum engine length (mm).
    #[arg(long = "max-length")]
    pub max_length: Option<f64>,
    /// Maximum engine dry weight (kg).
    #[arg(long = "max-weight")]
    pub max_weight: Option<f64>,
    /// Desired propeller RPM (0 = auto).
    #[arg(long = "prop-rpm", default_value_t = 0)]
    pub prop_rpm: u32,
    /// Power margin as a fraction, e.g. 0.15 for 15%.
    #[arg(long, default_value_t = DEFAULT_POWER_MARGIN)]
    pub margin: f64,
    /// Number of pairings to show.
    #[arg(long, default_value_t = 20)]
    pub top: usize,
    /// Write every pairing to this CSV file as well.
    #[arg(long)]
    pub export: Option<PathBuf>,
    /// Read the specification from a JSON file instead of flags.
    #[arg(long, conflicts_with_all = ["hull", "displacement", "speed"])]
    pub spec: Option<PathBuf>,
}

impl SelectArgs {
    /// Build the specification from the JSON file or the individual flags.
    pub fn specification(&self) -> Result<BoatSpecification> {
        if let Some(path) = &self.spec {
            return BoatSpecification::from_path(path)
                .with_context(|| format!("failed to read specification from {}", path.display()));
        }

        let hull = self.hull.as_deref().context("--hull is required")?;
        let displacement = self.displacement.context("--displacement is required")?;
        let speed = self.speed.context("--speed is required")?;

        let mut spec = BoatSpecification::new(HullClass::parse(hull)?, displacement, speed, self.shafts)
            .with_fuel(self.fuel.clone())
            .with_desired_prop_rpm((self.prop_rpm > 0).then_some(self.prop_rpm))
            .with_power_margin(self.margin);
        if let Some(budget) = self.budget {
            spec = spec.with_budget(budget);
        }
        if let Some(length) = self.max_length {
            spec = spec.with_max_engine_length(length);
        }
        if let Some(weight) = self.max_weight {
            spec = spec.with_max_engine_weight(weight);
        }
        Ok(spec)
    }
}

/// Handle the `select` subcommand.
pub fn handle_select(args: &SelectArgs, paths: &CatalogPaths, format: OutputFormat) -> Result<()> {
    let spec = args.specification()?;
    spec.validate()?;

    let catalog = load_catalog(paths)?;
    let report = select_propulsion_with(&spec, &catalog)?;
    tracing::debug!("{}", report.status());

    if let Some(path) = &args.export {
        let file = File::create(path)
            .with_context(|| format!("failed to create export file {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        write_csv(&report, &mut writer)
            .with_context(|| format!("failed to write export file {}", path.display()))?;
        writer.flush()?;
        tracing::info!(
            "exported {} pairings to {}",
            report.candidates().len(),
            path.display()
        );
    }

    let mut out = io::stdout().lock();
    render_selection(&mut out, &spec, &report, format, args.top, ColorPalette::detect())
}
