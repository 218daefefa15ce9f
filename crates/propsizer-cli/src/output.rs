//! Output formatting for selection reports and catalog listings.
//!
//! Every renderer writes to a caller-supplied writer so stdout stays the only
//! place results go; logs are routed to stderr by the binary.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use propsizer_lib::{
    write_csv, write_engine_catalog, write_gearbox_catalog, BoatSpecification, CandidatePairing,
    Catalog, HullClass, PowerRequirement, SelectionOutcome, SelectionReport,
};

use crate::terminal::{format_usd, rule_char, ColorPalette};

/// Output format for all subcommands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    #[default]
    Table,
    /// Pretty-printed JSON document.
    Json,
    /// Comma-separated values with a header row.
    Csv,
}

/// Machine-readable status code for an outcome.
pub fn status_code(outcome: &SelectionOutcome<'_>) -> &'static str {
    match outcome {
        SelectionOutcome::Ranked { .. } => "ranked",
        SelectionOutcome::NoEngineMatch { .. } => "no_engine_match",
        SelectionOutcome::NoGearboxMatch { .. } => "no_gearbox_match",
    }
}

#[derive(Serialize)]
struct SelectionView<'r, 'a> {
    specification: &'r BoatSpecification,
    requirement: &'r PowerRequirement,
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<&'static str>,
    total_candidates: usize,
    candidates: &'r [CandidatePairing<'a>],
}

/// Render a selection report.
///
/// `top` limits the table and JSON views. CSV always carries every pairing,
/// matching the `--export` file.
pub fn render_selection<W: Write>(
    out: &mut W,
    spec: &BoatSpecification,
    report: &SelectionReport<'_>,
    format: OutputFormat,
    top: usize,
    palette: ColorPalette,
) -> Result<()> {
    match format {
        OutputFormat::Table => render_selection_table(out, spec, report, top, palette)?,
        OutputFormat::Json => {
            let view = SelectionView {
                specification: spec,
                requirement: &report.requirement,
                status: status_code(&report.outcome),
                message: report.status(),
                hint: report.hint(),
                total_candidates: report.candidates().len(),
                candidates: report.top(top),
            };
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(report, out)?,
    }
    Ok(())
}

/// Print the power estimate block shared by every outcome.
pub fn render_power_figures<W: Write>(
    out: &mut W,
    spec: &BoatSpecification,
    requirement: &PowerRequirement,
    palette: ColorPalette,
) -> std::io::Result<()> {
    let ColorPalette {
        white_bold,
        cyan,
        reset,
        ..
    } = palette;
    let shafts = if spec.shafts == 1 { "shaft" } else { "shafts" };

    writeln!(out, "{white_bold}Power estimate{reset}")?;
    writeln!(
        out,
        "  {:<34}{cyan}{:>9.1} kW{reset}",
        "Total required (no margin):", requirement.total_kw
    )?;
    writeln!(
        out,
        "  {:<34}{cyan}{:>9.1} kW{reset}",
        format!("Total required ({:.0}% margin):", spec.power_margin * 100.0),
        requirement.total_kw_with_margin
    )?;
    writeln!(
        out,
        "  {:<34}{cyan}{:>9.1} kW{reset}",
        format!("Per shaft required ({} {shafts}):", spec.shafts),
        requirement.per_shaft_kw
    )?;
    writeln!(
        out,
        "  {:<34}{cyan}{:>9} rpm{reset}",
        "Target prop RPM:", requirement.target_prop_rpm
    )
}

fn render_selection_table<W: Write>(
    out: &mut W,
    spec: &BoatSpecification,
    report: &SelectionReport<'_>,
    top: usize,
    palette: ColorPalette,
) -> std::io::Result<()> {
    render_power_figures(out, spec, &report.requirement, palette)?;
    writeln!(out)?;

    if let Some(hint) = report.hint() {
        writeln!(out, "{}{}{}", palette.yellow, report.status(), palette.reset)?;
        writeln!(out, "Hint: {hint}")?;
        return Ok(());
    }

    let shown = report.top(top);
    writeln!(
        out,
        "{} Showing top {}.",
        report.status(),
        shown.len()
    )?;

    let header = format!(
        "{:>3}  {:<24} {:>7} {:>5} {:>5}  {:<14} {:>6} {:>8} {:>8} {:>10} {:>7}",
        "#", "Engine", "kW", "hp", "RPM", "Gearbox", "Ratio", "Prop RPM", "Margin", "Price", "Score"
    );
    writeln!(out, "{}{header}{}", palette.white_bold, palette.reset)?;
    let rule: String = std::iter::repeat(rule_char())
        .take(header.chars().count())
        .collect();
    writeln!(out, "{}{rule}{}", palette.gray, palette.reset)?;

    for (index, pairing) in shown.iter().enumerate() {
        let margin_pct = pairing.power_margin_pct();
        let score_color = if index == 0 { palette.green } else { "" };
        writeln!(
            out,
            "{:>3}  {:<24} {:>7.1} {:>5.0} {:>5.0}  {:<14} {:>6} {:>8.0} {}{:>7.1}%{} {:>10} {}{:>7.3}{}",
            index + 1,
            pairing.engine.display_name(),
            pairing.engine.power_kw,
            pairing.engine.power_hp(),
            pairing.engine.rated_rpm,
            pairing.gearbox.model,
            format!("{}:1", pairing.chosen_ratio),
            pairing.achieved_prop_rpm,
            palette.margin(margin_pct),
            margin_pct,
            palette.reset,
            format_usd(pairing.price_usd),
            score_color,
            pairing.score,
            palette.reset,
        )?;
    }
    Ok(())
}

fn source_label(source: Option<&std::path::Path>) -> String {
    source.map_or_else(|| "built-in".to_string(), |p| p.display().to_string())
}

/// Render the engine table of a catalog.
pub fn render_engines<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let engines = catalog.engines();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, engines)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_engine_catalog(engines, out)?,
        OutputFormat::Table => {
            writeln!(
                out,
                "{}Engines ({}, {}):{}",
                palette.white_bold,
                engines.len(),
                source_label(catalog.engine_source()),
                palette.reset
            )?;
            writeln!(
                out,
                "{:<14} {:<14} {:>7} {:>5} {:>5} {:>7} {:<8} {:>16} {:>10}",
                "Model", "Manufacturer", "kW", "hp", "RPM", "Weight", "Fuel", "L x W x H (mm)", "Price"
            )?;
            for engine in engines {
                writeln!(
                    out,
                    "{:<14} {:<14} {:>7.1} {:>5.0} {:>5.0} {:>7.0} {:<8} {:>16} {:>10}",
                    engine.model,
                    engine.manufacturer,
                    engine.power_kw,
                    engine.power_hp(),
                    engine.rated_rpm,
                    engine.dry_weight_kg,
                    engine.fuel,
                    format!(
                        "{:.0} x {:.0} x {:.0}",
                        engine.length_mm, engine.width_mm, engine.height_mm
                    ),
                    format_usd(engine.price_usd),
                )?;
            }
        }
    }
    Ok(())
}

/// Render the gearbox table of a catalog.
pub fn render_gearboxes<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    format: OutputFormat,
    palette: ColorPalette,
) -> Result<()> {
    let gearboxes = catalog.gearboxes();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, gearboxes)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_gearbox_catalog(gearboxes, out)?,
        OutputFormat::Table => {
            writeln!(
                out,
                "{}Gearboxes ({}, {}):{}",
                palette.white_bold,
                gearboxes.len(),
                source_label(catalog.gearbox_source()),
                palette.reset
            )?;
            writeln!(
                out,
                "{:<16} {:>9} {:>9} {:>10}  Ratios",
                "Model", "Max kW", "Max RPM", "Price"
            )?;
            for gearbox in gearboxes {
                writeln!(
                    out,
                    "{:<16} {:>9.0} {:>9.0} {:>10}  {}",
                    gearbox.model,
                    gearbox.max_input_kw,
                    gearbox.max_input_rpm,
                    format_usd(gearbox.price_usd),
                    gearbox.ratio_summary(),
                )?;
            }
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct RpmView<'a> {
    hull_class: &'a str,
    displacement_tonnes: f64,
    target_prop_rpm: u32,
    recognized: bool,
}

/// Render an advisory RPM lookup.
pub fn render_rpm<W: Write>(
    out: &mut W,
    hull_label: &str,
    displacement_tonnes: f64,
    target_prop_rpm: u32,
    format: OutputFormat,
) -> Result<()> {
    let view = RpmView {
        hull_class: hull_label,
        displacement_tonnes,
        target_prop_rpm,
        recognized: HullClass::parse(hull_label).is_ok(),
    };
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &view)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "hull_class,displacement_tonnes,target_prop_rpm,recognized")?;
            writeln!(
                out,
                "{},{},{},{}",
                view.hull_class.replace(',', " "),
                view.displacement_tonnes,
                view.target_prop_rpm,
                view.recognized
            )?;
        }
        OutputFormat::Table => {
            writeln!(
                out,
                "Target prop RPM: {} ({}, {} t)",
                view.target_prop_rpm, view.hull_class, view.displacement_tonnes
            )?;
            if !view.recognized {
                writeln!(out, "Hull class not recognized; neutral default applied.")?;
            }
        }
    }
    Ok(())
}
