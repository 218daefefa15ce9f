//! Advisory target RPM lookup.

use std::io;

use anyhow::Result;
use clap::Args;

use propsizer_cli::output::{render_rpm, OutputFormat};
use propsizer_lib::target_rpm_for_label;

#[derive(Args, Debug)]
pub struct RpmArgs {
    /// Hull class label. Unrecognised labels get a neutral default.
    #[arg(long)]
    pub hull: String,
    /// Displacement in tonnes.
    #[arg(long)]
    pub displacement: f64,
    /// Desired propeller RPM (0 = use the lookup table).
    #[arg(long = "prop-rpm", default_value_t = 0)]
    pub prop_rpm: u32,
}

/// Handle the `rpm` subcommand.
///
/// Unlike `select`, this lookup never rejects the hull label.
pub fn handle_rpm(args: &RpmArgs, format: OutputFormat) -> Result<()> {
    let desired = (args.prop_rpm > 0).then_some(args.prop_rpm);
    let rpm = target_rpm_for_label(&args.hull, args.displacement, desired);
    let mut out = io::stdout().lock();
    render_rpm(&mut out, &args.hull, args.displacement, rpm, format)
}
