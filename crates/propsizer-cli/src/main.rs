use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use propsizer_cli::output::OutputFormat;

mod commands;

use commands::catalog::{handle_list_engines, handle_list_gearboxes, CatalogPaths};
use commands::rpm::{handle_rpm, RpmArgs};
use commands::select::{handle_select, SelectArgs};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Early-stage propulsion sizing: power estimate and engine + gearbox selection"
)]
struct Cli {
    /// Engine catalog CSV to use instead of the built-in table.
    #[arg(long, global = true, env = "PROPSIZER_ENGINE_CATALOG")]
    engine_catalog: Option<PathBuf>,

    /// Gearbox catalog CSV to use instead of the built-in table.
    #[arg(long, global = true, env = "PROPSIZER_GEARBOX_CATALOG")]
    gearbox_catalog: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate required power and rank engine + gearbox pairings.
    Select(SelectArgs),
    /// List the engine catalog.
    Engines,
    /// List the gearbox catalog.
    Gearboxes,
    /// Look up the advisory target propeller RPM for a hull.
    Rpm(RpmArgs),
}

impl Cli {
    fn catalog_paths(&self) -> CatalogPaths {
        CatalogPaths {
            engines: self.engine_catalog.clone(),
            gearboxes: self.gearbox_catalog.clone(),
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let paths = cli.catalog_paths();

    match &cli.command {
        Command::Select(args) => handle_select(args, &paths, cli.format),
        Command::Engines => handle_list_engines(&paths, cli.format),
        Command::Gearboxes => handle_list_gearboxes(&paths, cli.format),
        Command::Rpm(args) => handle_rpm(args, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
