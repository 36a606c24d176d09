mod commands;

use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use aerocharge_cli::output::{print_footer, print_logo, CatalogTable, OutputFormat};
use commands::estimate::EstimateArgs;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate airport charging demand for electric aircraft"
)]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Suppress the banner and footer.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate annual energy, average power and peak power demand.
    Estimate(EstimateArgs),
    /// List the reference tables (aircraft, charging levels, scenarios).
    Catalog {
        /// Table to list; all tables when omitted.
        #[arg(value_enum)]
        table: Option<CatalogTable>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let started = Instant::now();

    // Banner and footer would corrupt JSON output.
    let decorate = !cli.no_logo && cli.format == OutputFormat::Text;
    if decorate {
        print_logo();
    }

    match &cli.command {
        Command::Estimate(args) => commands::estimate::handle_estimate(args, cli.format)?,
        Command::Catalog { table } => commands::catalog::handle_catalog(*table, cli.format)?,
    }

    if decorate {
        print_footer(started.elapsed());
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
