mod cli;
mod config;
mod error;
mod logging;
mod summary;
mod utils;

use crate::cli::Cli;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use clap::Parser;
use pdbsieve::engine::progress::ProgressReporter;
use pdbsieve::workflows::extract;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, &cli.log_file)?;

    info!("🚀 pdbsieve v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let config = config::resolve(&cli)?;
    println!(
        "Sieving {} -> {}",
        config.input_root.display(),
        config.output_path.display()
    );
    println!(
        "Strategy: resolution > {} dropped (absent kept) | length < {} dropped | UNK dropped | gaps dropped",
        config.filter.max_resolution, config.filter.min_chain_length
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let stats = extract::run(&config, &reporter)?;

    info!(
        "✅ Extraction finished: {} chains written.",
        stats.chains_written
    );
    summary::print_summary(&stats, &config);
    Ok(())
}
