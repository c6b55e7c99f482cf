use pdbsieve::engine::stats::RunStats;
use pdbsieve::workflows::extract::ExtractionConfig;

/// Prints the end-of-run breakdown.
///
/// Cosmetic only; the output file contents are unaffected by anything here.
pub fn print_summary(stats: &RunStats, config: &ExtractionConfig) {
    println!();
    println!("=== Extraction complete ===");
    println!("Files scanned:                  {}", stats.files_scanned);
    println!("Chains written:                 {}", stats.chains_written);
    println!(
        "Files dropped (resolution > {}): {}",
        config.filter.max_resolution, stats.skipped_resolution
    );
    println!(
        "Chains dropped (length < {}):   {}",
        config.filter.min_chain_length, stats.skipped_short
    );
    println!("Chains dropped (contain UNK):   {}", stats.skipped_unknown);
    println!("Chains dropped (backbone gaps): {}", stats.skipped_gaps);
    println!("Unreadable files:               {}", stats.parse_errors);
    println!("Results saved to: {}", config.output_path.display());
}
