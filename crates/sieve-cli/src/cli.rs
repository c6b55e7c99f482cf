use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Tony Kan, Ted Yu, William A. Goddard III",
    version,
    about = "pdbsieve - Scans a directory tree of gzip-compressed PDB structures, filters chains by resolution, length, composition, and backbone continuity, and writes the survivors as FASTA records.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Root directory searched recursively for compressed structure files (*.gz).
    #[arg(short, long, required = true, value_name = "DIR")]
    pub input: PathBuf,

    /// Path for the output FASTA file.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Path to an optional configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Filter Overrides ---
    /// Override the minimum number of standard residues a chain must have.
    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,

    /// Override the resolution ceiling in Angstroms.
    /// Structures without resolution metadata always pass.
    #[arg(long, value_name = "FLOAT")]
    pub max_resolution: Option<f64>,

    /// Override the maximum allowed distance between consecutive Cα atoms
    /// before a chain counts as broken, in Angstroms.
    #[arg(long, value_name = "FLOAT")]
    pub max_gap_distance: Option<f64>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
