use crate::core::io::fasta::{self, SequenceRecord};
use crate::core::io::pdb::{PdbError, PdbFile};
use crate::core::io::traits::StructureFile;
use crate::core::models::structure::Structure;
use crate::engine::config::FilterConfig;
use crate::engine::error::PipelineError;
use crate::engine::filters::FilterDecision;
use crate::engine::filters::chain as chain_filter;
use crate::engine::filters::structure as structure_filter;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::stats::RunStats;
use flate2::read::GzDecoder;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const COMPRESSED_EXTENSION: &str = "gz";
const PROGRESS_LOG_INTERVAL: usize = 1000;

/// Startup configuration of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Directory tree searched recursively for compressed structure files.
    pub input_root: PathBuf,
    /// FASTA file accepted chains are appended to.
    pub output_path: PathBuf,
    pub filter: FilterConfig,
}

/// Runs the extraction pipeline to completion.
///
/// The input root must exist before the output file is created; that is the
/// only fatal precondition. Individual files that fail to decompress or
/// parse are counted and skipped, never fatal. Accepted chains are written
/// immediately in file-then-model-then-chain encounter order.
///
/// # Errors
///
/// Returns [`PipelineError`] for the missing input root or for output I/O
/// failures. Parse failures are reported through [`RunStats::parse_errors`].
#[instrument(skip_all, name = "extraction_workflow")]
pub fn run(
    config: &ExtractionConfig,
    reporter: &ProgressReporter,
) -> Result<RunStats, PipelineError> {
    if !config.input_root.is_dir() {
        return Err(PipelineError::InputRootNotFound(config.input_root.clone()));
    }

    let mut files = Vec::new();
    collect_compressed_files(&config.input_root, &mut files)?;
    files.sort();
    info!(
        "Found {} compressed structure files under {}.",
        files.len(),
        config.input_root.display()
    );
    reporter.report(Progress::Message(format!(
        "Found {} compressed structure files",
        files.len()
    )));

    let output = File::create(&config.output_path).map_err(|source| {
        PipelineError::OutputCreate {
            path: config.output_path.clone(),
            source,
        }
    })?;
    let mut writer = BufWriter::new(output);

    reporter.report(Progress::RunStart {
        total_files: files.len() as u64,
    });

    let mut stats = RunStats::default();
    for path in &files {
        stats.files_scanned += 1;
        match parse_compressed_structure(path) {
            Ok(structure) => {
                process_structure(&structure, &config.filter, &mut writer, &mut stats)?;
            }
            Err(error) => {
                stats.parse_errors += 1;
                debug!("Skipping {}: {}", path.display(), error);
            }
        }
        if stats.files_scanned % PROGRESS_LOG_INTERVAL == 0 {
            debug!(
                "Progress: {}/{} files | {} chains written | {} errors",
                stats.files_scanned,
                files.len(),
                stats.chains_written,
                stats.parse_errors
            );
        }
        reporter.report(Progress::FileDone);
    }

    writer.flush()?;
    reporter.report(Progress::RunFinish);
    info!(
        "Extraction complete: {} chains written from {} files.",
        stats.chains_written, stats.files_scanned
    );
    Ok(stats)
}

/// Filters one parsed structure and streams its accepted chains.
///
/// Public so the decision logic can be exercised on synthetic in-memory
/// structures without touching the filesystem.
pub fn process_structure(
    structure: &Structure,
    filter: &FilterConfig,
    writer: &mut impl Write,
    stats: &mut RunStats,
) -> io::Result<()> {
    match structure_filter::evaluate_structure(structure, filter) {
        FilterDecision::Reject(reason) => {
            stats.record_rejection(reason);
            return Ok(());
        }
        FilterDecision::Accept => {}
    }

    for model in structure.models() {
        for chain in model.chains() {
            let residues = chain.standard_residues();
            match chain_filter::evaluate_chain(&residues, filter) {
                FilterDecision::Accept => {
                    let record = SequenceRecord::new(
                        &structure.id,
                        &chain.id,
                        chain_filter::chain_sequence(&residues),
                    );
                    fasta::write_record(writer, &record)?;
                    stats.chains_written += 1;
                }
                FilterDecision::Reject(reason) => stats.record_rejection(reason),
            }
        }
    }
    Ok(())
}

fn collect_compressed_files(dir: &Path, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_compressed_files(&path, files)?;
        } else if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(COMPRESSED_EXTENSION))
        {
            files.push(path);
        }
    }
    Ok(())
}

fn parse_compressed_structure(path: &Path) -> Result<Structure, PdbError> {
    let id = structure_id_from_path(path);
    let file = File::open(path)?;
    let mut reader = BufReader::new(GzDecoder::new(BufReader::new(file)));
    PdbFile::read_from(&id, &mut reader)
}

// "1abc.pdb1.gz" and "1abc.ent.gz" both identify entry "1abc".
fn structure_id_from_path(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split('.').next())
        .unwrap_or("unknown")
        .to_string()
}
