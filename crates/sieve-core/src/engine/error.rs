use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal pipeline failures.
///
/// Per-file parse problems are deliberately absent: those are recovered,
/// counted in [`crate::engine::stats::RunStats`], and never abort a run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Input root does not exist or is not a directory: {}", .0.display())]
    InputRootNotFound(PathBuf),

    #[error("Failed to create output file '{}': {source}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
