use super::filters::RejectReason;

/// Per-outcome counters for one extraction run.
///
/// Owned by the pipeline driver and returned to the caller, never ambient
/// global state. `merge` exists so a parallel driver could keep per-worker
/// partials and sum them at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Input files handed to the parser (including ones that failed to parse).
    pub files_scanned: usize,
    /// Chains that passed every filter and were written to the output.
    pub chains_written: usize,
    /// Whole structures rejected for declared resolution above the ceiling.
    pub skipped_resolution: usize,
    /// Chains rejected for having fewer standard residues than the minimum.
    pub skipped_short: usize,
    /// Chains rejected for containing UNK residues.
    pub skipped_unknown: usize,
    /// Chains rejected by the backbone continuity check.
    pub skipped_gaps: usize,
    /// Files that could not be decompressed or parsed.
    pub parse_errors: usize,
}

impl RunStats {
    pub fn record_rejection(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::TooShort => self.skipped_short += 1,
            RejectReason::ContainsUnknown => self.skipped_unknown += 1,
            RejectReason::HasGap => self.skipped_gaps += 1,
            RejectReason::ResolutionTooLow => self.skipped_resolution += 1,
        }
    }

    pub fn merge(&mut self, other: &RunStats) {
        self.files_scanned += other.files_scanned;
        self.chains_written += other.chains_written;
        self.skipped_resolution += other.skipped_resolution;
        self.skipped_short += other.skipped_short;
        self.skipped_unknown += other.skipped_unknown;
        self.skipped_gaps += other.skipped_gaps;
        self.parse_errors += other.parse_errors;
    }
}
