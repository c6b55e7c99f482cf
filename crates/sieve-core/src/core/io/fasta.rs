use std::io::{self, Write};

/// One accepted chain, ready to be appended to the output file.
///
/// Records are immutable once produced and written exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Record identifier, `{structure_id}_{chain_id}`.
    pub id: String,
    /// One-letter amino acid sequence, unwrapped.
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(structure_id: &str, chain_id: &str, sequence: String) -> Self {
        Self {
            id: format!("{}_{}", structure_id, chain_id),
            sequence,
        }
    }
}

/// Writes one record as a FASTA header/sequence pair.
///
/// Sequences are written on a single line; no wrapping.
pub fn write_record(writer: &mut impl Write, record: &SequenceRecord) -> io::Result<()> {
    writeln!(writer, ">{}", record.id)?;
    writeln!(writer, "{}", record.sequence)
}
