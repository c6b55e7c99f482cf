use phf::{Map, Set, phf_map, phf_set};

/// Sentinel name PDB files use for residues of unknown identity.
pub const UNKNOWN_RESIDUE_NAME: &str = "UNK";

static THREE_TO_ONE_LETTER: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D',
    "CYS" => 'C', "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G',
    "HIS" => 'H', "ILE" => 'I', "LEU" => 'L', "LYS" => 'K',
    "MET" => 'M', "PHE" => 'F', "PRO" => 'P', "SER" => 'S',
    "THR" => 'T', "TRP" => 'W', "TYR" => 'Y', "VAL" => 'V',
};

// The 20 standard codes plus the UNK sentinel, which appears in ATOM records
// of polymer chains and must reach the composition check rather than being
// dropped with the hetero residues.
static AMINO_ACID_NAMES: Set<&'static str> = phf_set! {
    "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE",
    "LEU", "LYS", "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL",
    "UNK",
};

/// Translates a three-letter residue name into its one-letter amino acid code.
///
/// Unmapped names (including `UNK`) fall back to `'X'`; translation never fails.
pub fn one_letter_code(residue_name: &str) -> char {
    THREE_TO_ONE_LETTER
        .get(residue_name.trim())
        .copied()
        .unwrap_or('X')
}

/// Returns whether the name denotes an amino acid residue eligible for
/// sequence extraction.
pub fn is_amino_acid_name(residue_name: &str) -> bool {
    AMINO_ACID_NAMES.contains(residue_name.trim())
}
