use super::gaps;
use super::{FilterDecision, RejectReason};
use crate::core::models::residue::Residue;
use crate::core::utils::identifiers::{self, UNKNOWN_RESIDUE_NAME};
use crate::engine::config::FilterConfig;

/// Applies the per-chain checks to a chain's standard-residue list.
///
/// Checks run in a fixed order and short-circuit on the first failure, so a
/// chain is tallied under exactly one reason: length, then unknown-residue
/// content, then backbone continuity.
pub fn evaluate_chain(residues: &[&Residue], config: &FilterConfig) -> FilterDecision {
    if residues.len() < config.min_chain_length {
        return FilterDecision::Reject(RejectReason::TooShort);
    }
    if residues
        .iter()
        .any(|residue| residue.name == UNKNOWN_RESIDUE_NAME)
    {
        return FilterDecision::Reject(RejectReason::ContainsUnknown);
    }
    if gaps::has_chain_break(residues, config.max_gap_distance) {
        return FilterDecision::Reject(RejectReason::HasGap);
    }
    FilterDecision::Accept
}

/// Builds the one-letter sequence for an accepted chain, preserving residue
/// order. Unmapped names become `'X'` rather than failing.
pub fn chain_sequence(residues: &[&Residue]) -> String {
    residues
        .iter()
        .map(|residue| identifiers::one_letter_code(&residue.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use nalgebra::Point3;

    fn residue(seq_num: isize, name: &str) -> Residue {
        let mut residue = Residue::new(seq_num, ' ', name, false);
        residue.add_atom(Atom::new("CA", Point3::new(seq_num as f64 * 3.8, 0.0, 0.0)));
        residue
    }

    fn contiguous_chain(names: &[&str]) -> Vec<Residue> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| residue(i as isize, name))
            .collect()
    }

    fn config(min_len: usize) -> FilterConfig {
        FilterConfig {
            min_chain_length: min_len,
            ..FilterConfig::default()
        }
    }

    #[test]
    fn accepts_clean_chain_of_minimum_length() {
        let residues = contiguous_chain(&["ALA"; 48]);
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(evaluate_chain(&refs, &config(48)), FilterDecision::Accept);
    }

    #[test]
    fn rejects_short_chain() {
        let residues = contiguous_chain(&["ALA"; 47]);
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(
            evaluate_chain(&refs, &config(48)),
            FilterDecision::Reject(RejectReason::TooShort)
        );
    }

    #[test]
    fn rejects_chain_with_unknown_residue_anywhere() {
        let mut names = vec!["ALA"; 48];
        names[20] = "UNK";
        let residues = contiguous_chain(&names);
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(
            evaluate_chain(&refs, &config(48)),
            FilterDecision::Reject(RejectReason::ContainsUnknown)
        );
    }

    #[test]
    fn length_check_wins_over_unknown_check() {
        let residues = contiguous_chain(&["ALA", "UNK", "GLY"]);
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(
            evaluate_chain(&refs, &config(48)),
            FilterDecision::Reject(RejectReason::TooShort)
        );
    }

    #[test]
    fn unknown_check_wins_over_gap_check() {
        let mut residues = contiguous_chain(&["ALA"; 48]);
        residues[10] = residue(200, "UNK"); // far away AND unknown
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(
            evaluate_chain(&refs, &config(48)),
            FilterDecision::Reject(RejectReason::ContainsUnknown)
        );
    }

    #[test]
    fn rejects_chain_with_backbone_break() {
        let mut residues = contiguous_chain(&["ALA"; 48]);
        residues[30] = residue(300, "ALA");
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(
            evaluate_chain(&refs, &config(48)),
            FilterDecision::Reject(RejectReason::HasGap)
        );
    }

    #[test]
    fn rejects_chain_without_enough_ca_atoms_as_gapped() {
        let residues: Vec<Residue> = (0..48)
            .map(|i| Residue::new(i, ' ', "ALA", false))
            .collect();
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(
            evaluate_chain(&refs, &config(48)),
            FilterDecision::Reject(RejectReason::HasGap)
        );
    }

    #[test]
    fn chain_sequence_maps_in_order_with_fallback() {
        let residues = contiguous_chain(&["MET", "LYS", "VAL", "MSE"]);
        let refs: Vec<&Residue> = residues.iter().collect();
        assert_eq!(chain_sequence(&refs), "MKVX");
    }
}
