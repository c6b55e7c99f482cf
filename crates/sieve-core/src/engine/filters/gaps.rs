use crate::core::models::residue::Residue;
use nalgebra::Point3;

const ALPHA_CARBON_ATOM_NAME: &str = "CA";

/// Reports whether a chain's backbone is structurally discontinuous.
///
/// Collects the Cα position of every residue that has one (residues missing
/// the atom are skipped, not errors) and checks the Euclidean distance
/// between consecutive retained positions against `max_distance`. Because
/// skipped residues make retained neighbors non-adjacent in sequence, this is
/// a continuity heuristic, not an exact residue-adjacency check.
///
/// Chains with fewer than 2 residues, or fewer than 2 retained positions,
/// are treated as incomplete and reported as broken.
pub fn has_chain_break(residues: &[&Residue], max_distance: f64) -> bool {
    if residues.len() < 2 {
        return true;
    }

    let positions: Vec<&Point3<f64>> = residues
        .iter()
        .filter_map(|residue| residue.position_of(ALPHA_CARBON_ATOM_NAME))
        .collect();
    if positions.len() < 2 {
        return true;
    }

    positions
        .windows(2)
        .any(|pair| (pair[1] - pair[0]).norm() > max_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;

    fn residue_with_ca(seq_num: isize, x: f64) -> Residue {
        let mut residue = Residue::new(seq_num, ' ', "ALA", false);
        residue.add_atom(Atom::new("CA", Point3::new(x, 0.0, 0.0)));
        residue
    }

    fn residue_without_ca(seq_num: isize) -> Residue {
        let mut residue = Residue::new(seq_num, ' ', "GLY", false);
        residue.add_atom(Atom::new("N", Point3::origin()));
        residue
    }

    #[test]
    fn contiguous_backbone_has_no_break() {
        let residues: Vec<Residue> = (0..5).map(|i| residue_with_ca(i, i as f64 * 3.8)).collect();
        let refs: Vec<&Residue> = residues.iter().collect();
        assert!(!has_chain_break(&refs, 4.2));
    }

    #[test]
    fn distance_above_threshold_is_a_break() {
        let residues = [
            residue_with_ca(1, 0.0),
            residue_with_ca(2, 3.8),
            residue_with_ca(3, 3.8 + 4.3),
        ];
        let refs: Vec<&Residue> = residues.iter().collect();
        assert!(has_chain_break(&refs, 4.2));
    }

    #[test]
    fn distance_exactly_at_threshold_is_not_a_break() {
        let residues = [residue_with_ca(1, 0.0), residue_with_ca(2, 4.2)];
        let refs: Vec<&Residue> = residues.iter().collect();
        assert!(!has_chain_break(&refs, 4.2));
    }

    #[test]
    fn fewer_than_two_residues_counts_as_broken() {
        assert!(has_chain_break(&[], 4.2));
        let single = residue_with_ca(1, 0.0);
        assert!(has_chain_break(&[&single], 4.2));
    }

    #[test]
    fn fewer_than_two_retained_positions_counts_as_broken() {
        let residues = [residue_with_ca(1, 0.0), residue_without_ca(2)];
        let refs: Vec<&Residue> = residues.iter().collect();
        assert!(has_chain_break(&refs, 4.2));

        let residues = [residue_without_ca(1), residue_without_ca(2)];
        let refs: Vec<&Residue> = residues.iter().collect();
        assert!(has_chain_break(&refs, 4.2));
    }

    #[test]
    fn residues_missing_ca_are_skipped_not_counted() {
        // The skipped middle residue leaves its neighbors adjacent in the
        // retained list; they are close enough, so no break is reported.
        let residues = [
            residue_with_ca(1, 0.0),
            residue_without_ca(2),
            residue_with_ca(3, 3.8),
        ];
        let refs: Vec<&Residue> = residues.iter().collect();
        assert!(!has_chain_break(&refs, 4.2));
    }
}
