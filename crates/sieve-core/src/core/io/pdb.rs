use crate::core::io::traits::StructureFile;
use crate::core::models::builder::StructureBuilder;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: PdbParseErrorKind,
    },
    #[error("Missing required record: {0}")]
    MissingRecord(String),
}

#[derive(Debug, Error)]
pub enum PdbParseErrorKind {
    #[error("Invalid integer format in columns {columns} (value: '{value}')")]
    InvalidInt { columns: String, value: String },
    #[error("Invalid float format in columns {columns} (value: '{value}')")]
    InvalidFloat { columns: String, value: String },
    #[error("Required field in columns {columns} is empty")]
    MissingRequiredField { columns: String },
    #[error("Line is too short for an ATOM/HETATM record (coordinate block ends at column 54)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Reader for the fixed-column PDB format.
///
/// Covers exactly what the extraction pipeline consumes: ATOM/HETATM
/// coordinate records, MODEL/ENDMDL boundaries, TER chain breaks, and the
/// REMARK 2 resolution line. Connectivity, anisotropic records, and the rest
/// of the header are ignored.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(id: &str, reader: &mut impl BufRead) -> Result<Structure, PdbError> {
        let mut builder = StructureBuilder::new(id);
        let mut atom_count = 0usize;

        let mut current_chain: Option<String> = None;
        let mut current_residue: Option<(isize, char)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            let record_type = slice_and_trim(&line, 0, 6);
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 54 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let name_str = slice_and_trim(&line, 12, 16);
                    let alt_loc = line
                        .get(16..17)
                        .and_then(|s| s.chars().next())
                        .unwrap_or(' ');
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id_str = slice_and_trim(&line, 21, 22);
                    let res_seq_str = slice_and_trim(&line, 22, 26);
                    let icode = line
                        .get(26..27)
                        .and_then(|s| s.chars().next())
                        .unwrap_or(' ');
                    let x_str = slice_and_trim(&line, 30, 38);
                    let y_str = slice_and_trim(&line, 38, 46);
                    let z_str = slice_and_trim(&line, 46, 54);

                    // Alternate locations other than the primary one would
                    // duplicate residues in the candidate list.
                    if alt_loc != ' ' && alt_loc != 'A' {
                        continue;
                    }

                    if name_str.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "13-16".into(),
                            },
                        });
                    }
                    if res_name_str.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "18-20".into(),
                            },
                        });
                    }
                    let res_seq: isize = res_seq_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".into(),
                            value: res_seq_str.into(),
                        },
                    })?;
                    let x: f64 = x_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidFloat {
                            columns: "31-38".into(),
                            value: x_str.into(),
                        },
                    })?;
                    let y: f64 = y_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidFloat {
                            columns: "39-46".into(),
                            value: y_str.into(),
                        },
                    })?;
                    let z: f64 = z_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidFloat {
                            columns: "47-54".into(),
                            value: z_str.into(),
                        },
                    })?;

                    let chain_id = if chain_id_str.is_empty() {
                        "A"
                    } else {
                        chain_id_str
                    };
                    let hetero = record_type == "HETATM";

                    if current_chain.as_deref() != Some(chain_id) {
                        builder.start_chain(chain_id);
                        current_chain = Some(chain_id.to_string());
                        current_residue = None;
                    }
                    if current_residue != Some((res_seq, icode)) {
                        builder.start_residue(res_seq, icode, res_name_str, hetero);
                        current_residue = Some((res_seq, icode));
                    }
                    builder.add_atom(name_str, Point3::new(x, y, z));
                    atom_count += 1;
                }
                "MODEL" => {
                    builder.start_model();
                    current_chain = None;
                    current_residue = None;
                }
                "ENDMDL" => {
                    builder.end_model();
                    current_chain = None;
                    current_residue = None;
                }
                "TER" => {
                    current_chain = None;
                    current_residue = None;
                }
                "REMARK" => {
                    if let Some(resolution) = parse_resolution_remark(&line) {
                        builder.set_resolution(resolution);
                    }
                }
                "END" => break,
                _ => {}
            }
        }

        if atom_count == 0 {
            return Err(PdbError::MissingRecord("ATOM/HETATM records".into()));
        }
        Ok(builder.build())
    }
}

/// Extracts the resolution from a `REMARK   2 RESOLUTION.` line.
///
/// Returns `None` for every other REMARK and for resolution-free entries
/// (`RESOLUTION. NOT APPLICABLE.`), so absence stays absent.
fn parse_resolution_remark(line: &str) -> Option<f64> {
    if slice_and_trim(line, 6, 10) != "2" {
        return None;
    }
    let value = line.get(11..)?.trim().strip_prefix("RESOLUTION.")?;
    value.split_whitespace().next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn coordinate_line(
        record: &str,
        serial: usize,
        name: &str,
        alt_loc: char,
        res_name: &str,
        chain: char,
        res_seq: isize,
        (x, y, z): (f64, f64, f64),
    ) -> String {
        format!(
            "{:<6}{:>5} {:<4}{}{:>3} {}{:>4}    {:>8.3}{:>8.3}{:>8.3}",
            record,
            serial,
            format!(" {}", name),
            alt_loc,
            res_name,
            chain,
            res_seq,
            x,
            y,
            z
        )
    }

    fn atom_line(serial: usize, name: &str, res_name: &str, chain: char, res_seq: isize) -> String {
        coordinate_line(
            "ATOM",
            serial,
            name,
            ' ',
            res_name,
            chain,
            res_seq,
            (res_seq as f64 * 3.8, 0.0, 0.0),
        )
    }

    fn parse(content: &str) -> Result<Structure, PdbError> {
        PdbFile::read_from("test", &mut BufReader::new(content.as_bytes()))
    }

    #[test]
    fn coordinate_line_layout_matches_fixed_columns() {
        let line = atom_line(1, "CA", "ALA", 'A', 1);
        assert_eq!(&line[0..6], "ATOM  ");
        assert_eq!(line[12..16].trim(), "CA");
        assert_eq!(&line[17..20], "ALA");
        assert_eq!(&line[21..22], "A");
        assert_eq!(line[22..26].trim(), "1");
        assert_eq!(line[30..38].trim(), "3.800");
        assert_eq!(line.len(), 54);
    }

    #[test]
    fn parses_chains_residues_and_atoms_in_order() {
        let content = [
            atom_line(1, "N", "ALA", 'A', 1),
            atom_line(2, "CA", "ALA", 'A', 1),
            atom_line(3, "CA", "GLY", 'A', 2),
            "TER".to_string(),
            atom_line(4, "CA", "SER", 'B', 1),
            "END".to_string(),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        assert_eq!(structure.models().len(), 1);
        let chains = structure.models()[0].chains();
        assert_eq!(chains.len(), 2);
        assert_eq!(chains[0].id, "A");
        assert_eq!(chains[0].residues().len(), 2);
        assert_eq!(chains[0].residues()[0].name, "ALA");
        assert_eq!(chains[0].residues()[0].atoms().len(), 2);
        assert_eq!(chains[0].residues()[1].name, "GLY");
        assert_eq!(chains[1].id, "B");
        assert_eq!(chains[1].residues()[0].name, "SER");
    }

    #[test]
    fn hetatm_records_are_marked_hetero() {
        let content = [
            atom_line(1, "CA", "ALA", 'A', 1),
            coordinate_line("HETATM", 2, "O", ' ', "HOH", 'A', 101, (5.0, 5.0, 5.0)),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        let residues = structure.models()[0].chains()[0].residues();
        assert_eq!(residues.len(), 2);
        assert!(!residues[0].hetero);
        assert!(residues[1].hetero);
        assert!(!residues[1].is_standard_amino_acid());
    }

    #[test]
    fn secondary_alternate_locations_are_skipped() {
        let content = [
            coordinate_line("ATOM", 1, "CA", 'A', "SER", 'A', 1, (0.0, 0.0, 0.0)),
            coordinate_line("ATOM", 2, "CA", 'B', "SER", 'A', 1, (0.2, 0.0, 0.0)),
            atom_line(3, "CA", "GLY", 'A', 2),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        let residues = structure.models()[0].chains()[0].residues();
        assert_eq!(residues[0].atoms().len(), 1);
        assert_eq!(residues[0].atoms()[0].position.x, 0.0);
    }

    #[test]
    fn resolution_remark_is_extracted() {
        let content = [
            "REMARK   2 RESOLUTION.    1.74 ANGSTROMS.".to_string(),
            atom_line(1, "CA", "ALA", 'A', 1),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        assert_eq!(structure.resolution, Some(1.74));
    }

    #[test]
    fn non_numeric_resolution_leaves_metadata_absent() {
        let content = [
            "REMARK   2 RESOLUTION. NOT APPLICABLE.".to_string(),
            atom_line(1, "CA", "ALA", 'A', 1),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        assert_eq!(structure.resolution, None);
    }

    #[test]
    fn unrelated_remarks_are_ignored() {
        let content = [
            "REMARK   3 REFINEMENT.".to_string(),
            "REMARK 350 BIOMOLECULE: 1".to_string(),
            atom_line(1, "CA", "ALA", 'A', 1),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        assert_eq!(structure.resolution, None);
    }

    #[test]
    fn multi_model_files_yield_one_chain_set_per_model() {
        let content = [
            "MODEL        1".to_string(),
            atom_line(1, "CA", "ALA", 'A', 1),
            "ENDMDL".to_string(),
            "MODEL        2".to_string(),
            atom_line(1, "CA", "ALA", 'A', 1),
            "ENDMDL".to_string(),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        assert_eq!(structure.models().len(), 2);
        assert_eq!(structure.models()[0].chains().len(), 1);
        assert_eq!(structure.models()[1].chains().len(), 1);
    }

    #[test]
    fn records_after_end_are_ignored() {
        let content = [
            atom_line(1, "CA", "ALA", 'A', 1),
            "END".to_string(),
            atom_line(2, "CA", "GLY", 'A', 2),
        ]
        .join("\n");

        let structure = parse(&content).unwrap();
        assert_eq!(structure.models()[0].chains()[0].residues().len(), 1);
    }

    #[test]
    fn file_without_atoms_is_a_parse_error() {
        let result = parse("HEADER    SOME ENTRY\nEND\n");
        assert!(matches!(result, Err(PdbError::MissingRecord(_))));
    }

    #[test]
    fn malformed_coordinates_are_a_parse_error() {
        let mut line = atom_line(1, "CA", "ALA", 'A', 1);
        line.replace_range(30..38, "   x.xxx");
        let result = parse(&line);
        assert!(matches!(
            result,
            Err(PdbError::Parse {
                line: 1,
                kind: PdbParseErrorKind::InvalidFloat { .. }
            })
        ));
    }

    #[test]
    fn truncated_atom_line_is_a_parse_error() {
        let line = &atom_line(1, "CA", "ALA", 'A', 1)[..40];
        assert!(matches!(
            parse(line),
            Err(PdbError::Parse {
                kind: PdbParseErrorKind::LineTooShort,
                ..
            })
        ));
    }

    #[test]
    fn blank_chain_id_falls_back_to_a() {
        let mut line = atom_line(1, "CA", "ALA", 'A', 1);
        line.replace_range(21..22, " ");
        let structure = parse(&line).unwrap();
        assert_eq!(structure.models()[0].chains()[0].id, "A");
    }
}
