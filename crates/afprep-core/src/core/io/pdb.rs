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
    #[error("Line is too short for ATOM/HETATM record (must be at least 54 chars)")]
    LineTooShort,
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

fn slice_char(line: &str, idx: usize) -> char {
    line.get(idx..idx + 1)
        .and_then(|s| s.chars().next())
        .unwrap_or(' ')
}

/// Reader for the PDB fixed-column coordinate format.
///
/// Only the records the extraction pipeline cares about are interpreted:
/// `ATOM`/`HETATM` coordinates, `MODEL`/`ENDMDL` boundaries, `TER` chain
/// breaks, and `END`. Everything else (headers, remarks, connectivity) is
/// skipped. Alternate locations other than blank or 'A' are dropped.
pub struct PdbFile;

impl StructureFile for PdbFile {
    type Error = PdbError;

    fn read_from(id: &str, reader: &mut impl BufRead) -> Result<Structure, Self::Error> {
        let mut builder = StructureBuilder::new(id);
        let mut atom_count: usize = 0;

        let mut model_open = false;
        let mut next_implicit_serial: isize = 1;
        let mut current_chain_id = '\0';
        let mut current_residue_key: Option<(isize, char)> = None;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            // Record names may stand alone on a short line (e.g., "END").
            let record_type = slice_and_trim(&line, 0, line.len().min(6));
            match record_type {
                "ATOM" | "HETATM" => {
                    if line.len() < 54 {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::LineTooShort,
                        });
                    }

                    let alt_loc = slice_char(&line, 16);
                    if alt_loc != ' ' && alt_loc != 'A' {
                        continue;
                    }

                    let serial_str = slice_and_trim(&line, 6, 11);
                    let name_str = slice_and_trim(&line, 12, 16);
                    let res_name_str = slice_and_trim(&line, 17, 20);
                    let chain_id = slice_char(&line, 21);
                    let res_id_str = slice_and_trim(&line, 22, 26);
                    let icode = slice_char(&line, 26);
                    let x_str = slice_and_trim(&line, 30, 38);
                    let y_str = slice_and_trim(&line, 38, 46);
                    let z_str = slice_and_trim(&line, 46, 54);

                    if name_str.is_empty() {
                        return Err(PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::MissingRequiredField {
                                columns: "13-16".into(),
                            },
                        });
                    }
                    let serial: usize = serial_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "7-11".into(),
                            value: serial_str.into(),
                        },
                    })?;
                    let res_id: isize = res_id_str.parse().map_err(|_| PdbError::Parse {
                        line: line_num,
                        kind: PdbParseErrorKind::InvalidInt {
                            columns: "23-26".into(),
                            value: res_id_str.into(),
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

                    if !model_open {
                        builder.start_model(next_implicit_serial);
                        next_implicit_serial += 1;
                        model_open = true;
                        current_chain_id = '\0';
                        current_residue_key = None;
                    }
                    if chain_id != current_chain_id {
                        builder.start_chain(chain_id);
                        current_chain_id = chain_id;
                        current_residue_key = None;
                    }
                    let residue_key = (res_id, icode);
                    if current_residue_key != Some(residue_key) {
                        builder.start_residue(res_id, icode, res_name_str, record_type == "HETATM");
                        current_residue_key = Some(residue_key);
                    }
                    builder.add_atom(serial, name_str, alt_loc, Point3::new(x, y, z));
                    atom_count += 1;
                }
                "MODEL" => {
                    let serial_str = slice_and_trim(&line, 10, 14);
                    let serial: isize = if serial_str.is_empty() {
                        next_implicit_serial
                    } else {
                        serial_str.parse().map_err(|_| PdbError::Parse {
                            line: line_num,
                            kind: PdbParseErrorKind::InvalidInt {
                                columns: "11-14".into(),
                                value: serial_str.into(),
                            },
                        })?
                    };
                    builder.start_model(serial);
                    next_implicit_serial = serial + 1;
                    model_open = true;
                    current_chain_id = '\0';
                    current_residue_key = None;
                }
                "ENDMDL" => {
                    model_open = false;
                    current_chain_id = '\0';
                    current_residue_key = None;
                }
                "TER" => {
                    // Force a chain break; trailing HETATMs sharing the chain
                    // id still land in the same (deduplicated) chain.
                    current_chain_id = '\0';
                    current_residue_key = None;
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
