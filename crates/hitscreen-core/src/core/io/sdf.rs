use crate::core::io::traits::StructureFile;
use crate::core::models::pool::{PoolError, StructurePool};
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

const RECORD_DELIMITER: &str = "$$$$";
/// Number of header lines in a molblock before the atom block starts.
const ATOM_BLOCK_OFFSET: usize = 4;

#[derive(Debug, Error)]
pub enum SdfError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: SdfParseErrorKind,
    },
    #[error("Inconsistent data: {0}")]
    Inconsistency(String),
}

#[derive(Debug, Error)]
pub enum SdfParseErrorKind {
    #[error("Record is missing a title line name")]
    MissingName,
    #[error("Record is too short for a molblock (needs title, program, comment, counts lines)")]
    RecordTooShort,
    #[error("Invalid atom count in counts line (value: '{value}')")]
    InvalidAtomCount { value: String },
    #[error("V3000 connection tables are not supported")]
    UnsupportedV3000,
    #[error("Record declares {expected} atoms but ends after {found}")]
    TruncatedAtomBlock { expected: usize, found: usize },
    #[error("Invalid {axis} coordinate in atom line (value: '{value}')")]
    InvalidCoordinate { axis: char, value: String },
    #[error("Record declares zero atoms; every structure needs at least one")]
    NoAtoms,
}

impl From<PoolError> for SdfError {
    fn from(e: PoolError) -> Self {
        SdfError::Inconsistency(e.to_string())
    }
}

fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end.min(line.len())).unwrap_or("").trim()
}

/// Reader for multi-record MDL SD files (V2000 connection tables).
///
/// Each record contributes one [`Structure`]: the name comes from the title
/// line, the coordinates from the atom block. Bond, property, and data lines
/// are consumed but never modeled; screening only looks at atomic positions.
pub struct SdfFile;

impl StructureFile for SdfFile {
    type Error = SdfError;

    fn read_from(reader: &mut impl BufRead) -> Result<StructurePool, Self::Error> {
        let mut pool = StructurePool::new();
        let mut record: Vec<(usize, String)> = Vec::new();

        for (idx, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = idx + 1;

            if line.trim_end() == RECORD_DELIMITER {
                if record_has_content(&record) {
                    pool.insert(parse_record(&record)?)?;
                }
                record.clear();
            } else {
                record.push((line_num, line));
            }
        }

        // A final record without a closing delimiter is still accepted.
        if record_has_content(&record) {
            pool.insert(parse_record(&record)?)?;
        }

        Ok(pool)
    }
}

fn record_has_content(record: &[(usize, String)]) -> bool {
    record.iter().any(|(_, l)| !l.trim().is_empty())
}

fn parse_record(record: &[(usize, String)]) -> Result<Structure, SdfError> {
    let last_line = record.last().map(|(l, _)| *l).unwrap_or(1);
    if record.len() < ATOM_BLOCK_OFFSET {
        return Err(SdfError::Parse {
            line: last_line,
            kind: SdfParseErrorKind::RecordTooShort,
        });
    }

    let (title_line_num, title) = &record[0];
    let name = title.trim();
    if name.is_empty() {
        return Err(SdfError::Parse {
            line: *title_line_num,
            kind: SdfParseErrorKind::MissingName,
        });
    }

    let (counts_line_num, counts_line) = &record[3];
    if counts_line.contains("V3000") {
        return Err(SdfError::Parse {
            line: *counts_line_num,
            kind: SdfParseErrorKind::UnsupportedV3000,
        });
    }

    let atom_count_str = slice_and_trim(counts_line, 0, 3);
    let atom_count: usize = atom_count_str.parse().map_err(|_| SdfError::Parse {
        line: *counts_line_num,
        kind: SdfParseErrorKind::InvalidAtomCount {
            value: atom_count_str.to_string(),
        },
    })?;
    if atom_count == 0 {
        return Err(SdfError::Parse {
            line: *counts_line_num,
            kind: SdfParseErrorKind::NoAtoms,
        });
    }

    let atom_lines = &record[ATOM_BLOCK_OFFSET..];
    if atom_lines.len() < atom_count {
        return Err(SdfError::Parse {
            line: last_line,
            kind: SdfParseErrorKind::TruncatedAtomBlock {
                expected: atom_count,
                found: atom_lines.len(),
            },
        });
    }

    let mut atoms = Vec::with_capacity(atom_count);
    for (line_num, line) in &atom_lines[..atom_count] {
        atoms.push(parse_atom_line(*line_num, line)?);
    }

    Ok(Structure::new(name, atoms))
}

fn parse_atom_line(line_num: usize, line: &str) -> Result<Point3<f64>, SdfError> {
    let coord = |start: usize, end: usize, axis: char| -> Result<f64, SdfError> {
        let value = slice_and_trim(line, start, end);
        value.parse::<f64>().map_err(|_| SdfError::Parse {
            line: line_num,
            kind: SdfParseErrorKind::InvalidCoordinate {
                axis,
                value: value.to_string(),
            },
        })
    };

    let x = coord(0, 10, 'x')?;
    let y = coord(10, 20, 'y')?;
    let z = coord(20, 30, 'z')?;
    Ok(Point3::new(x, y, z))
}
