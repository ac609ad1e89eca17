use crate::core::models::structure::Structure;
use crate::engine::error::EngineError;
use nalgebra::Point3;

/// One entry of the augmented distance matrix.
///
/// Exclusion is an explicit tag rather than a NaN sentinel, so the reduction
/// never has to reason about float propagation rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixEntry {
    /// An inter-structure atom pair, carrying its Euclidean distance.
    Valid(f64),
    /// An intra-structure atom pair, masked out of the reduction.
    Excluded,
}

/// Computes the minimum Euclidean distance between any atom of `target` and
/// any atom of `candidate`.
///
/// The computation builds the full distance matrix over the concatenated
/// point set (target atoms followed by candidate atoms), masks the
/// target-only leading block and the candidate-only trailing block, and
/// reduces the remaining inter-structure entries to their minimum. Only
/// inter-structure pairs are ever compared; intra-structure pairs are
/// excluded by construction.
///
/// Distances are in the same unit as the input coordinates. The function is
/// pure: candidates may be evaluated in any order or in parallel.
///
/// Note that comparing a structure against an identical atom set (the target
/// screened against itself) yields `Some(0.0)`, since each atom of one block
/// coincides with its copy in the other block. Callers that want the target
/// out of its own candidate set must exclude it explicitly; the masking rule
/// only removes intra-block pairs.
///
/// # Return
///
/// `Some(distance)` for the minimum over all inter-structure pairs, or `None`
/// if every matrix entry is excluded. With two non-empty structures the
/// cross blocks are always populated, so `None` cannot arise here; it is
/// still surfaced as a distinct outcome rather than coerced to zero or
/// infinity.
///
/// # Errors
///
/// Returns [`EngineError::EmptyStructure`] if either structure has no atoms.
/// This is a caller fault: loaders guarantee non-empty structures.
pub fn min_inter_structure_distance(
    target: &Structure,
    candidate: &Structure,
) -> Result<Option<f64>, EngineError> {
    for structure in [target, candidate] {
        if structure.is_empty() {
            return Err(EngineError::EmptyStructure {
                name: structure.name().to_string(),
            });
        }
    }

    let matrix = masked_distance_matrix(target.atoms(), candidate.atoms());
    Ok(reduce_min(&matrix))
}

/// Builds the augmented distance matrix over `target ++ candidate`, with the
/// two intra-structure blocks excluded.
fn masked_distance_matrix(
    target_atoms: &[Point3<f64>],
    candidate_atoms: &[Point3<f64>],
) -> Vec<Vec<MatrixEntry>> {
    let split = target_atoms.len();
    let combined: Vec<&Point3<f64>> = target_atoms.iter().chain(candidate_atoms.iter()).collect();

    combined
        .iter()
        .enumerate()
        .map(|(i, p)| {
            combined
                .iter()
                .enumerate()
                .map(|(j, q)| {
                    let same_block = (i < split) == (j < split);
                    if same_block {
                        MatrixEntry::Excluded
                    } else {
                        MatrixEntry::Valid((*p - *q).norm())
                    }
                })
                .collect()
        })
        .collect()
}

/// Minimum over all valid entries, ignoring excluded ones; `None` when no
/// valid entry exists.
fn reduce_min(matrix: &[Vec<MatrixEntry>]) -> Option<f64> {
    matrix
        .iter()
        .flatten()
        .filter_map(|entry| match entry {
            MatrixEntry::Valid(d) => Some(*d),
            MatrixEntry::Excluded => None,
        })
        .fold(None, |acc: Option<f64>, d| {
            Some(acc.map_or(d, |m| m.min(d)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(name: &str, coords: &[(f64, f64, f64)]) -> Structure {
        Structure::new(
            name,
            coords.iter().map(|&(x, y, z)| Point3::new(x, y, z)).collect(),
        )
    }

    #[test]
    fn single_atom_pair_distance() {
        let a = structure("a", &[(0.0, 0.0, 0.0)]);
        let b = structure("b", &[(3.0, 4.0, 0.0)]);
        let d = min_inter_structure_distance(&a, &b).unwrap().unwrap();
        assert!((d - 5.0).abs() < 1e-9);
    }

    #[test]
    fn minimum_is_taken_over_all_cross_pairs() {
        let target = structure("t", &[(0.0, 0.0, 0.0), (0.0, 0.0, 5.0)]);
        let candidate = structure("c", &[(0.0, 0.0, 2.0)]);
        // Closest approach is from the second target atom, not the first.
        let d = min_inter_structure_distance(&target, &candidate)
            .unwrap()
            .unwrap();
        assert!((d - 2.0).abs() < 1e-9);
    }

    #[test]
    fn intra_structure_pairs_are_never_compared() {
        // The two target atoms are 0.5 apart, far closer than any
        // target-candidate pair; the masking must keep that pair out.
        let target = structure("t", &[(0.0, 0.0, 0.0), (0.5, 0.0, 0.0)]);
        let candidate = structure("c", &[(10.0, 0.0, 0.0), (10.25, 0.0, 0.0)]);
        let d = min_inter_structure_distance(&target, &candidate)
            .unwrap()
            .unwrap();
        assert!((d - 9.5).abs() < 1e-9);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = structure("a", &[(1.0, 2.0, 3.0), (-1.0, 0.5, 2.0)]);
        let b = structure("b", &[(4.0, -2.0, 0.0), (0.0, 0.0, 9.0)]);
        let ab = min_inter_structure_distance(&a, &b).unwrap().unwrap();
        let ba = min_inter_structure_distance(&b, &a).unwrap().unwrap();
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn distance_is_atom_order_independent() {
        let a = structure("a", &[(0.0, 0.0, 0.0), (0.0, 0.0, 5.0)]);
        let a_permuted = structure("a", &[(0.0, 0.0, 5.0), (0.0, 0.0, 0.0)]);
        let b = structure("b", &[(0.0, 0.0, 2.0), (7.0, 7.0, 7.0)]);

        let d1 = min_inter_structure_distance(&a, &b).unwrap().unwrap();
        let d2 = min_inter_structure_distance(&a_permuted, &b).unwrap().unwrap();
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn identical_structures_degenerate_to_zero() {
        // Screening the target against itself: every cross-block pair of an
        // atom with its own copy is valid and has distance zero.
        let target = structure("t", &[(1.0, 1.0, 1.0), (2.0, 2.0, 2.0)]);
        let d = min_inter_structure_distance(&target, &target)
            .unwrap()
            .unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn empty_target_is_a_structural_fault() {
        let empty = structure("hollow", &[]);
        let full = structure("full", &[(0.0, 0.0, 0.0)]);
        let err = min_inter_structure_distance(&empty, &full).unwrap_err();
        assert_eq!(
            err,
            EngineError::EmptyStructure {
                name: "hollow".to_string()
            }
        );
    }

    #[test]
    fn empty_candidate_is_a_structural_fault() {
        let full = structure("full", &[(0.0, 0.0, 0.0)]);
        let empty = structure("hollow", &[]);
        let err = min_inter_structure_distance(&full, &empty).unwrap_err();
        assert!(matches!(err, EngineError::EmptyStructure { name } if name == "hollow"));
    }

    #[test]
    fn matrix_masks_exactly_the_intra_blocks() {
        let target = [Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)];
        let candidate = [Point3::new(5.0, 0.0, 0.0)];
        let matrix = masked_distance_matrix(&target, &candidate);

        assert_eq!(matrix.len(), 3);
        // Leading 2x2 target block and trailing 1x1 candidate block excluded.
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(matrix[i][j], MatrixEntry::Excluded);
            }
        }
        assert_eq!(matrix[2][2], MatrixEntry::Excluded);
        // Cross blocks carry real distances, symmetrically.
        assert_eq!(matrix[0][2], MatrixEntry::Valid(5.0));
        assert_eq!(matrix[2][0], MatrixEntry::Valid(5.0));
        assert_eq!(matrix[1][2], MatrixEntry::Valid(4.0));
    }

    #[test]
    fn reduce_min_of_all_excluded_is_undefined() {
        let matrix = vec![vec![MatrixEntry::Excluded; 2]; 2];
        assert_eq!(reduce_min(&matrix), None);
    }
}
