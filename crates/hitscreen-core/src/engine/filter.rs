use crate::core::models::pool::StructurePool;
use crate::engine::distance::min_inter_structure_distance;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum inter-structure distance from the target to one pool candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceResult {
    pub candidate_name: String,
    /// `None` when no valid atom pair exists (every matrix entry excluded);
    /// distinct from both zero and infinity.
    pub min_distance: Option<f64>,
}

/// Computes the minimum distance from the target to every structure in the
/// pool, in pool iteration order.
///
/// The target's own entry is screened like any other candidate; see the
/// self-comparison note on
/// [`min_inter_structure_distance`](crate::engine::distance::min_inter_structure_distance).
/// Callers that want it excluded filter it out themselves.
///
/// # Errors
///
/// Returns [`EngineError::TargetNotFound`] if `target_name` is not a pool
/// key. The presence precondition belongs to the caller, so this fails fast
/// before any distance computation. Structural faults from the distance
/// engine propagate unchanged.
pub fn candidate_distances(
    target_name: &str,
    pool: &StructurePool,
    reporter: &ProgressReporter,
) -> Result<Vec<DistanceResult>, EngineError> {
    let target = pool
        .get(target_name)
        .ok_or_else(|| EngineError::TargetNotFound {
            name: target_name.to_string(),
        })?;

    reporter.report(Progress::TaskStart {
        total_steps: pool.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = pool.iter();

    #[cfg(feature = "parallel")]
    let iterator = pool.iter().collect::<Vec<_>>().into_par_iter();

    let distances: Vec<DistanceResult> = iterator
        .map(|candidate| {
            let min_distance = min_inter_structure_distance(target, candidate)?;
            reporter.report(Progress::TaskIncrement);
            Ok(DistanceResult {
                candidate_name: candidate.name().to_string(),
                min_distance,
            })
        })
        .collect::<Result<_, EngineError>>()?;

    reporter.report(Progress::TaskFinish);

    Ok(distances)
}

/// Returns the names of all pool structures whose minimum distance to the
/// target is defined and within `threshold` (inclusive: a candidate exactly
/// at the threshold matches).
///
/// The result follows pool iteration order and is empty when nothing
/// qualifies; emptiness is a first-class outcome here, not an error. The
/// call is stateless and idempotent for identical inputs.
///
/// # Errors
///
/// Returns [`EngineError::InvalidThreshold`] unless `threshold` is finite
/// and non-negative, and propagates [`candidate_distances`] errors.
#[instrument(skip_all, name = "neighbor_filter", fields(target = target_name))]
pub fn find_within(
    target_name: &str,
    pool: &StructurePool,
    threshold: f64,
    reporter: &ProgressReporter,
) -> Result<Vec<String>, EngineError> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(EngineError::InvalidThreshold { value: threshold });
    }

    info!(
        threshold,
        candidates = pool.len(),
        "Screening pool for neighbors."
    );

    let distances = candidate_distances(target_name, pool, reporter)?;

    let close_names: Vec<String> = distances
        .into_iter()
        .filter_map(|result| match result.min_distance {
            Some(d) if d <= threshold => Some(result.candidate_name),
            _ => None,
        })
        .collect();

    debug!(matches = close_names.len(), "Neighbor filter complete.");

    Ok(close_names)
}
