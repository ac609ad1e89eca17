use crate::core::models::pool::StructurePool;
use crate::engine::error::EngineError;
use crate::engine::filter::find_within;
use crate::engine::progress::{Progress, ProgressReporter};
use thiserror::Error;
use tracing::{info, instrument};

/// Default screening threshold in Angstroms.
pub const DEFAULT_THRESHOLD_ANGSTROM: f64 = 3.0;

/// Classification of a [`ScreenError`] for callers that route faults to
/// different user-visible behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    /// The user submitted something invalid; ask them to correct it.
    UserInput,
    /// The request was valid but the settings found nothing; suggest a
    /// looser threshold.
    IneffectiveSettings,
    /// The code itself failed; nothing the user can do.
    Internal,
}

/// Failure modes of the screening workflow, one variant per fault kind.
#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("No structure named '{name}' in the submitted set")]
    UnknownTarget { name: String },

    #[error("Threshold too strict: no neighbors within {threshold} of '{target}'")]
    NoNeighbors { target: String, threshold: f64 },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl ScreenError {
    pub fn kind(&self) -> FaultKind {
        match self {
            ScreenError::UnknownTarget { .. } => FaultKind::UserInput,
            ScreenError::NoNeighbors { .. } => FaultKind::IneffectiveSettings,
            ScreenError::Engine(_) => FaultKind::Internal,
        }
    }
}

/// Parameters of one screening request.
#[derive(Debug, Clone)]
pub struct ScreenSpec {
    /// Name of the structure every pool entry is screened against.
    pub target_name: String,
    /// Maximum allowed minimum inter-structure distance, in the coordinate
    /// unit of the input (Angstroms for SDF input).
    pub threshold: f64,
    /// Drop the target's own entry from the matches. The engine itself
    /// always screens it (and finds it at distance zero); exclusion is this
    /// explicit, caller-controlled step.
    pub exclude_target: bool,
}

impl ScreenSpec {
    pub fn new(target_name: impl Into<String>) -> Self {
        Self {
            target_name: target_name.into(),
            threshold: DEFAULT_THRESHOLD_ANGSTROM,
            exclude_target: false,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn excluding_target(mut self) -> Self {
        self.exclude_target = true;
        self
    }
}

/// Outcome of a successful screening run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenReport {
    pub target_name: String,
    pub threshold: f64,
    /// Matched candidate names, in pool iteration order.
    pub neighbors: Vec<String>,
    pub candidates_evaluated: usize,
}

/// Runs one screening request against a pool.
///
/// This is the adaptor between front-end inputs and the engine: it rejects
/// an absent target before any distance computation, invokes the neighbor
/// filter, applies the optional target self-exclusion, and turns an empty
/// match list into the "threshold too strict" fault the front end surfaces
/// distinctly from hard errors.
///
/// # Errors
///
/// - [`ScreenError::UnknownTarget`] if the target name is not a pool key
///   (user-input fault; the engine is never invoked).
/// - [`ScreenError::NoNeighbors`] if no candidate qualifies
///   (ineffective-settings fault).
/// - [`ScreenError::Engine`] for structural faults propagated from the
///   engine.
#[instrument(skip_all, name = "screening_workflow", fields(target = %spec.target_name))]
pub fn run(
    pool: &StructurePool,
    spec: &ScreenSpec,
    reporter: &ProgressReporter,
) -> Result<ScreenReport, ScreenError> {
    reporter.report(Progress::PhaseStart { name: "Screening" });
    info!(
        threshold = spec.threshold,
        pool_size = pool.len(),
        exclude_target = spec.exclude_target,
        "Starting screening workflow."
    );

    if !pool.contains(&spec.target_name) {
        return Err(ScreenError::UnknownTarget {
            name: spec.target_name.clone(),
        });
    }

    let mut neighbors = find_within(&spec.target_name, pool, spec.threshold, reporter)?;
    if spec.exclude_target {
        neighbors.retain(|name| name != &spec.target_name);
    }

    reporter.report(Progress::PhaseFinish);

    if neighbors.is_empty() {
        return Err(ScreenError::NoNeighbors {
            target: spec.target_name.clone(),
            threshold: spec.threshold,
        });
    }

    info!(matches = neighbors.len(), "Screening workflow complete.");

    Ok(ScreenReport {
        target_name: spec.target_name.clone(),
        threshold: spec.threshold,
        neighbors,
        candidates_evaluated: pool.len(),
    })
}
