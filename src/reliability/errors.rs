use crate::reliability::models::family::ModelFamily;

/// Result alias for failure-sample construction.
pub type SampleResult<T> = Result<T, SampleError>;

/// Result alias for single-family fitting.
pub type FitOutcome<T> = Result<T, FitError>;

/// Result alias for whole-pipeline analysis.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Construction errors for a failure sample.
///
/// Ordering and sign conventions belong to upstream ingestion; this layer
/// rejects violations instead of repairing them.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    // ---- Value checks ----
    /// A failure time was NaN or infinite.
    NonFiniteTime {
        index: usize,
        value: f64,
    },
    /// A failure time was negative.
    NegativeTime {
        index: usize,
        value: f64,
    },

    // ---- Ordering ----
    /// Times must be non-decreasing.
    UnsortedTimes {
        index: usize,
        previous: f64,
        value: f64,
    },
}

impl std::error::Error for SampleError {}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Value checks ----
            SampleError::NonFiniteTime { index, value } => {
                write!(f, "Non-finite failure time at index {index}: {value}")
            }
            SampleError::NegativeTime { index, value } => {
                write!(f, "Negative failure time at index {index}: {value}")
            }

            // ---- Ordering ----
            SampleError::UnsortedTimes { index, previous, value } => {
                write!(
                    f,
                    "Failure times must be non-decreasing: t[{index}] = {value} after {previous}"
                )
            }
        }
    }
}

/// Per-family fitting failures.
///
/// These are contained conditions: a failed family never aborts the other
/// family or the surrounding analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    // ---- Data ----
    /// Too few observations to identify a two-parameter model.
    InsufficientData {
        n: usize,
        required: usize,
    },

    // ---- Optimization ----
    /// No starting point produced a converged, feasible optimum.
    OptimizationFailure {
        family: ModelFamily,
    },
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Data ----
            FitError::InsufficientData { n, required } => {
                write!(f, "Insufficient data to fit model: {n} observations, need {required}")
            }

            // ---- Optimization ----
            FitError::OptimizationFailure { family } => {
                write!(f, "No feasible optimum found for the {family} model")
            }
        }
    }
}

/// Pipeline-level errors.
///
/// Only malformed analysis inputs land here; per-family fit failures are
/// carried inside the report instead.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    // ---- Input ----
    /// The failure sample contains no observations.
    EmptySample,
    /// The requested family set is empty.
    NoFamiliesSelected,

    // ---- Options ----
    /// The forecast horizon must resolve to a positive time span.
    InvalidHorizon {
        horizon: f64,
    },
    /// The prediction grid needs at least two points.
    InvalidGridPoints {
        grid_points: usize,
    },
}

impl std::error::Error for AnalysisError {}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input ----
            AnalysisError::EmptySample => {
                write!(f, "Cannot analyze an empty failure sample")
            }
            AnalysisError::NoFamiliesSelected => {
                write!(f, "At least one model family must be selected")
            }

            // ---- Options ----
            AnalysisError::InvalidHorizon { horizon } => {
                write!(f, "Invalid forecast horizon: {horizon}, must be finite and > 0")
            }
            AnalysisError::InvalidGridPoints { grid_points } => {
                write!(f, "Invalid prediction grid size: {grid_points}, need at least 2 points")
            }
        }
    }
}
