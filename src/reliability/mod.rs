//! reliability — NHPP software-reliability-growth estimation.
//!
//! Purpose
//! -------
//! Fit competing non-homogeneous Poisson process models (Goel-Okumoto and
//! Musa-Okumoto) to an ordered log of failure times via multi-start maximum
//! likelihood, quantify parameter uncertainty from the observed information
//! matrix, rank the fits by AIC, and sample forward-looking failure-count
//! predictions with an optional two-model ensemble.
//!
//! Key behaviors
//! -------------
//! - Validated, immutable input (`core::data::FailureSample`) with the
//!   observation horizon `T` derived from the last failure time.
//! - Deterministic multi-start fitting (`models::fit`) over grids scaled by
//!   `(n, T)`; bound constraints enforced through `-∞` likelihood barriers.
//! - Model comparison by AIC with the penalty derived from each family's
//!   actual parameter count (`selection`).
//! - A shared forward prediction grid with per-model confidence bands and
//!   the exact pointwise-mean ensemble when two fits succeed
//!   (`prediction`).
//! - A single pipeline entry point, [`analysis::analyze`], that contains
//!   every per-family failure inside its report.
//!
//! Error design
//! ------------
//! - `errors::SampleError`: malformed input times, at construction.
//! - `errors::FitError`: per-family conditions (insufficient data, no
//!   feasible optimum) that never abort the pipeline.
//! - `errors::AnalysisError`: pipeline-boundary conditions only (empty
//!   sample, invalid configuration).
//! - Singular curvature degrades standard errors to `NaN` without failing
//!   the fit; a missing confidence interval is not a missing estimate.
//!
//! Downstream usage
//! ----------------
//! - Callers construct a `FailureSample`, pick `AnalysisOptions` (or use
//!   the defaults: both families, 1.6×T horizon, 400 grid points), and call
//!   `analyze`. Exporters and renderers consume the report's fits,
//!   prediction table, and point-forecast helpers without re-deriving any
//!   statistic.

pub mod analysis;
pub mod core;
pub mod errors;
pub mod models;
pub mod prediction;
pub mod selection;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::analysis::{AnalysisReport, ModelFitOutcome, analyze};
pub use self::core::{AnalysisOptions, FailureSample, FitOptions, ForecastHorizon};
pub use self::errors::{AnalysisError, FitError, SampleError};
pub use self::models::{FitResult, ModelFamily, fit_model};
pub use self::prediction::{EnsembleCurve, ModelCurve, PredictionTable};
pub use self::selection::{aic, best_fit};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use srgm::reliability::prelude::*;
//
// to import the main analysis surface in a single line.

pub mod prelude {
    pub use super::analysis::{AnalysisReport, analyze};
    pub use super::core::{AnalysisOptions, FailureSample, ForecastHorizon};
    pub use super::errors::{AnalysisError, FitError, SampleError};
    pub use super::models::{FitResult, ModelFamily, fit_model};
    pub use super::prediction::PredictionTable;
}
