//! srgm — software reliability growth modeling for failure-event logs.
//!
//! Purpose
//! -------
//! Serve as the crate root for the NHPP reliability-growth estimation
//! engine: multi-start maximum-likelihood fitting of the Goel-Okumoto and
//! Musa-Okumoto models, observed-information standard errors, AIC-based
//! model selection, and forward prediction sampling with a two-model
//! ensemble.
//!
//! Key behaviors
//! -------------
//! - Expose the estimation pipeline under [`reliability`]
//!   (`FailureSample` → `analyze` → `AnalysisReport`).
//! - Expose the generic MLE machinery under [`optimization`]
//!   (Argmin-backed Nelder–Mead maximization of user log-likelihoods).
//! - Expose post-fit uncertainty quantification under [`inference`]
//!   (finite-difference observed information → standard errors).
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work lives in the inner modules; this file only
//!   assembles the module tree and the crate prelude.
//! - Inputs are validated once at construction (`FailureSample`, option
//!   structs); downstream code assumes validated state.
//! - Nothing in the crate panics on malformed numerical input: infeasible
//!   parameters become `-∞` likelihoods, unusable curvature becomes `NaN`
//!   standard errors, and per-family fit failures are carried in the
//!   report.
//!
//! Conventions
//! -----------
//! - Times are `f64` hours relative to an upstream-chosen baseline; the
//!   observation horizon `T` is the last failure time.
//! - Errors bubble up as layer-specific enums (`SampleError`, `FitError`,
//!   `AnalysisError`, `OptError`) with `Display`/`Error` impls and result
//!   aliases per layer.
//!
//! Downstream usage
//! ----------------
//! - Front-ends (CLI exporters, service wrappers, report renderers) depend
//!   on `reliability::prelude::*` and consume the `AnalysisReport` without
//!   re-deriving any statistic.
//! - Custom model experimentation can target `optimization::prelude::*`
//!   directly by implementing the `LogLikelihood` trait.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside their modules; `tests/` holds the end-to-end
//!   pipeline scenarios (realistic decaying-rate samples, degenerate
//!   2-point samples, determinism checks).

pub mod inference;
pub mod optimization;
pub mod reliability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use srgm::prelude::*;
//
// to import the main crate surface in a single line.

pub mod prelude {
    pub use crate::optimization::prelude::*;
    pub use crate::reliability::prelude::*;
}
