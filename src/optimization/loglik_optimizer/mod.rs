//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run a derivative-free
//! Nelder–Mead search with configurable stopping rules.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - builds a Nelder–Mead solver with a deterministic initial simplex via
//!     [`builders`],
//!   - executes the solver via [`run::run_nelder_mead`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Provide a central-difference Hessian helper in [`finite_diff`] for
//!   observed-information standard errors, with post-hoc validation.
//! - Centralize optimizer configuration ([`Tolerances`], [`MLEOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** a log-likelihood `ℓ(θ)` by minimizing
//!   a cost `c(θ) = -ℓ(θ)`; user code implements `ℓ(θ)`, **never** the cost
//!   directly.
//! - [`LogLikelihood::value`] must treat invalid inputs as recoverable
//!   [`OptResult`] errors or `-∞` barrier values, not panics. `-∞` marks an
//!   infeasible point and becomes a `+∞` cost the simplex rejects naturally.
//! - Vectors and matrices use the canonical aliases [`Theta`] and
//!   [`types::Hessian`]; all are assumed finite whenever optimization
//!   proceeds.
//! - Configuration types ([`Tolerances`], [`MLEOptions`]) are validated on
//!   construction and treated as internally consistent by the solver layer.
//!
//! Conventions
//! -----------
//! - Parameters live in the model's natural space as [`Theta`]
//!   (`Array1<f64>`); bound constraints are enforced by the model through
//!   `-∞` log-likelihood barriers, not by the solver.
//! - Cost is always `c(θ) = -ℓ(θ)` internally; all user-facing APIs and
//!   diagnostics (including [`OptimOutcome`]'s `value`) are expressed in
//!   terms of the log-likelihood `ℓ`.
//! - Errors bubble up as [`OptResult<T>`] / `OptError`; this module and its
//!   children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - Model code implements [`LogLikelihood`] for its types, then calls
//!   [`maximize`] with a model instance, an initial [`Theta`], a data
//!   payload, and an [`MLEOptions`] configuration.
//! - Multi-start fitting calls [`maximize`] once per starting point and
//!   keeps the converged outcome with the highest `value`.
//! - Internal optimizer code:
//!   - uses [`adapter`] to bridge into Argmin,
//!   - uses [`builders`] to construct simplex solvers,
//!   - delegates execution to [`run::run_nelder_mead`], and
//!   - relies on [`finite_diff`] and [`validation`] for curvature and
//!     state checks.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover:
//!   - sign conventions and infeasible-point handling in [`adapter`],
//!   - simplex construction and tolerance wiring in [`builders`],
//!   - finite-difference + validation behavior in [`finite_diff`],
//!   - configuration and outcome invariants in [`traits`],
//!   - full solver runs on toy concave objectives in [`run`] and [`api`].

pub mod adapter;
pub mod api;
pub mod builders;
pub mod finite_diff;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, FnEvalMap, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use srgm::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Theta};
}
