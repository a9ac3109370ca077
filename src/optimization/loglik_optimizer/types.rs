//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Centralize the core numeric types, constants, and solver aliases used by
//! the log-likelihood optimizer. By defining these in one place, the rest of
//! the optimization code can stay agnostic to `ndarray` and Argmin generics
//! and can more easily evolve if the backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for parameter vectors, Hessians, and scalar
//!   costs (`Theta`, `Hessian`, `Cost`).
//! - Provide a standard map type for Argmin function-evaluation counters
//!   (`FnEvalMap`).
//! - Expose the pre-wired Nelder–Mead solver alias used by the runner, plus
//!   the constants governing simplex construction and finite differencing.
//!
//! Invariants & assumptions
//! ------------------------
//! - All optimizer vectors and matrices are represented as `ndarray`
//!   containers over `f64`.
//! - `Cost` is a scalar `f64`; higher layers handle the sign flip between
//!   cost and log-likelihood. A cost of `+∞` is a legal value marking an
//!   infeasible simplex vertex, while `NaN` is always an error.
//! - The simplex constants assume parameter scales are meaningful in
//!   absolute terms (hours, counts, rates), which holds for NHPP fits.
//!
//! Conventions
//! -----------
//! - `Theta` is treated conceptually as a column vector with length equal to
//!   the number of free parameters.
//! - `Hessian` is a dense square matrix with dimension
//!   `theta.len() × theta.len()` when used.
//! - This module defines no runtime behavior beyond what `ndarray` and
//!   Argmin require when these types are instantiated elsewhere.
//!
//! Downstream usage
//! ----------------
//! - Other optimizer modules import these aliases instead of referring
//!   directly to `ndarray` or Argmin generics.
//! - Solver construction uses [`NelderMeadSolver`] via the builder in
//!   `loglik_optimizer::builders`.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; there are no
//!   dedicated unit tests. Correctness is exercised indirectly by the
//!   surrounding optimizer modules.
use argmin::solver::neldermead::NelderMead;
use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Dense Hessian matrix for second-order information.
///
/// Alias for `ndarray::Array2<f64>`; `n × n` for `n = Theta.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default simplex standard-deviation tolerance for Nelder–Mead runs.
pub const DEFAULT_SD_TOL: f64 = 1e-10;

/// Default iteration cap for a single optimizer start. Flat likelihood
/// ridges (evenly spaced failure times under Goel-Okumoto) need a few
/// thousand iterations before the simplex collapses.
pub const DEFAULT_MAX_ITER: usize = 10_000;

/// Relative per-coordinate bump used to build the initial simplex.
pub const SIMPLEX_RELATIVE_STEP: f64 = 0.05;

/// Absolute floor on the per-coordinate simplex bump (guards zero-valued
/// coordinates against a degenerate simplex).
pub const SIMPLEX_MIN_STEP: f64 = 1e-4;

/// Shrink factor applied to the simplex bump between refinement rounds.
pub const SIMPLEX_REFINE_FACTOR: f64 = 0.1;

/// Number of shrinking restarts run after a converged start. The sd stopping
/// rule watches cost spread, not simplex width, so a converged simplex can
/// still straddle a symmetric optimum a full bump-width out; each round
/// restarts from the incumbent with a tighter simplex.
pub const SIMPLEX_REFINE_ROUNDS: usize = 4;

/// Per-dimension step for the central-difference Hessian.
pub const FD_HESSIAN_STEP: f64 = 1e-5;

/// Nelder–Mead solver specialized to this crate's numeric types.
pub type NelderMeadSolver = NelderMead<Theta, Cost>;
