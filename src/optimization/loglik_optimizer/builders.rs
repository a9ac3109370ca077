//! loglik_optimizer::builders — Nelder–Mead solver construction helpers.
//!
//! Purpose
//! -------
//! Provide a small, focused builder for the Nelder–Mead solver used by the
//! log-likelihood optimizer. The builder hides Argmin's generic wiring,
//! constructs a deterministic initial simplex around a starting point, and
//! applies crate-level stopping rules so that higher-level code can request
//! a configured solver without touching Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Build the initial simplex from `theta0` with a per-coordinate relative
//!   bump ([`SIMPLEX_RELATIVE_STEP`]) floored at [`SIMPLEX_MIN_STEP`].
//! - Apply the optional simplex standard-deviation tolerance from
//!   [`MLEOptions`] via Argmin's `with_sd_tolerance`.
//! - Leave the maximum-iteration cap to the runner/executor layer, keeping
//!   this builder side-effect free.
//!
//! Invariants & assumptions
//! ------------------------
//! - The simplex has `theta0.len() + 1` vertices and is non-degenerate for
//!   any finite `theta0`, because each bump is bounded below by
//!   [`SIMPLEX_MIN_STEP`].
//! - The same `theta0` always produces the same simplex; multi-start runs
//!   are therefore bit-for-bit reproducible.
//!
//! Conventions
//! -----------
//! - Errors are always reported via [`OptResult`]; the underlying
//!   `argmin::core::Error` values never leak directly across module
//!   boundaries.
//!
//! Downstream usage
//! ----------------
//! - `maximize` calls [`build_nelder_mead`] once per start; the returned
//!   solver is handed to `run_nelder_mead` together with the adapted problem.
//!
//! Testing notes
//! -------------
//! - Unit tests verify simplex shape and determinism and that valid options
//!   produce a solver.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        traits::MLEOptions,
        types::{NelderMeadSolver, SIMPLEX_MIN_STEP, SIMPLEX_RELATIVE_STEP, Theta},
    },
};

/// build_nelder_mead — construct a Nelder–Mead solver around `theta0`.
///
/// Purpose
/// -------
/// Build a [`NelderMeadSolver`] whose initial simplex is derived
/// deterministically from `theta0` and whose stopping rule comes from
/// `opts.tols.sd_tol` (when present).
///
/// Parameters
/// ----------
/// - `theta0`: `&Theta`
///   Starting point; defines the simplex centroid-adjacent base vertex and
///   the problem dimension.
/// - `opts`: `&MLEOptions`
///   Optimizer options. Only `opts.tols.sd_tol` is consulted here; the
///   iteration cap is applied by the runner.
///
/// Returns
/// -------
/// `OptResult<NelderMeadSolver>`
///   - `Ok(solver)` with the simplex and any configured tolerance applied.
///   - `Err(e)` if Argmin rejects the tolerance.
///
/// Errors
/// ------
/// - `OptError` (via `From<argmin::core::Error>`)
///   Returned when `with_sd_tolerance` rejects the configured value.
///
/// Notes
/// -----
/// - The simplex is `theta0` plus one vertex per coordinate, bumped by
///   `max(|θᵢ|·SIMPLEX_RELATIVE_STEP, SIMPLEX_MIN_STEP)` along `eᵢ`.
pub fn build_nelder_mead(theta0: &Theta, opts: &MLEOptions) -> OptResult<NelderMeadSolver> {
    build_with_relative_step(theta0, opts, SIMPLEX_RELATIVE_STEP)
}

/// build_with_relative_step — builder with a caller-chosen simplex bump.
///
/// Identical to [`build_nelder_mead`] but with the relative bump supplied by
/// the caller. Refinement restarts shrink the bump between rounds to tighten
/// a simplex that converged by cost spread while still straddling the
/// optimum.
pub fn build_with_relative_step(
    theta0: &Theta, opts: &MLEOptions, relative_step: f64,
) -> OptResult<NelderMeadSolver> {
    let mut solver = NelderMeadSolver::new(initial_simplex(theta0, relative_step));
    if let Some(sd_tol) = opts.tols.sd_tol {
        solver = solver.with_sd_tolerance(sd_tol)?;
    }
    Ok(solver)
}

// ---- Helper methods ----

/// Build the deterministic initial simplex for `theta0`.
///
/// Vertex 0 is `theta0` itself; vertex `i + 1` bumps coordinate `i` by
/// `relative_step` of its magnitude, floored at [`SIMPLEX_MIN_STEP`]. No
/// randomness is involved, so repeated fits on identical input produce
/// identical parameter paths.
fn initial_simplex(theta0: &Theta, relative_step: f64) -> Vec<Theta> {
    let dim = theta0.len();
    let mut vertices = Vec::with_capacity(dim + 1);
    vertices.push(theta0.clone());
    for i in 0..dim {
        let mut vertex = theta0.clone();
        let step = (vertex[i].abs() * relative_step).max(SIMPLEX_MIN_STEP);
        vertex[i] += step;
        vertices.push(vertex);
    }
    vertices
}
