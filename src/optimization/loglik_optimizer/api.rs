//! loglik_optimizer::api — high-level entry point for log-likelihood MLE.
//!
//! Purpose
//! -------
//! Expose a single function, [`maximize`], that takes a user model, a
//! starting point, data, and options, and returns a normalized
//! [`OptimOutcome`]. All Argmin-specific wiring (adapter, solver, executor)
//! stays behind this boundary.
//!
//! Key behaviors
//! -------------
//! - Validate the starting point and invoke the model's own `check` hook
//!   before any optimization work.
//! - Build a fresh solver per call so repeated starts never share state.
//! - Return log-likelihood values with the maximization sign convention.
//!
//! Downstream usage
//! ----------------
//! - Model-fitting code calls [`maximize`] once per starting point and keeps
//!   the converged outcome with the highest `value`.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        adapter::ArgMinAdapter,
        builders::{build_nelder_mead, build_with_relative_step},
        run::run_nelder_mead,
        traits::{LogLikelihood, MLEOptions, OptimOutcome},
        types::{SIMPLEX_REFINE_FACTOR, SIMPLEX_REFINE_ROUNDS, SIMPLEX_RELATIVE_STEP, Theta},
        validation::validate_theta_entries,
    },
};

/// maximize — run one Nelder–Mead start on a user log-likelihood.
///
/// Purpose
/// -------
/// Maximize `ℓ(θ)` for the supplied model and data, starting from `theta0`.
/// Internally minimizes the cost `c(θ) = -ℓ(θ)` with a derivative-free
/// simplex solver, so models only need to supply `value` (no gradients).
///
/// Parameters
/// ----------
/// - `f`: `&F` where `F: LogLikelihood`
///   The model whose log-likelihood is maximized.
/// - `theta0`: `&Theta`
///   Starting point; must be finite in every coordinate.
/// - `data`: `&F::Data`
///   Observations passed through to every evaluation of `f.value`.
/// - `opts`: `&MLEOptions`
///   Stopping rules and verbosity.
///
/// Returns
/// -------
/// `OptResult<OptimOutcome>`
///   - `Ok(outcome)` carrying `theta_hat`, the log-likelihood at the
///     optimum, convergence status, and evaluation counters.
///   - `Err(e)` on invalid input, model-level check failure, or an
///     unusable terminal state.
///
/// Errors
/// ------
/// - `OptError::InvalidThetaInput` for a non-finite starting coordinate.
/// - Any error raised by `f.check(theta0, data)`.
/// - Executor and terminal-state errors from the run layer.
///
/// Notes
/// -----
/// - `converged == false` outcomes are still returned; whether to keep or
///   discard them is a caller policy (multi-start fitting discards them).
/// - A converged run is refined: the solver's sd stopping rule watches cost
///   spread, so a simplex straddling a symmetric optimum can terminate a
///   full bump-width away from the maximizer. Each refinement round restarts
///   from the incumbent `theta_hat` with the bump shrunk by
///   [`SIMPLEX_REFINE_FACTOR`]; the refined outcome starts at the incumbent
///   vertex and so is never worse.
pub fn maximize<F: LogLikelihood>(
    f: &F, theta0: &Theta, data: &F::Data, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    validate_theta_entries(theta0)?;
    f.check(theta0, data)?;
    let solver = build_nelder_mead(theta0, opts)?;
    let adapter = ArgMinAdapter::new(f, data);
    let mut outcome = run_nelder_mead(adapter, solver, opts)?;

    let mut relative_step = SIMPLEX_RELATIVE_STEP;
    for _ in 0..SIMPLEX_REFINE_ROUNDS {
        if !outcome.converged {
            break;
        }
        relative_step *= SIMPLEX_REFINE_FACTOR;
        let solver = build_with_relative_step(&outcome.theta_hat, opts, relative_step)?;
        let adapter = ArgMinAdapter::new(f, data);
        let mut refined = run_nelder_mead(adapter, solver, opts)?;
        if !refined.converged {
            break;
        }
        refined.iterations += outcome.iterations;
        for (counter, count) in &outcome.fn_evals {
            *refined.fn_evals.entry(counter.clone()).or_insert(0) += count;
        }
        outcome = refined;
    }
    Ok(outcome)
}
