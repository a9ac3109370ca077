//! loglik_optimizer::run — executor wiring for a single optimizer start.
//!
//! Purpose
//! -------
//! Drive one Nelder–Mead run end to end: attach the adapted problem to an
//! Argmin `Executor`, apply the iteration cap, optionally attach a progress
//! observer, and normalize the raw solver state into an [`OptimOutcome`].
//!
//! Key behaviors
//! -------------
//! - Apply `opts.tols.max_iter` as the executor's iteration cap.
//! - When `opts.verbose` is set and the `obs_slog` feature is enabled,
//!   attach a `SlogLogger` that reports every iteration to stdout.
//! - Flip the sign of the best cost back to a log-likelihood before
//!   returning, so callers never see the internal minimization convention.
//!
//! Invariants & assumptions
//! ------------------------
//! - The solver reports its best vertex through the terminal state's best
//!   parameter and cost; both are validated in [`OptimOutcome::new`].
//! - A run whose best cost is still `+∞` (every vertex infeasible) fails
//!   outcome validation and is skipped by multi-start callers.
//!
//! Downstream usage
//! ----------------
//! - `maximize` is the only caller; it hands in a freshly built solver and
//!   adapter per starting point.
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        adapter::ArgMinAdapter,
        traits::{LogLikelihood, MLEOptions, OptimOutcome},
        types::NelderMeadSolver,
    },
};
use argmin::core::{Executor, State};
#[cfg(feature = "obs_slog")]
use argmin::core::observers::ObserverMode;
#[cfg(feature = "obs_slog")]
use argmin_observer_slog::SlogLogger;

/// run_nelder_mead — execute one solver start and normalize its outcome.
///
/// Purpose
/// -------
/// Run the configured Nelder–Mead solver on the adapted problem until a
/// stopping rule fires, then convert the terminal state into an
/// [`OptimOutcome`] carrying the log-likelihood (not the cost) at the best
/// vertex.
///
/// Parameters
/// ----------
/// - `adapter`: `ArgMinAdapter<F>`
///   The cost-function bridge over the user's log-likelihood and data.
/// - `solver`: `NelderMeadSolver`
///   Solver with its initial simplex and tolerance already applied.
/// - `opts`: `&MLEOptions`
///   Consulted for the iteration cap and the verbosity flag.
///
/// Returns
/// -------
/// `OptResult<OptimOutcome>`
///   - `Ok(outcome)` with validated `theta_hat`, finite log-likelihood, and
///     termination metadata.
///   - `Err(e)` if the executor fails or the terminal state is unusable.
///
/// Errors
/// ------
/// - `OptError` (via `From<argmin::core::Error>`)
///   Executor-level failures, including `NaN` cost evaluations raised by the
///   adapter.
/// - `OptError::MissingThetaHat` / `InvalidThetaHat` / `NonFiniteOptimum`
///   Terminal-state validation failures from [`OptimOutcome::new`].
pub fn run_nelder_mead<F: LogLikelihood>(
    adapter: ArgMinAdapter<'_, F>, solver: NelderMeadSolver, opts: &MLEOptions,
) -> OptResult<OptimOutcome> {
    let mut executor = Executor::new(adapter, solver);
    if let Some(max_iter) = opts.tols.max_iter {
        executor = executor.configure(|state| state.max_iters(max_iter as u64));
    }
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        executor = executor.add_observer(SlogLogger::term(), ObserverMode::Always);
    }

    let mut state = executor.run()?.state().clone();
    let iterations = state.get_iter();
    let fn_evals = state.get_func_counts().clone();
    let termination = state.get_termination_status().clone();
    OptimOutcome::new(
        state.take_best_param(),
        // Best cost is -ℓ(θ̂); report the log-likelihood to callers.
        -state.get_best_cost(),
        termination,
        iterations,
        fn_evals,
    )
}
