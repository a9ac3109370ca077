//! models::fit — multi-start maximum-likelihood fitting for one family.
//!
//! Purpose
//! -------
//! Turn a validated failure sample and a model family into a [`FitResult`]:
//! best-fit parameters, the log-likelihood at the optimum, observed-
//! information standard errors, and the implied total expected failures.
//!
//! Key behaviors
//! -------------
//! - Reject samples with fewer than [`MIN_OBSERVATIONS`] points: a
//!   two-parameter model is unidentifiable below that.
//! - Sweep the family's deterministic initial-guess grid; each start is an
//!   independent Nelder–Mead run on the bounded log-likelihood. A start
//!   that errors or stops without converging is skipped explicitly, never
//!   escalated.
//! - Keep the converged start with the highest log-likelihood; if none
//!   converges, fail with [`FitError::OptimizationFailure`].
//! - Bound constraints (component-wise lower bounds, no upper bounds) are
//!   enforced by evaluating the log-likelihood as `-∞` below the bounds,
//!   which the simplex solver rejects as a flat boundary.
//! - Standard errors degrade to `NaN` on singular curvature instead of
//!   failing the fit; the point estimate survives.
//!
//! Invariants & assumptions
//! ------------------------
//! - The multi-start reduction is a pure maximum, so evaluation order never
//!   affects which parameters win (ties keep the earlier start).
//! - All randomness-free inputs (grid, simplex, solver) make repeated fits
//!   on identical input bit-for-bit identical.
use crate::inference::hessian::standard_errors;
use crate::optimization::{
    errors::OptResult,
    loglik_optimizer::{
        api::maximize,
        traits::{LogLikelihood, OptimOutcome},
        types::{Cost, Theta},
        validation::validate_theta,
    },
};
use crate::reliability::{
    core::{data::FailureSample, options::FitOptions},
    errors::{FitError, FitOutcome},
    models::family::ModelFamily,
    selection::aic,
};
use ndarray::Array1;

/// Minimum number of observations required to fit a two-parameter family.
pub const MIN_OBSERVATIONS: usize = 3;

/// A model family with its feasible region, viewed as a bounded
/// log-likelihood for the optimizer.
///
/// Evaluations below the component-wise lower bounds return `-∞`, so the
/// solver treats the infeasible region as a rejectable flat boundary.
struct BoundedNhpp {
    family: ModelFamily,
    lower_bounds: [f64; 2],
}

impl LogLikelihood for BoundedNhpp {
    type Data = FailureSample;

    fn value(&self, theta: &Theta, data: &FailureSample) -> OptResult<Cost> {
        if theta[0] < self.lower_bounds[0] || theta[1] < self.lower_bounds[1] {
            return Ok(f64::NEG_INFINITY);
        }
        Ok(self.family.log_likelihood(theta, data.times(), data.horizon()))
    }

    fn check(&self, theta: &Theta, _data: &FailureSample) -> OptResult<()> {
        validate_theta(theta, self.family.param_count())
    }
}

/// Outcome of a successful single-family fit. Immutable once produced.
///
/// Fields:
/// - `params`: best-fit parameter vector in the family's natural order.
/// - `log_likelihood`: `ℓ(params)` at the optimum.
/// - `standard_errors`: per-parameter SEs; `NaN` entries mark unavailable
///   uncertainty (singular curvature), not a failed fit.
/// - `total_expected_failures`: GO's asymptote `a`, or MO's mean value at
///   the documented large horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    pub family: ModelFamily,
    pub params: Theta,
    pub log_likelihood: f64,
    pub standard_errors: Array1<f64>,
    pub total_expected_failures: f64,
}

impl FitResult {
    /// AIC for this fit, with the penalty derived from the family's actual
    /// parameter count. Lower is better.
    pub fn aic(&self) -> f64 {
        aic(self.family.param_count(), self.log_likelihood)
    }
}

/// fit_model — multi-start MLE for one model family.
///
/// Purpose
/// -------
/// Produce a [`FitResult`] for `family` on `sample`, or a structured
/// [`FitError`] when the data are too small or no start converges.
///
/// Parameters
/// ----------
/// - `family`: `ModelFamily`
///   The family to fit; supplies the likelihood, bounds, and start grid.
/// - `sample`: `&FailureSample`
///   Validated failure times; `T` is the sample's horizon.
/// - `opts`: `&FitOptions`
///   Optimizer stopping rules shared by every start.
///
/// Returns
/// -------
/// `FitOutcome<FitResult>`
///   - `Ok(result)` from the best converged start.
///   - `Err(FitError::InsufficientData { .. })` for `n < MIN_OBSERVATIONS`.
///   - `Err(FitError::OptimizationFailure { .. })` when no start converges.
///
/// Errors
/// ------
/// - Only the two [`FitError`] variants above; individual start failures
///   are contained inside the loop.
///
/// Notes
/// -----
/// - Standard-error computation cannot fail this function: unusable
///   curvature yields `NaN` entries in `standard_errors`.
pub fn fit_model(
    family: ModelFamily, sample: &FailureSample, opts: &FitOptions,
) -> FitOutcome<FitResult> {
    let n = sample.len();
    if n < MIN_OBSERVATIONS {
        return Err(FitError::InsufficientData { n, required: MIN_OBSERVATIONS });
    }
    let horizon = sample.horizon();
    let model = BoundedNhpp { family, lower_bounds: family.lower_bounds(n) };

    let mut best: Option<OptimOutcome> = None;
    for theta0 in family.initial_guesses(n, horizon) {
        let outcome = match maximize(&model, &theta0, sample, &opts.mle_opts) {
            Ok(outcome) => outcome,
            // A failed start is one candidate among many, not an error.
            Err(_) => continue,
        };
        if !outcome.converged {
            continue;
        }
        let improves = match &best {
            None => true,
            Some(current) => outcome.value > current.value,
        };
        if improves {
            best = Some(outcome);
        }
    }
    let best = best.ok_or(FitError::OptimizationFailure { family })?;

    let times = sample.times();
    let neg_loglik = |theta: &Theta| -family.log_likelihood(theta, times, horizon);
    let se = standard_errors(&neg_loglik, &best.theta_hat);
    let total_expected_failures = family.total_expected_failures(&best.theta_hat);

    Ok(FitResult {
        family,
        params: best.theta_hat,
        log_likelihood: best.value,
        standard_errors: se,
        total_expected_failures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The insufficient-data rejection rule.
    // - Convergence of both families on a small canonical sample, with the
    //   parameter constraints the models imply.
    // - Determinism of repeated fits.
    //
    // They intentionally DO NOT cover:
    // - Whole-pipeline behavior (covered by the integration tests).
    // -------------------------------------------------------------------------

    fn canonical_sample() -> FailureSample {
        FailureSample::new(array![1.0, 2.0, 3.0, 4.0, 5.0]).expect("valid sample")
    }

    #[test]
    // Purpose
    // -------
    // Samples below the identifiability threshold are rejected with the
    // observation counts attached.
    //
    // Given
    // -----
    // - A 2-point sample.
    //
    // Expect
    // ------
    // - `FitError::InsufficientData { n: 2, required: 3 }` for both
    //   families.
    fn small_samples_are_rejected() {
        let sample = FailureSample::new(array![1.0, 2.0]).expect("valid sample");
        let opts = FitOptions::default();
        for family in ModelFamily::ALL {
            assert_eq!(
                fit_model(family, &sample, &opts).expect_err("2 points must fail"),
                FitError::InsufficientData { n: 2, required: MIN_OBSERVATIONS }
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // GO fitted to five evenly spaced failures converges to a feasible
    // optimum: the total-fault estimate cannot fall below the observed
    // count, and the detection rate stays positive.
    //
    // Given
    // -----
    // - t = [1, 2, 3, 4, 5], T = 5, default options.
    //
    // Expect
    // ------
    // - `Ok(fit)` with a ≥ 5, b > 0, finite log-likelihood, and a total
    //   expected count equal to a.
    fn go_fit_respects_observed_count() {
        let sample = canonical_sample();
        let fit = fit_model(ModelFamily::GoelOkumoto, &sample, &FitOptions::default())
            .expect("GO fit succeeds");
        assert!(fit.params[0] >= 5.0 - 1e-6, "a = {}", fit.params[0]);
        assert!(fit.params[1] > 0.0, "b = {}", fit.params[1]);
        assert!(fit.log_likelihood.is_finite());
        assert_eq!(fit.total_expected_failures, fit.params[0]);
        assert_eq!(fit.standard_errors.len(), 2);
    }

    #[test]
    // Purpose
    // -------
    // MO fitted to the same sample converges with both parameters strictly
    // positive and a finite large-horizon total.
    //
    // Given
    // -----
    // - t = [1, 2, 3, 4, 5], T = 5, default options.
    //
    // Expect
    // ------
    // - `Ok(fit)` with λ0 > 0, θ > 0, finite log-likelihood and total.
    fn mo_fit_yields_positive_parameters() {
        let sample = canonical_sample();
        let fit = fit_model(ModelFamily::MusaOkumoto, &sample, &FitOptions::default())
            .expect("MO fit succeeds");
        assert!(fit.params[0] > 0.0, "lambda0 = {}", fit.params[0]);
        assert!(fit.params[1] > 0.0, "theta = {}", fit.params[1]);
        assert!(fit.log_likelihood.is_finite());
        assert!(fit.total_expected_failures.is_finite());
    }

    #[test]
    // Purpose
    // -------
    // Repeated fits on identical input produce bit-for-bit identical
    // parameters: the grid, simplex, and solver contain no randomness.
    //
    // Given
    // -----
    // - The canonical sample fitted twice per family.
    //
    // Expect
    // ------
    // - Exact equality of `params` and `log_likelihood`.
    fn repeated_fits_are_bit_identical() {
        let sample = canonical_sample();
        let opts = FitOptions::default();
        for family in ModelFamily::ALL {
            let first = fit_model(family, &sample, &opts).expect("fit succeeds");
            let second = fit_model(family, &sample, &opts).expect("fit succeeds");
            assert_eq!(first.params, second.params);
            assert_eq!(first.log_likelihood, second.log_likelihood);
        }
    }

    #[test]
    // Purpose
    // -------
    // The model's check hook owns the dimension contract: a parameter
    // vector of the wrong length is rejected before any solver work.
    //
    // Given
    // -----
    // - A 3-element theta against a two-parameter family.
    //
    // Expect
    // ------
    // - `Err(_)` from `check` (dimension mismatch).
    fn check_rejects_wrong_dimension() {
        let sample = canonical_sample();
        let family = ModelFamily::GoelOkumoto;
        let model = BoundedNhpp { family, lower_bounds: family.lower_bounds(sample.len()) };
        assert!(model.check(&array![1.0, 1.0, 1.0], &sample).is_err());
    }

    #[test]
    // Purpose
    // -------
    // The bounded view reports `-∞` below the feasible region and the real
    // likelihood above it.
    //
    // Given
    // -----
    // - GO bounds for n = 5 (a ≥ 2.5, b ≥ 1e-6).
    //
    // Expect
    // ------
    // - `-∞` at a = 2.0; the unbounded likelihood value at a = 6.0.
    fn barrier_masks_infeasible_region() {
        let sample = canonical_sample();
        let family = ModelFamily::GoelOkumoto;
        let model = BoundedNhpp { family, lower_bounds: family.lower_bounds(sample.len()) };

        let below = model.value(&array![2.0, 0.1], &sample).expect("evaluates");
        assert_eq!(below, f64::NEG_INFINITY);

        let inside = model.value(&array![6.0, 0.1], &sample).expect("evaluates");
        assert_eq!(inside, family.log_likelihood(&array![6.0, 0.1], sample.times(), 5.0));
    }
}
