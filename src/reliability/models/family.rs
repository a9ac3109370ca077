//! models::family — the closed set of supported NHPP model families.
//!
//! Purpose
//! -------
//! Bind each model family to its likelihood, curve functions, feasible
//! region, and multi-start grid through a two-variant enum. The closed enum
//! statically rules out an unimplemented third family slipping through
//! string-based dispatch.
//!
//! Key behaviors
//! -------------
//! - Dispatch `log_likelihood`, `mean_value`, and `intensity` to the pure
//!   functions in [`likelihood`].
//! - Expose the feasible region as component-wise lower bounds (no upper
//!   bounds); the fitter turns these into a `-∞` likelihood barrier.
//! - Generate the family's deterministic initial-guess grid from `(n, T)`.
//! - Report `total_expected_failures`: GO reads its asymptote `a` directly;
//!   MO has no finite asymptote, so the mean-value function is evaluated at
//!   [`MO_ASYMPTOTE_HORIZON_HOURS`] as a documented approximation.
use crate::optimization::loglik_optimizer::types::Theta;
use crate::reliability::{
    core::init::{go_initial_guesses, mo_initial_guesses},
    models::likelihood::{
        go_intensity, go_loglik, go_mean_value, mo_intensity, mo_loglik, mo_mean_value,
    },
};
use ndarray::Array1;

/// Horizon (hours) at which the MO mean-value function stands in for its
/// (infinite) total-fault limit. At `t = 1e9` hours the remaining growth of
/// `μ(t) = (1/θ)·ln(1 + λ0·θ·t)` over any practically observable window is
/// below one failure for realistic `(λ0, θ)`, but the reported value is an
/// approximation, not a limit.
pub const MO_ASYMPTOTE_HORIZON_HOURS: f64 = 1e9;

/// Smallest admissible value for rate-like parameters.
const RATE_LOWER_BOUND: f64 = 1e-6;

/// The supported NHPP model families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelFamily {
    /// Goel-Okumoto: finite total-fault asymptote, exponentially decaying
    /// detection rate. Parameters `(a, b)`.
    GoelOkumoto,
    /// Musa-Okumoto (logarithmic Poisson): unbounded mean value, intensity
    /// inversely proportional to elapsed exposure. Parameters `(λ0, θ)`.
    MusaOkumoto,
}

impl ModelFamily {
    /// Every supported family, in canonical fitting order.
    pub const ALL: [ModelFamily; 2] = [ModelFamily::GoelOkumoto, ModelFamily::MusaOkumoto];

    /// Human-readable family name.
    pub fn name(&self) -> &'static str {
        match self {
            ModelFamily::GoelOkumoto => "Goel-Okumoto",
            ModelFamily::MusaOkumoto => "Musa-Okumoto",
        }
    }

    /// Parameter names in estimation order.
    pub fn param_names(&self) -> [&'static str; 2] {
        match self {
            ModelFamily::GoelOkumoto => ["a", "b"],
            ModelFamily::MusaOkumoto => ["lambda0", "theta"],
        }
    }

    /// Number of free parameters (both families have exactly two). AIC
    /// derives its penalty from this rather than a hard-coded constant.
    pub fn param_count(&self) -> usize {
        2
    }

    /// Family log-likelihood `ℓ(params; times, T)`.
    ///
    /// Infeasible parameters evaluate to `-∞` (see [`likelihood`]).
    pub fn log_likelihood(&self, params: &Theta, times: &Array1<f64>, horizon: f64) -> f64 {
        match self {
            ModelFamily::GoelOkumoto => go_loglik(params[0], params[1], times, horizon),
            ModelFamily::MusaOkumoto => mo_loglik(params[0], params[1], times, horizon),
        }
    }

    /// Expected cumulative failures by time `t` under `params`.
    pub fn mean_value(&self, t: f64, params: &Theta) -> f64 {
        match self {
            ModelFamily::GoelOkumoto => go_mean_value(t, params[0], params[1]),
            ModelFamily::MusaOkumoto => mo_mean_value(t, params[0], params[1]),
        }
    }

    /// Instantaneous failure rate at time `t` under `params`.
    pub fn intensity(&self, t: f64, params: &Theta) -> f64 {
        match self {
            ModelFamily::GoelOkumoto => go_intensity(t, params[0], params[1]),
            ModelFamily::MusaOkumoto => mo_intensity(t, params[0], params[1]),
        }
    }

    /// Component-wise lower bounds of the feasible region for a sample of
    /// size `n` (no upper bounds).
    ///
    /// GO additionally bounds the total-fault parameter below by
    /// `max(1, n/2)`: the fit cannot claim materially fewer total faults
    /// than have already been observed.
    pub fn lower_bounds(&self, n: usize) -> [f64; 2] {
        match self {
            ModelFamily::GoelOkumoto => [(n as f64 * 0.5).max(1.0), RATE_LOWER_BOUND],
            ModelFamily::MusaOkumoto => [RATE_LOWER_BOUND, RATE_LOWER_BOUND],
        }
    }

    /// Deterministic multi-start grid for a sample of size `n` with
    /// observed horizon `T`.
    pub fn initial_guesses(&self, n: usize, horizon: f64) -> Vec<Theta> {
        match self {
            ModelFamily::GoelOkumoto => go_initial_guesses(n, horizon),
            ModelFamily::MusaOkumoto => mo_initial_guesses(n, horizon),
        }
    }

    /// Total expected failures implied by `params`.
    ///
    /// GO reads its asymptote `a`; MO evaluates the mean value at
    /// [`MO_ASYMPTOTE_HORIZON_HOURS`] because its true limit is infinite.
    pub fn total_expected_failures(&self, params: &Theta) -> f64 {
        match self {
            ModelFamily::GoelOkumoto => params[0],
            ModelFamily::MusaOkumoto => {
                self.mean_value(MO_ASYMPTOTE_HORIZON_HOURS, params)
            }
        }
    }
}

impl std::fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
