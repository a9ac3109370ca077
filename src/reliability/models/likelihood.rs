//! models::likelihood — closed-form NHPP likelihood, mean-value, and
//! intensity functions.
//!
//! Purpose
//! -------
//! Pure, stateless math for the two supported model families. Everything
//! here is a free function over plain scalars and a borrowed time array, so
//! concurrent evaluation needs no synchronization.
//!
//! Key behaviors
//! -------------
//! - **Goel-Okumoto (GO)**, parameters `(a, b)` with `a` the total expected
//!   fault count and `b` the per-fault detection rate:
//!   `ℓ(a, b) = n·ln(a·b) − b·Σtᵢ − a·(1 − e^(−b·T))`,
//!   `μ(t) = a·(1 − e^(−b·t))`, `λ(t) = a·b·e^(−b·t)`.
//! - **Musa-Okumoto (MO, logarithmic Poisson)**, parameters `(λ0, θ)` with
//!   `λ0` the initial intensity and `θ` the decay parameter:
//!   `ℓ(λ0, θ) = n·ln(λ0) − Σ ln(1 + λ0·θ·tᵢ) − (1/θ)·ln(1 + λ0·θ·T)`,
//!   `μ(t) = (1/θ)·ln(1 + λ0·θ·t)`, `λ(t) = λ0 / (1 + λ0·θ·t)`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both log-likelihoods short-circuit to `-∞` whenever a parameter is
//!   non-positive or NaN, so the optimizer sees a flat, rejectable boundary
//!   instead of a domain panic.
//! - `μ(0) = 0` exactly for both families; GO's `μ` is bounded by `a`,
//!   MO's is unbounded as `t → ∞`.
use ndarray::Array1;

// ---- Goel-Okumoto ----

/// GO log-likelihood `ℓ(a, b; t, T)`.
///
/// Returns `-∞` for `a <= 0`, `b <= 0`, or NaN parameters (infeasible
/// region treated as a flat boundary).
pub fn go_loglik(a: f64, b: f64, times: &Array1<f64>, horizon: f64) -> f64 {
    // `!(x > 0)` also catches NaN parameters.
    if !(a > 0.0) || !(b > 0.0) {
        return f64::NEG_INFINITY;
    }
    let n = times.len() as f64;
    n * (a * b).ln() - b * times.sum() - a * (1.0 - (-b * horizon).exp())
}

/// GO mean-value function `μ(t) = a·(1 − e^(−b·t))`.
///
/// Monotone increasing with asymptote `a`; exactly `0` at `t = 0`.
pub fn go_mean_value(t: f64, a: f64, b: f64) -> f64 {
    a * (1.0 - (-b * t).exp())
}

/// GO intensity `λ(t) = a·b·e^(−b·t)`, strictly decreasing in `t`.
pub fn go_intensity(t: f64, a: f64, b: f64) -> f64 {
    a * b * (-b * t).exp()
}

// ---- Musa-Okumoto ----

/// MO log-likelihood `ℓ(λ0, θ; t, T)`.
///
/// Returns `-∞` for `λ0 <= 0`, `θ <= 0`, or NaN parameters.
pub fn mo_loglik(lambda0: f64, theta: f64, times: &Array1<f64>, horizon: f64) -> f64 {
    if !(lambda0 > 0.0) || !(theta > 0.0) {
        return f64::NEG_INFINITY;
    }
    let n = times.len() as f64;
    let sum_log: f64 = times.iter().map(|&t| (1.0 + lambda0 * theta * t).ln()).sum();
    n * lambda0.ln() - sum_log - (1.0 / theta) * (1.0 + lambda0 * theta * horizon).ln()
}

/// MO mean-value function `μ(t) = (1/θ)·ln(1 + λ0·θ·t)`.
///
/// Monotone increasing and unbounded as `t → ∞`; exactly `0` at `t = 0`.
pub fn mo_mean_value(t: f64, lambda0: f64, theta: f64) -> f64 {
    (1.0 / theta) * (1.0 + lambda0 * theta * t).ln()
}

/// MO intensity `λ(t) = λ0 / (1 + λ0·θ·t)`.
pub fn mo_intensity(t: f64, lambda0: f64, theta: f64) -> f64 {
    lambda0 / (1.0 + lambda0 * theta * t)
}
