//! loglik_optimizer::finite_diff — central-difference Hessian estimation.
//!
//! Purpose
//! -------
//! Approximate the Hessian of a scalar function with a fixed-step
//! central-difference stencil. This feeds observed-information standard
//! errors downstream without requiring models to supply second derivatives.
//!
//! Key behaviors
//! -------------
//! - Diagonal entries use the three-point stencil
//!   `(f(θ+εeᵢ) - 2f(θ) + f(θ-εeᵢ)) / ε²`.
//! - Off-diagonal entries use the four-point cross stencil
//!   `(f₊₊ - f₊₋ - f₋₊ + f₋₋) / (4ε²)` and are mirrored to keep the result
//!   exactly symmetric.
//! - The step `ε` is a caller-supplied constant (see [`FD_HESSIAN_STEP`]);
//!   no adaptive step selection is attempted.
//!
//! Invariants & assumptions
//! ------------------------
//! - The function is assumed smooth in an `ε`-neighborhood of `theta`. At a
//!   likelihood optimum well inside the feasible region this holds; near a
//!   boundary the stencil can step outside and produce non-finite entries,
//!   which the result validation surfaces as an error.
//!
//! Downstream usage
//! ----------------
//! - `inference::hessian` evaluates this on the negative log-likelihood at
//!   `θ̂` and inverts the result to get parameter covariances.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        types::{Hessian, Theta},
        validation::validate_hessian,
    },
};
use ndarray::Array2;

/// scalar_hessian — central-difference Hessian of a scalar function.
///
/// Purpose
/// -------
/// Estimate `∇²f(θ)` at `theta` with a fixed step `eps`, returning a dense
/// symmetric matrix.
///
/// Parameters
/// ----------
/// - `f`: `&F` where `F: Fn(&Theta) -> f64`
///   The scalar function to differentiate. Evaluations are pointwise; `f`
///   is called `2n² + 1` times for an `n`-dimensional `theta`.
/// - `theta`: `&Theta`
///   Evaluation point.
/// - `eps`: `f64`
///   Finite-difference step; must be finite and strictly positive.
///
/// Returns
/// -------
/// `OptResult<Hessian>`
///   - `Ok(h)` with `h` square, symmetric, and all-finite.
///   - `Err(e)` on an invalid step or non-finite entries.
///
/// Errors
/// ------
/// - `OptError::InvalidFdStep` if `eps` is non-finite or ≤ 0.
/// - `OptError::InvalidHessian` if any stencil evaluation produced a
///   non-finite entry (typically a boundary crossing).
pub fn scalar_hessian<F>(f: &F, theta: &Theta, eps: f64) -> OptResult<Hessian>
where
    F: Fn(&Theta) -> f64,
{
    if !eps.is_finite() || eps <= 0.0 {
        return Err(OptError::InvalidFdStep { value: eps });
    }
    let dim = theta.len();
    let mut hessian: Hessian = Array2::zeros((dim, dim));
    let f0 = f(theta);

    for i in 0..dim {
        for j in i..dim {
            let value = if i == j {
                let mut up = theta.clone();
                let mut down = theta.clone();
                up[i] += eps;
                down[i] -= eps;
                (f(&up) - 2.0 * f0 + f(&down)) / (eps * eps)
            } else {
                let mut pp = theta.clone();
                let mut pm = theta.clone();
                let mut mp = theta.clone();
                let mut mm = theta.clone();
                pp[i] += eps;
                pp[j] += eps;
                pm[i] += eps;
                pm[j] -= eps;
                mp[i] -= eps;
                mp[j] += eps;
                mm[i] -= eps;
                mm[j] -= eps;
                (f(&pp) - f(&pm) - f(&mp) + f(&mm)) / (4.0 * eps * eps)
            };
            hessian[[i, j]] = value;
            hessian[[j, i]] = value;
        }
    }

    validate_hessian(&hessian, dim)?;
    Ok(hessian)
}
