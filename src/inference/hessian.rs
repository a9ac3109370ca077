//! inference::hessian — observed-information standard errors.
//!
//! Purpose
//! -------
//! Turn a fitted model's negative log-likelihood into per-parameter standard
//! errors via the observed information matrix. This module handles the
//! conversion between `ndarray` and `nalgebra` types, the matrix inversion,
//! and the degradation policy when the curvature is unusable.
//!
//! Key behaviors
//! -------------
//! - Call [`scalar_hessian`] on the negative log-likelihood at `θ̂` to obtain
//!   the observed information matrix `J(θ̂)`.
//! - Copy the resulting `ndarray` Hessian into a `nalgebra::DMatrix`
//!   (`fill_dmatrix`) and invert it with `try_inverse`.
//! - Return `SE(θ̂_i) = sqrt(diag(J⁻¹)_i)` on success.
//! - Degrade to `NaN` entries — never an error — when the Hessian cannot be
//!   computed, the matrix is singular, or a diagonal variance is negative.
//!
//! Invariants & assumptions
//! ------------------------
//! - [`standard_errors`] never fails: a fit with unusable curvature keeps
//!   its point estimates and simply reports `NaN` uncertainty. Callers can
//!   therefore thread SEs through reports without branching on errors.
//! - The negative log-likelihood is assumed smooth in a small neighborhood
//!   of `θ̂`; when the optimum sits on a feasibility boundary the stencil
//!   may fail, which lands in the `NaN` branch by design of the policy
//!   above.
//!
//! Conventions
//! -----------
//! - Hessians are on the **summed** log-likelihood scale (not the average),
//!   so SEs are directly comparable across samples of different sizes only
//!   through the likelihood itself.
//! - No pseudoinverse or eigenvalue truncation is attempted; a singular
//!   information matrix yields `NaN` rather than an inflated estimate.
//!
//! Downstream usage
//! ----------------
//! - Model fitting calls [`standard_errors`] once per successful fit and
//!   stores the vector alongside the parameter estimates.
use crate::optimization::loglik_optimizer::{
    finite_diff::scalar_hessian,
    types::{FD_HESSIAN_STEP, Hessian, Theta},
};
use nalgebra::DMatrix;
use ndarray::Array1;

/// standard_errors — per-parameter SEs from the observed information.
///
/// Purpose
/// -------
/// Compute classical standard errors at the MLE by inverting the observed
/// information matrix `J(θ̂) = ∇²(-ℓ)(θ̂)` and taking square roots of its
/// diagonal.
///
/// Parameters
/// ----------
/// - `neg_loglik`: `&F` where `F: Fn(&Theta) -> f64`
///   The negative log-likelihood as a plain scalar function of `θ`.
/// - `theta_hat`: `&Theta`
///   The parameter estimate at which curvature is evaluated; its length
///   fixes the length of the returned vector.
///
/// Returns
/// -------
/// `Array1<f64>`
///   Length-`n` vector of standard errors. Entries are `NaN` when the
///   curvature is unusable (non-finite Hessian, singular information
///   matrix, or a negative diagonal variance producing `sqrt` of a
///   negative number).
///
/// Errors
/// ------
/// - None. Degradation to `NaN` replaces every failure mode so that fits
///   with flat or boundary curvature still report their point estimates.
///
/// Notes
/// -----
/// - The finite-difference step is the fixed [`FD_HESSIAN_STEP`]; parameter
///   scales in NHPP fits (counts, rates per hour) sit comfortably above it.
pub fn standard_errors<F>(neg_loglik: &F, theta_hat: &Theta) -> Array1<f64>
where
    F: Fn(&Theta) -> f64,
{
    let n = theta_hat.len();
    let hessian = match scalar_hessian(neg_loglik, theta_hat, FD_HESSIAN_STEP) {
        Ok(h) => h,
        Err(_) => return nan_vector(n),
    };
    let mut obs_info = DMatrix::<f64>::zeros(n, n);
    fill_dmatrix(&hessian, &mut obs_info);
    match obs_info.try_inverse() {
        Some(cov) => {
            let mut se = Array1::<f64>::zeros(n);
            for i in 0..n {
                // sqrt of a negative variance yields NaN, which is the
                // intended degraded value for that parameter.
                se[i] = cov[(i, i)].sqrt();
            }
            se
        }
        None => nan_vector(n),
    }
}

// ---- Helper methods ----

/// fill_dmatrix — copy an `ndarray` Hessian into a `nalgebra::DMatrix`.
///
/// The copy proceeds column by column, matching `DMatrix`'s column-major
/// storage. Symmetry is preserved as-is; [`scalar_hessian`] already mirrors
/// the off-diagonal entries.
fn fill_dmatrix(obs_info: &Hessian, obs_info_nalg: &mut DMatrix<f64>) {
    let n = obs_info.ncols();
    for j in 0..n {
        for i in j..n {
            if j == i {
                obs_info_nalg[(i, i)] = obs_info[[i, i]];
            } else {
                obs_info_nalg[(i, j)] = obs_info[[i, j]];
                obs_info_nalg[(j, i)] = obs_info[[j, i]];
            }
        }
    }
}

/// Build a length-`n` vector of `NaN` entries for degraded SE reporting.
fn nan_vector(n: usize) -> Array1<f64> {
    Array1::from_elem(n, f64::NAN)
}
