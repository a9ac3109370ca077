//! Adapter that exposes a user `LogLikelihood` as an `argmin` problem.
//!
//! We convert a *maximization* of a log-likelihood `ℓ(θ)` into a *minimization*
//! problem by defining the cost as `c(θ) = -ℓ(θ)`. A value of `ℓ(θ) = -∞`
//! (infeasible parameters) becomes a `+∞` cost, which the simplex solver
//! ranks behind every feasible vertex instead of treating as a failure.
//! Only `NaN` evaluations are hard errors.
use crate::optimization::{
    errors::OptError,
    loglik_optimizer::{
        traits::LogLikelihood,
        types::{Cost, Theta},
    },
};
use argmin::core::{CostFunction, Error};

/// Bridges a user `LogLikelihood` to `argmin`'s `CostFunction`.
///
/// - `CostFunction::cost` returns `-ℓ(θ)` (negative log-likelihood).
/// - `ℓ(θ) = -∞` maps to `cost = +∞` (legal infeasible vertex).
/// - `ℓ(θ) = NaN` maps to `Error(NonFiniteCost)`.
#[derive(Debug, Clone)]
pub struct ArgMinAdapter<'a, F: LogLikelihood> {
    pub f: &'a F,
    pub data: &'a F::Data,
}

impl<'a, F: LogLikelihood> CostFunction for ArgMinAdapter<'a, F> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate the cost `c(θ) = -ℓ(θ)`.
    ///
    /// - Calls the user's `value(θ, data)` and rejects `NaN` outputs.
    /// - `-∞` log-likelihoods are passed through as `+∞` costs.
    ///
    /// # Errors
    /// Propagates any `OptError` from the user's `value` via `?`, plus
    /// `NonFiniteCost` for `NaN`.
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let output = self.f.value(theta, self.data)?;
        if output.is_nan() {
            return Err((OptError::NonFiniteCost { value: output }).into());
        }
        Ok(-output)
    }
}

impl<'a, F: LogLikelihood> ArgMinAdapter<'a, F> {
    /// Construct a new adapter over a user `LogLikelihood` and its data.
    pub fn new(f: &'a F, data: &'a F::Data) -> Self {
        Self { f, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::errors::OptResult;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Sign flip from log-likelihood to cost.
    // - Infeasible (-∞) evaluations passing through as +∞ cost.
    // - NaN evaluations surfacing as hard errors.
    // -------------------------------------------------------------------------

    struct Quadratic;

    impl LogLikelihood for Quadratic {
        type Data = ();

        fn value(&self, theta: &Theta, _data: &()) -> OptResult<Cost> {
            // ℓ(θ) = -θ·θ, with θ₀ < 0 treated as infeasible and a NaN
            // escape hatch at θ₀ = 42 for the error-path test.
            if theta[0] == 42.0 {
                return Ok(f64::NAN);
            }
            if theta[0] < 0.0 {
                return Ok(f64::NEG_INFINITY);
            }
            Ok(-theta.dot(theta))
        }

        fn check(&self, _theta: &Theta, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the maximization-to-minimization sign convention.
    //
    // Given
    // -----
    // - ℓ(θ) = -θ·θ and θ = [1, 2].
    //
    // Expect
    // ------
    // - cost(θ) = 5 = -ℓ(θ).
    fn cost_is_negated_log_likelihood() {
        let model = Quadratic;
        let adapter = ArgMinAdapter::new(&model, &());
        let cost = adapter.cost(&array![1.0, 2.0]).expect("finite evaluation");
        assert_eq!(cost, 5.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that an infeasible vertex yields +∞ cost, not an error.
    //
    // Given
    // -----
    // - θ with θ₀ < 0, which the model marks infeasible via ℓ = -∞.
    //
    // Expect
    // ------
    // - `Ok(+∞)`.
    fn infeasible_evaluation_is_infinite_cost_not_error() {
        let model = Quadratic;
        let adapter = ArgMinAdapter::new(&model, &());
        let cost = adapter.cost(&array![-1.0, 0.0]).expect("infeasible is not an error");
        assert!(cost.is_infinite() && cost > 0.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a NaN evaluation is a hard error.
    //
    // Given
    // -----
    // - θ₀ = 42, which the test model maps to ℓ = NaN.
    //
    // Expect
    // ------
    // - `Err(_)` from the adapter.
    fn nan_evaluation_is_an_error() {
        let model = Quadratic;
        let adapter = ArgMinAdapter::new(&model, &());
        assert!(adapter.cost(&array![42.0, 0.0]).is_err());
    }
}
