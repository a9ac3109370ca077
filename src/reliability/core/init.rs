//! core::init — deterministic initial-guess grids for multi-start fitting.
//!
//! Both NHPP likelihood surfaces are non-convex, so a single local start can
//! stall in a poor optimum. The fitter therefore sweeps a fixed grid of
//! starting points scaled by the sample size `n` and horizon `T`. The grids
//! are enumerated in a fixed order and contain no randomness, which keeps
//! repeated fits on the same input bit-for-bit identical.
use crate::optimization::loglik_optimizer::types::Theta;
use ndarray::array;

/// Total-fault multiples of `n` paired with detection rates for the GO grid.
const GO_STARTS: [(f64, f64); 5] =
    [(1.2, 0.05), (1.5, 0.03), (2.0, 0.08), (1.1, 0.2), (3.0, 0.1)];

/// Multiples of the empirical rate `n/T` tried for the MO initial intensity.
const MO_LAMBDA0_RATE_FACTORS: [f64; 4] = [0.5, 1.0, 2.0, 3.0];

/// Absolute initial-intensity fallbacks when the horizon is zero.
const MO_LAMBDA0_FALLBACKS: [f64; 3] = [10.0, 50.0, 100.0];

/// Decay-parameter candidates for the MO grid.
const MO_THETA_STARTS: [f64; 5] = [0.005, 0.01, 0.05, 0.1, 0.2];

/// Initial `(a, b)` guesses for the Goel-Okumoto fit.
///
/// Total-fault guesses span plausible multiples of the observed count `n`;
/// each is paired with a matched detection rate.
pub fn go_initial_guesses(n: usize, _horizon: f64) -> Vec<Theta> {
    let n = n as f64;
    GO_STARTS.iter().map(|&(factor, rate)| array![n * factor, rate]).collect()
}

/// Initial `(λ0, θ)` guesses for the Musa-Okumoto fit.
///
/// Initial intensities derive from the empirical rate `n/T` when the horizon
/// is positive; a zero horizon falls back to fixed absolute scales. Each
/// intensity is crossed with every decay candidate, intensity-major.
pub fn mo_initial_guesses(n: usize, horizon: f64) -> Vec<Theta> {
    let lambda0_candidates: Vec<f64> = if horizon > 0.0 {
        let rate = n as f64 / horizon;
        MO_LAMBDA0_RATE_FACTORS.iter().map(|&f| rate * f).collect()
    } else {
        MO_LAMBDA0_FALLBACKS.to_vec()
    };
    let mut guesses = Vec::with_capacity(lambda0_candidates.len() * MO_THETA_STARTS.len());
    for &lambda0 in &lambda0_candidates {
        for &theta in &MO_THETA_STARTS {
            guesses.push(array![lambda0, theta]);
        }
    }
    guesses
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Grid sizes, ordering, and the (n, T) scaling rules.
    // - The zero-horizon fallback for the MO intensity candidates.
    // - Determinism across repeated generation.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The GO grid has five starts scaled by n, in the documented order.
    //
    // Given
    // -----
    // - n = 10, any horizon.
    //
    // Expect
    // ------
    // - First start (12, 0.05), last start (30, 0.1), five in total.
    fn go_grid_scales_with_sample_size() {
        let guesses = go_initial_guesses(10, 5.0);
        assert_eq!(guesses.len(), 5);
        assert_eq!(guesses[0], ndarray::array![12.0, 0.05]);
        assert_eq!(guesses[4], ndarray::array![30.0, 0.1]);
    }

    #[test]
    // Purpose
    // -------
    // The MO grid crosses rate-derived intensities with decay candidates,
    // intensity-major, yielding 4 × 5 starts for a positive horizon.
    //
    // Given
    // -----
    // - n = 10, T = 5, so the empirical rate is 2.
    //
    // Expect
    // ------
    // - 20 starts; the first is (1.0, 0.005) (half the rate, smallest θ) and
    //   the last is (6.0, 0.2).
    fn mo_grid_derives_from_empirical_rate() {
        let guesses = mo_initial_guesses(10, 5.0);
        assert_eq!(guesses.len(), 20);
        assert_eq!(guesses[0], ndarray::array![1.0, 0.005]);
        assert_eq!(guesses[19], ndarray::array![6.0, 0.2]);
    }

    #[test]
    // Purpose
    // -------
    // A zero horizon switches the MO intensities to the fixed fallbacks.
    //
    // Given
    // -----
    // - n = 3, T = 0.
    //
    // Expect
    // ------
    // - 15 starts (3 fallbacks × 5 decays); the first intensity is 10.
    fn mo_grid_falls_back_on_zero_horizon() {
        let guesses = mo_initial_guesses(3, 0.0);
        assert_eq!(guesses.len(), 15);
        assert_eq!(guesses[0][0], 10.0);
    }

    #[test]
    // Purpose
    // -------
    // Both grids are deterministic: repeated generation yields identical
    // starting points in identical order.
    //
    // Given
    // -----
    // - The same (n, T) twice for each family.
    //
    // Expect
    // ------
    // - Element-wise equality.
    fn grids_are_deterministic() {
        assert_eq!(go_initial_guesses(7, 3.0), go_initial_guesses(7, 3.0));
        assert_eq!(mo_initial_guesses(7, 3.0), mo_initial_guesses(7, 3.0));
    }
}
