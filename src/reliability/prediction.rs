//! prediction — forward curve sampling, ensemble synthesis, and point
//! forecasts.
//!
//! Purpose
//! -------
//! Evaluate each fitted model's mean-value and intensity curves over a
//! shared forward time grid, average them into an ensemble when exactly two
//! fits are available, and answer point queries at arbitrary horizons by
//! linear interpolation against the sampled grid.
//!
//! Key behaviors
//! -------------
//! - The grid spans `[0, forecast_horizon]` with a caller-chosen density
//!   (defaults: `1.6 × T`, 400 points).
//! - Per model, a normal-approximation 95% band around the mean curve:
//!   `μ ± z₀.₉₇₅·√(max(0.1, μ))`, with the quantile taken from the standard
//!   normal distribution rather than a hard-coded 1.96. The variance floor
//!   keeps the band non-degenerate near `μ = 0`.
//! - The ensemble is the exact pointwise arithmetic mean of the two model
//!   curves (mean and intensity alike), carrying no interval of its own.
//!   Zero or one successful fit produces no ensemble; that is
//!   unavailability, not an error.
//! - Interpolation clamps to the end values outside the grid range, so a
//!   query beyond the forecast horizon returns the last sampled value.
use crate::reliability::models::{family::ModelFamily, fit::FitResult};
use ndarray::Array1;
use statrs::distribution::{ContinuousCDF, Normal};

/// Coverage probability of the per-model prediction band.
pub const CI_COVERAGE: f64 = 0.95;

/// Variance floor inside the normal-approximation band, preventing a
/// zero-width interval where the mean curve is still near zero.
pub const CI_VARIANCE_FLOOR: f64 = 0.1;

/// One fitted model's curves sampled on the shared grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelCurve {
    pub family: ModelFamily,
    pub mean: Array1<f64>,
    pub intensity: Array1<f64>,
    pub ci_lower: Array1<f64>,
    pub ci_upper: Array1<f64>,
}

/// The unweighted two-model ensemble, sampled on the same grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EnsembleCurve {
    pub mean: Array1<f64>,
    pub intensity: Array1<f64>,
}

/// Sampled prediction curves over a shared forward time grid.
///
/// `models` holds one curve per successful fit, in fitting order;
/// `ensemble` exists only when exactly two fits succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionTable {
    pub grid: Array1<f64>,
    pub models: Vec<ModelCurve>,
    pub ensemble: Option<EnsembleCurve>,
}

impl PredictionTable {
    /// Mean-value point forecast for one family at time `t`, interpolated
    /// against the sampled grid. `None` when the family was not fitted.
    pub fn mean_at(&self, family: ModelFamily, t: f64) -> Option<f64> {
        self.models
            .iter()
            .find(|curve| curve.family == family)
            .map(|curve| interpolate(&self.grid, &curve.mean, t))
    }

    /// Ensemble mean-value point forecast at time `t`, when an ensemble
    /// exists.
    pub fn ensemble_mean_at(&self, t: f64) -> Option<f64> {
        self.ensemble.as_ref().map(|ensemble| interpolate(&self.grid, &ensemble.mean, t))
    }
}

/// sample_predictions — build the prediction table for a set of fits.
///
/// Purpose
/// -------
/// Sample every fitted model's curves on `linspace(0, forecast_horizon,
/// grid_points)` and attach the two-model ensemble when available.
///
/// Parameters
/// ----------
/// - `fits`: `&[FitResult]`
///   The successful fits, in fitting order.
/// - `forecast_horizon`: `f64`
///   Grid end time, already resolved against the observed horizon.
/// - `grid_points`: `usize`
///   Number of grid samples (validated to be ≥ 2 by the options layer).
///
/// Returns
/// -------
/// `PredictionTable`
///   Grid, per-model curves with confidence bands, and the optional
///   ensemble.
pub fn sample_predictions(
    fits: &[FitResult], forecast_horizon: f64, grid_points: usize,
) -> PredictionTable {
    let grid = Array1::linspace(0.0, forecast_horizon, grid_points);
    let z = upper_tail_quantile();

    let models: Vec<ModelCurve> = fits
        .iter()
        .map(|fit| {
            let mean = grid.mapv(|t| fit.family.mean_value(t, &fit.params));
            let intensity = grid.mapv(|t| fit.family.intensity(t, &fit.params));
            let ci_lower = mean.mapv(|mu| mu - z * mu.max(CI_VARIANCE_FLOOR).sqrt());
            let ci_upper = mean.mapv(|mu| mu + z * mu.max(CI_VARIANCE_FLOOR).sqrt());
            ModelCurve { family: fit.family, mean, intensity, ci_lower, ci_upper }
        })
        .collect();

    let ensemble = match models.as_slice() {
        [first, second] => Some(EnsembleCurve {
            mean: (&first.mean + &second.mean) / 2.0,
            intensity: (&first.intensity + &second.intensity) / 2.0,
        }),
        _ => None,
    };

    PredictionTable { grid, models, ensemble }
}

/// interpolate — clamped linear interpolation against a sampled curve.
///
/// Queries below the first grid point return the first value; queries above
/// the last grid point return the last value. Interior queries interpolate
/// linearly between the bracketing samples. The grid is assumed ascending.
pub fn interpolate(grid: &Array1<f64>, values: &Array1<f64>, t: f64) -> f64 {
    let n = grid.len();
    if n == 0 {
        return f64::NAN;
    }
    if t <= grid[0] {
        return values[0];
    }
    if t >= grid[n - 1] {
        return values[n - 1];
    }
    // Find the first grid point at or above t; the grid is dense and
    // ascending, so a partition-point search suffices.
    let upper = grid.as_slice().map_or_else(
        || grid.iter().position(|&g| g >= t).unwrap_or(n - 1),
        |s| s.partition_point(|&g| g < t),
    );
    let lower = upper - 1;
    let span = grid[upper] - grid[lower];
    if span == 0.0 {
        return values[lower];
    }
    let fraction = (t - grid[lower]) / span;
    values[lower] + fraction * (values[upper] - values[lower])
}

// ---- Helper methods ----

/// The 97.5% standard-normal quantile used by the 95% band.
fn upper_tail_quantile() -> f64 {
    // Normal::new(0, 1) cannot fail; the NaN arm is unreachable.
    match Normal::new(0.0, 1.0) {
        Ok(standard) => standard.inverse_cdf(0.5 + CI_COVERAGE / 2.0),
        Err(_) => f64::NAN,
    }
}
