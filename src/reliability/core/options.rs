//! core::options — validated configuration for fitting and analysis.
//!
//! Purpose
//! -------
//! Gather every caller-tunable knob of the engine into constructor-validated
//! structs, so downstream code never re-checks configuration. Defaults
//! reproduce the canonical pipeline: fit both families, forecast to 1.6×
//! the observed horizon on a 400-point grid.
//!
//! Conventions
//! -----------
//! - Invalid configuration is rejected at construction with an
//!   [`AnalysisError`]; there are no setters after that.
//! - Optimizer stopping rules live in [`MLEOptions`] and are validated by
//!   the optimization layer's own constructors.
use crate::optimization::loglik_optimizer::traits::MLEOptions;
use crate::reliability::{
    errors::{AnalysisError, AnalysisResult},
    models::family::ModelFamily,
};

/// Default forecast horizon as a multiple of the observed horizon `T`.
pub const DEFAULT_HORIZON_FACTOR: f64 = 1.6;

/// Default number of points on the shared prediction grid.
pub const DEFAULT_GRID_POINTS: usize = 400;

/// Per-fit configuration: the optimizer options used by every start.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FitOptions {
    pub mle_opts: MLEOptions,
}

impl FitOptions {
    pub fn new(mle_opts: MLEOptions) -> Self {
        Self { mle_opts }
    }
}

/// How far past the observed horizon the prediction grid extends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForecastHorizon {
    /// Forecast to `factor × T` (the default uses
    /// [`DEFAULT_HORIZON_FACTOR`]).
    FactorOfObserved(f64),
    /// Forecast to `T + hours`.
    AdditionalHours(f64),
}

impl ForecastHorizon {
    /// Resolve the forecast end time against an observed horizon.
    pub fn resolve(&self, observed_horizon: f64) -> f64 {
        match *self {
            ForecastHorizon::FactorOfObserved(factor) => observed_horizon * factor,
            ForecastHorizon::AdditionalHours(hours) => observed_horizon + hours,
        }
    }
}

impl Default for ForecastHorizon {
    fn default() -> Self {
        ForecastHorizon::FactorOfObserved(DEFAULT_HORIZON_FACTOR)
    }
}

/// Whole-pipeline configuration.
///
/// Fields:
/// - `families`: the model families to attempt, in fitting order.
/// - `horizon`: forecast extent relative to the observed horizon.
/// - `grid_points`: size of the shared prediction grid.
/// - `fit`: per-fit optimizer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    pub families: Vec<ModelFamily>,
    pub horizon: ForecastHorizon,
    pub grid_points: usize,
    pub fit: FitOptions,
}

impl AnalysisOptions {
    /// Construct validated analysis options.
    ///
    /// # Rules
    /// - `families` must be non-empty.
    /// - A `FactorOfObserved` horizon must be finite and `> 0`; an
    ///   `AdditionalHours` horizon must be finite and `>= 0`.
    /// - `grid_points >= 2` (a grid needs at least both ends).
    ///
    /// # Errors
    /// - [`AnalysisError::NoFamiliesSelected`]
    /// - [`AnalysisError::InvalidHorizon`]
    /// - [`AnalysisError::InvalidGridPoints`]
    pub fn new(
        families: Vec<ModelFamily>, horizon: ForecastHorizon, grid_points: usize, fit: FitOptions,
    ) -> AnalysisResult<Self> {
        if families.is_empty() {
            return Err(AnalysisError::NoFamiliesSelected);
        }
        match horizon {
            ForecastHorizon::FactorOfObserved(factor) => {
                if !factor.is_finite() || factor <= 0.0 {
                    return Err(AnalysisError::InvalidHorizon { horizon: factor });
                }
            }
            ForecastHorizon::AdditionalHours(hours) => {
                if !hours.is_finite() || hours < 0.0 {
                    return Err(AnalysisError::InvalidHorizon { horizon: hours });
                }
            }
        }
        if grid_points < 2 {
            return Err(AnalysisError::InvalidGridPoints { grid_points });
        }
        Ok(Self { families, horizon, grid_points, fit })
    }
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            families: ModelFamily::ALL.to_vec(),
            horizon: ForecastHorizon::default(),
            grid_points: DEFAULT_GRID_POINTS,
            fit: FitOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Horizon resolution for both variants.
    // - Constructor validation of families, horizon, and grid size.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify both horizon variants resolve against an observed horizon.
    //
    // Given
    // -----
    // - T = 100, factor 1.6 and additional 250 hours.
    //
    // Expect
    // ------
    // - 160 and 350 respectively.
    fn horizon_resolution() {
        assert_eq!(ForecastHorizon::FactorOfObserved(1.6).resolve(100.0), 160.0);
        assert_eq!(ForecastHorizon::AdditionalHours(250.0).resolve(100.0), 350.0);
    }

    #[test]
    // Purpose
    // -------
    // Verify constructor-time validation of each rule.
    //
    // Given
    // -----
    // - An empty family list, a zero horizon factor, and a 1-point grid.
    //
    // Expect
    // ------
    // - The matching `AnalysisError` variants.
    fn constructor_rejects_invalid_configuration() {
        let fit = FitOptions::default();
        assert_eq!(
            AnalysisOptions::new(vec![], ForecastHorizon::default(), 400, fit.clone())
                .expect_err("empty families"),
            AnalysisError::NoFamiliesSelected
        );
        assert!(matches!(
            AnalysisOptions::new(
                ModelFamily::ALL.to_vec(),
                ForecastHorizon::FactorOfObserved(0.0),
                400,
                fit.clone()
            ),
            Err(AnalysisError::InvalidHorizon { .. })
        ));
        assert!(matches!(
            AnalysisOptions::new(
                ModelFamily::ALL.to_vec(),
                ForecastHorizon::default(),
                1,
                fit
            ),
            Err(AnalysisError::InvalidGridPoints { grid_points: 1 })
        ));
    }

    #[test]
    // Purpose
    // -------
    // The default configuration matches the canonical pipeline.
    //
    // Expect
    // ------
    // - Both families, factor-1.6 horizon, 400 grid points.
    fn defaults_match_canonical_pipeline() {
        let opts = AnalysisOptions::default();
        assert_eq!(opts.families, ModelFamily::ALL.to_vec());
        assert_eq!(opts.horizon, ForecastHorizon::FactorOfObserved(DEFAULT_HORIZON_FACTOR));
        assert_eq!(opts.grid_points, DEFAULT_GRID_POINTS);
    }
}
