//! analysis — the whole-pipeline entry point and its report type.
//!
//! Purpose
//! -------
//! Run the complete estimation pipeline on one failure sample: fit every
//! selected family independently, select the best model by AIC, build the
//! prediction table and ensemble, and package everything into an immutable
//! [`AnalysisReport`].
//!
//! Key behaviors
//! -------------
//! - An empty sample is rejected at this boundary
//!   ([`AnalysisError::EmptySample`]); everything else about the sample was
//!   already validated at construction.
//! - Per-family fit failures are recorded inside the report, never
//!   escalated: a run where one family fails and the other succeeds is a
//!   successful analysis. Even zero successful fits still yield a report
//!   (with an empty prediction table and no ensemble).
//! - Point-forecast helpers prefer the ensemble when it exists and fall
//!   back to the best (lowest-AIC) model otherwise, mirroring the
//!   "best guess" arithmetic of the human-readable summary.
use crate::reliability::{
    core::{data::FailureSample, options::AnalysisOptions},
    errors::{AnalysisError, AnalysisResult, FitError},
    models::{
        family::ModelFamily,
        fit::{FitResult, fit_model},
    },
    prediction::{PredictionTable, sample_predictions},
    selection::best_fit,
};

/// One family's fitting outcome within a run: either a full [`FitResult`]
/// or the structured reason the family was skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFitOutcome {
    pub family: ModelFamily,
    pub outcome: Result<FitResult, FitError>,
}

/// Immutable result of one analysis run.
///
/// Fields:
/// - `observed`: the input sample (frozen copy for downstream reporting).
/// - `observed_horizon`: the sample's `T`, in hours.
/// - `fits`: one outcome per attempted family, in fitting order.
/// - `prediction`: sampled curves for the successful fits, with the
///   ensemble when exactly two succeeded.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub observed: FailureSample,
    pub observed_horizon: f64,
    pub fits: Vec<ModelFitOutcome>,
    pub prediction: PredictionTable,
}

impl AnalysisReport {
    /// The successful fits, in fitting order.
    pub fn successful_fits(&self) -> Vec<&FitResult> {
        self.fits.iter().filter_map(|f| f.outcome.as_ref().ok()).collect()
    }

    /// The lowest-AIC successful fit, if any family succeeded.
    pub fn best_fit(&self) -> Option<&FitResult> {
        best_fit(self.fits.iter().filter_map(|f| f.outcome.as_ref().ok()))
    }

    /// Expected cumulative failures by hour `t`.
    ///
    /// Prefers the ensemble curve; falls back to the best model's curve.
    /// `None` when no family fit successfully.
    pub fn expected_failures_by(&self, t: f64) -> Option<f64> {
        if let Some(mu) = self.prediction.ensemble_mean_at(t) {
            return Some(mu);
        }
        let best = self.best_fit()?;
        self.prediction.mean_at(best.family, t)
    }

    /// Expected *additional* failures between now and hour `t`, rounded and
    /// floored at zero (a forecast below the observed count reads as "no
    /// more expected", not a negative count).
    pub fn additional_failures_by(&self, t: f64) -> Option<u64> {
        let mu = self.expected_failures_by(t)?;
        let extra = (mu - self.observed.len() as f64).round();
        Some(extra.max(0.0) as u64)
    }
}

/// analyze — fit, select, and sample in one call.
///
/// Purpose
/// -------
/// Run every selected family on `sample`, build predictions from the
/// successes, and return the assembled [`AnalysisReport`].
///
/// Parameters
/// ----------
/// - `sample`: `&FailureSample`
///   Validated failure times; must be non-empty.
/// - `opts`: `&AnalysisOptions`
///   Families to attempt, forecast horizon, grid density, and optimizer
///   configuration.
///
/// Returns
/// -------
/// `AnalysisResult<AnalysisReport>`
///   - `Ok(report)` whenever the input is non-empty, regardless of how many
///     families fit.
///   - `Err(AnalysisError::EmptySample)` for a zero-length sample.
///
/// Errors
/// ------
/// - [`AnalysisError::EmptySample`] only; per-family failures live inside
///   the report.
pub fn analyze(
    sample: &FailureSample, opts: &AnalysisOptions,
) -> AnalysisResult<AnalysisReport> {
    if sample.is_empty() {
        return Err(AnalysisError::EmptySample);
    }

    let fits: Vec<ModelFitOutcome> = opts
        .families
        .iter()
        .map(|&family| ModelFitOutcome {
            family,
            outcome: fit_model(family, sample, &opts.fit),
        })
        .collect();

    let successes: Vec<FitResult> =
        fits.iter().filter_map(|f| f.outcome.as_ref().ok().cloned()).collect();
    let forecast_horizon = opts.horizon.resolve(sample.horizon());
    let prediction = sample_predictions(&successes, forecast_horizon, opts.grid_points);

    Ok(AnalysisReport {
        observed: sample.clone(),
        observed_horizon: sample.horizon(),
        fits,
        prediction,
    })
}
