//! Integration tests for the NHPP reliability-growth pipeline.
//!
//! Purpose
//! -------
//! - Validate the end-to-end analysis: from a validated failure sample,
//!   through multi-start MLE fitting of both model families, to AIC
//!   selection, ensemble synthesis, and point forecasts.
//! - Exercise a realistic decaying-rate failure log rather than toy edge
//!   cases only, alongside the degenerate inputs the pipeline must
//!   contain.
//!
//! Coverage
//! --------
//! - `reliability::core`:
//!   - `FailureSample` construction and horizon derivation.
//!   - `AnalysisOptions` / `ForecastHorizon` configuration.
//! - `reliability::models::fit`:
//!   - Convergence of both families on realistic and minimal samples.
//!   - Determinism of repeated fits.
//! - `reliability::selection` and `reliability::prediction`:
//!   - Best-model choice by AIC, ensemble exactness, interpolated point
//!     forecasts.
//! - `reliability::analysis`:
//!   - Per-family failure containment and report assembly.
//!
//! Exclusions
//! ----------
//! - Fine-grained validation of low-level building blocks (likelihood
//!   formulas, simplex construction, Hessian stencils) — these are covered
//!   by unit tests.
//! - CSV ingestion, categorization, and export rendering — external
//!   collaborators outside the engine.
use ndarray::Array1;
use srgm::reliability::{
    analysis::analyze,
    core::{
        data::FailureSample,
        options::{AnalysisOptions, FitOptions, ForecastHorizon},
    },
    errors::FitError,
    models::family::ModelFamily,
};

/// Purpose
/// -------
/// Build a failure log with linearly growing inter-failure gaps, the
/// signature of reliability growth: failures arrive quickly at first and
/// increasingly rarely as faults are removed.
///
/// Returns
/// -------
/// - A sample of `n` failures at `t_i = Σ_{k=1..i} gap·k = gap·i(i+1)/2`
///   hours, strictly increasing with a decaying empirical intensity.
fn decaying_rate_sample(n: usize, gap: f64) -> FailureSample {
    let times: Vec<f64> = (1..=n).map(|i| gap * (i * (i + 1)) as f64 / 2.0).collect();
    FailureSample::new(Array1::from_vec(times)).expect("sample is sorted and non-negative")
}

#[test]
// Purpose
// -------
// A realistic decaying-rate log fits both families, yields an ensemble and
// a best model, and produces usable point forecasts.
//
// Given
// -----
// - 30 failures with gaps growing by 0.5 h per failure (T ≈ 232.5 h),
//   default options (both families, 1.6×T horizon, 400-point grid).
//
// Expect
// ------
// - Two successful fits with strictly positive parameters.
// - An ensemble equal to the pointwise mean of the model curves.
// - `expected_failures_by` non-decreasing over increasing horizons and at
//   least the observed count at the forecast edge of the fitted window.
fn full_pipeline_on_decaying_rate_log() {
    // Arrange
    let sample = decaying_rate_sample(30, 0.5);
    let horizon = sample.horizon();

    // Act
    let report = analyze(&sample, &AnalysisOptions::default()).expect("analysis succeeds");

    // Assert: both families fitted with positive parameters.
    let fits = report.successful_fits();
    assert_eq!(fits.len(), 2, "expected both families to fit");
    for fit in &fits {
        assert!(fit.params[0] > 0.0);
        assert!(fit.params[1] > 0.0);
        assert!(fit.log_likelihood.is_finite());
        assert!(fit.total_expected_failures >= 0.0);
    }

    // Assert: best fit exists and carries the lowest AIC.
    let best = report.best_fit().expect("best fit exists");
    for fit in &fits {
        assert!(best.aic() <= fit.aic());
    }

    // Assert: the ensemble is the exact pointwise mean of the two curves.
    let table = &report.prediction;
    let ensemble = table.ensemble.as_ref().expect("two fits produce an ensemble");
    for i in 0..table.grid.len() {
        let mean = (table.models[0].mean[i] + table.models[1].mean[i]) / 2.0;
        assert_eq!(ensemble.mean[i], mean);
    }

    // Assert: forecasts are monotone in the horizon and dominate nothing
    // below zero.
    let mut last = 0.0;
    for factor in [0.25, 0.5, 1.0, 1.3, 1.6] {
        let mu = report
            .expected_failures_by(horizon * factor)
            .expect("forecast available with fits");
        assert!(mu >= last, "mean curve must be non-decreasing");
        last = mu;
    }
    assert!(report.additional_failures_by(horizon * 1.6).is_some());
}

#[test]
// Purpose
// -------
// The canonical 5-point scenario: GO cannot report fewer total faults than
// observed, and MO stays strictly positive.
//
// Given
// -----
// - t = [1, 2, 3, 4, 5], default options.
//
// Expect
// ------
// - GO fit with a ≥ 5 and b > 0; MO fit with λ0 > 0 and θ > 0.
fn five_point_scenario_respects_model_constraints() {
    let sample = FailureSample::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0]).expect("valid sample");
    let report = analyze(&sample, &AnalysisOptions::default()).expect("analysis succeeds");

    let go = report
        .successful_fits()
        .into_iter()
        .find(|f| f.family == ModelFamily::GoelOkumoto)
        .expect("GO fit succeeds");
    assert!(go.params[0] >= 5.0 - 1e-6, "a = {}", go.params[0]);
    assert!(go.params[1] > 0.0, "b = {}", go.params[1]);

    let mo = report
        .successful_fits()
        .into_iter()
        .find(|f| f.family == ModelFamily::MusaOkumoto)
        .expect("MO fit succeeds");
    assert!(mo.params[0] > 0.0, "lambda0 = {}", mo.params[0]);
    assert!(mo.params[1] > 0.0, "theta = {}", mo.params[1]);
}

#[test]
// Purpose
// -------
// Identical analyses on identical input are bit-for-bit identical: the
// start grid, initial simplex, and solver carry no randomness.
//
// Given
// -----
// - The decaying-rate sample analyzed twice with the same options.
//
// Expect
// ------
// - Exact equality of every fitted parameter vector and log-likelihood.
fn repeated_analyses_are_deterministic() {
    let sample = decaying_rate_sample(20, 1.0);
    let opts = AnalysisOptions::default();

    let first = analyze(&sample, &opts).expect("analysis succeeds");
    let second = analyze(&sample, &opts).expect("analysis succeeds");

    let first_fits = first.successful_fits();
    let second_fits = second.successful_fits();
    assert_eq!(first_fits.len(), second_fits.len());
    for (a, b) in first_fits.iter().zip(second_fits.iter()) {
        assert_eq!(a.family, b.family);
        assert_eq!(a.params, b.params);
        assert_eq!(a.log_likelihood, b.log_likelihood);
    }
}

#[test]
// Purpose
// -------
// A 2-point sample fails both families with `InsufficientData` yet still
// yields a structured report: zero fits, no ensemble, no forecasts, no
// crash.
//
// Given
// -----
// - t = [1, 2], default options.
//
// Expect
// ------
// - `Ok(report)` with two recorded failures and empty prediction surface.
fn two_point_sample_returns_empty_report_without_crashing() {
    let sample = FailureSample::from_vec(vec![1.0, 2.0]).expect("valid sample");
    let report = analyze(&sample, &AnalysisOptions::default()).expect("report returned");

    assert_eq!(report.fits.len(), 2);
    for fit in &report.fits {
        assert!(matches!(fit.outcome, Err(FitError::InsufficientData { n: 2, required: 3 })));
    }
    assert!(report.successful_fits().is_empty());
    assert!(report.best_fit().is_none());
    assert!(report.prediction.ensemble.is_none());
    assert!(report.prediction.models.is_empty());
    assert!(report.expected_failures_by(500.0).is_none());
}

#[test]
// Purpose
// -------
// Caller-supplied forecasting options are honored: a single-family run
// with an additional-hours horizon produces a grid reaching exactly
// `T + hours` and no ensemble.
//
// Given
// -----
// - The decaying-rate sample, GO only, horizon = T + 100 h, 50-point grid.
//
// Expect
// ------
// - One fitted model, grid end at T + 100, no ensemble, and a point
//   forecast at the grid edge at least the observed count.
fn custom_options_shape_the_prediction_surface() {
    // Arrange
    let sample = decaying_rate_sample(25, 0.8);
    let horizon = sample.horizon();
    let opts = AnalysisOptions::new(
        vec![ModelFamily::GoelOkumoto],
        ForecastHorizon::AdditionalHours(100.0),
        50,
        FitOptions::default(),
    )
    .expect("valid options");

    // Act
    let report = analyze(&sample, &opts).expect("analysis succeeds");

    // Assert
    assert_eq!(report.successful_fits().len(), 1);
    assert!(report.prediction.ensemble.is_none());
    let grid = &report.prediction.grid;
    assert_eq!(grid.len(), 50);
    assert!((grid[grid.len() - 1] - (horizon + 100.0)).abs() < 1e-9);

    let at_edge = report
        .expected_failures_by(horizon + 100.0)
        .expect("single-family forecast falls back to the best model");
    assert!(at_edge > 0.0);
}
