//! core — input data, initial-guess grids, and configuration.
//!
//! The pieces every fit consumes before any likelihood is evaluated:
//! [`data::FailureSample`] (validated, immutable input),
//! [`init`] (deterministic multi-start grids), and
//! [`options`] (constructor-validated fit/analysis configuration).

pub mod data;
pub mod init;
pub mod options;

pub use self::data::FailureSample;
pub use self::options::{AnalysisOptions, FitOptions, ForecastHorizon};
