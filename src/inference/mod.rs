//! inference — uncertainty quantification for fitted models.
//!
//! Purpose
//! -------
//! Provide post-fit inference utilities built on the optimization layer's
//! finite-difference machinery. The current surface is classical standard
//! errors from the observed information matrix.
//!
//! Key behaviors
//! -------------
//! - [`hessian::standard_errors`] evaluates the curvature of a negative
//!   log-likelihood at `θ̂` and inverts it to obtain per-parameter SEs.
//! - Unusable curvature (boundary optima, singular information) degrades to
//!   `NaN` entries rather than failing the fit.
//!
//! Downstream usage
//! ----------------
//! - Model fitting attaches SEs to each successful fit; reporting layers
//!   render `NaN` entries as "unavailable" rather than treating them as
//!   errors.

pub mod hessian;

pub use self::hessian::standard_errors;
