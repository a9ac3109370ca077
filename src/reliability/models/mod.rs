//! models — NHPP model families and their fitting machinery.
//!
//! Three layers, leaves first:
//! - [`likelihood`]: pure closed-form log-likelihood, mean-value, and
//!   intensity functions per family.
//! - [`family`]: the closed [`family::ModelFamily`] enum binding each family
//!   to its functions, bounds, start grid, and totals convention.
//! - [`fit`]: multi-start bounded MLE producing a [`fit::FitResult`].

pub mod family;
pub mod fit;
pub mod likelihood;

pub use self::family::ModelFamily;
pub use self::fit::{FitResult, fit_model};
