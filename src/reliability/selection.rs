//! selection — AIC scoring and best-model choice.
//!
//! AIC for a fit with `k` free parameters and log-likelihood `ℓ` is
//! `2k − 2ℓ`; lower is better. The penalty always derives from the family's
//! actual parameter count, never a hard-coded constant, so a future family
//! with a different dimension cannot silently skew the comparison.
use crate::reliability::models::fit::FitResult;

/// Akaike Information Criterion: `AIC = 2k − 2ℓ`.
///
/// Strictly decreasing in `log_likelihood` for a fixed `param_count`.
pub fn aic(param_count: usize, log_likelihood: f64) -> f64 {
    2.0 * param_count as f64 - 2.0 * log_likelihood
}

/// Pick the fit with the lowest AIC.
///
/// Returns `None` for an empty input. Exact ties keep the earliest fit,
/// which makes selection deterministic given the fixed fitting order.
pub fn best_fit<'a, I>(fits: I) -> Option<&'a FitResult>
where
    I: IntoIterator<Item = &'a FitResult>,
{
    let mut best: Option<&FitResult> = None;
    for fit in fits {
        let improves = match best {
            None => true,
            // Strict comparison keeps the earliest fit on exact ties.
            Some(current) => fit.aic().total_cmp(&current.aic()).is_lt(),
        };
        if improves {
            best = Some(fit);
        }
    }
    best
}
