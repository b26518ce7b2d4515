//! Random selection over a small fixed list of outcomes.
//!
//! Weighted draws go through [`WeightedIndex`]; the weights are checked first
//! so that a bad configuration is reported as a [`WeightError`] instead of
//! silently skewing the game.

use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::Rng;
use thiserror::Error;

/// Allowed distance between the weight sum and 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("expected {expected} weights, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("weight #{index} is not a usable probability: {value}")]
    InvalidWeight { index: usize, value: f64 },

    #[error("weights sum to {sum}, not 1.0")]
    BadSum { sum: f64 },

    #[error("weights rejected by sampler: {0}")]
    Rejected(#[from] WeightedError),
}

/// Check that `weights` can describe a distribution over `n` outcomes:
/// exactly `n` finite, non-negative entries summing to 1.0 within [`WEIGHT_TOLERANCE`].
pub fn validate_weights(weights: &[f64], n: usize) -> Result<(), WeightError> {
    if weights.len() != n {
        return Err(WeightError::WrongLength {
            expected: n,
            found: weights.len(),
        });
    }
    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(WeightError::InvalidWeight { index, value });
    }
    let sum: f64 = weights.iter().sum();
    if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
        return Err(WeightError::BadSum { sum });
    }
    Ok(())
}

/// Pick one option uniformly.
///
/// # Panics
/// Panics if `options` is empty.
pub fn choose<'a, T, R: Rng>(rng: &mut R, options: &'a [T]) -> &'a T {
    let i = rng.gen_range(0..options.len());
    &options[i]
}

/// Pick one option with probability equal to its weight.
pub fn choose_weighted<'a, T, R: Rng>(
    rng: &mut R,
    options: &'a [T],
    weights: &[f64],
) -> Result<&'a T, WeightError> {
    validate_weights(weights, options.len())?;
    let dist = WeightedIndex::<f64>::new(weights.iter().copied())?;
    Ok(&options[dist.sample(rng)])
}
