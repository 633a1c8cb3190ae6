//! Bounded composite scoring.
//!
//! Sub-scores are named values expected (not strictly enforced) to lie in
//! [0, 100]. Aggregation folds them into a single composite that is always
//! clamped to [0, 100], and [`classify`] maps a composite onto an ordered
//! threshold scale. Both tool-specific reports (compatibility, personality)
//! are thin layers over these two functions.

mod classify;
pub mod compatibility;
pub mod personality;

pub use classify::{classify, ClassificationBand, COMPATIBILITY_BANDS, TRAIT_BANDS};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How sub-scores are combined into a composite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AggregationMode {
    /// Arithmetic mean of all provided sub-scores.
    Mean,
    /// Weighted mean. Names absent from the weight map weigh 1.0, so an
    /// empty map reproduces the equal-weight behavior of `Mean`.
    Weighted {
        #[serde(default)]
        weights: BTreeMap<String, f64>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("cannot aggregate an empty score set")]
    EmptyScoreSet,
}

/// Combine named sub-scores into one composite in [0, 100], rounded to the
/// nearest integer.
///
/// An empty score set fails with [`ScoreError::EmptyScoreSet`] rather than
/// dividing by zero, as does a weighted run whose total weight is zero.
pub fn aggregate(
    scores: &BTreeMap<String, f64>,
    mode: &AggregationMode,
) -> Result<f64, ScoreError> {
    if scores.is_empty() {
        return Err(ScoreError::EmptyScoreSet);
    }

    let composite = match mode {
        AggregationMode::Mean => scores.values().sum::<f64>() / scores.len() as f64,
        AggregationMode::Weighted { weights } => {
            let mut weighted_sum = 0.0;
            let mut total_weight = 0.0;
            for (name, score) in scores {
                let weight = weights.get(name).copied().unwrap_or(1.0);
                weighted_sum += score * weight;
                total_weight += weight;
            }
            if total_weight == 0.0 {
                return Err(ScoreError::EmptyScoreSet);
            }
            weighted_sum / total_weight
        }
    };

    Ok(composite.round().clamp(0.0, 100.0))
}
