//! Similarity Scorer: pure per-group similarity between a user vector and a
//! career target vector.

use serde::Serialize;

use crate::assessment::dimensions::{AssessmentKind, Dimension};
use crate::matching::normalizer::NormalizedVector;

/// Per-dimension similarity for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSimilarity {
    pub kind: AssessmentKind,
    /// Mean of `per_dimension`, in [0, 1].
    pub score: f64,
    pub per_dimension: Vec<(Dimension, f64)>,
}

/// `1 - |user - target|`, clamped to [0, 1].
pub fn dimension_similarity(user: f64, target: f64) -> f64 {
    (1.0 - (user - target).abs()).clamp(0.0, 1.0)
}

/// Averages [`dimension_similarity`] over the dimensions both vectors carry.
///
/// Returns `None` when the vectors share no dimension; such a group is
/// excluded from aggregation rather than scored as zero.
pub fn group_similarity(
    user: &NormalizedVector,
    target: &NormalizedVector,
) -> Option<GroupSimilarity> {
    if user.kind != target.kind {
        return None;
    }

    let per_dimension: Vec<(Dimension, f64)> = user
        .values
        .iter()
        .filter_map(|(dim, user_value)| {
            target
                .get(*dim)
                .map(|target_value| (*dim, dimension_similarity(*user_value, target_value)))
        })
        .collect();

    if per_dimension.is_empty() {
        return None;
    }

    let score = per_dimension.iter().map(|(_, s)| s).sum::<f64>() / per_dimension.len() as f64;
    Some(GroupSimilarity {
        kind: user.kind,
        score,
        per_dimension,
    })
}
