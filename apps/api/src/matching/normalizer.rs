//! Score Normalizer: maps raw [0, 100] assessment records onto [0, 1].
//!
//! No dimension is inverted here. Neuroticism stays as measured: careers state
//! their own neuroticism target, so the similarity against that target already
//! carries the direction. The only place the direction shows is the trait tag
//! (`CareerProfile::trait_label`).

use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::assessment::dimensions::{AssessmentKind, Dimension};
use crate::assessment::scores::{AssessmentScore, MAX_SCORE};
use crate::errors::MatchError;
use crate::models::assessment::AssessmentRecord;
use crate::storage::AssessmentStore;

/// Unit-scaled vector for one dimension group, in canonical dimension order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedVector {
    pub kind: AssessmentKind,
    pub values: Vec<(Dimension, f64)>,
}

impl NormalizedVector {
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.values
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, v)| *v)
    }
}

/// A user's normalized scores. `None` means the assessment has not been taken,
/// which is a valid state and is never read as a zero vector.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedProfile {
    pub riasec: Option<NormalizedVector>,
    pub aptitude: Option<NormalizedVector>,
    pub ocean: Option<NormalizedVector>,
}

impl NormalizedProfile {
    pub fn group(&self, kind: AssessmentKind) -> Option<&NormalizedVector> {
        match kind {
            AssessmentKind::Riasec => self.riasec.as_ref(),
            AssessmentKind::Aptitude => self.aptitude.as_ref(),
            AssessmentKind::Ocean => self.ocean.as_ref(),
        }
    }

    pub fn present_kinds(&self) -> Vec<AssessmentKind> {
        AssessmentKind::ALL
            .into_iter()
            .filter(|kind| self.group(*kind).is_some())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present_kinds().is_empty()
    }

    fn set(&mut self, vector: NormalizedVector) {
        match vector.kind {
            AssessmentKind::Riasec => self.riasec = Some(vector),
            AssessmentKind::Aptitude => self.aptitude = Some(vector),
            AssessmentKind::Ocean => self.ocean = Some(vector),
        }
    }
}

/// Divides every score by 100. Callers validate range first.
pub fn normalize(score: &AssessmentScore) -> NormalizedVector {
    NormalizedVector {
        kind: score.kind(),
        values: score
            .entries()
            .into_iter()
            .map(|(dim, value)| (dim, value / MAX_SCORE))
            .collect(),
    }
}

/// Builds a profile from whichever records are present.
pub fn normalize_profile(
    user_id: Uuid,
    scores: impl IntoIterator<Item = AssessmentScore>,
) -> Result<NormalizedProfile, MatchError> {
    let mut profile = NormalizedProfile::default();
    for score in scores {
        score
            .validate()
            .map_err(|e| MatchError::InvalidStoredScore {
                user_id,
                kind: score.kind(),
                reason: e.to_string(),
            })?;
        profile.set(normalize(&score));
    }
    Ok(profile)
}

/// Loads the user's live records in group order; absent assessments are
/// simply missing from the list.
///
/// Fails with `UserNotFound` only when the user is unknown; storage errors
/// are returned as-is.
pub async fn load_assessment_records(
    store: &dyn AssessmentStore,
    user_id: Uuid,
) -> Result<Vec<AssessmentRecord>, MatchError> {
    if store.get_user(user_id).await?.is_none() {
        return Err(MatchError::UserNotFound(user_id));
    }

    let (riasec, aptitude, ocean) = tokio::try_join!(
        store.get_assessment_record(user_id, AssessmentKind::Riasec),
        store.get_assessment_record(user_id, AssessmentKind::Aptitude),
        store.get_assessment_record(user_id, AssessmentKind::Ocean),
    )?;

    let records: Vec<AssessmentRecord> = [riasec, aptitude, ocean].into_iter().flatten().collect();
    debug!(
        "Loaded {} of 3 assessments for user {user_id}",
        records.len()
    );
    Ok(records)
}
