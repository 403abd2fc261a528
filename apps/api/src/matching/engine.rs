//! Career-matching engine: normalizer → similarity → aggregator → assembler.
//!
//! `CareerMatcher` is the only entry point the HTTP layer uses. It owns the
//! injected store, the match options and the cache, and is the one place that
//! writes assessment results, so every write also drops the cached ranking.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::assessment::scores::AssessmentScore;
use crate::errors::{AppError, MatchError};
use crate::matching::aggregator::{rank, score_catalog, MatchOptions};
use crate::matching::assembler::{assemble, MatchResult};
use crate::matching::cache::MatchCache;
use crate::matching::catalog::CareerProfile;
use crate::matching::normalizer::{load_assessment_records, normalize_profile, NormalizedProfile};
use crate::models::assessment::AssessmentRecord;
use crate::storage::AssessmentStore;

/// Pure matching step: every scorable career, fully ranked.
///
/// Deterministic for identical inputs. Absent groups are skipped, an empty
/// profile or catalog yields an empty list.
pub fn rank_matches(
    profile: &NormalizedProfile,
    catalog: &[CareerProfile],
    options: &MatchOptions,
) -> Vec<MatchResult> {
    let scored = score_catalog(profile, catalog, &options.weights);
    let ranked = rank(scored, usize::MAX);
    assemble(&ranked)
}

pub struct CareerMatcher {
    store: Arc<dyn AssessmentStore>,
    options: MatchOptions,
    cache: MatchCache,
}

impl CareerMatcher {
    pub fn new(store: Arc<dyn AssessmentStore>, options: MatchOptions, cache: MatchCache) -> Self {
        Self {
            store,
            options,
            cache,
        }
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Top matches for a user using the configured `top_n`.
    pub async fn compute_career_matches(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MatchResult>, MatchError> {
        self.compute_top_matches(user_id, self.options.top_n).await
    }

    /// Top `top_n` matches for a user.
    ///
    /// `UserNotFound` for unknown ids; an empty list when the user has taken no
    /// assessment or the catalog is empty.
    pub async fn compute_top_matches(
        &self,
        user_id: Uuid,
        top_n: usize,
    ) -> Result<Vec<MatchResult>, MatchError> {
        let records = load_assessment_records(self.store.as_ref(), user_id).await?;
        if records.is_empty() {
            debug!("User {user_id} has no completed assessments; no matches");
            return Ok(Vec::new());
        }

        if let Some(cached) = self.cache.get(user_id, &records).await {
            debug!("Match cache hit for user {user_id}");
            return Ok(cached.iter().take(top_n).cloned().collect());
        }

        let profile = normalize_profile(user_id, records.iter().map(|r| r.score))?;

        let catalog = self.store.get_career_catalog().await?;
        if catalog.is_empty() {
            warn!("Career catalog is empty; returning no matches for user {user_id}");
            return Ok(Vec::new());
        }

        let ranked = Arc::new(rank_matches(&profile, &catalog, &self.options));
        info!(
            "Computed {} career matches for user {user_id} (groups: {:?})",
            ranked.len(),
            profile.present_kinds()
        );

        let top = ranked.iter().take(top_n).cloned().collect();
        self.cache.insert(user_id, records, ranked).await;
        Ok(top)
    }

    /// Validates and upserts one assessment result, then drops the user's
    /// cached matches.
    pub async fn save_assessment(
        &self,
        user_id: Uuid,
        score: AssessmentScore,
    ) -> Result<AssessmentRecord, AppError> {
        score.validate()?;

        if self.store.get_user(user_id).await?.is_none() {
            return Err(MatchError::UserNotFound(user_id).into());
        }

        let record = self.store.save_assessment_score(user_id, score).await?;
        self.cache.invalidate(user_id).await;
        info!("Stored {} result for user {user_id}", score.kind());
        Ok(record)
    }
}
