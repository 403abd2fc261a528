//! Match cache: last computed ranking per user, backed by moka.
//!
//! Each entry remembers the assessment records it was computed from. A lookup
//! only hits when the caller's current records are identical, so a retake
//! can never be answered from a ranking built on the old scores, even when it
//! races with a computation that is still in flight.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use uuid::Uuid;

use crate::matching::assembler::MatchResult;
use crate::models::assessment::AssessmentRecord;

#[derive(Debug, Clone, PartialEq)]
struct CachedMatches {
    source: Vec<AssessmentRecord>,
    results: Arc<Vec<MatchResult>>,
}

#[derive(Debug, Clone)]
pub struct MatchCache {
    inner: Cache<Uuid, CachedMatches>,
}

impl MatchCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Full ranking for `user_id`, if it was computed from exactly `source`.
    pub async fn get(
        &self,
        user_id: Uuid,
        source: &[AssessmentRecord],
    ) -> Option<Arc<Vec<MatchResult>>> {
        self.inner
            .get(&user_id)
            .await
            .filter(|cached| cached.source == source)
            .map(|cached| cached.results)
    }

    pub async fn insert(
        &self,
        user_id: Uuid,
        source: Vec<AssessmentRecord>,
        results: Arc<Vec<MatchResult>>,
    ) {
        self.inner
            .insert(user_id, CachedMatches { source, results })
            .await;
    }

    /// Drops the user's entry. Called whenever one of their records changes.
    pub async fn invalidate(&self, user_id: Uuid) {
        self.inner.invalidate(&user_id).await;
    }
}
