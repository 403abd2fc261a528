use std::sync::Arc;

use crate::config::Config;
use crate::matching::CareerMatcher;
use crate::storage::AssessmentStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL in production, the in-memory demo store otherwise.
    pub store: Arc<dyn AssessmentStore>,
    /// Shares `store`; all assessment writes go through it.
    pub matcher: Arc<CareerMatcher>,
    pub config: Config,
}
