//! Axum route handlers for career matches and the catalog.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::assembler::MatchResult;
use crate::matching::catalog::CareerProfile;
use crate::state::AppState;

pub const MAX_TOP_N: usize = 100;

#[derive(Debug, Deserialize)]
pub struct MatchQuery {
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct CareerMatchesResponse {
    pub user_id: Uuid,
    pub matches: Vec<MatchResult>,
}

/// GET /api/v1/matches/:user_id
///
/// Ranked career matches. `?top_n=` overrides the configured count (1–100).
pub async fn handle_career_matches(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<CareerMatchesResponse>, AppError> {
    let top_n = query.top_n.unwrap_or(state.matcher.options().top_n);
    if !(1..=MAX_TOP_N).contains(&top_n) {
        return Err(AppError::Validation(format!(
            "top_n must be between 1 and {MAX_TOP_N}"
        )));
    }

    let matches = state.matcher.compute_top_matches(user_id, top_n).await?;
    Ok(Json(CareerMatchesResponse { user_id, matches }))
}

/// GET /api/v1/careers
pub async fn handle_list_careers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CareerProfile>>, AppError> {
    Ok(Json(state.store.get_career_catalog().await?))
}
