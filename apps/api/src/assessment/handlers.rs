use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::assessment::dimensions::AssessmentKind;
use crate::assessment::scores::AssessmentScore;
use crate::errors::{AppError, MatchError};
use crate::matching::assembler::MatchResult;
use crate::models::assessment::AssessmentRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AssessmentResultsResponse {
    pub riasec: Option<AssessmentRecord>,
    pub aptitude: Option<AssessmentRecord>,
    pub ocean: Option<AssessmentRecord>,
    pub career_matches: Vec<MatchResult>,
}

fn parse_kind(raw: &str) -> Result<AssessmentKind, AppError> {
    raw.parse().map_err(AppError::Validation)
}

/// GET /api/v1/assessments/:user_id
pub async fn handle_get_results(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<AssessmentResultsResponse>, AppError> {
    if state.store.get_user(user_id).await?.is_none() {
        return Err(MatchError::UserNotFound(user_id).into());
    }

    let (riasec, aptitude, ocean) = tokio::try_join!(
        state.store.get_assessment_record(user_id, AssessmentKind::Riasec),
        state.store.get_assessment_record(user_id, AssessmentKind::Aptitude),
        state.store.get_assessment_record(user_id, AssessmentKind::Ocean),
    )?;
    let career_matches = state.matcher.compute_career_matches(user_id).await?;

    Ok(Json(AssessmentResultsResponse {
        riasec,
        aptitude,
        ocean,
        career_matches,
    }))
}

/// GET /api/v1/assessments/:user_id/:kind
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(Uuid, String)>,
) -> Result<Json<AssessmentRecord>, AppError> {
    let kind = parse_kind(&kind)?;
    let record = state
        .store
        .get_assessment_record(user_id, kind)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{kind} results not found for user {user_id}")))?;
    Ok(Json(record))
}

/// PUT /api/v1/assessments/:user_id/:kind
///
/// Body is the flat score object for that assessment. Replaces any earlier
/// result for the same assessment.
pub async fn handle_put_assessment(
    State(state): State<AppState>,
    Path((user_id, kind)): Path<(Uuid, String)>,
    Json(body): Json<Value>,
) -> Result<Json<AssessmentRecord>, AppError> {
    let kind = parse_kind(&kind)?;
    let score = AssessmentScore::from_json(kind, body)?;
    let record = state.matcher.save_assessment(user_id, score).await?;
    Ok(Json(record))
}
