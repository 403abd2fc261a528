use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::{AppError, MatchError};
use crate::models::user::User;
use crate::models::waitlist::{NewWaitlistEntry, WaitlistEntry};
use crate::state::AppState;
use crate::users::validation::{clean_email, clean_name, clean_note};

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinWaitlistRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub occupation: Option<String>,
    pub interests: Option<String>,
    #[serde(default)]
    pub newsletter: bool,
}

/// POST /api/v1/users
///
/// 201 with the new user; 409 when the email is already registered.
pub async fn handle_create_user(
    State(state): State<AppState>,
    Json(body): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let first_name = clean_name("first_name", &body.first_name)?;
    let last_name = clean_name("last_name", &body.last_name)?;
    let email = clean_email(&body.email)?;

    let user = state
        .store
        .create_user(&first_name, &last_name, &email)
        .await?
        .ok_or_else(|| AppError::Conflict(format!("Email {email} is already registered")))?;

    info!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users/:user_id
pub async fn handle_get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<User>, AppError> {
    let user = state
        .store
        .get_user(user_id)
        .await?
        .ok_or(MatchError::UserNotFound(user_id))?;
    Ok(Json(user))
}

/// POST /api/v1/waitlist
///
/// 201 with the stored entry; 409 when the email is already on the list.
pub async fn handle_join_waitlist(
    State(state): State<AppState>,
    Json(body): Json<JoinWaitlistRequest>,
) -> Result<(StatusCode, Json<WaitlistEntry>), AppError> {
    let entry = NewWaitlistEntry {
        first_name: clean_name("first_name", &body.first_name)?,
        last_name: clean_name("last_name", &body.last_name)?,
        email: clean_email(&body.email)?,
        occupation: clean_note("occupation", body.occupation.as_deref())?,
        interests: clean_note("interests", body.interests.as_deref())?,
        newsletter: body.newsletter,
    };
    let email = entry.email.clone();

    let stored = state
        .store
        .add_to_waitlist(entry)
        .await?
        .ok_or_else(|| AppError::Conflict(format!("Email {email} is already on the waitlist")))?;

    info!("Waitlist entry {} added", stored.id);
    Ok((StatusCode::CREATED, Json(stored)))
}
