pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::assessment::handlers as assessments;
use crate::matching::handlers as matches;
use crate::state::AppState;
use crate::users::handlers as users;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts and waitlist
        .route("/api/v1/users", post(users::handle_create_user))
        .route("/api/v1/users/:user_id", get(users::handle_get_user))
        .route("/api/v1/waitlist", post(users::handle_join_waitlist))
        // Assessment results
        .route("/api/v1/assessments/:user_id", get(assessments::handle_get_results))
        .route(
            "/api/v1/assessments/:user_id/:kind",
            get(assessments::handle_get_assessment).put(assessments::handle_put_assessment),
        )
        // Career matching
        .route("/api/v1/matches/:user_id", get(matches::handle_career_matches))
        .route("/api/v1/careers", get(matches::handle_list_careers))
        .with_state(state)
}
