use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shell::state::AppState;

pub const USER_NOT_FOUND: &str = "User not found";
pub const COULD_NOT_FETCH_USER: &str = "Could not fetch user";

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.users.get(&id).await {
        Ok(Some(user)) => Json(user).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, USER_NOT_FOUND).into_response(),
        Err(error) => {
            tracing::error!(%error, user_id = %id, "could not fetch user");
            (StatusCode::INTERNAL_SERVER_ERROR, COULD_NOT_FETCH_USER).into_response()
        }
    }
}
