use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::users::core::user::User;
use crate::shell::state::AppState;

pub const COULD_NOT_CREATE_USER: &str = "Could not create user";

// Any body that does not decode into a `User` is a 400 carrying serde's
// message, regardless of content type. That includes a bare `null`, which
// is valid JSON but not a user record.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> Response {
    let user: User = match serde_json::from_slice(&body) {
        Ok(user) => user,
        Err(error) => {
            tracing::debug!(%error, "rejected malformed user body");
            return (StatusCode::BAD_REQUEST, error.to_string()).into_response();
        }
    };

    match state.create_user.handle(user).await {
        Ok(user) => Json(user).into_response(),
        Err(error) => {
            tracing::error!(%error, "could not create user");
            (StatusCode::INTERNAL_SERVER_ERROR, COULD_NOT_CREATE_USER).into_response()
        }
    }
}
