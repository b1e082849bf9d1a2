use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};

use crate::modules::activities::use_cases::errors::{ApplicationError, ErrorKind};
use crate::modules::activities::use_cases::list_activities::inbound::http as list_http;
use crate::modules::activities::use_cases::sign_up_for_activity::inbound::http as sign_up_http;
use crate::modules::activities::use_cases::unregister_from_activity::inbound::http as unregister_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(list_http::handle))
        .route(
            "/activities/{activity_name}/signup",
            post(sign_up_http::handle),
        )
        .route(
            "/activities/{activity_name}/participants",
            delete(unregister_http::handle),
        )
        .with_state(state)
}

/// Query string shared by the participant routes.
#[derive(Deserialize)]
pub struct EmailParams {
    pub email: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

pub fn detail(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(DetailResponse {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn error_response(error: &ApplicationError) -> Response {
    match error.kind() {
        ErrorKind::NotFound => detail(StatusCode::NOT_FOUND, error.to_string()),
        ErrorKind::Conflict => detail(StatusCode::BAD_REQUEST, error.to_string()),
        // Backend details stay in the logs.
        ErrorKind::Unexpected => detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
    }
}
