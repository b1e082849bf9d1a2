use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::activities::use_cases::unregister_from_activity::command::UnregisterFromActivity;
use crate::shared::core::primitives::Email;
use crate::shell::http::{EmailParams, MessageResponse, detail, error_response};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    params: Result<Query<EmailParams>, QueryRejection>,
) -> impl IntoResponse {
    let Query(params) = match params {
        Ok(p) => p,
        Err(_) => return detail(StatusCode::BAD_REQUEST, "email query parameter is required"),
    };
    let email = match Email::parse(params.email) {
        Ok(email) => email,
        Err(e) => return detail(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let command = UnregisterFromActivity {
        activity_name,
        email,
    };

    match state.unregister_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => error_response(&e),
    }
}
