use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::activities::use_cases::sign_up_for_activity::command::SignUpForActivity;
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

    let command = SignUpForActivity {
        activity_name,
        email,
    };

    match state.sign_up_handler.handle(command).await {
        Ok(message) => Json(MessageResponse { message }).into_response(),
        Err(e) => error_response(&e),
    }
}

#[cfg(test)]
mod sign_up_for_activity_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::{offline_state, seeded_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/activities/{activity_name}/signup", post(handle))
            .with_state(state)
    }

    async fn post_signup(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::post(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn it_should_return_200_with_a_confirmation_message() {
        let (status, json) = post_signup(
            seeded_state(),
            "/activities/Tennis%20Club/signup?email=testuser%40example.com",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["message"],
            "Signed up testuser@example.com for Tennis Club"
        );
    }

    #[tokio::test]
    async fn it_should_return_400_when_already_signed_up() {
        let (status, json) = post_signup(
            seeded_state(),
            "/activities/Chess%20Club/signup?email=michael%40mergington.edu",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "Student is already signed up");
    }

    #[tokio::test]
    async fn it_should_return_404_for_an_unknown_activity() {
        let (status, json) = post_signup(
            seeded_state(),
            "/activities/Knitting%20Club/signup?email=testuser%40example.com",
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["detail"], "Activity not found");
    }

    #[tokio::test]
    async fn it_should_return_400_when_email_is_missing() {
        let (status, _) = post_signup(seeded_state(), "/activities/Tennis%20Club/signup").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_return_400_when_email_is_blank() {
        let (status, json) =
            post_signup(seeded_state(), "/activities/Tennis%20Club/signup?email=").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["detail"], "email must not be empty");
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_directory_is_offline() {
        let (status, _) = post_signup(
            offline_state(),
            "/activities/Tennis%20Club/signup?email=testuser%40example.com",
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
