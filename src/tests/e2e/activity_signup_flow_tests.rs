use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::seeded_state;

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn participants(activities: &serde_json::Value, activity: &str) -> Vec<String> {
    serde_json::from_value(activities[activity]["participants"].clone()).unwrap()
}

#[tokio::test]
async fn lists_the_seeded_activities() {
    let app = router(seeded_state());

    let (status, json) = send(&app, Method::GET, "/activities").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json.is_object());
    assert!(json.get("Chess Club").is_some());
}

#[tokio::test]
async fn signs_up_and_unregisters_a_participant() {
    let app = router(seeded_state());
    let email = "testuser@example.com";

    let (_, before) = send(&app, Method::GET, "/activities").await;
    assert!(!participants(&before, "Tennis Club").contains(&email.to_string()));

    let (status, json) = send(
        &app,
        Method::POST,
        "/activities/Tennis%20Club/signup?email=testuser%40example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains(&format!("Signed up {email}"))
    );

    let (_, after_signup) = send(&app, Method::GET, "/activities").await;
    assert!(participants(&after_signup, "Tennis Club").contains(&email.to_string()));

    let (status, json) = send(
        &app,
        Method::DELETE,
        "/activities/Tennis%20Club/participants?email=testuser%40example.com",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .contains(&format!("Unregistered {email}"))
    );

    let (_, after_unregister) = send(&app, Method::GET, "/activities").await;
    assert!(!participants(&after_unregister, "Tennis Club").contains(&email.to_string()));
}

#[tokio::test]
async fn refuses_to_unregister_a_non_participant() {
    let app = router(seeded_state());

    let (status, _) = send(
        &app,
        Method::DELETE,
        "/activities/Chess%20Club/participants?email=notfound%40example.com",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn refuses_a_duplicate_signup() {
    let app = router(seeded_state());

    let (status, _) = send(
        &app,
        Method::POST,
        "/activities/Chess%20Club/signup?email=michael%40mergington.edu",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (_, json) = send(&app, Method::GET, "/activities").await;
    let chess = participants(&json, "Chess Club");
    assert_eq!(
        chess
            .iter()
            .filter(|p| *p == "michael@mergington.edu")
            .count(),
        1
    );
}

#[tokio::test]
async fn keeps_signup_order_across_requests() {
    let app = router(seeded_state());

    for email in ["first%40example.com", "second%40example.com"] {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/activities/Math%20Olympiad/signup?email={email}"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, json) = send(&app, Method::GET, "/activities").await;
    assert_eq!(
        participants(&json, "Math Olympiad"),
        vec![
            "lucas@mergington.edu",
            "first@example.com",
            "second@example.com"
        ]
    );
}
