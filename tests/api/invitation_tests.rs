//! Invitation API Tests

use axum::http::StatusCode;
use pool_predictions::domain::MembershipStatus;

use crate::common::{body_json, TestApp};

const POOL_ID: i64 = 7;
const USER_ID: i64 = 20;

fn uri() -> String {
    format!("/api/v1/pools/{}/invitation", POOL_ID)
}

#[tokio::test]
async fn test_accept_pending_invitation() {
    let app = TestApp::new();
    app.seed_membership(POOL_ID, USER_ID, MembershipStatus::Invited);
    let token = app.token_for(USER_ID);

    let response = app
        .json("POST", &uri(), r#"{"accept":true}"#, Some(&token))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["outcome"], "accepted");
    assert!(json["message"].as_str().unwrap().contains("Accepted invite"));

    let stored = app.memberships.get(POOL_ID, USER_ID).unwrap();
    assert_eq!(stored.status, MembershipStatus::Accepted);
    assert!(stored.responded_at.is_some());
    assert_eq!(app.memberships.update_count(), 1);
}

#[tokio::test]
async fn test_dismiss_pending_invitation() {
    let app = TestApp::new();
    app.seed_membership(POOL_ID, USER_ID, MembershipStatus::Invited);
    let token = app.token_for(USER_ID);

    let response = app
        .json("POST", &uri(), r#"{"accept":false}"#, Some(&token))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["outcome"], "dismissed");
    assert!(json["message"].as_str().unwrap().contains("Dismissed invite"));

    let stored = app.memberships.get(POOL_ID, USER_ID).unwrap();
    assert_eq!(stored.status, MembershipStatus::Dismissed);
}

#[tokio::test]
async fn test_no_membership_is_not_invited() {
    let app = TestApp::new();
    let token = app.token_for(USER_ID);

    let response = app
        .json("POST", &uri(), r#"{"accept":true}"#, Some(&token))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["outcome"], "not_invited");
    assert!(json["message"].as_str().unwrap().contains("not invited"));
    assert_eq!(app.memberships.update_count(), 0);
}

#[tokio::test]
async fn test_answered_invitation_cannot_be_changed() {
    let app = TestApp::new();
    app.seed_membership(POOL_ID, USER_ID, MembershipStatus::Accepted);
    let token = app.token_for(USER_ID);

    let response = app
        .json("POST", &uri(), r#"{"accept":false}"#, Some(&token))
        .await;

    let json = body_json(response).await;
    assert_eq!(json["outcome"], "not_invited");

    let stored = app.memberships.get(POOL_ID, USER_ID).unwrap();
    assert_eq!(stored.status, MembershipStatus::Accepted);
    assert_eq!(app.memberships.update_count(), 0);
}

#[tokio::test]
async fn test_other_users_invitation_is_not_visible() {
    let app = TestApp::new();
    app.seed_membership(POOL_ID, USER_ID, MembershipStatus::Invited);
    let token = app.token_for(USER_ID + 1);

    let response = app
        .json("POST", &uri(), r#"{"accept":true}"#, Some(&token))
        .await;

    let json = body_json(response).await;
    assert_eq!(json["outcome"], "not_invited");

    let stored = app.memberships.get(POOL_ID, USER_ID).unwrap();
    assert_eq!(stored.status, MembershipStatus::Invited);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app.json("POST", &uri(), r#"{"accept":true}"#, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = TestApp::new();

    let response = app
        .json("POST", &uri(), r#"{"accept":true}"#, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
