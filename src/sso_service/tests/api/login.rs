use chrono::Utc;
use sso_adapters::auth::validate_token;

use crate::helpers::{APP_ID, APP_SECRET, TOKEN_TTL, TestApp, error_message, get_random_email};

#[tokio::test]
async fn should_return_200_and_a_signed_token() {
    let app = TestApp::new().await;
    let email = get_random_email();
    let user_id = app.register(&email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "password123",
            "app_id": APP_ID,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let token = body["token"].as_str().unwrap();

    let claims = validate_token(token, APP_SECRET.as_bytes()).unwrap();
    assert_eq!(claims.uid, user_id);
    assert_eq!(claims.email, email);
    assert_eq!(claims.app_id, APP_ID);

    let expected_exp = Utc::now().timestamp() + TOKEN_TTL.as_secs() as i64;
    assert!((claims.exp - expected_exp).abs() <= 1);
}

#[tokio::test]
async fn token_should_not_verify_with_another_secret() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.register(&email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "password123",
            "app_id": APP_ID,
        }))
        .await;
    let body: serde_json::Value = response.json().await.unwrap();
    let token = body["token"].as_str().unwrap();

    assert!(validate_token(token, b"some-other-secret").is_err());
}

#[tokio::test]
async fn should_return_400_for_wrong_password() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.register(&email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "wrong-password",
            "app_id": APP_ID,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "invalid email or password");
}

#[tokio::test]
async fn unknown_email_should_look_like_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .post_login(&serde_json::json!({
            "email": get_random_email(),
            "password": "password123",
            "app_id": APP_ID,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "invalid email or password");
}

#[tokio::test]
async fn should_return_400_for_unknown_app() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.register(&email, "password123").await;

    let response = app
        .post_login(&serde_json::json!({
            "email": email,
            "password": "password123",
            "app_id": 42,
        }))
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "invalid app_id");
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            serde_json::json!({ "password": "password123", "app_id": APP_ID }),
            "email is required",
        ),
        (
            serde_json::json!({ "email": get_random_email(), "app_id": APP_ID }),
            "password is required",
        ),
        (
            serde_json::json!({ "email": get_random_email(), "password": "password123" }),
            "app_id is required",
        ),
        (
            serde_json::json!({
                "email": get_random_email(),
                "password": "password123",
                "app_id": 0,
            }),
            "app_id is required",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 400, "body: {body}");
        assert_eq!(error_message(response).await, expected, "body: {body}");
    }
}

#[tokio::test]
async fn should_return_400_for_wrongly_typed_fields() {
    let app = TestApp::new().await;

    let test_cases = [
        serde_json::json!({
            "email": get_random_email(),
            "password": "password123",
            "app_id": "1",
        }),
        serde_json::json!({
            "email": get_random_email(),
            "password": "password123",
            "app_id": 3_000_000_000_i64,
        }),
        serde_json::json!({
            "email": 42,
            "password": "password123",
            "app_id": APP_ID,
        }),
    ];

    for body in test_cases {
        let response = app.post_login(&body).await;
        assert_eq!(response.status().as_u16(), 400, "body: {body}");
        assert_eq!(
            error_message(response).await,
            "malformed request body",
            "body: {body}"
        );
    }
}
