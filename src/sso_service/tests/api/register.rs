use crate::helpers::{TestApp, error_message, get_random_email};

#[tokio::test]
async fn should_return_201_and_a_user_id() {
    let app = TestApp::new().await;

    let response = app
        .post_register(&serde_json::json!({
            "email": get_random_email(),
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["user_id"].as_i64().unwrap() > 0);
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn should_assign_distinct_ids() {
    let app = TestApp::new().await;

    let first = app.register(&get_random_email(), "password123").await;
    let second = app.register(&get_random_email(), "password123").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn should_return_409_if_email_already_exists() {
    let app = TestApp::new().await;
    let email = get_random_email();
    app.register(&email, "password123").await;

    let response = app
        .post_register(&serde_json::json!({
            "email": email,
            "password": "another-password",
        }))
        .await;

    assert_eq!(response.status().as_u16(), 409);
    assert_eq!(error_message(response).await, "user already exists");
    assert_eq!(app.store.user_count().await, 1);
}

#[tokio::test]
async fn should_return_400_for_invalid_input() {
    let app = TestApp::new().await;

    let test_cases = [
        (
            serde_json::json!({ "password": "password123" }),
            "email is required",
        ),
        (
            serde_json::json!({ "email": "", "password": "password123" }),
            "email is required",
        ),
        (
            serde_json::json!({ "email": "not-an-email", "password": "password123" }),
            "email is invalid",
        ),
        (
            serde_json::json!({ "email": get_random_email() }),
            "password is required",
        ),
        (
            serde_json::json!({ "email": get_random_email(), "password": "short" }),
            "password is required min 8 symbols",
        ),
    ];

    for (body, expected) in test_cases {
        let response = app.post_register(&body).await;
        assert_eq!(response.status().as_u16(), 400, "body: {body}");
        assert_eq!(error_message(response).await, expected, "body: {body}");
    }

    assert_eq!(app.store.user_count().await, 0);
}

#[tokio::test]
async fn should_return_400_for_malformed_json() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/register", &app.address))
        .header("content-type", "application/json")
        .body("{ not json")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "malformed request body");
}

#[tokio::test]
async fn should_return_400_without_json_content_type() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .post(format!("{}/register", &app.address))
        .body(r#"{"email": "a@b.com", "password": "password123"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(error_message(response).await, "malformed request body");
    assert_eq!(app.store.user_count().await, 0);
}
