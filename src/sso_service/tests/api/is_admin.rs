use sso_core::UserId;

use crate::helpers::{TestApp, error_message, get_random_email};

#[tokio::test]
async fn new_user_should_not_be_admin() {
    let app = TestApp::new().await;
    let user_id = app.register(&get_random_email(), "password123").await;

    let response = app
        .post_is_admin(&serde_json::json!({ "user_id": user_id }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["is_admin"], false);
}

#[tokio::test]
async fn promoted_user_should_be_admin() {
    let app = TestApp::new().await;
    let user_id = app.register(&get_random_email(), "password123").await;
    app.store
        .set_admin(UserId::new(user_id), true)
        .await
        .unwrap();

    let response = app
        .post_is_admin(&serde_json::json!({ "user_id": user_id }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["is_admin"], true);
}

#[tokio::test]
async fn should_return_404_for_unknown_user() {
    let app = TestApp::new().await;

    let response = app
        .post_is_admin(&serde_json::json!({ "user_id": 9999 }))
        .await;

    assert_eq!(response.status().as_u16(), 404);
    assert_eq!(error_message(response).await, "user not found");
}

#[tokio::test]
async fn should_return_400_for_missing_user_id() {
    let app = TestApp::new().await;

    for body in [serde_json::json!({}), serde_json::json!({ "user_id": 0 })] {
        let response = app.post_is_admin(&body).await;
        assert_eq!(response.status().as_u16(), 400, "body: {body}");
        assert_eq!(error_message(response).await, "user_id is required");
    }
}
