mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_success() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["access_token"].is_string());
    assert!(!body["data"]["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["user"]["id"], "1");
    assert_eq!(body["data"]["user"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["user"]["roles"], json!(["user"]));
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = TestApp::spawn().await;

    app.post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    // Same email again, different password
    let response = app
        .post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "other_password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("already exists"));
}

#[tokio::test]
async fn test_register_invalid_email() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "email": "not-an-email",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("email"));
}

#[tokio::test]
async fn test_register_short_password() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "short"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["message"]
        .as_str()
        .unwrap()
        .contains("minimum 8"));
}

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::spawn().await;

    app.post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let response = app
        .post("/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert!(body["data"]["access_token"].is_string());
    assert!(!body["data"]["access_token"].as_str().unwrap().is_empty());
    assert_eq!(body["data"]["user"]["email"], "nicola@example.com");
}

#[tokio::test]
async fn test_login_rejections_are_indistinguishable() {
    let app = TestApp::spawn().await;

    app.post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Correct_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let wrong_password = app
        .post("/auth/login")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "Wrong_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let unknown_email = app
        .post("/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "Correct_Password!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);

    // Same body either way, so responses cannot be used to enumerate accounts
    let wrong_body: serde_json::Value = wrong_password.json().await.unwrap();
    let unknown_body: serde_json::Value = unknown_email.json().await.unwrap();
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_profile_success() {
    let app = TestApp::spawn().await;

    let register_response = app
        .post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let register_body: serde_json::Value = register_response
        .json()
        .await
        .expect("Failed to parse response");
    let token = register_body["data"]["access_token"].as_str().unwrap();

    let response = app
        .get_authenticated("/auth/profile", token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["data"]["id"], "1");
    assert_eq!(body["data"]["email"], "nicola@example.com");
    assert_eq!(body["data"]["roles"], json!(["user"]));
}

#[tokio::test]
async fn test_profile_without_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get("/auth/profile")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_malformed_token() {
    let app = TestApp::spawn().await;

    let response = app
        .get_authenticated("/auth/profile", "not.a.token")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_with_expired_token() {
    let app = TestApp::spawn().await;

    app.post("/auth/register")
        .json(&json!({
            "email": "nicola@example.com",
            "password": "pass_word!"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    let token = app.expired_token("1", "nicola@example.com");

    let response = app
        .get_authenticated("/auth/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_for_deleted_subject_is_unauthorized() {
    let app = TestApp::spawn().await;

    // Valid signature, but the subject was never registered. Must be plain
    // 401, indistinguishable from any other rejected token.
    let token = auth_core::TokenIssuer::new(common::TEST_SECRET, chrono::Duration::minutes(15))
        .issue("999", "ghost@example.com", &["user".to_string()])
        .unwrap();

    let response = app
        .get_authenticated("/auth/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_full_auth_workflow() {
    let app = TestApp::spawn().await;

    // 1. Register
    let register_response = app
        .post("/auth/register")
        .json(&json!({
            "email": "a@x.com",
            "password": "pw123456"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(register_response.status(), StatusCode::CREATED);

    let register_body: serde_json::Value = register_response
        .json()
        .await
        .expect("Failed to parse response");
    let token = register_body["data"]["access_token"]
        .as_str()
        .unwrap()
        .to_string();

    // 2. Access the protected profile with the registration token
    let profile_response = app
        .get_authenticated("/auth/profile", &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(profile_response.status(), StatusCode::OK);

    let profile_body: serde_json::Value = profile_response
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(profile_body["data"]["id"], "1");
    assert_eq!(profile_body["data"]["email"], "a@x.com");
    assert_eq!(profile_body["data"]["roles"], json!(["user"]));

    // 3. Registering the same email again conflicts
    let duplicate_response = app
        .post("/auth/register")
        .json(&json!({
            "email": "a@x.com",
            "password": "pw123456"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(duplicate_response.status(), StatusCode::CONFLICT);

    // 4. Logging in with the wrong password is unauthorized
    let login_response = app
        .post("/auth/login")
        .json(&json!({
            "email": "a@x.com",
            "password": "wrong-password"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(login_response.status(), StatusCode::UNAUTHORIZED);
}
