use reqwest::multipart::Form;

use crate::helpers::{TestApp, image, json_body, registration_form};

#[tokio::test]
async fn register_returns_201_with_sanitized_user() {
    let app = TestApp::new().await;

    let response = app
        .register(registration_form("JaneD", "jane@x.io", "p@ss1"))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    let body = json_body(response).await;
    assert_eq!(body["statusCode"], 201);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["data"]["username"], "janed");
    assert_eq!(body["data"]["email"], "jane@x.io");
    assert_eq!(body["data"]["coverImage"], "");
    assert!(body["data"]["avatar"].as_str().unwrap().starts_with("https://"));
    assert!(body["data"].get("password").is_none());
    assert!(body["data"].get("passwordHash").is_none());
    assert!(body["data"].get("refreshToken").is_none());
}

#[tokio::test]
async fn register_with_cover_image_stores_both_urls() {
    let app = TestApp::new().await;

    let form = registration_form("JaneD", "jane@x.io", "p@ss1").part("coverImage", image());
    let response = app.register(form).await;

    assert_eq!(response.status().as_u16(), 201);
    let body = json_body(response).await;
    assert!(!body["data"]["coverImage"].as_str().unwrap().is_empty());
    assert_eq!(app.media_host.assets().await.len(), 2);
}

#[tokio::test]
async fn register_without_avatar_is_rejected() {
    let app = TestApp::new().await;

    let form = Form::new()
        .text("fullName", "Jane Doe")
        .text("username", "JaneD")
        .text("email", "jane@x.io")
        .text("password", "p@ss1");
    let response = app.register(form).await;

    assert_eq!(response.status().as_u16(), 400);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Avatar image required");
    assert_eq!(body["success"], false);
    assert!(app.media_host.assets().await.is_empty());
}

#[tokio::test]
async fn register_with_missing_fields_is_rejected_and_cleans_uploads() {
    let app = TestApp::new().await;

    let test_cases = [
        Form::new()
            .text("username", "JaneD")
            .text("email", "jane@x.io")
            .text("password", "p@ss1")
            .part("avatar", image()),
        Form::new()
            .text("fullName", "Jane Doe")
            .text("username", "JaneD")
            .text("email", "   ")
            .text("password", "p@ss1")
            .part("avatar", image()),
    ];

    for form in test_cases {
        let response = app.register(form).await;
        assert_eq!(response.status().as_u16(), 400);
        assert_eq!(json_body(response).await["message"], "All fields are required");
    }
    assert_eq!(app.leftover_uploads(), 0);
}

#[tokio::test]
async fn register_duplicate_username_in_any_case_conflicts() {
    let app = TestApp::new().await;

    let first = app
        .register(registration_form("JaneD", "jane@x.io", "p@ss1"))
        .await;
    assert_eq!(first.status().as_u16(), 201);

    let duplicate = app
        .register(registration_form("JANED", "other@x.io", "p@ss1"))
        .await;
    assert_eq!(duplicate.status().as_u16(), 409);
    assert_eq!(
        json_body(duplicate).await["message"],
        "User with email or username already exists"
    );

    let duplicate_email = app
        .register(registration_form("someoneelse", "Jane@X.io", "p@ss1"))
        .await;
    assert_eq!(duplicate_email.status().as_u16(), 409);
    assert_eq!(app.leftover_uploads(), 0);
}

#[tokio::test]
async fn register_removes_spooled_uploads_after_success() {
    let app = TestApp::new().await;

    let response = app
        .register(registration_form("JaneD", "jane@x.io", "p@ss1").part("coverImage", image()))
        .await;

    assert_eq!(response.status().as_u16(), 201);
    assert_eq!(app.leftover_uploads(), 0);
}
