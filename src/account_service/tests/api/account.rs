use serde_json::json;

use crate::helpers::{TestApp, json_body};

#[tokio::test]
async fn change_password_then_login_with_new_password() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .post_json(
            "/change-password",
            &json!({ "oldPassword": "p@ss1", "newPassword": "n3w-p@ss" }),
            Some(&access),
        )
        .await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        json_body(response).await["message"],
        "Password changed successfully"
    );

    let old = app
        .post_json("/login", &json!({ "username": "janed", "password": "p@ss1" }), None)
        .await;
    assert_eq!(old.status().as_u16(), 401);

    let new = app
        .post_json("/login", &json!({ "username": "janed", "password": "n3w-p@ss" }), None)
        .await;
    assert_eq!(new.status().as_u16(), 200);
}

#[tokio::test]
async fn change_password_with_wrong_old_password_is_unauthorized() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .post_json(
            "/change-password",
            &json!({ "oldPassword": "wrong", "newPassword": "n3w-p@ss" }),
            Some(&access),
        )
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(json_body(response).await["message"], "Incorrect old password");
}

#[tokio::test]
async fn change_password_requires_a_new_password() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .post_json(
            "/change-password",
            &json!({ "oldPassword": "p@ss1" }),
            Some(&access),
        )
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(json_body(response).await["message"], "New password is required");
}

#[tokio::test]
async fn update_account_applies_normalized_fields() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .patch_json(
            "/update-account",
            &json!({ "fullName": "Jane Q. Doe", "email": "JQD@x.io" }),
            &access,
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Account details updated");
    assert_eq!(body["data"]["fullName"], "Jane Q. Doe");
    assert_eq!(body["data"]["email"], "jqd@x.io");
    assert_eq!(body["data"]["username"], "janed");
}

#[tokio::test]
async fn update_account_accepts_post() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .post_json("/update-account", &json!({ "username": "jane2" }), Some(&access))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(json_body(response).await["data"]["username"], "jane2");
}

#[tokio::test]
async fn update_account_without_fields_is_bad_request() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app.patch_json("/update-account", &json!({}), &access).await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(
        json_body(response).await["message"],
        "At least one field is required"
    );
}

#[tokio::test]
async fn update_account_to_taken_email_conflicts() {
    let app = TestApp::new().await;
    app.signed_in("Bob", "bob@x.io", "hunter2").await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .patch_json("/update-account", &json!({ "email": "BOB@x.io" }), &access)
        .await;

    assert_eq!(response.status().as_u16(), 409);
}

#[tokio::test]
async fn protected_routes_reject_anonymous_requests() {
    let app = TestApp::new().await;

    let response = app
        .post_json(
            "/change-password",
            &json!({ "oldPassword": "a", "newPassword": "b" }),
            None,
        )
        .await;
    assert_eq!(response.status().as_u16(), 401);

    let response = app
        .post_json("/update-account", &json!({ "fullName": "X" }), None)
        .await;
    assert_eq!(response.status().as_u16(), 401);
}
