use serde_json::json;

use crate::helpers::{TestApp, json_body};

fn cleared_cookies(response: &reqwest::Response) -> Vec<String> {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .filter(|cookie| cookie.starts_with("accessToken=;") || cookie.starts_with("refreshToken=;"))
        .collect()
}

#[tokio::test]
async fn current_user_requires_an_access_token() {
    let app = TestApp::new().await;

    let response = app.get("/current-user", None).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(json_body(response).await["message"], "Unauthorized request");

    let response = app.get("/current-user", Some("not-a-jwt")).await;
    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(json_body(response).await["message"], "Invalid access token");
}

#[tokio::test]
async fn current_user_accepts_bearer_token_on_get_and_post() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app.get("/current-user", Some(&access)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Current user found");
    assert_eq!(body["data"]["username"], "janed");

    let response = app.post_empty("/current-user", Some(&access)).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn current_user_prefers_cookie_over_header() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .http_client
        .get(format!("{}/api/v1/users/current-user", app.address))
        .header(reqwest::header::COOKIE, "accessToken=garbage")
        .bearer_auth(&access)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn refresh_rotates_tokens_and_old_token_is_single_use() {
    let app = TestApp::new().await;
    let (_, refresh) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .post_json("/refresh-token", &json!({ "refreshToken": refresh }), None)
        .await;
    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["message"], "Access token renewed");
    let rotated = body["data"]["refreshToken"].as_str().unwrap().to_string();
    assert_ne!(rotated, refresh);

    let new_access = body["data"]["accessToken"].as_str().unwrap();
    let response = app.get("/current-user", Some(new_access)).await;
    assert_eq!(response.status().as_u16(), 200);

    let replay = app
        .post_json("/refresh-token", &json!({ "refreshToken": refresh }), None)
        .await;
    assert_eq!(replay.status().as_u16(), 401);
    assert_eq!(cleared_cookies(&replay).len(), 2);
    assert_eq!(json_body(replay).await["message"], "Expired refresh token");
}

#[tokio::test]
async fn refresh_reads_the_refresh_cookie() {
    let app = TestApp::new().await;
    let (_, refresh) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .http_client
        .post(format!("{}/api/v1/users/refresh-token", app.address))
        .header(reqwest::header::COOKIE, format!("refreshToken={refresh}"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn refresh_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app.post_empty("/refresh-token", None).await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(cleared_cookies(&response).len(), 2);
    assert_eq!(json_body(response).await["message"], "Unauthorized request");
}

#[tokio::test]
async fn refresh_rejects_access_token() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .post_json("/refresh-token", &json!({ "refreshToken": access }), None)
        .await;

    assert_eq!(response.status().as_u16(), 401);
    assert_eq!(json_body(response).await["message"], "Invalid refresh token");
}

#[tokio::test]
async fn logout_clears_cookies_and_revokes_refresh_token() {
    let app = TestApp::new().await;
    let (access, refresh) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app.post_empty("/logout", Some(&access)).await;
    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(cleared_cookies(&response).len(), 2);
    assert_eq!(json_body(response).await["message"], "Logout successfully!");

    let response = app
        .post_json("/refresh-token", &json!({ "refreshToken": refresh }), None)
        .await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn logout_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.post_empty("/logout", None).await;

    assert_eq!(response.status().as_u16(), 401);
}
