use account_core::public_id_from_url;
use reqwest::multipart::Form;

use crate::helpers::{TestApp, image, json_body};

#[tokio::test]
async fn update_avatar_replaces_and_deletes_previous_asset() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;
    let before = app.media_host.assets().await;
    assert_eq!(before.len(), 1);

    let response = app
        .patch_multipart("/avatar", Form::new().part("avatar", image()), &access)
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert_eq!(body["message"], "File updated successfully");
    let avatar = body["data"]["avatar"].as_str().unwrap().to_string();
    let new_id = public_id_from_url(&avatar).unwrap().to_string();

    let after = app.media_host.assets().await;
    assert_eq!(after, vec![new_id]);
    assert!(!after.contains(&before[0]));
    assert_eq!(app.leftover_uploads(), 0);
}

#[tokio::test]
async fn update_cover_image_sets_first_cover() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .patch_multipart(
            "/cover-image",
            Form::new().part("coverImage", image()),
            &access,
        )
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body = json_body(response).await;
    assert!(!body["data"]["coverImage"].as_str().unwrap().is_empty());
    assert_eq!(app.media_host.assets().await.len(), 2);
}

#[tokio::test]
async fn update_avatar_without_file_is_bad_request() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .patch_multipart("/avatar", Form::new().text("note", "no file"), &access)
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(json_body(response).await["message"], "Missing avatar file");
}

#[tokio::test]
async fn update_cover_image_rejects_file_under_wrong_field() {
    let app = TestApp::new().await;
    let (access, _) = app.signed_in("JaneD", "jane@x.io", "p@ss1").await;

    let response = app
        .patch_multipart("/cover-image", Form::new().part("avatar", image()), &access)
        .await;

    assert_eq!(response.status().as_u16(), 400);
    assert_eq!(app.leftover_uploads(), 0);
}
