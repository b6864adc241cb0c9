//! Integration tests for uploaded file serving and the health endpoint.

use http::{StatusCode, header};

use crate::helpers::{TestApp, full_card_form, list_cards};

#[tokio::test]
async fn test_avatar_served_with_image_type() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    app.multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;
    let avatar = list_cards(&app, &token).await[0]["avatar"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app.get_raw(&avatar).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(&response.body[..], b"\x89PNG fake");
}

#[tokio::test]
async fn test_vcf_served_as_attachment() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    app.multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;
    let vcf_path = list_cards(&app, &token).await[0]["vcf_path"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app.get_raw(&vcf_path).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "text/vcard");
    let disposition = response.headers[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap();
    assert!(disposition.starts_with("attachment"));
    assert!(response.body.starts_with(b"BEGIN:VCARD"));
}

#[tokio::test]
async fn test_missing_files_are_not_found() {
    let app = TestApp::new().await;

    assert_eq!(
        app.get_raw("/static/avatars/nothing.png").await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get_raw("/static/vcf/nothing.vcf").await.status,
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        app.get_raw("/static/avatars/..%2Fvcf%2Fx.vcf").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["storage"], "available");
}
