//! Integration tests for card CRUD and upload handling.

use http::StatusCode;

use crate::helpers::{MultipartForm, TestApp, full_card_form, list_cards};

#[tokio::test]
async fn test_create_then_list_and_public_get_match() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let created = app
        .multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    assert!(created.body["msg"].is_string());

    let cards = list_cards(&app, &token).await;
    assert_eq!(cards.len(), 1);
    let listed = &cards[0];

    let id = listed["id"].as_str().unwrap();
    let public = app.request("GET", &format!("/api/cards/{id}"), None, None).await;
    assert_eq!(public.status, StatusCode::OK);
    assert_eq!(&public.body, listed);

    assert_eq!(listed["name"], "Alice");
    assert_eq!(listed["birthday"], "1990-05-17");
    assert_eq!(listed["avatar"], "/static/avatars/face.png");
    assert!(
        listed["vcf_path"]
            .as_str()
            .unwrap()
            .starts_with("/static/vcf/")
    );
    for key in [
        "id",
        "name",
        "email",
        "birthday",
        "avatar",
        "profession",
        "created_at",
        "updated_at",
        "fb_link",
        "line_link",
        "vcf_path",
    ] {
        assert!(listed.get(key).is_some(), "missing {key}");
    }
    assert!(listed.get("user_id").is_none());
}

#[tokio::test]
async fn test_create_without_files() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let form = MultipartForm::new()
        .text("name", "Plain")
        .file("avatar", "", "application/octet-stream", b"");
    let response = app.multipart("POST", "/api/cards", &form, Some(&token)).await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    let cards = list_cards(&app, &token).await;
    assert!(cards[0]["avatar"].is_null());
    assert!(cards[0]["vcf_path"].is_null());
    assert!(cards[0]["birthday"].is_null());
}

#[tokio::test]
async fn test_disallowed_extension_rejected_without_side_effects() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let form = MultipartForm::new()
        .text("name", "Alice")
        .file("avatar", "face.png", "image/png", b"png")
        .file("cardVcf", "payload.exe", "application/octet-stream", b"MZ");
    let response = app.multipart("POST", "/api/cards", &form, Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(list_cards(&app, &token).await.is_empty());
    assert_eq!(app.file_count("avatars"), 0);
    assert_eq!(app.file_count("vcf"), 0);
}

#[tokio::test]
async fn test_failed_vcf_save_leaves_no_files_or_row() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    // A regular file where the vCard directory should be.
    std::fs::remove_dir(app.storage_path("vcf")).unwrap();
    std::fs::write(app.storage_path("vcf"), b"blocker").unwrap();

    let response = app
        .multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.body["msg"].is_string());
    assert_eq!(app.file_count("avatars"), 0);
    assert!(list_cards(&app, &token).await.is_empty());
}

#[tokio::test]
async fn test_update_overwrites_fields_and_preserves_files() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    app.multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;
    let before = list_cards(&app, &token).await.remove(0);
    let id = before["id"].as_str().unwrap();

    let form = MultipartForm::new()
        .text("name", "Alice Updated")
        .text("birthday", "2000-01-02");
    let response = app
        .multipart("PUT", &format!("/api/cards/{id}"), &form, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    let after = list_cards(&app, &token).await.remove(0);
    assert_eq!(after["name"], "Alice Updated");
    assert_eq!(after["birthday"], "2000-01-02");
    assert!(after["profession"].is_null());
    assert!(after["email"].is_null());
    assert_eq!(after["avatar"], before["avatar"]);
    assert_eq!(after["vcf_path"], before["vcf_path"]);
    assert_eq!(after["created_at"], before["created_at"]);
}

#[tokio::test]
async fn test_update_ignores_disallowed_file() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    app.multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;
    let before = list_cards(&app, &token).await.remove(0);
    let id = before["id"].as_str().unwrap();

    let form = MultipartForm::new()
        .text("name", "Alice")
        .file("avatar", "notes.txt", "text/plain", b"hello");
    let response = app
        .multipart("PUT", &format!("/api/cards/{id}"), &form, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let after = list_cards(&app, &token).await.remove(0);
    assert_eq!(after["avatar"], before["avatar"]);
    assert!(!app.storage_path("avatars/notes.txt").exists());
}

#[tokio::test]
async fn test_update_replaces_avatar() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    app.multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;
    let id = list_cards(&app, &token).await[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let form = MultipartForm::new().file("avatar", "new.gif", "image/gif", b"GIF89a");
    app.multipart("PUT", &format!("/api/cards/{id}"), &form, Some(&token))
        .await;

    let after = list_cards(&app, &token).await.remove(0);
    assert_eq!(after["avatar"], "/static/avatars/new.gif");
}

#[tokio::test]
async fn test_other_user_cannot_update_or_delete() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bob").await;

    app.multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&alice))
        .await;
    let before = list_cards(&app, &alice).await.remove(0);
    let id = before["id"].as_str().unwrap();

    let update = app
        .multipart(
            "PUT",
            &format!("/api/cards/{id}"),
            &MultipartForm::new().text("name", "Bob was here"),
            Some(&bob),
        )
        .await;
    let delete = app
        .request("DELETE", &format!("/api/cards/{id}"), None, Some(&bob))
        .await;

    assert_eq!(update.status, StatusCode::NOT_FOUND);
    assert_eq!(delete.status, StatusCode::OK);
    assert!(list_cards(&app, &bob).await.is_empty());

    let after = list_cards(&app, &alice).await;
    assert_eq!(after, vec![before]);
    assert!(app.storage_path("avatars/face.png").exists());
}

#[tokio::test]
async fn test_delete_removes_card_and_avatar_but_not_vcf() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;
    app.multipart("POST", "/api/cards", &full_card_form("Alice"), Some(&token))
        .await;
    let card = list_cards(&app, &token).await.remove(0);
    let id = card["id"].as_str().unwrap();

    let response = app
        .request("DELETE", &format!("/api/cards/{id}"), None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(list_cards(&app, &token).await.is_empty());
    assert_eq!(app.file_count("avatars"), 0);
    assert_eq!(app.file_count("vcf"), 1);

    let public = app.request("GET", &format!("/api/cards/{id}"), None, None).await;
    assert_eq!(public.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_missing_card_is_ok() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let response = app
        .request(
            "DELETE",
            "/api/cards/00000000-0000-0000-0000-000000000000",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_get_unknown_and_malformed_ids() {
    let app = TestApp::new().await;

    let unknown = app
        .request(
            "GET",
            "/api/cards/00000000-0000-0000-0000-000000000000",
            None,
            None,
        )
        .await;
    let malformed = app.request("GET", "/api/cards/42", None, None).await;

    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cards_are_scoped_to_owner() {
    let app = TestApp::new().await;
    let alice = app.user_token("alice").await;
    let bob = app.user_token("bob").await;

    app.multipart("POST", "/api/cards", &full_card_form("A1"), Some(&alice))
        .await;
    app.multipart("POST", "/api/cards", &full_card_form("A2"), Some(&alice))
        .await;
    app.multipart(
        "POST",
        "/api/cards",
        &MultipartForm::new().text("name", "B1"),
        Some(&bob),
    )
    .await;

    let names: Vec<_> = list_cards(&app, &alice)
        .await
        .into_iter()
        .map(|c| c["name"].clone())
        .collect();
    assert_eq!(names, vec!["A1", "A2"]);
    assert_eq!(list_cards(&app, &bob).await.len(), 1);
}

#[tokio::test]
async fn test_upload_over_body_limit_is_rejected() {
    let app = TestApp::new().await;
    let token = app.user_token("alice").await;

    let oversized = vec![0u8; 2 * 1024 * 1024];
    let form = MultipartForm::new()
        .text("name", "Huge")
        .file("avatar", "huge.png", "image/png", &oversized);
    let response = app.multipart("POST", "/api/cards", &form, Some(&token)).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(response.body["msg"].is_string());
    assert!(list_cards(&app, &token).await.is_empty());
    assert_eq!(app.file_count("avatars"), 0);
}
