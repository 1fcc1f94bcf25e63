use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create_user, spawn_app, user_body};

#[tokio::test]
async fn should_create_user_without_exposing_password() {
    let server = spawn_app().await;

    let response = server
        .post("/user")
        .json(&user_body("luke", "luke@example.com"))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["name"], "luke");
    assert_eq!(body["email"], "luke@example.com");
    assert!(
        body.get("password").is_none(),
        "password must never be serialized, got {body}"
    );
    assert_eq!(body["favorites"], json!([]));
}

#[tokio::test]
async fn should_list_all_users_without_passwords() {
    let server = spawn_app().await;
    create_user(&server, "luke", "luke@example.com").await;
    create_user(&server, "leia", "leia@example.com").await;

    let response = server.get("/user").await;
    response.assert_status_ok();

    let body = response.json::<Vec<Value>>();
    assert_eq!(body.len(), 2);
    for user in &body {
        assert!(user.get("password").is_none());
    }
}

#[tokio::test]
async fn should_get_user_by_id() {
    let server = spawn_app().await;
    let id = create_user(&server, "luke", "luke@example.com").await;

    let response = server.get(&format!("/user/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["email"], "luke@example.com");
}

#[tokio::test]
async fn should_return_404_for_missing_user() {
    let server = spawn_app().await;

    let response = server.get("/user/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_return_400_when_required_field_missing() {
    let server = spawn_app().await;

    let response = server
        .post("/user")
        .json(&json!({
            "name": "luke",
            "email": "luke@example.com",
            // password, first_name, last_name missing
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["kind"], "VALIDATION");
}

#[tokio::test]
async fn should_return_409_for_duplicate_email() {
    let server = spawn_app().await;
    create_user(&server, "luke", "luke@example.com").await;

    let response = server
        .post("/user")
        .json(&user_body("luke-two", "luke@example.com"))
        .await;
    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<Value>()["kind"], "USER_ALREADY_EXISTS");

    // The duplicate must not have produced a second row.
    let list = server.get("/user").await.json::<Vec<Value>>();
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn should_delete_user_and_confirm() {
    let server = spawn_app().await;
    let id = create_user(&server, "luke", "luke@example.com").await;

    let response = server.delete(&format!("/user/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "user deleted");

    server
        .get(&format!("/user/{id}"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_404_when_deleting_missing_user() {
    let server = spawn_app().await;

    let response = server.delete("/user/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "USER_NOT_FOUND");
}
