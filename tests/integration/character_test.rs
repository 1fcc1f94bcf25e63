use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::{character_body, create_character, spawn_app};

#[tokio::test]
async fn should_create_character() {
    let server = spawn_app().await;

    let response = server
        .post("/character")
        .json(&character_body("Luke Skywalker"))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["name"], "Luke Skywalker");
    assert_eq!(body["birth_year"], "19BBY");
    assert_eq!(body["gender"], "male");
}

#[tokio::test]
async fn should_list_characters() {
    let server = spawn_app().await;
    create_character(&server, "Luke Skywalker").await;
    create_character(&server, "Leia Organa").await;

    let list = server.get("/character").await.json::<Vec<Value>>();
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn should_return_404_for_missing_character() {
    let server = spawn_app().await;

    let response = server.get("/character/7").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "CHARACTER_NOT_FOUND");
}

#[tokio::test]
async fn should_return_404_when_deleting_missing_character_and_keep_collection() {
    let server = spawn_app().await;
    create_character(&server, "Chewbacca").await;

    let response = server.delete("/character/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "CHARACTER_NOT_FOUND");

    let list = server.get("/character").await.json::<Vec<Value>>();
    assert_eq!(list.len(), 1, "failed delete must not change the collection");
}

#[tokio::test]
async fn should_delete_character_and_confirm() {
    let server = spawn_app().await;
    let id = create_character(&server, "Chewbacca").await;

    let response = server.delete(&format!("/character/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "character deleted");
}
