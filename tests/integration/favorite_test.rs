use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::{create_character, create_planet, create_user, spawn_app};

#[tokio::test]
async fn should_create_planet_favorite_with_null_character_id() {
    let server = spawn_app().await;
    let user_id = create_user(&server, "luke", "luke@example.com").await;
    let planet_id = create_planet(&server, "Tatooine", "arid").await;

    let response = server
        .post(&format!("/favorite/planet/{planet_id}"))
        .json(&json!({ "user_id": user_id }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["user_id"], user_id);
    assert_eq!(body["planet_id"], planet_id);
    assert_eq!(body["character_id"], Value::Null);
}

#[tokio::test]
async fn should_create_character_favorite_with_null_planet_id() {
    let server = spawn_app().await;
    let user_id = create_user(&server, "leia", "leia@example.com").await;
    let character_id = create_character(&server, "Han Solo").await;

    let response = server
        .post(&format!("/favorite/character/{character_id}"))
        .json(&json!({ "user_id": user_id }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["character_id"], character_id);
    assert_eq!(body["planet_id"], Value::Null);
}

#[tokio::test]
async fn should_nest_favorites_under_user() {
    let server = spawn_app().await;
    let user_id = create_user(&server, "luke", "luke@example.com").await;
    let planet_id = create_planet(&server, "Dagobah", "murky").await;

    server
        .post(&format!("/favorite/planet/{planet_id}"))
        .json(&json!({ "user_id": user_id }))
        .await
        .assert_status_ok();

    let body = server.get(&format!("/user/{user_id}")).await.json::<Value>();
    let favorites = body["favorites"].as_array().unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0]["planet_id"], planet_id);
}

#[tokio::test]
async fn should_reject_favorite_for_unknown_user() {
    let server = spawn_app().await;
    let planet_id = create_planet(&server, "Tatooine", "arid").await;

    let response = server
        .post(&format!("/favorite/planet/{planet_id}"))
        .json(&json!({ "user_id": 999 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "USER_NOT_FOUND");
}

#[tokio::test]
async fn should_reject_favorite_for_unknown_planet() {
    let server = spawn_app().await;
    let user_id = create_user(&server, "luke", "luke@example.com").await;

    let response = server
        .post("/favorite/planet/999")
        .json(&json!({ "user_id": user_id }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "PLANET_NOT_FOUND");
}

#[tokio::test]
async fn should_delete_favorite_and_confirm() {
    let server = spawn_app().await;
    let user_id = create_user(&server, "luke", "luke@example.com").await;
    let planet_id = create_planet(&server, "Tatooine", "arid").await;

    let favorite = server
        .post(&format!("/favorite/planet/{planet_id}"))
        .json(&json!({ "user_id": user_id }))
        .await
        .json::<Value>();
    let favorite_id = favorite["id"].as_i64().unwrap();

    let response = server.delete(&format!("/favorite/{favorite_id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "favorite deleted");
}

#[tokio::test]
async fn should_return_404_when_deleting_missing_favorite() {
    let server = spawn_app().await;

    let response = server.delete("/favorite/999").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "FAVORITE_NOT_FOUND");
}
