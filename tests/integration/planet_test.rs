use axum::http::StatusCode;
use serde_json::Value;

use crate::helpers::{create_planet, planet_body, spawn_app};

#[tokio::test]
async fn should_create_planet_with_enumerated_climate() {
    let server = spawn_app().await;

    let response = server.post("/planet").json(&planet_body("Hoth", "frozen")).await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["name"], "Hoth");
    assert_eq!(body["climate"], "frozen");
}

#[tokio::test]
async fn should_reject_unknown_climate_without_persisting() {
    let server = spawn_app().await;

    let response = server.post("/planet").json(&planet_body("Bespin", "gas")).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body = response.json::<Value>();
    assert_eq!(body["kind"], "VALIDATION");
    assert_eq!(
        body["message"],
        "climate must be one of arid, temperate, tropical, frozen, murky"
    );

    let list = server.get("/planet").await.json::<Vec<Value>>();
    assert!(list.is_empty(), "rejected planet must not be persisted");
}

#[tokio::test]
async fn should_list_planets() {
    let server = spawn_app().await;
    create_planet(&server, "Tatooine", "arid").await;
    create_planet(&server, "Dagobah", "murky").await;

    let list = server.get("/planet").await.json::<Vec<Value>>();
    assert_eq!(list.len(), 2);
}

#[tokio::test]
async fn should_return_404_for_missing_planet() {
    let server = spawn_app().await;

    let response = server.get("/planet/42").await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["kind"], "PLANET_NOT_FOUND");
}

#[tokio::test]
async fn should_delete_planet_and_confirm() {
    let server = spawn_app().await;
    let id = create_planet(&server, "Alderaan", "temperate").await;

    let response = server.delete(&format!("/planet/{id}")).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "planet deleted");
}

#[tokio::test]
async fn should_return_404_when_deleting_missing_planet() {
    let server = spawn_app().await;

    server
        .delete("/planet/42")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
