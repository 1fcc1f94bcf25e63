use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};

use holocron::router::build_router;
use holocron::state::AppState;
use holocron_migration::{Migrator, MigratorTrait as _};

/// Spin up the full router against a fresh in-memory SQLite database with
/// all migrations applied.
pub async fn spawn_app() -> TestServer {
    // A single connection keeps every query on the same in-memory database.
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);

    let db = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite");
    Migrator::up(&db, None).await.expect("failed to migrate");

    TestServer::new(build_router(AppState { db })).expect("failed to start test server")
}

pub fn user_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "email": email,
        "password": "hunter2",
        "first_name": "Luke",
        "last_name": "Skywalker",
    })
}

pub fn planet_body(name: &str, climate: &str) -> Value {
    json!({
        "name": name,
        "population": 200_000,
        "climate": climate,
    })
}

pub fn character_body(name: &str) -> Value {
    json!({
        "name": name,
        "birth_year": "19BBY",
        "gender": "male",
    })
}

/// POST a user and return its assigned id.
pub async fn create_user(server: &TestServer, name: &str, email: &str) -> i32 {
    let response = server.post("/user").json(&user_body(name, email)).await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap() as i32
}

/// POST a planet and return its assigned id.
pub async fn create_planet(server: &TestServer, name: &str, climate: &str) -> i32 {
    let response = server.post("/planet").json(&planet_body(name, climate)).await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap() as i32
}

/// POST a character and return its assigned id.
pub async fn create_character(server: &TestServer, name: &str) -> i32 {
    let response = server.post("/character").json(&character_body(name)).await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap() as i32
}
