use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    character::{create_character, delete_character, get_character, list_characters},
    favorite::{create_favorite_character, create_favorite_planet, delete_favorite},
    meta::{healthz, readyz, sitemap},
    planet::{create_planet, delete_planet, get_planet, list_planets},
    user::{create_user, delete_user, get_user, list_users},
};
use crate::middleware::request_id_layer;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Meta
        .route("/", get(sitemap))
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/user", get(list_users))
        .route("/user", post(create_user))
        .route("/user/{id}", get(get_user))
        .route("/user/{id}", delete(delete_user))
        // Planets
        .route("/planet", get(list_planets))
        .route("/planet", post(create_planet))
        .route("/planet/{id}", get(get_planet))
        .route("/planet/{id}", delete(delete_planet))
        // Characters
        .route("/character", get(list_characters))
        .route("/character", post(create_character))
        .route("/character/{id}", get(get_character))
        .route("/character/{id}", delete(delete_character))
        // Favorites
        .route("/favorite/planet/{planet_id}", post(create_favorite_planet))
        .route(
            "/favorite/character/{character_id}",
            post(create_favorite_character),
        )
        .route("/favorite/{id}", delete(delete_favorite))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
