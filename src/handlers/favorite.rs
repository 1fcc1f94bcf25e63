use axum::extract::rejection::JsonRejection;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Favorite;
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::favorite::{
    CreateFavoriteCharacterUseCase, CreateFavoritePlanetUseCase, DeleteFavoriteUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Serialized favorite. Exactly one of planet_id / character_id is non-null.
#[derive(Serialize)]
pub struct FavoriteResponse {
    pub id: i32,
    pub user_id: i32,
    pub planet_id: Option<i32>,
    pub character_id: Option<i32>,
}

impl From<Favorite> for FavoriteResponse {
    fn from(favorite: Favorite) -> Self {
        FavoriteResponse {
            id: favorite.id,
            user_id: favorite.user_id,
            planet_id: favorite.planet_id,
            character_id: favorite.character_id,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateFavoriteRequest {
    pub user_id: i32,
}

// ── POST /favorite/planet/{planet_id} ────────────────────────────────────────

pub async fn create_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
    body: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = CreateFavoritePlanetUseCase {
        favorites: state.favorite_repo(),
        users: state.user_repo(),
        planets: state.planet_repo(),
    };
    let favorite = usecase.execute(body.user_id, planet_id).await?;
    Ok(Json(favorite.into()))
}

// ── POST /favorite/character/{character_id} ──────────────────────────────────

pub async fn create_favorite_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
    body: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Result<Json<FavoriteResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = CreateFavoriteCharacterUseCase {
        favorites: state.favorite_repo(),
        users: state.user_repo(),
        characters: state.character_repo(),
    };
    let favorite = usecase.execute(body.user_id, character_id).await?;
    Ok(Json(favorite.into()))
}

// ── DELETE /favorite/{id} ────────────────────────────────────────────────────

pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(favorite_id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeleteFavoriteUseCase {
        favorites: state.favorite_repo(),
    };
    usecase.execute(favorite_id).await?;
    Ok(Json(MessageResponse::new("favorite deleted")))
}
