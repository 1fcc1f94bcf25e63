use axum::extract::rejection::JsonRejection;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Character;
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::character::{
    CreateCharacterInput, CreateCharacterUseCase, DeleteCharacterUseCase, GetCharacterUseCase,
    ListCharactersUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CharacterResponse {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        CharacterResponse {
            id: character.id,
            name: character.name,
            birth_year: character.birth_year,
            gender: character.gender,
        }
    }
}

// ── GET /character ───────────────────────────────────────────────────────────

pub async fn list_characters(
    State(state): State<AppState>,
) -> Result<Json<Vec<CharacterResponse>>, ApiError> {
    let usecase = ListCharactersUseCase {
        characters: state.character_repo(),
    };
    let characters = usecase.execute().await?;
    Ok(Json(
        characters.into_iter().map(CharacterResponse::from).collect(),
    ))
}

// ── GET /character/{id} ──────────────────────────────────────────────────────

pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let usecase = GetCharacterUseCase {
        characters: state.character_repo(),
    };
    let character = usecase.execute(character_id).await?;
    Ok(Json(character.into()))
}

// ── POST /character ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
}

pub async fn create_character(
    State(state): State<AppState>,
    body: Result<Json<CreateCharacterRequest>, JsonRejection>,
) -> Result<Json<CharacterResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = CreateCharacterUseCase {
        characters: state.character_repo(),
    };
    let character = usecase
        .execute(CreateCharacterInput {
            name: body.name,
            birth_year: body.birth_year,
            gender: body.gender,
        })
        .await?;
    Ok(Json(character.into()))
}

// ── DELETE /character/{id} ───────────────────────────────────────────────────

pub async fn delete_character(
    State(state): State<AppState>,
    Path(character_id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeleteCharacterUseCase {
        characters: state.character_repo(),
    };
    usecase.execute(character_id).await?;
    Ok(Json(MessageResponse::new("character deleted")))
}
