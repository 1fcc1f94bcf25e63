use crate::domain::repository::CharacterRepository;
use crate::domain::types::{Character, NewCharacter};
use crate::error::ApiError;

// ── ListCharacters ───────────────────────────────────────────────────────────

pub struct ListCharactersUseCase<C: CharacterRepository> {
    pub characters: C,
}

impl<C: CharacterRepository> ListCharactersUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Character>, ApiError> {
        self.characters.list().await
    }
}

// ── GetCharacter ─────────────────────────────────────────────────────────────

pub struct GetCharacterUseCase<C: CharacterRepository> {
    pub characters: C,
}

impl<C: CharacterRepository> GetCharacterUseCase<C> {
    pub async fn execute(&self, character_id: i32) -> Result<Character, ApiError> {
        self.characters
            .find_by_id(character_id)
            .await?
            .ok_or(ApiError::CharacterNotFound)
    }
}

// ── CreateCharacter ──────────────────────────────────────────────────────────

pub struct CreateCharacterInput {
    pub name: String,
    pub birth_year: String,
    pub gender: String,
}

pub struct CreateCharacterUseCase<C: CharacterRepository> {
    pub characters: C,
}

impl<C: CharacterRepository> CreateCharacterUseCase<C> {
    pub async fn execute(&self, input: CreateCharacterInput) -> Result<Character, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("name must not be empty".to_owned()));
        }
        self.characters
            .create(&NewCharacter {
                name: input.name,
                birth_year: input.birth_year,
                gender: input.gender,
            })
            .await
    }
}

// ── DeleteCharacter ──────────────────────────────────────────────────────────

pub struct DeleteCharacterUseCase<C: CharacterRepository> {
    pub characters: C,
}

impl<C: CharacterRepository> DeleteCharacterUseCase<C> {
    pub async fn execute(&self, character_id: i32) -> Result<(), ApiError> {
        if !self.characters.delete(character_id).await? {
            return Err(ApiError::CharacterNotFound);
        }
        Ok(())
    }
}
