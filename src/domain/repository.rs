#![allow(async_fn_in_trait)]

use crate::domain::types::{
    Character, Favorite, NewCharacter, NewFavorite, NewPlanet, NewUser, Planet, User,
};
use crate::error::ApiError;

/// Repository for users. `create` surfaces unique-constraint violations on
/// name/email as `UserAlreadyExists`.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    async fn create(&self, user: &NewUser) -> Result<User, ApiError>;
    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for planets.
pub trait PlanetRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Planet>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError>;
    async fn create(&self, planet: &NewPlanet) -> Result<Planet, ApiError>;
    /// Delete a planet. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for characters.
pub trait CharacterRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Character>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError>;
    async fn create(&self, character: &NewCharacter) -> Result<Character, ApiError>;
    /// Delete a character. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for favorites. There is no list-all; favorites only surface
/// nested under a user.
pub trait FavoriteRepository: Send + Sync {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, ApiError>;
    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, ApiError>;
    /// Delete a favorite. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}
