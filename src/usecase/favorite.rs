use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{Favorite, FavoriteTarget, NewFavorite};
use crate::error::ApiError;

// ── CreateFavoritePlanet ─────────────────────────────────────────────────────

pub struct CreateFavoritePlanetUseCase<F: FavoriteRepository, U: UserRepository, P: PlanetRepository>
{
    pub favorites: F,
    pub users: U,
    pub planets: P,
}

impl<F: FavoriteRepository, U: UserRepository, P: PlanetRepository>
    CreateFavoritePlanetUseCase<F, U, P>
{
    pub async fn execute(&self, user_id: i32, planet_id: i32) -> Result<Favorite, ApiError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        self.planets
            .find_by_id(planet_id)
            .await?
            .ok_or(ApiError::PlanetNotFound)?;
        self.favorites
            .create(&NewFavorite {
                user_id,
                target: FavoriteTarget::Planet(planet_id),
            })
            .await
    }
}

// ── CreateFavoriteCharacter ──────────────────────────────────────────────────

pub struct CreateFavoriteCharacterUseCase<
    F: FavoriteRepository,
    U: UserRepository,
    C: CharacterRepository,
> {
    pub favorites: F,
    pub users: U,
    pub characters: C,
}

impl<F: FavoriteRepository, U: UserRepository, C: CharacterRepository>
    CreateFavoriteCharacterUseCase<F, U, C>
{
    pub async fn execute(&self, user_id: i32, character_id: i32) -> Result<Favorite, ApiError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        self.characters
            .find_by_id(character_id)
            .await?
            .ok_or(ApiError::CharacterNotFound)?;
        self.favorites
            .create(&NewFavorite {
                user_id,
                target: FavoriteTarget::Character(character_id),
            })
            .await
    }
}

// ── DeleteFavorite ───────────────────────────────────────────────────────────

pub struct DeleteFavoriteUseCase<F: FavoriteRepository> {
    pub favorites: F,
}

impl<F: FavoriteRepository> DeleteFavoriteUseCase<F> {
    pub async fn execute(&self, favorite_id: i32) -> Result<(), ApiError> {
        if !self.favorites.delete(favorite_id).await? {
            return Err(ApiError::FavoriteNotFound);
        }
        Ok(())
    }
}
