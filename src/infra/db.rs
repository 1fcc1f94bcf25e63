use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    SqlErr,
};

use holocron_schema::{characters, favorites, planets, users};

use crate::domain::repository::{
    CharacterRepository, FavoriteRepository, PlanetRepository, UserRepository,
};
use crate::domain::types::{
    Character, Climate, Favorite, FavoriteTarget, NewCharacter, NewFavorite, NewPlanet, NewUser,
    Planet, User,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &NewUser) -> Result<User, ApiError> {
        let model = users::ActiveModel {
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            password: Set(user.password.clone()),
            date: Set(user.date),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => ApiError::UserAlreadyExists,
            _ => ApiError::Internal(anyhow::Error::new(e).context("create user")),
        })?;
        Ok(user_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = users::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password: model.password,
        date: model.date,
        first_name: model.first_name,
        last_name: model.last_name,
    }
}

// ── Planet repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPlanetRepository {
    pub db: DatabaseConnection,
}

impl PlanetRepository for DbPlanetRepository {
    async fn list(&self) -> Result<Vec<Planet>, ApiError> {
        let models = planets::Entity::find()
            .all(&self.db)
            .await
            .context("list planets")?;
        models.into_iter().map(planet_from_model).collect()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Planet>, ApiError> {
        let model = planets::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find planet by id")?;
        model.map(planet_from_model).transpose()
    }

    async fn create(&self, planet: &NewPlanet) -> Result<Planet, ApiError> {
        let model = planets::ActiveModel {
            name: Set(planet.name.clone()),
            population: Set(planet.population),
            climate: Set(planet.climate.as_str().to_owned()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create planet")?;
        planet_from_model(model)
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = planets::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete planet")?;
        Ok(result.rows_affected > 0)
    }
}

fn planet_from_model(model: planets::Model) -> Result<Planet, ApiError> {
    let climate: Climate = model.climate.parse().map_err(|_| {
        ApiError::Internal(anyhow::anyhow!(
            "planet {} has invalid climate {:?}",
            model.id,
            model.climate
        ))
    })?;
    Ok(Planet {
        id: model.id,
        name: model.name,
        population: model.population,
        climate,
    })
}

// ── Character repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCharacterRepository {
    pub db: DatabaseConnection,
}

impl CharacterRepository for DbCharacterRepository {
    async fn list(&self) -> Result<Vec<Character>, ApiError> {
        let models = characters::Entity::find()
            .all(&self.db)
            .await
            .context("list characters")?;
        Ok(models.into_iter().map(character_from_model).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Character>, ApiError> {
        let model = characters::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find character by id")?;
        Ok(model.map(character_from_model))
    }

    async fn create(&self, character: &NewCharacter) -> Result<Character, ApiError> {
        let model = characters::ActiveModel {
            name: Set(character.name.clone()),
            birth_year: Set(Some(character.birth_year.clone())),
            gender: Set(Some(character.gender.clone())),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create character")?;
        Ok(character_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = characters::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete character")?;
        Ok(result.rows_affected > 0)
    }
}

fn character_from_model(model: characters::Model) -> Character {
    Character {
        id: model.id,
        name: model.name,
        birth_year: model.birth_year,
        gender: model.gender,
    }
}

// ── Favorite repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFavoriteRepository {
    pub db: DatabaseConnection,
}

impl FavoriteRepository for DbFavoriteRepository {
    async fn list_by_user(&self, user_id: i32) -> Result<Vec<Favorite>, ApiError> {
        let models = favorites::Entity::find()
            .filter(favorites::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .context("list favorites by user")?;
        Ok(models.into_iter().map(favorite_from_model).collect())
    }

    async fn create(&self, favorite: &NewFavorite) -> Result<Favorite, ApiError> {
        let (planet_id, character_id) = match favorite.target {
            FavoriteTarget::Planet(id) => (Some(id), None),
            FavoriteTarget::Character(id) => (None, Some(id)),
        };
        let model = favorites::ActiveModel {
            user_id: Set(favorite.user_id),
            planet_id: Set(planet_id),
            character_id: Set(character_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .context("create favorite")?;
        Ok(favorite_from_model(model))
    }

    async fn delete(&self, id: i32) -> Result<bool, ApiError> {
        let result = favorites::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete favorite")?;
        Ok(result.rows_affected > 0)
    }
}

fn favorite_from_model(model: favorites::Model) -> Favorite {
    Favorite {
        id: model.id,
        user_id: model.user_id,
        planet_id: model.planet_id,
        character_id: model.character_id,
    }
}
