use chrono::Utc;

use crate::domain::repository::{FavoriteRepository, UserRepository};
use crate::domain::types::{NewUser, User, UserProfile};
use crate::error::ApiError;

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> ListUsersUseCase<U, F> {
    pub async fn execute(&self) -> Result<Vec<UserProfile>, ApiError> {
        let users = self.users.list().await?;
        let mut profiles = Vec::with_capacity(users.len());
        for user in users {
            let favorites = self.favorites.list_by_user(user.id).await?;
            profiles.push(UserProfile { user, favorites });
        }
        Ok(profiles)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository, F: FavoriteRepository> {
    pub users: U,
    pub favorites: F,
}

impl<U: UserRepository, F: FavoriteRepository> GetUserUseCase<U, F> {
    pub async fn execute(&self, user_id: i32) -> Result<UserProfile, ApiError> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(ApiError::UserNotFound)?;
        let favorites = self.favorites.list_by_user(user.id).await?;
        Ok(UserProfile { user, favorites })
    }
}

// ── CreateUser ───────────────────────────────────────────────────────────────

pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub struct CreateUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> CreateUserUseCase<U> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<User, ApiError> {
        require_non_empty("name", &input.name)?;
        require_non_empty("email", &input.email)?;
        require_non_empty("password", &input.password)?;
        require_non_empty("first_name", &input.first_name)?;
        require_non_empty("last_name", &input.last_name)?;
        self.users
            .create(&NewUser {
                name: input.name,
                email: input.email,
                password: input.password,
                first_name: input.first_name,
                last_name: input.last_name,
                date: Utc::now().date_naive(),
            })
            .await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository> {
    pub users: U,
}

impl<U: UserRepository> DeleteUserUseCase<U> {
    pub async fn execute(&self, user_id: i32) -> Result<(), ApiError> {
        if !self.users.delete(user_id).await? {
            return Err(ApiError::UserNotFound);
        }
        Ok(())
    }
}
