use axum::extract::rejection::JsonRejection;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::UserProfile;
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::handlers::favorite::FavoriteResponse;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Serialized user. The password column is deliberately absent.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date: chrono::NaiveDate,
    pub favorites: Vec<FavoriteResponse>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        UserResponse {
            id: profile.user.id,
            name: profile.user.name,
            email: profile.user.email,
            first_name: profile.user.first_name,
            last_name: profile.user.last_name,
            date: profile.user.date,
            favorites: profile
                .favorites
                .into_iter()
                .map(FavoriteResponse::from)
                .collect(),
        }
    }
}

// ── GET /user ────────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let profiles = usecase.execute().await?;
    Ok(Json(profiles.into_iter().map(UserResponse::from).collect()))
}

// ── GET /user/{id} ───────────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        favorites: state.favorite_repo(),
    };
    let profile = usecase.execute(user_id).await?;
    Ok(Json(profile.into()))
}

// ── POST /user ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(CreateUserInput {
            name: body.name,
            email: body.email,
            password: body.password,
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;
    Ok(Json(
        UserProfile {
            user,
            favorites: vec![],
        }
        .into(),
    ))
}

// ── DELETE /user/{id} ────────────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
    };
    usecase.execute(user_id).await?;
    Ok(Json(MessageResponse::new("user deleted")))
}
