use axum::extract::rejection::JsonRejection;
use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Planet;
use crate::error::ApiError;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use crate::usecase::planet::{
    CreatePlanetInput, CreatePlanetUseCase, DeletePlanetUseCase, GetPlanetUseCase,
    ListPlanetsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PlanetResponse {
    pub id: i32,
    pub name: String,
    pub population: i64,
    pub climate: &'static str,
}

impl From<Planet> for PlanetResponse {
    fn from(planet: Planet) -> Self {
        PlanetResponse {
            id: planet.id,
            name: planet.name,
            population: planet.population,
            climate: planet.climate.as_str(),
        }
    }
}

// ── GET /planet ──────────────────────────────────────────────────────────────

pub async fn list_planets(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlanetResponse>>, ApiError> {
    let usecase = ListPlanetsUseCase {
        planets: state.planet_repo(),
    };
    let planets = usecase.execute().await?;
    Ok(Json(planets.into_iter().map(PlanetResponse::from).collect()))
}

// ── GET /planet/{id} ─────────────────────────────────────────────────────────

pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let usecase = GetPlanetUseCase {
        planets: state.planet_repo(),
    };
    let planet = usecase.execute(planet_id).await?;
    Ok(Json(planet.into()))
}

// ── POST /planet ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CreatePlanetRequest {
    pub name: String,
    pub population: i64,
    pub climate: String,
}

pub async fn create_planet(
    State(state): State<AppState>,
    body: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Result<Json<PlanetResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::Validation(e.body_text()))?;
    let usecase = CreatePlanetUseCase {
        planets: state.planet_repo(),
    };
    let planet = usecase
        .execute(CreatePlanetInput {
            name: body.name,
            population: body.population,
            climate: body.climate,
        })
        .await?;
    Ok(Json(planet.into()))
}

// ── DELETE /planet/{id} ──────────────────────────────────────────────────────

pub async fn delete_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    let usecase = DeletePlanetUseCase {
        planets: state.planet_repo(),
    };
    usecase.execute(planet_id).await?;
    Ok(Json(MessageResponse::new("planet deleted")))
}
