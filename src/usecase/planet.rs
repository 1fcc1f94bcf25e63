use crate::domain::repository::PlanetRepository;
use crate::domain::types::{Climate, NewPlanet, Planet};
use crate::error::ApiError;

// ── ListPlanets ──────────────────────────────────────────────────────────────

pub struct ListPlanetsUseCase<P: PlanetRepository> {
    pub planets: P,
}

impl<P: PlanetRepository> ListPlanetsUseCase<P> {
    pub async fn execute(&self) -> Result<Vec<Planet>, ApiError> {
        self.planets.list().await
    }
}

// ── GetPlanet ────────────────────────────────────────────────────────────────

pub struct GetPlanetUseCase<P: PlanetRepository> {
    pub planets: P,
}

impl<P: PlanetRepository> GetPlanetUseCase<P> {
    pub async fn execute(&self, planet_id: i32) -> Result<Planet, ApiError> {
        self.planets
            .find_by_id(planet_id)
            .await?
            .ok_or(ApiError::PlanetNotFound)
    }
}

// ── CreatePlanet ─────────────────────────────────────────────────────────────

pub struct CreatePlanetInput {
    pub name: String,
    pub population: i64,
    pub climate: String,
}

pub struct CreatePlanetUseCase<P: PlanetRepository> {
    pub planets: P,
}

impl<P: PlanetRepository> CreatePlanetUseCase<P> {
    pub async fn execute(&self, input: CreatePlanetInput) -> Result<Planet, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::Validation("name must not be empty".to_owned()));
        }
        let climate: Climate = input.climate.parse().map_err(|_| {
            let allowed = Climate::ALL.map(|c| c.as_str()).join(", ");
            ApiError::Validation(format!("climate must be one of {allowed}"))
        })?;
        self.planets
            .create(&NewPlanet {
                name: input.name,
                population: input.population,
                climate,
            })
            .await
    }
}

// ── DeletePlanet ─────────────────────────────────────────────────────────────

pub struct DeletePlanetUseCase<P: PlanetRepository> {
    pub planets: P,
}

impl<P: PlanetRepository> DeletePlanetUseCase<P> {
    pub async fn execute(&self, planet_id: i32) -> Result<(), ApiError> {
        if !self.planets.delete(planet_id).await? {
            return Err(ApiError::PlanetNotFound);
        }
        Ok(())
    }
}
