//! SeaORM entities for the holocron tables.

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod users;
