use sea_orm_migration::prelude::*;

pub use sea_orm_migration::MigratorTrait;

mod m20260815_000001_create_users;
mod m20260815_000002_create_planets;
mod m20260815_000003_create_characters;
mod m20260815_000004_create_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_users::Migration),
            Box::new(m20260815_000002_create_planets::Migration),
            Box::new(m20260815_000003_create_characters::Migration),
            Box::new(m20260815_000004_create_favorites::Migration),
        ]
    }
}
