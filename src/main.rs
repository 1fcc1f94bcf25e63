use axum::{ServiceExt, extract::Request};
use sea_orm::Database;
use tower::Layer as _;
use tower_http::normalize_path::NormalizePathLayer;
use tracing::info;

use holocron::config::ApiConfig;
use holocron::router::build_router;
use holocron::state::AppState;
use holocron_migration::{Migrator, MigratorTrait as _};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");

    let state = AppState { db };

    // Trailing slashes are tolerated, so normalization has to wrap the
    // router rather than sit inside it as a layer.
    let app = NormalizePathLayer::trim_trailing_slash().layer(build_router(state));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("holocron API listening on {addr}");
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .await
        .expect("server error");
}
