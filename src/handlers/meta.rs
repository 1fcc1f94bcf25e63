use axum::Json;
use axum::http::StatusCode;

/// Handler for `GET /healthz` — liveness check.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /readyz` — readiness check.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}

/// Handler for `GET /` — JSON index of every route the API exposes.
pub async fn sitemap() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "routes": [
            "GET /",
            "GET /healthz",
            "GET /readyz",
            "GET /user",
            "GET /user/{id}",
            "POST /user",
            "DELETE /user/{id}",
            "GET /planet",
            "GET /planet/{id}",
            "POST /planet",
            "DELETE /planet/{id}",
            "GET /character",
            "GET /character/{id}",
            "POST /character",
            "DELETE /character/{id}",
            "POST /favorite/planet/{planet_id}",
            "POST /favorite/character/{character_id}",
            "DELETE /favorite/{id}",
        ],
    }))
}
