use axum::Json;

pub const VERSION_BANNER: &str = "Savy 1.0";

/// GET / and GET /health - Liveness probe, no authentication
pub async fn health() -> Json<&'static str> {
    Json(VERSION_BANNER)
}
