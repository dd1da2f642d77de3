pub mod config;
pub mod error;
pub mod response;
pub mod validation;
pub mod extractors;
pub mod middleware;
pub mod handlers;

use axum::{
    Router,
    middleware::{self as axum_middleware, Next},
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::utils::app_config::AppConfig;
use config::ApiConfig;
use error::ApiError;
use handlers::{budgets::*, health, operations::*, summary::*};
use middleware::auth::{PUBLIC_PATHS, validate_auth};

/// Build the full HTTP surface over the given store and secret
pub fn router(app_config: AppConfig, api_config: ApiConfig) -> Router {
    let secret_key = api_config.secret_key.clone();

    let auth_layer = axum_middleware::from_fn(move |req: axum::extract::Request, next: Next| {
        let secret = secret_key.clone();
        async move {
            let path = req.uri().path();
            if PUBLIC_PATHS.contains(&path) {
                return Ok::<Response, ApiError>(next.run(req).await.into_response());
            }

            validate_auth(req.headers(), &secret).await?;
            Ok::<Response, ApiError>(next.run(req).await.into_response())
        }
    });

    Router::new()
        // Health check - public endpoints
        .route("/", get(health::health))
        .route("/health", get(health::health))
        // Budgets
        .route("/budgets", get(get_budgets).post(create_budget))
        .route("/budgets/:id", axum::routing::delete(delete_budget))
        .route("/transfer-budgets", post(transfer_budgets))
        // Operations
        .route("/operations/current-month", get(get_current_month_operations))
        .route("/operations", post(create_operation))
        .route(
            "/operations/:id",
            patch(update_operation_status).delete(delete_operation),
        )
        // Summary
        .route("/summary", get(get_summary))
        .layer(TraceLayer::new_for_http())
        .layer(auth_layer)
        .layer(CorsLayer::permissive())
        .with_state(app_config)
}
