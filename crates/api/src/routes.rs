//! API Routes

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/bankAccount/healthCheck", get(handlers::health_check))

        // Account routes
        .route("/bankAccount/byIdAccount/:id", get(handlers::get_by_id))
        .route(
            "/bankAccount/byCustomerId/:customer_id",
            get(handlers::get_by_customer_id),
        )
        .route("/bankAccount/new", post(handlers::create_new))

        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
