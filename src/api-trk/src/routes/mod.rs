use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::auth;
use crate::state::AppState;

pub mod dashboard;
pub mod groups;
pub mod logging_middleware;
pub mod register;

/// GET / — landing page.
async fn root() -> &'static str {
    "Welcome to the submission tracker."
}

/// GET /health
async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "healthy")
}

//
// Router
//

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/register", get(register::get_register).post(register::post_register))
        .route(
            "/register-group",
            get(groups::get_register_group).post(groups::post_register_group),
        )
        .route("/login", get(auth::get_login).post(auth::post_login))
        .route("/logout", get(auth::get_logout))
        .route("/dashboard", get(dashboard::get_dashboard))
        // Custom route access logging
        .layer(middleware::from_fn(logging_middleware::log_route_access))
        // Tracing middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
