use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use tracing::debug;

use crate::auth::session::parse_session_cookie;
use crate::state::AppState;
use crate::views;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Database error: {0}")]
    Db(#[from] data_model_trk::db::StoreError),
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, "Dashboard failed").into_response()
    }
}

/// GET /dashboard — anonymous visitors are sent to the login form; a
/// session that outlived its trainer record is a client error.
pub async fn get_dashboard(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, DashboardError> {
    let trainer_id = headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_session_cookie)
        .and_then(|token| state.sessions.authenticate(&token));

    let Some(trainer_id) = trainer_id else {
        debug!("anonymous dashboard request, redirecting to login");
        return Ok((StatusCode::FOUND, [(header::LOCATION, "/login")]).into_response());
    };

    match state.store.find_trainer_by_id(trainer_id).await? {
        Some(trainer) => Ok(Html(views::dashboard(&trainer)).into_response()),
        None => Ok((StatusCode::BAD_REQUEST, "Invalid trainer").into_response()),
    }
}
