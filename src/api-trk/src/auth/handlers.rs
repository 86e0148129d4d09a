use axum::extract::{Form, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::state::AppState;
use crate::views;

use super::password::{PasswordError, verify_password};
use super::session::{SessionError, create_logout_cookie, create_session_cookie, parse_session_cookie};

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Trainer record is missing its ID")]
    MissingId,

    #[error("Database error: {0}")]
    Db(#[from] data_model_trk::db::StoreError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        match self {
            LoginError::InvalidCredentials => (StatusCode::BAD_REQUEST, "Error!").into_response(),
            LoginError::MissingId | LoginError::Db(_) | LoginError::Session(_) | LoginError::Password(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Login failed").into_response()
            }
        }
    }
}

/// GET /login
pub async fn get_login() -> Html<String> {
    Html(views::login_form())
}

/// POST /login — verify credentials, bind a session, send the trainer to
/// the dashboard. An unknown email gets the same rejection as a bad
/// password.
pub async fn post_login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, LoginError> {
    let Some(trainer) = state.store.find_trainer_by_email(&form.email).await? else {
        warn!(email = %form.email, "login attempt for unknown email");
        return Err(LoginError::InvalidCredentials);
    };

    if !verify_password(&form.password, &trainer.password_hash)? {
        warn!(email = %form.email, "failed login attempt");
        return Err(LoginError::InvalidCredentials);
    }

    // A record loaded from the database always carries its _id.
    let trainer_id = trainer.id.ok_or(LoginError::MissingId)?;
    let token = state.sessions.create(trainer_id)?;
    let cookie = create_session_cookie(&token);

    debug!(email = %form.email, "successful login");

    Ok((
        StatusCode::FOUND,
        [
            (header::SET_COOKIE, cookie.to_string()),
            (header::LOCATION, "/dashboard".to_string()),
        ],
    ))
}

/// GET /logout — tear down the session and return to the landing page.
pub async fn get_logout(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let token = headers
        .get(header::COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(parse_session_cookie);

    match token {
        Some(token) => {
            if state.sessions.destroy(&token) {
                debug!("session destroyed");
            } else {
                warn!("logout for a token with no live session");
            }
        }
        None => debug!("logout without a session cookie"),
    }

    (
        StatusCode::FOUND,
        [
            (header::SET_COOKIE, create_logout_cookie().to_string()),
            (header::LOCATION, "/".to_string()),
        ],
    )
}
