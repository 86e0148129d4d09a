use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::info;

use data_model_trk::models::Trainer;

use crate::auth::password::{PasswordError, hash_password};
use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub apikey: String,
    pub admin: String,
}

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Admin secret mismatch")]
    NotAdmin,

    #[error("Email already exists")]
    EmailExists,

    #[error("Database error: {0}")]
    Db(#[from] data_model_trk::db::StoreError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),
}

impl IntoResponse for RegisterError {
    fn into_response(self) -> Response {
        match self {
            RegisterError::NotAdmin => (StatusCode::FORBIDDEN, "You are not the admin").into_response(),
            RegisterError::EmailExists => (StatusCode::CONFLICT, "Email already exists").into_response(),
            RegisterError::Db(_) | RegisterError::Password(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Registration failed").into_response()
            }
        }
    }
}

/// GET /register
pub async fn get_register() -> Html<String> {
    Html(views::register_form())
}

/// POST /register — admin-gated trainer creation. The admin secret is
/// checked before anything touches the database.
pub async fn post_register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<impl IntoResponse, RegisterError> {
    if form.admin != state.config.admin_secret {
        return Err(RegisterError::NotAdmin);
    }

    if state.store.find_trainer_by_email(&form.email).await?.is_some() {
        return Err(RegisterError::EmailExists);
    }

    let password_hash = hash_password(&form.password)?;
    let trainer = Trainer::new(form.email, password_hash, form.name, form.apikey);
    state.store.insert_trainer(&trainer).await?;

    info!(email = %trainer.email, "registered trainer");

    Ok((StatusCode::CREATED, "Trainer registered successfully"))
}
