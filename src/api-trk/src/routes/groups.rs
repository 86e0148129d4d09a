use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tracing::info;

use data_model_trk::models::Group;
use directory_trk::DirectoryError;

use crate::state::AppState;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct GroupForm {
    pub group_name: String,
    /// Comma-separated usernames.
    pub names: String,
}

#[derive(Debug, thiserror::Error)]
pub enum GroupError {
    #[error("Group name already exists")]
    GroupExists,

    #[error("Unknown usernames: {0:?}")]
    UnknownUsernames(Vec<String>),

    #[error("Database error: {0}")]
    Db(#[from] data_model_trk::db::StoreError),

    #[error("Directory error: {0}")]
    Directory(DirectoryError),
}

impl IntoResponse for GroupError {
    fn into_response(self) -> Response {
        match self {
            GroupError::GroupExists => (StatusCode::CONFLICT, "Group name already exists").into_response(),
            GroupError::UnknownUsernames(names) => (
                StatusCode::BAD_REQUEST,
                format!("No directory match for: {}", names.join(", ")),
            )
                .into_response(),
            GroupError::Db(_) | GroupError::Directory(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Group registration failed").into_response()
            }
        }
    }
}

/// GET /register-group — form listing existing groups and the directory's
/// candidate usernames.
pub async fn get_register_group(State(state): State<AppState>) -> Result<Html<String>, GroupError> {
    let groups = state.store.list_groups().await?;
    let accounts = state.directory.directory().await.map_err(GroupError::Directory)?;
    Ok(Html(views::register_group_form(&groups, &accounts)))
}

/// POST /register-group — every username must resolve before anything is
/// written; one unresolved name fails the whole request.
pub async fn post_register_group(
    State(state): State<AppState>,
    Form(form): Form<GroupForm>,
) -> Result<impl IntoResponse, GroupError> {
    if state.store.find_group_by_name(&form.group_name).await?.is_some() {
        return Err(GroupError::GroupExists);
    }

    // One directory call per username, in submission order.
    let mut student_list = Vec::new();
    let mut unresolved = Vec::new();
    for username in form.names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        match state.directory.resolve_username(username).await {
            Ok(account_id) => student_list.push(account_id),
            Err(DirectoryError::NoMatch(_)) => unresolved.push(username.to_string()),
            Err(e) => return Err(GroupError::Directory(e)),
        }
    }
    if !unresolved.is_empty() {
        return Err(GroupError::UnknownUsernames(unresolved));
    }

    let group = Group::new(form.group_name, student_list);
    state.store.insert_group(&group).await?;

    info!(group = %group.group_name, students = group.student_list.len(), "registered group");

    Ok((StatusCode::OK, "Group registered successfully"))
}
