use std::sync::Arc;

use core_trk::AppConfig;
use data_model_trk::db::Store;
use directory_trk::DirectoryClient;

use crate::auth::session::SessionStore;

/// Everything the handlers need: created once at startup, cloned into each
/// handler, torn down with the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub directory: Arc<DirectoryClient>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<AppConfig>,
}
