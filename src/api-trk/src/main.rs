use std::sync::Arc;

use core_trk::{get_app_config, get_bind_addr, setup_logging};
use data_model_trk::db::Store;
use directory_trk::DirectoryClient;

use api_trk::auth::session::SessionStore;
use api_trk::routes;
use api_trk::state::AppState;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    setup_logging("api_trk=debug,tower_http=debug");

    let config = get_app_config();

    let store = Store::connect(&config.database_url, &config.database_name)
        .await
        .expect("Invalid DATABASE_URL");

    // An unreachable database is logged, not fatal: requests fail on their
    // own until it comes back.
    match store.ping().await {
        Ok(()) => {
            tracing::info!("Connected to the database");
            if let Err(e) = store.ensure_indexes().await {
                tracing::error!("Failed to create unique indexes: {e}");
            }
        }
        Err(e) => tracing::error!("Error connecting to the database: {e}"),
    }

    let directory = DirectoryClient::new(config.directory_url.clone(), config.directory_token.clone());

    let state = AppState {
        store,
        directory: Arc::new(directory),
        sessions: Arc::new(SessionStore::new()),
        config: Arc::new(config),
    };

    let app = routes::router(state);

    let addr = get_bind_addr().expect("Invalid HOST or PORT");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect(format!("Failed to bind to address: {}", addr).as_str());
    tracing::info!("Listening on {addr}");
    axum::serve(listener, app).await.unwrap();
}
