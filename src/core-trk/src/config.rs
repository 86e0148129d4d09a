use std::env;
use std::net::SocketAddr;

/// Process-scoped application configuration: read from the environment once
/// at startup and shared by reference with every handler.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Passphrase gating trainer registration.
    pub admin_secret: String,
    pub database_url: String,
    pub database_name: String,
    /// Base URL of the remote directory server, e.g. `https://mastodon.example`.
    pub directory_url: String,
    pub directory_token: String,
}

/// Read the application configuration.
/// Panics with an explanatory message when a required variable is missing.
pub fn get_app_config() -> AppConfig {
    let admin_secret =
        env::var("ADMIN_SECRET").expect("ADMIN_SECRET environment variable is required: trainer registration is gated on it");
    let database_url =
        env::var("DATABASE_URL").expect("DATABASE_URL must be set in .env file or present as an env var");
    let database_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "submission_tracker".to_string());
    let directory_url = env::var("DIRECTORY_URL")
        .expect("DIRECTORY_URL environment variable is required, e.g. https://mastodon.example");
    let directory_token = env::var("DIRECTORY_ACCESS_TOKEN")
        .expect("DIRECTORY_ACCESS_TOKEN environment variable is required for the remote directory API");

    AppConfig {
        admin_secret,
        database_url,
        database_name,
        directory_url,
        directory_token,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddrError {
    #[error("Invalid port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),

    #[error("Invalid host: {0}")]
    InvalidHost(#[from] std::net::AddrParseError),
}

/// Resolve the server bind address from HOST and PORT.
pub fn get_bind_addr() -> Result<SocketAddr, AddrError> {
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = match env::var("PORT") {
        Ok(p) => p.parse::<u16>()?,
        Err(_) => 3000,
    };
    Ok(format!("{host}:{port}").parse::<SocketAddr>()?)
}
