pub mod config;
pub mod logging;

pub use config::{AddrError, AppConfig, get_app_config, get_bind_addr};
pub use logging::setup_logging;
