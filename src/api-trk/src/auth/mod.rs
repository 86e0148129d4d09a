pub mod handlers;
pub mod password;
pub mod session;

pub use handlers::{get_login, get_logout, post_login};
