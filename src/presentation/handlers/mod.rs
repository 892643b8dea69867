mod health;
mod languages;
mod session;

pub use health::health_handler;
pub use languages::languages_handler;
pub use session::{
    reset_handler, select_file_handler, select_language_handler, session_handler, verify_handler,
};
