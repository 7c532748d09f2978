pub mod health_handler;
pub mod quiz_handler;

pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::configure as configure_quiz_routes;
