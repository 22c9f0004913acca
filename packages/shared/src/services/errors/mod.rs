pub mod auth_service_errors;
pub mod game_service_errors;
pub mod move_service_errors;
pub mod user_service_errors;
