pub mod auth_service;
pub mod board;
pub mod errors;
pub mod game_service;
pub mod move_service;
pub mod user_service;
