pub mod config;
pub mod errors;
pub mod models;
pub mod server;
pub mod state;
