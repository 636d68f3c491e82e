pub mod cache;
pub mod catalog;
pub mod config;
pub mod kick_client;
pub mod routes;
pub mod state;
pub mod types;
