//! Library crate for lyric-match-back, exposing modules for binaries and integration tests.

/// HTTP client and local view state for players.
pub mod client;
/// Server configuration and catalog loading.
pub mod config;
/// Adapters to external services.
pub mod dao;
/// Request and response payloads.
pub mod dto;
/// Service and HTTP error types.
pub mod error;
/// HTTP routes.
pub mod routes;
/// Game logic behind the routes.
pub mod services;
/// Shared application state.
pub mod state;
