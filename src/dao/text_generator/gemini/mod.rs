mod client;
mod config;
mod models;

pub use self::client::GeminiGenerator;
pub use self::config::{GeminiConfig, GeminiConfigError};
