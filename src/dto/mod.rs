/// Healthcheck payload.
pub mod health;
/// Round payloads.
pub mod round;
/// Custom validators.
pub mod validation;
