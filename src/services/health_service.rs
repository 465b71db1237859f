use tracing::warn;

use crate::{
    dto::health::{HealthResponse, HealthStatus},
    state::SharedState,
};

/// Report whether text generation is available.
pub fn health_status(state: &SharedState) -> HealthResponse {
    if state.is_degraded() {
        warn!("text generation unavailable (degraded mode)");
        HealthStatus::Degraded.into()
    } else {
        HealthStatus::Ok.into()
    }
}
