use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with the health payload; state is in-process, so the service is
/// healthy whenever it answers.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    HealthResponse::ok(state.room_count())
}
