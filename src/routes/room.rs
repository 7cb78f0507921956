use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::room::{
        CreateRoomRequest, CreateRoomResponse, JoinTeamRequest, JoinTeamResponse,
        LeaveRoomRequest, LeaveRoomResponse, RoomInfoResponse,
    },
    error::AppError,
    services::room_service,
    state::SharedState,
};

/// Routes handling room lifecycle operations.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/create-room", post(create_room))
        .route("/api/join-team", post(join_team))
        .route("/api/room/{room_id}", get(room_info))
        .route("/api/leave-room", post(leave_room))
}

/// Create a fresh room with a shareable code.
#[utoipa::path(
    post,
    path = "/api/create-room",
    tag = "room",
    request_body = CreateRoomRequest,
    responses(
        (status = 200, description = "Room created", body = CreateRoomResponse),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_room(
    State(state): State<SharedState>,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<Json<CreateRoomResponse>, AppError> {
    payload.validate()?;
    let response = room_service::create_room(&state, payload).await?;
    Ok(Json(response))
}

/// Join a team in a room (or switch teams by rejoining).
#[utoipa::path(
    post,
    path = "/api/join-team",
    tag = "room",
    request_body = JoinTeamRequest,
    responses(
        (status = 200, description = "Joined the team", body = JoinTeamResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn join_team(
    State(state): State<SharedState>,
    Json(payload): Json<JoinTeamRequest>,
) -> Result<Json<JoinTeamResponse>, AppError> {
    payload.validate()?;
    let response = room_service::join_team(&state, payload).await?;
    Ok(Json(response))
}

/// Snapshot of a room's rosters and scores.
#[utoipa::path(
    get,
    path = "/api/room/{room_id}",
    tag = "room",
    params(("room_id" = String, Path, description = "Shareable room code")),
    responses(
        (status = 200, description = "Room snapshot", body = RoomInfoResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn room_info(
    State(state): State<SharedState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomInfoResponse>, AppError> {
    let response = room_service::room_info(&state, &room_id).await?;
    Ok(Json(response))
}

/// Leave a room; deletes the room when the last player leaves.
#[utoipa::path(
    post,
    path = "/api/leave-room",
    tag = "room",
    request_body = LeaveRoomRequest,
    responses(
        (status = 200, description = "Left the room", body = LeaveRoomResponse),
        (status = 404, description = "Room or player not found")
    )
)]
pub async fn leave_room(
    State(state): State<SharedState>,
    Json(payload): Json<LeaveRoomRequest>,
) -> Result<Json<LeaveRoomResponse>, AppError> {
    payload.validate()?;
    let response = room_service::leave_room(&state, payload).await?;
    Ok(Json(response))
}
