use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::game::{
        ActionResponse, GameStateResponse, GuessResponse, NextTurnResponse, RoomActionRequest,
        SwitchTeamResponse, WordResponse,
    },
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Routes driving gameplay inside a room.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/start-game", post(start_game))
        .route("/api/game-state/{room_id}", get(game_state))
        .route("/api/get-word", post(get_word))
        .route("/api/word-guessed", post(word_guessed))
        .route("/api/next-turn", post(next_turn))
        .route("/api/switch-team", post(switch_team))
}

/// Start (or restart) the game. Creator-only; both teams need two players.
#[utoipa::path(
    post,
    path = "/api/start-game",
    tag = "game",
    request_body = RoomActionRequest,
    responses(
        (status = 200, description = "Game started", body = ActionResponse),
        (status = 403, description = "Requester is not the creator"),
        (status = 409, description = "A team has fewer than two players")
    )
)]
pub async fn start_game(
    State(state): State<SharedState>,
    Json(payload): Json<RoomActionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    let response = game_service::start_game(&state, payload).await?;
    Ok(Json(response))
}

/// Polled gameplay snapshot for a room.
#[utoipa::path(
    get,
    path = "/api/game-state/{room_id}",
    tag = "game",
    params(("room_id" = String, Path, description = "Shareable room code")),
    responses(
        (status = 200, description = "Current game state", body = GameStateResponse),
        (status = 404, description = "Room not found")
    )
)]
pub async fn game_state(
    State(state): State<SharedState>,
    Path(room_id): Path<String>,
) -> Result<Json<GameStateResponse>, AppError> {
    let response = game_service::game_state(&state, &room_id).await?;
    Ok(Json(response))
}

/// Draw the next word; only the current explainer may ask.
#[utoipa::path(
    post,
    path = "/api/get-word",
    tag = "game",
    request_body = RoomActionRequest,
    responses(
        (status = 200, description = "Word drawn", body = WordResponse),
        (status = 403, description = "Requester is not the explainer")
    )
)]
pub async fn get_word(
    State(state): State<SharedState>,
    Json(payload): Json<RoomActionRequest>,
) -> Result<Json<WordResponse>, AppError> {
    payload.validate()?;
    let response = game_service::get_word(&state, payload).await?;
    Ok(Json(response))
}

/// Record a correct guess; only the current explainer may report it.
#[utoipa::path(
    post,
    path = "/api/word-guessed",
    tag = "game",
    request_body = RoomActionRequest,
    responses(
        (status = 200, description = "Guess recorded", body = GuessResponse),
        (status = 403, description = "Requester is not the explainer")
    )
)]
pub async fn word_guessed(
    State(state): State<SharedState>,
    Json(payload): Json<RoomActionRequest>,
) -> Result<Json<GuessResponse>, AppError> {
    payload.validate()?;
    let response = game_service::word_guessed(&state, payload).await?;
    Ok(Json(response))
}

/// Rotate the explainer/guesser roles on the active team.
#[utoipa::path(
    post,
    path = "/api/next-turn",
    tag = "game",
    request_body = RoomActionRequest,
    responses(
        (status = 200, description = "Turn advanced", body = NextTurnResponse),
        (status = 403, description = "Requester is neither explainer nor creator"),
        (status = 409, description = "Active team has fewer than two players")
    )
)]
pub async fn next_turn(
    State(state): State<SharedState>,
    Json(payload): Json<RoomActionRequest>,
) -> Result<Json<NextTurnResponse>, AppError> {
    payload.validate()?;
    let response = game_service::next_turn(&state, payload).await?;
    Ok(Json(response))
}

/// Hand the turn to the other team. Creator-only.
#[utoipa::path(
    post,
    path = "/api/switch-team",
    tag = "game",
    request_body = RoomActionRequest,
    responses(
        (status = 200, description = "Team switched", body = SwitchTeamResponse),
        (status = 403, description = "Requester is not the creator")
    )
)]
pub async fn switch_team(
    State(state): State<SharedState>,
    Json(payload): Json<RoomActionRequest>,
) -> Result<Json<SwitchTeamResponse>, AppError> {
    payload.validate()?;
    let response = game_service::switch_team(&state, payload).await?;
    Ok(Json(response))
}
