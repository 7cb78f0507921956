//! DTOs for gameplay endpoints (start, state, words, guesses, rotation).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::{room::PlayerDto, validation::validate_room_code},
    state::room::Team,
};

/// Shared payload for gameplay actions addressed at a room by a user
/// (start-game, get-word, word-guessed, next-turn, switch-team).
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RoomActionRequest {
    /// Code of the target room.
    #[validate(custom(function = validate_room_code))]
    pub room_id: String,
    /// Opaque numeric identity of the acting user.
    pub user_id: i64,
}

/// Minimal acknowledgement for actions without further payload.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    /// Always true on the success path.
    pub success: bool,
}

/// Polled gameplay snapshot.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    /// Whether a game has been started in this room.
    pub is_game_started: bool,
    /// Team whose turn it is.
    pub current_team: Team,
    /// Team A score.
    pub score_a: u32,
    /// Team B score.
    pub score_b: u32,
    /// Score a team must reach to win.
    pub target_score: u32,
    /// Current explainer, when the active roster is non-empty.
    pub explainer: Option<PlayerDto>,
    /// Current guesser, when the active roster is non-empty.
    pub guesser: Option<PlayerDto>,
    /// Winning team once a target score is reached.
    pub winner: Option<Team>,
    /// Turn duration in seconds; the countdown is client-enforced.
    pub time_per_turn: u64,
}

/// A freshly drawn word for the current explainer.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WordResponse {
    /// The word to explain.
    pub word: String,
}

/// Team scores after a correct guess was recorded.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    /// Team A score.
    pub score_a: u32,
    /// Team B score.
    pub score_b: u32,
}

/// Rotation state after advancing the turn.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NextTurnResponse {
    /// Team whose turn it is.
    pub current_team: Team,
    /// Rotation cursor for the explaining role.
    pub explainer_index: usize,
    /// Rotation cursor for the guessing role.
    pub guesser_index: usize,
}

/// Active team after a team switch.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwitchTeamResponse {
    /// Team whose turn it now is.
    pub current_team: Team,
}
