//! DTOs for room lifecycle endpoints (create, join, info, leave).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dto::{format_timestamp, validation::validate_room_code},
    state::room::{Player, Room, Team},
    words::Difficulty,
};

/// Payload used to create a fresh room.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    /// Opaque numeric identity of the creator.
    pub user_id: i64,
    /// Display name of the creator.
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    /// Word-pool tier for the room.
    pub difficulty: Difficulty,
}

/// Response carrying the shareable code of a newly created room.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    /// Always true on the success path.
    pub success: bool,
    /// 6-character shareable room code.
    pub room_id: String,
}

/// Payload used to join (or switch to) a team in a room.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamRequest {
    /// Code of the room to join.
    #[validate(custom(function = validate_room_code))]
    pub room_id: String,
    /// Opaque numeric identity of the joining user.
    pub user_id: i64,
    /// Display name of the joining user.
    #[validate(length(min = 1, max = 100))]
    pub username: String,
    /// Team to join.
    pub team: Team,
}

/// Response confirming the team the user ended up on.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinTeamResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Team the user now belongs to.
    pub team: Team,
}

/// Payload for leaving a room.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRoomRequest {
    /// Code of the room to leave.
    #[validate(custom(function = validate_room_code))]
    pub room_id: String,
    /// Opaque numeric identity of the leaving user.
    pub user_id: i64,
}

/// Response indicating whether the room survived the departure.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRoomResponse {
    /// Always true on the success path.
    pub success: bool,
    /// True when the last player left and the room was deleted.
    pub room_deleted: bool,
}

/// Snapshot of one player for room/game responses.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    /// Opaque numeric identity.
    pub user_id: i64,
    /// Display name.
    pub username: String,
    /// Team membership.
    pub team: Team,
    /// Informational personal counter.
    pub score: u32,
    /// RFC3339 join timestamp; join order defines roster order.
    pub joined_at: String,
}

impl From<&Player> for PlayerDto {
    fn from(player: &Player) -> Self {
        Self {
            user_id: player.user_id,
            username: player.username.clone(),
            team: player.team,
            score: player.score,
            joined_at: format_timestamp(player.joined_at),
        }
    }
}

/// Room snapshot returned by the room-info endpoint.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfoResponse {
    /// Always true on the success path.
    pub success: bool,
    /// All players in join order.
    pub players: Vec<PlayerDto>,
    /// Team A roster in join order.
    pub team_a: Vec<PlayerDto>,
    /// Team B roster in join order.
    pub team_b: Vec<PlayerDto>,
    /// Team A score.
    pub score_a: u32,
    /// Team B score.
    pub score_b: u32,
    /// Whether a game has been started in this room.
    pub is_game_started: bool,
}

impl From<&Room> for RoomInfoResponse {
    fn from(room: &Room) -> Self {
        Self {
            success: true,
            players: room.players.iter().map(PlayerDto::from).collect(),
            team_a: room.roster(Team::A).into_iter().map(PlayerDto::from).collect(),
            team_b: room.roster(Team::B).into_iter().map(PlayerDto::from).collect(),
            score_a: room.score_a,
            score_b: room.score_b,
            is_game_started: room.is_game_started(),
        }
    }
}
