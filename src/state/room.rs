//! Room and player model: rosters, scores, rotation cursors, and lifecycle mutations.

use indexmap::IndexSet;
use rand::Rng;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::words::Difficulty;

/// Characters a room code is drawn from.
const ROOM_CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Length of a human-shareable room code.
pub const ROOM_CODE_LEN: usize = 6;

/// One of the two fixed teams in a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Team {
    /// Team A.
    A,
    /// Team B.
    B,
}

impl Team {
    /// The opposing team.
    pub fn other(self) -> Self {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }
}

/// Explicit game phase replacing a started/finished flag pair.
///
/// `Finished` is terminal for gameplay mutations; only a fresh
/// [`start_game`](crate::state::turn::start_game) (rematch) or room
/// lifecycle calls are accepted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Players are assembling teams; no gameplay yet.
    Lobby,
    /// A round is running.
    InProgress,
    /// A team reached the target score.
    Finished,
}

/// A participant of a room, member of exactly one team.
#[derive(Debug, Clone)]
pub struct Player {
    /// Opaque numeric identity supplied by the launcher (chat bot).
    pub user_id: i64,
    /// Display name supplied by the launcher.
    pub username: String,
    /// Team the player belongs to.
    pub team: Team,
    /// Personal correct-guess counter; informational only, team scores are
    /// authoritative for the win condition.
    pub score: u32,
    /// Join timestamp; roster order is the insertion order of `players`.
    pub joined_at: OffsetDateTime,
}

/// One game session instance, identified by a short shareable code.
///
/// The room owns its players: removing the room removes them all.
#[derive(Debug, Clone)]
pub struct Room {
    /// 6-character code drawn from `A-Z0-9`, globally unique.
    pub code: String,
    /// User who created the room; sole authority for start-game and
    /// switch-team operations.
    pub creator_id: i64,
    /// Display name of the creator.
    pub creator_name: String,
    /// Word pool tier used for draws.
    pub difficulty: Difficulty,
    /// Current lifecycle phase.
    pub phase: GamePhase,
    /// Team whose turn it is.
    pub current_team: Team,
    /// Rotation cursor for the explaining role, taken modulo the current
    /// roster size on read.
    pub explainer_index: usize,
    /// Rotation cursor for the guessing role, taken modulo the current
    /// roster size on read.
    pub guesser_index: usize,
    /// Words already drawn this round, in draw order. Cleared on game start,
    /// team switch, and pool exhaustion.
    pub words_used: IndexSet<String>,
    /// Team A score this round.
    pub score_a: u32,
    /// Team B score this round.
    pub score_b: u32,
    /// Score a team must reach to win.
    pub target_score: u32,
    /// All players in join order.
    pub players: Vec<Player>,
    /// Creation timestamp for auditing.
    pub created_at: OffsetDateTime,
}

impl Room {
    /// Build a fresh room in the lobby phase with empty rosters.
    pub fn new(
        code: String,
        creator_id: i64,
        creator_name: String,
        difficulty: Difficulty,
        target_score: u32,
    ) -> Self {
        Self {
            code,
            creator_id,
            creator_name,
            difficulty,
            phase: GamePhase::Lobby,
            current_team: Team::A,
            explainer_index: 0,
            guesser_index: 1,
            words_used: IndexSet::new(),
            score_a: 0,
            score_b: 0,
            target_score,
            players: Vec::new(),
            created_at: OffsetDateTime::now_utc(),
        }
    }

    /// Ordered roster of one team (join order).
    pub fn roster(&self, team: Team) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|player| player.team == team)
            .collect()
    }

    /// Look up a player by user id.
    pub fn player(&self, user_id: i64) -> Option<&Player> {
        self.players.iter().find(|player| player.user_id == user_id)
    }

    /// Add the user to a team, replacing any previous membership.
    ///
    /// At most one player entry exists per user per room; switching teams is
    /// a remove-then-append, so the switching user moves to the roster tail.
    pub fn join_team(&mut self, user_id: i64, username: String, team: Team) {
        self.players.retain(|player| player.user_id != user_id);
        self.players.push(Player {
            user_id,
            username,
            team,
            score: 0,
            joined_at: OffsetDateTime::now_utc(),
        });
    }

    /// Remove the user's player entry. Returns false when the user was not
    /// in the room.
    pub fn remove_player(&mut self, user_id: i64) -> bool {
        let before = self.players.len();
        self.players.retain(|player| player.user_id != user_id);
        self.players.len() < before
    }

    /// True when no players remain; the room should then be deleted.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Whether a game has been started in this room (running or finished).
    pub fn is_game_started(&self) -> bool {
        !matches!(self.phase, GamePhase::Lobby)
    }

    /// Score of the given team.
    pub fn team_score(&self, team: Team) -> u32 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }
}

/// Generate a candidate room code; uniqueness is enforced by the registry
/// with a collision retry.
pub fn generate_room_code() -> String {
    let mut rng = rand::rng();
    (0..ROOM_CODE_LEN)
        .map(|_| {
            let index = rng.random_range(0..ROOM_CODE_ALPHABET.len());
            ROOM_CODE_ALPHABET[index] as char
        })
        .collect()
}
