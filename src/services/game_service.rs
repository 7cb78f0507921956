use tracing::info;

use crate::{
    dto::{
        game::{
            ActionResponse, GameStateResponse, GuessResponse, NextTurnResponse, RoomActionRequest,
            SwitchTeamResponse, WordResponse,
        },
        room::PlayerDto,
    },
    error::ServiceError,
    services::room_service::lock_room,
    state::{SharedState, turn},
};

/// Start (or restart) the game in a room. Creator-only; both teams need at
/// least two players.
pub async fn start_game(
    state: &SharedState,
    request: RoomActionRequest,
) -> Result<ActionResponse, ServiceError> {
    let mut guard = lock_room(state, &request.room_id).await?;
    turn::start_game(&mut guard, request.user_id)?;
    info!(room = %request.room_id, "game started");

    Ok(ActionResponse { success: true })
}

/// Polled gameplay snapshot: scores, roles, winner, and the client-enforced
/// turn duration.
pub async fn game_state(
    state: &SharedState,
    code: &str,
) -> Result<GameStateResponse, ServiceError> {
    let guard = lock_room(state, code).await?;

    let (explainer, guesser) = match turn::current_pair(&guard) {
        Some((explainer, guesser)) => {
            (Some(PlayerDto::from(explainer)), Some(PlayerDto::from(guesser)))
        }
        None => (None, None),
    };

    Ok(GameStateResponse {
        is_game_started: guard.is_game_started(),
        current_team: guard.current_team,
        score_a: guard.score_a,
        score_b: guard.score_b,
        target_score: guard.target_score,
        explainer,
        guesser,
        winner: turn::check_winner(&guard),
        time_per_turn: state.config().time_per_turn_secs(),
    })
}

/// Draw the next word for the current explainer.
pub async fn get_word(
    state: &SharedState,
    request: RoomActionRequest,
) -> Result<WordResponse, ServiceError> {
    let mut guard = lock_room(state, &request.room_id).await?;
    let word = turn::draw_word(&mut guard, request.user_id, state.words())?;

    Ok(WordResponse { word })
}

/// Record a correct guess credited to the active team.
pub async fn word_guessed(
    state: &SharedState,
    request: RoomActionRequest,
) -> Result<GuessResponse, ServiceError> {
    let mut guard = lock_room(state, &request.room_id).await?;
    turn::record_guess(&mut guard, request.user_id)?;

    Ok(GuessResponse {
        score_a: guard.score_a,
        score_b: guard.score_b,
    })
}

/// Rotate explainer/guesser roles on the active team.
pub async fn next_turn(
    state: &SharedState,
    request: RoomActionRequest,
) -> Result<NextTurnResponse, ServiceError> {
    let mut guard = lock_room(state, &request.room_id).await?;
    turn::advance_turn(&mut guard, request.user_id)?;

    Ok(NextTurnResponse {
        current_team: guard.current_team,
        explainer_index: guard.explainer_index,
        guesser_index: guard.guesser_index,
    })
}

/// Hand the turn to the other team. Creator-only.
pub async fn switch_team(
    state: &SharedState,
    request: RoomActionRequest,
) -> Result<SwitchTeamResponse, ServiceError> {
    let mut guard = lock_room(state, &request.room_id).await?;
    let current_team = turn::switch_team(&mut guard, request.user_id)?;
    info!(room = %request.room_id, team = ?current_team, "turn handed to the other team");

    Ok(SwitchTeamResponse { current_team })
}
