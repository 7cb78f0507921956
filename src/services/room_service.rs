use std::sync::Arc;

use tokio::sync::OwnedMutexGuard;
use tracing::info;

use crate::{
    dto::room::{
        CreateRoomRequest, CreateRoomResponse, JoinTeamRequest, JoinTeamResponse,
        LeaveRoomRequest, LeaveRoomResponse, RoomInfoResponse,
    },
    error::ServiceError,
    state::{RoomHandle, SharedState, room::Room},
};

fn not_found(code: &str) -> ServiceError {
    ServiceError::NotFound(format!("room `{code}` not found"))
}

/// Resolve a live room by code or fail with `NotFound`.
pub(crate) fn resolve_room(state: &SharedState, code: &str) -> Result<RoomHandle, ServiceError> {
    state.room(code).ok_or_else(|| not_found(code))
}

/// Resolve and lock a room, then re-verify the registry still holds the same
/// entry. A handle resolved just before the last player left can outlive its
/// registry entry; without the re-check a caller parked on the mutex would
/// mutate an already-deleted room.
pub(crate) async fn lock_room(
    state: &SharedState,
    code: &str,
) -> Result<OwnedMutexGuard<Room>, ServiceError> {
    let handle = resolve_room(state, code)?;
    let guard = handle.clone().lock_owned().await;
    match state.room(code) {
        Some(current) if Arc::ptr_eq(&current, &handle) => Ok(guard),
        _ => Err(not_found(code)),
    }
}

/// Create a fresh room. The creator joins a team with a separate call.
pub async fn create_room(
    state: &SharedState,
    request: CreateRoomRequest,
) -> Result<CreateRoomResponse, ServiceError> {
    if request.username.trim().is_empty() {
        return Err(ServiceError::InvalidInput(
            "username must not be empty".into(),
        ));
    }

    let code = state.create_room(request.user_id, request.username, request.difficulty);

    Ok(CreateRoomResponse {
        success: true,
        room_id: code,
    })
}

/// Put the user on the requested team, replacing any previous membership in
/// the room. Calling this twice for the same user never produces duplicates.
pub async fn join_team(
    state: &SharedState,
    request: JoinTeamRequest,
) -> Result<JoinTeamResponse, ServiceError> {
    if request.username.trim().is_empty() {
        return Err(ServiceError::InvalidInput(
            "username must not be empty".into(),
        ));
    }

    let mut guard = lock_room(state, &request.room_id).await?;
    guard.join_team(request.user_id, request.username, request.team);
    info!(room = %request.room_id, user = request.user_id, team = ?request.team, "player joined team");

    Ok(JoinTeamResponse {
        success: true,
        team: request.team,
    })
}

/// Remove the user from the room; the room itself is deleted once the last
/// player leaves. The registry entry is removed while the room lock is still
/// held, so no other request can slip in between the roster emptying and the
/// deletion.
pub async fn leave_room(
    state: &SharedState,
    request: LeaveRoomRequest,
) -> Result<LeaveRoomResponse, ServiceError> {
    let mut guard = lock_room(state, &request.room_id).await?;
    if !guard.remove_player(request.user_id) {
        return Err(ServiceError::NotFound(format!(
            "player `{}` is not in room `{}`",
            request.user_id, request.room_id
        )));
    }

    let room_deleted = guard.is_empty();
    if room_deleted {
        state.remove_room(&request.room_id);
    }
    drop(guard);

    Ok(LeaveRoomResponse {
        success: true,
        room_deleted,
    })
}

/// Snapshot of the room's rosters and scores.
pub async fn room_info(state: &SharedState, code: &str) -> Result<RoomInfoResponse, ServiceError> {
    let guard = lock_room(state, code).await?;
    Ok(RoomInfoResponse::from(&*guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::AppConfig, state::AppState, state::room::Team, words::Difficulty};
    use std::time::Duration;
    use tokio::time::sleep;

    fn test_state() -> SharedState {
        AppState::new(AppConfig::default())
    }

    async fn create(state: &SharedState) -> String {
        create_room(
            state,
            CreateRoomRequest {
                user_id: 1,
                username: "creator".into(),
                difficulty: Difficulty::Easy,
            },
        )
        .await
        .expect("create room")
        .room_id
    }

    fn join_request(code: &str, user_id: i64, username: &str, team: Team) -> JoinTeamRequest {
        JoinTeamRequest {
            room_id: code.into(),
            user_id,
            username: username.into(),
            team,
        }
    }

    #[tokio::test]
    async fn creator_is_not_auto_joined() {
        let state = test_state();
        let code = create(&state).await;

        let info = room_info(&state, &code).await.expect("info");
        assert!(info.players.is_empty());
        assert!(!info.is_game_started);
    }

    #[tokio::test]
    async fn double_join_leaves_a_single_player_row() {
        let state = test_state();
        let code = create(&state).await;

        for team in [Team::A, Team::A, Team::B] {
            join_team(&state, join_request(&code, 42, "alice", team))
                .await
                .expect("join");
        }

        let info = room_info(&state, &code).await.expect("info");
        assert_eq!(info.players.len(), 1);
        assert_eq!(info.team_a.len(), 0);
        assert_eq!(info.team_b.len(), 1);
        assert!(!info.players[0].joined_at.is_empty());
    }

    #[tokio::test]
    async fn last_player_leaving_deletes_the_room() {
        let state = test_state();
        let code = create(&state).await;

        join_team(&state, join_request(&code, 42, "alice", Team::A))
            .await
            .expect("join");

        let left = leave_room(
            &state,
            LeaveRoomRequest {
                room_id: code.clone(),
                user_id: 42,
            },
        )
        .await
        .expect("leave");
        assert!(left.room_deleted);

        let err = room_info(&state, &code).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn leaving_an_unknown_room_is_not_found() {
        let state = test_state();
        let err = leave_room(
            &state,
            LeaveRoomRequest {
                room_id: "NOSUCH".into(),
                user_id: 1,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn join_parked_on_a_dying_room_is_not_found() {
        let state = test_state();
        let code = create(&state).await;
        join_team(&state, join_request(&code, 42, "alice", Team::A))
            .await
            .expect("join");

        // The departing player holds the room lock, as leave_room would.
        let handle = state.room(&code).expect("handle");
        let mut guard = handle.clone().lock_owned().await;

        // A second join arrives and parks on the mutex.
        let join_state = state.clone();
        let join_code = code.clone();
        let late_join = tokio::spawn(async move {
            join_team(
                &join_state,
                JoinTeamRequest {
                    room_id: join_code,
                    user_id: 7,
                    username: "late".into(),
                    team: Team::B,
                },
            )
            .await
        });
        sleep(Duration::from_millis(20)).await;

        // The last player leaves and the room is deleted under the lock.
        assert!(guard.remove_player(42));
        assert!(guard.is_empty());
        state.remove_room(&code);
        drop(guard);

        // The parked join must not resurrect the deleted room.
        let err = late_join.await.expect("join task").unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(state.room(&code).is_none());
    }
}
