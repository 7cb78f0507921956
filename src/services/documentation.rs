use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for Alias Back.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::room::create_room,
        crate::routes::room::join_team,
        crate::routes::room::room_info,
        crate::routes::room::leave_room,
        crate::routes::game::start_game,
        crate::routes::game::game_state,
        crate::routes::game::get_word,
        crate::routes::game::word_guessed,
        crate::routes::game::next_turn,
        crate::routes::game::switch_team,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::room::CreateRoomRequest,
            crate::dto::room::CreateRoomResponse,
            crate::dto::room::JoinTeamRequest,
            crate::dto::room::JoinTeamResponse,
            crate::dto::room::LeaveRoomRequest,
            crate::dto::room::LeaveRoomResponse,
            crate::dto::room::PlayerDto,
            crate::dto::room::RoomInfoResponse,
            crate::dto::game::RoomActionRequest,
            crate::dto::game::ActionResponse,
            crate::dto::game::GameStateResponse,
            crate::dto::game::WordResponse,
            crate::dto::game::GuessResponse,
            crate::dto::game::NextTurnResponse,
            crate::dto::game::SwitchTeamResponse,
            crate::state::room::Team,
            crate::words::Difficulty,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "room", description = "Room lifecycle: create, join, leave, info"),
        (name = "game", description = "Gameplay: start, state, words, guesses, rotation"),
    )
)]
pub struct ApiDoc;
