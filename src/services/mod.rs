/// OpenAPI documentation generation.
pub mod documentation;
/// Gameplay orchestration: start, state, words, guesses, rotation.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Room lifecycle: create, join, leave, info.
pub mod room_service;
