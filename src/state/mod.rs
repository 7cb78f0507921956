//! Shared application state: the live room registry and injected game resources.

pub mod room;
pub mod turn;

use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    config::AppConfig,
    state::room::{Room, generate_room_code},
    words::{Difficulty, WordPools},
};

/// Cheaply clonable handle to the application state.
pub type SharedState = Arc<AppState>;

/// Handle to one live room. The mutex is the per-room serialization point:
/// every mutating operation holds it for its whole read-modify-write, so
/// concurrent requests against one room observe consistent prior state.
///
/// A handle can outlive its registry entry when the last player leaves while
/// another request is parked on the mutex; after locking, services re-verify
/// the registry still maps the code to this room before touching it.
pub type RoomHandle = Arc<Mutex<Room>>;

/// Central application state: the room registry plus immutable resources.
pub struct AppState {
    rooms: DashMap<String, RoomHandle>,
    words: WordPools,
    config: AppConfig,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: AppConfig) -> SharedState {
        let words = WordPools::from_config(&config);
        Arc::new(Self {
            rooms: DashMap::new(),
            words,
            config,
        })
    }

    /// Runtime configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Injected word pools.
    pub fn words(&self) -> &WordPools {
        &self.words
    }

    /// Create and register a room under a fresh unique code, retrying code
    /// generation on collision.
    pub fn create_room(&self, creator_id: i64, creator_name: String, difficulty: Difficulty) -> String {
        loop {
            let code = generate_room_code();
            match self.rooms.entry(code.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(slot) => {
                    let room = Room::new(
                        code.clone(),
                        creator_id,
                        creator_name,
                        difficulty,
                        self.config.target_score(),
                    );
                    slot.insert(Arc::new(Mutex::new(room)));
                    info!(room = %code, creator = creator_id, "room created");
                    return code;
                }
            }
        }
    }

    /// Look up a live room by code.
    pub fn room(&self, code: &str) -> Option<RoomHandle> {
        self.rooms.get(code).map(|entry| entry.value().clone())
    }

    /// Drop a room from the registry (after its last player left).
    pub fn remove_room(&self, code: &str) {
        if self.rooms.remove(code).is_some() {
            info!(room = %code, "room deleted");
        }
    }

    /// Number of live rooms, reported by the health endpoint.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
