use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;
use clicker_server::error::StoreError;
use clicker_server::models::player::Player;
use clicker_server::repositories::player_repository::{InsertOutcome, PlayerStore};
use clicker_server::state::AppState;

/// Nothing listens on the discard port, so joke fetches take the fallback path.
pub const UNREACHABLE_JOKE_API: &str = "http://127.0.0.1:9/random_joke";

#[derive(Default)]
pub struct MemoryPlayerStore {
    players: Mutex<Vec<Player>>,
}

impl MemoryPlayerStore {
    pub fn seeded(players: &[(&str, i64)]) -> Self {
        let store = MemoryPlayerStore::default();
        {
            let mut guard = store.players.lock().unwrap();
            for (username, clicks) in players {
                guard.push(Player {
                    username: username.to_string(),
                    password: "not-a-real-hash".to_string(),
                    clicks: *clicks,
                });
            }
        }
        store
    }

    pub fn count_named(&self, username: &str) -> usize {
        self.players
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.username == username)
            .count()
    }

    pub fn get(&self, username: &str) -> Option<Player> {
        self.players
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.username == username)
            .cloned()
    }
}

#[async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<Player>, StoreError> {
        Ok(self.get(username))
    }

    async fn insert_if_absent(&self, player: Player) -> Result<InsertOutcome, StoreError> {
        let mut players = self.players.lock().unwrap();
        if players.iter().any(|p| p.username == player.username) {
            return Ok(InsertOutcome::UsernameTaken);
        }
        players.push(player);
        Ok(InsertOutcome::Inserted)
    }

    async fn set_clicks(&self, username: &str, clicks: i64) -> Result<Option<Player>, StoreError> {
        let mut players = self.players.lock().unwrap();
        Ok(players.iter_mut().find(|p| p.username == username).map(|p| {
            p.clicks = clicks;
            p.clone()
        }))
    }

    async fn top_by_clicks(&self, limit: i64) -> Result<Vec<Player>, StoreError> {
        let mut players = self.players.lock().unwrap().clone();
        players.sort_by(|a, b| b.clicks.cmp(&a.clicks));
        players.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(players)
    }
}

pub fn app_state(store: Arc<MemoryPlayerStore>) -> web::Data<AppState> {
    let state = AppState::new(store, UNREACHABLE_JOKE_API.to_string()).unwrap();
    web::Data::new(state)
}
