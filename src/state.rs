use std::sync::Arc;
use std::time::Duration;

use crate::repositories::player_repository::PlayerStore;

const JOKE_TIMEOUT: Duration = Duration::from_secs(5);

/// Shared across workers through `web::Data`.
pub struct AppState {
    pub players: Arc<dyn PlayerStore>,
    pub http_client: reqwest::Client,
    pub joke_api_url: String,
}

impl AppState {
    pub fn new(players: Arc<dyn PlayerStore>, joke_api_url: String) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(JOKE_TIMEOUT).build()?;

        Ok(AppState {
            players,
            http_client,
            joke_api_url,
        })
    }
}
