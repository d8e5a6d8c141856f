use crate::constants::LEADERBOARD_SIZE;
use crate::error::AppError;
use crate::models::leaderboard::LeaderboardEntry;
use crate::repositories::player_repository::PlayerStore;

pub async fn fetch_leaderboard(store: &dyn PlayerStore) -> Result<Vec<LeaderboardEntry>, AppError> {
    let players = store.top_by_clicks(LEADERBOARD_SIZE).await?;

    Ok(players.into_iter().map(LeaderboardEntry::from).collect())
}
