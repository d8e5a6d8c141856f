use crate::error::AppError;
use crate::services::leaderboard_service::fetch_leaderboard;
use crate::state::AppState;
use crate::templates::{render, LeaderboardTemplate};

use actix_web::{web, HttpResponse};

pub async fn get_leaderboard(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = fetch_leaderboard(state.players.as_ref()).await?;

    render(&LeaderboardTemplate { entries })
}
