use crate::error::AppError;
use crate::services::player_service::{fetch_player, save_player_clicks};
use crate::state::AppState;
use crate::structs::play_query::PlayQuery;
use crate::structs::score_update::ScoreUpdateRequest;
use crate::templates::{render, GameTemplate};

use actix_web::{web, Either, HttpResponse};

pub async fn play(
    state: web::Data<AppState>,
    query: web::Query<PlayQuery>,
) -> Result<HttpResponse, AppError> {
    let username = query.username.as_deref().ok_or(AppError::UserNotFound)?;
    let player = fetch_player(state.players.as_ref(), username).await?;

    render(&GameTemplate {
        username: &player.username,
        user_clicks: player.clicks,
    })
}

pub async fn update_clicks(
    state: web::Data<AppState>,
    body: Either<web::Json<ScoreUpdateRequest>, web::Form<ScoreUpdateRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = match body {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let player =
        save_player_clicks(state.players.as_ref(), &request.username, request.clicks).await?;

    Ok(HttpResponse::Ok().json(player))
}
