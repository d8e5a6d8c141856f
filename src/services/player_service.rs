use crate::error::AppError;
use crate::models::player::{Player, PlayerSummary};
use crate::repositories::player_repository::{InsertOutcome, PlayerStore};
use crate::services::credential_service::{hash_password, verify_password};
use tracing::info;

#[derive(Debug, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    UsernameTaken,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated,
    UserNotFound,
    InvalidPassword,
}

/// Cheap lookup first so a taken name costs no hashing, then an atomic insert
/// that still reports a name claimed in between.
pub async fn register_player(
    store: &dyn PlayerStore,
    username: &str,
    password: String,
) -> Result<RegisterOutcome, AppError> {
    if store.find_by_username(username).await?.is_some() {
        return Ok(RegisterOutcome::UsernameTaken);
    }

    let hashed_password = hash_password(password).await?;
    let player = Player::new(username.to_string(), hashed_password);

    match store.insert_if_absent(player).await? {
        InsertOutcome::Inserted => {
            info!(username, "registered new player");
            Ok(RegisterOutcome::Created)
        }
        InsertOutcome::UsernameTaken => Ok(RegisterOutcome::UsernameTaken),
    }
}

pub async fn authenticate_player(
    store: &dyn PlayerStore,
    username: &str,
    password: String,
) -> Result<LoginOutcome, AppError> {
    let player = match store.find_by_username(username).await? {
        Some(player) => player,
        None => return Ok(LoginOutcome::UserNotFound),
    };

    let valid = verify_password(password, player.password).await?;

    if valid {
        Ok(LoginOutcome::Authenticated)
    } else {
        Ok(LoginOutcome::InvalidPassword)
    }
}

pub async fn fetch_player(store: &dyn PlayerStore, username: &str) -> Result<Player, AppError> {
    store
        .find_by_username(username)
        .await?
        .ok_or(AppError::UserNotFound)
}

/// Absolute overwrite of the click count; lower values are accepted.
pub async fn save_player_clicks(
    store: &dyn PlayerStore,
    username: &str,
    clicks: i64,
) -> Result<PlayerSummary, AppError> {
    let player = store
        .set_clicks(username, clicks)
        .await?
        .ok_or(AppError::UserNotFound)?;

    info!(username, clicks, "updated player clicks");

    Ok(PlayerSummary::from(player))
}
