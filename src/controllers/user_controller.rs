use crate::constants::{INVALID_PASSWORD, USERNAME_TAKEN, USER_NOT_FOUND_LOGIN};
use crate::error::AppError;
use crate::services::joke_service::fetch_joke;
use crate::services::player_service::{
    authenticate_player, register_player, LoginOutcome, RegisterOutcome,
};
use crate::state::AppState;
use crate::structs::credentials::CredentialsForm;
use crate::templates::{render, LoginTemplate, RegisterTemplate};
use crate::utils::helpers::redirect_to_play;

use actix_web::{web, HttpResponse};

pub async fn index(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let joke = fetch_joke(&state.http_client, &state.joke_api_url).await;

    render(&LoginTemplate {
        error: "",
        joke: Some(joke),
    })
}

pub async fn login_page() -> Result<HttpResponse, AppError> {
    render(&LoginTemplate {
        error: "",
        joke: None,
    })
}

pub async fn register_page() -> Result<HttpResponse, AppError> {
    render(&RegisterTemplate { error: "" })
}

pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let CredentialsForm { name, password } = form.into_inner();

    let error = match authenticate_player(state.players.as_ref(), &name, password).await? {
        LoginOutcome::Authenticated => return Ok(redirect_to_play(&name)),
        LoginOutcome::UserNotFound => USER_NOT_FOUND_LOGIN,
        LoginOutcome::InvalidPassword => INVALID_PASSWORD,
    };

    let joke = fetch_joke(&state.http_client, &state.joke_api_url).await;

    render(&LoginTemplate {
        error,
        joke: Some(joke),
    })
}

pub async fn register(
    state: web::Data<AppState>,
    form: web::Form<CredentialsForm>,
) -> Result<HttpResponse, AppError> {
    let CredentialsForm { name, password } = form.into_inner();

    match register_player(state.players.as_ref(), &name, password).await? {
        RegisterOutcome::Created => Ok(redirect_to_play(&name)),
        RegisterOutcome::UsernameTaken => render(&RegisterTemplate {
            error: USERNAME_TAKEN,
        }),
    }
}
