//! Server-rendered views. Sources live in the crate-level `templates/`
//! directory and are compiled in; askama escapes every `{{ }}` expression.

use actix_web::HttpResponse;
use askama::Template;

use crate::error::AppError;
use crate::models::leaderboard::LeaderboardEntry;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub error: &'a str,
    pub joke: Option<String>,
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate<'a> {
    pub error: &'a str,
}

#[derive(Template)]
#[template(path = "game.html")]
pub struct GameTemplate<'a> {
    pub username: &'a str,
    pub user_clicks: i64,
}

#[derive(Template)]
#[template(path = "leaderboard.html")]
pub struct LeaderboardTemplate {
    pub entries: Vec<LeaderboardEntry>,
}

pub fn render<T: Template>(template: &T) -> Result<HttpResponse, AppError> {
    let body = template.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}
