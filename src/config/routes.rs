use crate::routes::game_routes::configure_game_routes;
use crate::routes::leaderboard_routes::configure_leaderboard_routes;
use crate::routes::user_routes::configure_user_routes;
use actix_files::Files;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_user_routes)
        .configure(configure_game_routes)
        .configure(configure_leaderboard_routes);
}

/// Mounted after the application routes so `/` still resolves to the login page.
pub fn configure_static_files(static_dir: String) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.service(Files::new("/", static_dir));
    }
}
