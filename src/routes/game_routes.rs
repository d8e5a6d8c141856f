use crate::controllers::game_controller::{play, update_clicks};
use actix_web::web;

pub fn configure_game_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/play", web::get().to(play))
        .route("/update", web::post().to(update_clicks));
}
