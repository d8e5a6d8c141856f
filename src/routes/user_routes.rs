use crate::controllers::user_controller::{index, login, login_page, register, register_page};
use actix_web::web;

pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/login", web::get().to(login_page))
        .route("/login", web::post().to(login))
        .route("/new", web::get().to(register_page))
        .route("/new", web::post().to(register));
}
