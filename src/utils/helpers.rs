use actix_web::{http::header, HttpResponse};
use url::form_urlencoded::byte_serialize;

pub fn play_location(username: &str) -> String {
    let encoded: String = byte_serialize(username.as_bytes()).collect();
    format!("/play?username={encoded}")
}

pub fn redirect_to_play(username: &str) -> HttpResponse {
    HttpResponse::Found()
        .append_header((header::LOCATION, play_location(username)))
        .finish()
}
