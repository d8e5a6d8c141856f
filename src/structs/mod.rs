pub mod credentials;
pub mod joke;
pub mod play_query;
pub mod score_update;
