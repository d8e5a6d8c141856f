pub mod credential_service;
pub mod joke_service;
pub mod leaderboard_service;
pub mod player_service;
