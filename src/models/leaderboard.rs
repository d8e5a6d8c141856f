use crate::models::player::Player;

#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardEntry {
    pub username: String,
    pub clicks: i64,
}

impl From<Player> for LeaderboardEntry {
    fn from(player: Player) -> Self {
        LeaderboardEntry {
            username: player.username,
            clicks: player.clicks,
        }
    }
}
