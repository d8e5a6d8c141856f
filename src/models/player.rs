use mongodb::bson::Bson;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub username: String,
    /// bcrypt hash, never the plaintext.
    pub password: String,
    #[serde(default, deserialize_with = "lenient_clicks")]
    pub clicks: i64,
}

impl Player {
    pub fn new(username: String, password_hash: String) -> Self {
        Player {
            username,
            password: password_hash,
            clicks: 0,
        }
    }
}

/// What the update endpoint echoes back; the password hash stays server-side.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PlayerSummary {
    pub username: String,
    pub clicks: i64,
}

impl From<Player> for PlayerSummary {
    fn from(player: Player) -> Self {
        PlayerSummary {
            username: player.username,
            clicks: player.clicks,
        }
    }
}

// Older documents may carry clicks as a string, a double, or null.
fn lenient_clicks<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Bson>::deserialize(deserializer)?;

    Ok(match value {
        Some(Bson::Int32(n)) => i64::from(n),
        Some(Bson::Int64(n)) => n,
        Some(Bson::Double(n)) if n.is_finite() => n as i64,
        Some(Bson::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
