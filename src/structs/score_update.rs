use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Body of `POST /update`, accepted as JSON or url-encoded form.
#[derive(Debug, Deserialize)]
pub struct ScoreUpdateRequest {
    pub username: String,
    #[serde(deserialize_with = "clicks_from_number_or_string")]
    pub clicks: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ClicksInput {
    Number(i64),
    Text(String),
}

// Form bodies always carry strings, JSON clients may send either.
fn clicks_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match ClicksInput::deserialize(deserializer)? {
        ClicksInput::Number(n) => Ok(n),
        ClicksInput::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| D::Error::custom(format!("clicks must be an integer, got {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_json() {
        let req: ScoreUpdateRequest =
            serde_json::from_str(r#"{"username":"alice","clicks":42}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert_eq!(req.clicks, 42);
    }

    #[test]
    fn accepts_string_json() {
        let req: ScoreUpdateRequest =
            serde_json::from_str(r#"{"username":"alice","clicks":"17"}"#).unwrap();
        assert_eq!(req.clicks, 17);
    }

    #[test]
    fn rejects_non_numeric_clicks() {
        let result =
            serde_json::from_str::<ScoreUpdateRequest>(r#"{"username":"alice","clicks":"lots"}"#);
        assert!(result.is_err());
    }
}
