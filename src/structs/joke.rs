use serde::Deserialize;

/// Shape returned by the random joke API. Extra fields are ignored.
#[derive(Debug, Deserialize)]
pub struct JokeResponse {
    pub setup: String,
    pub punchline: String,
}
