use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct PlayQuery {
    /// Absent when the query string has no `username` at all, as opposed to `username=`.
    pub username: Option<String>,
}
