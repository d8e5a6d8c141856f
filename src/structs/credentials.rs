use serde::Deserialize;

/// Login and registration form body.
#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub name: String,
    pub password: String,
}
