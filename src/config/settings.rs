use std::{env, fmt::Display, str::FromStr};

use thiserror::Error;
use tracing::warn;

use crate::constants::{
    COLL_NAME, DB_NAME, DEFAULT_HOST, DEFAULT_JOKE_API_URL, DEFAULT_MONGODB_URI, DEFAULT_PORT,
    DEFAULT_STATIC_DIR,
};

#[derive(Debug, Error)]
#[error("invalid value for {key}: {message}")]
pub struct SettingsError {
    pub key: &'static str,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub mongodb_uri: String,
    pub db_name: String,
    pub collection_name: String,
    pub host: String,
    pub port: u16,
    pub static_dir: String,
    pub joke_api_url: String,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup, falling back to defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            mongodb_uri: string_or_default(&lookup, "MONGO_CONNECTION_STRING", DEFAULT_MONGODB_URI),
            db_name: string_or_default(&lookup, "MONGO_DB_NAME", DB_NAME),
            collection_name: string_or_default(&lookup, "MONGO_COLLECTION", COLL_NAME),
            host: string_or_default(&lookup, "HOST", DEFAULT_HOST),
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT)?,
            static_dir: string_or_default(&lookup, "STATIC_DIR", DEFAULT_STATIC_DIR),
            joke_api_url: string_or_default(&lookup, "JOKE_API_URL", DEFAULT_JOKE_API_URL),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn string_or_default<F>(lookup: &F, key: &str, default: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value,
        None => {
            warn!("{key} not set, using default: {default}");
            default.to_string()
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, SettingsError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| SettingsError {
            key,
            message: e.to_string(),
        }),
        None => {
            warn!("{key} not set, using default: {default}");
            Ok(default)
        }
    }
}
