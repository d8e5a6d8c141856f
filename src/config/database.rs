use mongodb::Client;

use crate::config::settings::Settings;

/// Builds the process-wide client. The driver's pool connects lazily, so this
/// only fails on a malformed connection string.
pub async fn connect_to_mongodb(settings: &Settings) -> Result<Client, mongodb::error::Error> {
    Client::with_uri_str(&settings.mongodb_uri).await
}
