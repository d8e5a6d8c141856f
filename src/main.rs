use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use clicker_server::config::database::connect_to_mongodb;
use clicker_server::config::routes::{configure_routes, configure_static_files};
use clicker_server::config::settings::Settings;
use clicker_server::repositories::player_repository::MongoPlayerStore;
use clicker_server::state::AppState;
use dotenv::dotenv;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("clicker_server=info,actix_web=info")),
        )
        .with(fmt::layer())
        .init();

    let settings = Settings::load().map_err(std::io::Error::other)?;
    let address = settings.server_address();

    let mongodb_client = connect_to_mongodb(&settings)
        .await
        .map_err(std::io::Error::other)?;
    let store = MongoPlayerStore::new(
        &mongodb_client,
        &settings.db_name,
        &settings.collection_name,
    );
    store.ensure_indexes().await;

    let state = AppState::new(Arc::new(store), settings.joke_api_url.clone())
        .map_err(std::io::Error::other)?;
    let state = web::Data::new(state);
    let static_dir = settings.static_dir.clone();

    info!("Web server started and running at http://{address}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(configure_routes)
            .configure(configure_static_files(static_dir.clone()))
    })
    .bind(address)?
    .run()
    .await
}
