#[macro_use]
extern crate rocket;

mod api;
mod config;
mod errors;
mod models;
mod services;

use crate::config::{create_cors, init_logger, load_environment, RelayConfig};
use crate::services::youtube_service::YoutubeClient;
use log::{error, info};
use rocket::{Build, Rocket};

pub struct AppState {
    pub youtube: YoutubeClient,
}

/// Assembles the relay: managed state, CORS and the two `/api` endpoints.
pub fn build_rocket(config: &RelayConfig) -> anyhow::Result<Rocket<Build>> {
    let cors = create_cors(config)?;
    let state = AppState {
        youtube: YoutubeClient::new(config),
    };

    let mut figment = rocket::Config::figment();
    if let Some(port) = config.port {
        figment = figment.merge(("port", port));
    }

    Ok(rocket::custom(figment)
        .manage(state)
        .attach(cors)
        .mount("/", routes![api::index])
        .mount("/api", routes![api::search, api::channel]))
}

#[launch]
fn rocket() -> _ {
    load_environment();
    init_logger();

    let config = match RelayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start: {e:#}");
            std::process::exit(1);
        }
    };
    info!(
        "Relaying to {} (origins: {})",
        config.upstream_base_url.host_str().unwrap_or("unknown host"),
        config
            .allowed_origins
            .as_ref()
            .map(|origins| origins.join(", "))
            .unwrap_or_else(|| "*".to_string())
    );

    match build_rocket(&config) {
        Ok(rocket) => rocket,
        Err(e) => {
            error!("Refusing to start: {e:#}");
            std::process::exit(1);
        }
    }
}
