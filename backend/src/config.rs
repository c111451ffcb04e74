use anyhow::{anyhow, Context, Result};
use env_logger::Builder;
use log::{info, LevelFilter};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use std::env;
use url::Url;

pub const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Settings the relay needs before it may serve a single request.
#[derive(Clone)]
pub struct RelayConfig {
    pub api_key: String,
    pub upstream_base_url: Url,
    pub port: Option<u16>,
    /// `None` means every origin is allowed.
    pub allowed_origins: Option<Vec<String>>,
}

// The key never shows up in logs, not even through a stray `{:?}`.
impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("api_key", &"<redacted>")
            .field("upstream_base_url", &self.upstream_base_url.as_str())
            .field("port", &self.port)
            .field("allowed_origins", &self.allowed_origins)
            .finish()
    }
}

impl RelayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key = non_blank("YOUTUBE_API_KEY")
            .or_else(|| non_blank("API_KEY"))
            .ok_or_else(|| anyhow!("YOUTUBE_API_KEY environment variable must be set"))?
            .trim()
            .to_string();

        let base = non_blank("YOUTUBE_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE_URL.to_string());
        let upstream_base_url = parse_base_url(base.trim())?;

        let port = match non_blank("PORT") {
            Some(port) => Some(
                port.trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a valid port number, got \"{port}\""))?,
            ),
            None => None,
        };

        let allowed_origins = non_blank("CORS_ALLOWED_ORIGINS").and_then(|origins| {
            let origins: Vec<String> = origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
            if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
                None
            } else {
                Some(origins)
            }
        });

        Ok(RelayConfig {
            api_key,
            upstream_base_url,
            port,
            allowed_origins,
        })
    }
}

/// Endpoint paths are joined onto the base, so it has to end with a slash.
fn parse_base_url(raw: &str) -> Result<Url> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash)
        .with_context(|| format!("YOUTUBE_API_BASE_URL is not a valid URL: \"{raw}\""))?;
    if url.cannot_be_a_base() {
        return Err(anyhow!("YOUTUBE_API_BASE_URL cannot be used as a base: \"{raw}\""));
    }
    Ok(url)
}

pub fn init_logger() {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_env("RUST_LOG")
        .init();
    info!("Starting channel relay...");
}

pub fn load_environment() {
    dotenv::dotenv().ok();
}

pub fn create_cors(config: &RelayConfig) -> Result<rocket_cors::Cors> {
    let allowed_origins = match &config.allowed_origins {
        Some(origins) => AllowedOrigins::some_exact(origins.as_slice()),
        None => AllowedOrigins::all(),
    };

    let cors = CorsOptions::default()
        .allowed_origins(allowed_origins)
        .allowed_methods(
            vec![Method::Get, Method::Options]
                .into_iter()
                .map(From::from)
                .collect(),
        )
        .allowed_headers(AllowedHeaders::some(&["Accept", "Content-Type"]))
        .allow_credentials(false)
        .to_cors()
        .map_err(|e| anyhow!("Failed to create CORS options: {}", e))?;

    Ok(cors)
}
