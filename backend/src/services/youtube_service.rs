use crate::config::RelayConfig;
use crate::errors::RelayError;
use crate::models::UpstreamResource;
use log::{error, info, warn};
use reqwest::Client;
use serde_json::Value;
use url::Url;

const UNREADABLE_ERROR_BODY: &str = "Failed to read YouTube API error body";
const CHANNEL_PARTS: &str = "snippet,statistics,status,brandingSettings,contentDetails";

/// Talks to the YouTube Data API on behalf of the browser, attaching the server-held key.
pub struct YoutubeClient {
    http: Client,
    base_url: Url,
    api_key: String,
}

impl YoutubeClient {
    pub fn new(config: &RelayConfig) -> Self {
        YoutubeClient {
            http: Client::new(),
            base_url: config.upstream_base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    // Documentation: https://developers.google.com/youtube/v3/docs/search/list
    pub async fn search_channels(&self, query: &str) -> Result<Value, RelayError> {
        info!("Searching YouTube channels for: {query}");
        self.fetch(
            UpstreamResource::ChannelSearch,
            &[("part", "snippet"), ("q", query), ("type", "channel")],
        )
        .await
    }

    // Documentation: https://developers.google.com/youtube/v3/docs/channels/list
    pub async fn channel_details(&self, channel_id: &str) -> Result<Value, RelayError> {
        info!("Fetching channel details for: {channel_id}");
        self.fetch(
            UpstreamResource::ChannelDetails,
            &[("part", CHANNEL_PARTS), ("id", channel_id)],
        )
        .await
    }

    async fn fetch(
        &self,
        resource: UpstreamResource,
        params: &[(&str, &str)],
    ) -> Result<Value, RelayError> {
        let url = self.endpoint(resource, params)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(resource, "Error fetching", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await.map_err(reqwest::Error::without_url));
            warn!("YouTube API Error ({}): {body}", status.as_u16());
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let data = response
            .json::<Value>()
            .await
            .map_err(|e| transport_error(resource, "Failed to parse", e))?;

        if !has_items(&data) {
            info!("{} for {}", resource.not_found_message(), resource.path());
            return Err(RelayError::NotFound(resource.not_found_message().to_string()));
        }

        Ok(data)
    }

    /// Builds the request URL. Values are percent-encoded; the key is appended last.
    fn endpoint(
        &self,
        resource: UpstreamResource,
        params: &[(&str, &str)],
    ) -> Result<Url, RelayError> {
        let mut url = self
            .base_url
            .join(resource.path())
            .map_err(|e| RelayError::Transport(format!("Invalid upstream URL: {e}")))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().copied())
            .append_pair("key", &self.api_key);
        Ok(url)
    }
}

/// reqwest puts the request URL, key included, into its error text; it is stripped before
/// the error is logged or sent back to the browser.
fn transport_error(resource: UpstreamResource, action: &str, e: reqwest::Error) -> RelayError {
    let e = e.without_url();
    error!("{action} {} from YouTube API: {e}", resource.path());
    RelayError::from(e)
}

/// Upstream error bodies are relayed as JSON when they parse, otherwise as text.
fn error_body<E: std::fmt::Display>(read: Result<String, E>) -> Value {
    match read {
        Ok(text) => serde_json::from_str::<Value>(&text).unwrap_or(Value::String(text)),
        Err(e) => {
            warn!("Failed to read YouTube API error body: {e}");
            Value::String(UNREADABLE_ERROR_BODY.to_string())
        }
    }
}

fn has_items(data: &Value) -> bool {
    data["items"]
        .as_array()
        .map(|items| !items.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> YoutubeClient {
        let config = RelayConfig::from_lookup(|key| match key {
            "YOUTUBE_API_KEY" => Some("k3y".to_string()),
            _ => None,
        })
        .unwrap();
        YoutubeClient::new(&config)
    }

    #[test]
    fn search_url_encodes_query_and_appends_key() {
        let url = client()
            .endpoint(
                UpstreamResource::ChannelSearch,
                &[("part", "snippet"), ("q", "rust & co"), ("type", "channel")],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.googleapis.com/youtube/v3/search?part=snippet&q=rust+%26+co&type=channel&key=k3y"
        );
    }

    #[test]
    fn details_url_targets_channels_resource() {
        let url = client()
            .endpoint(
                UpstreamResource::ChannelDetails,
                &[("part", CHANNEL_PARTS), ("id", "UC123")],
            )
            .unwrap();
        assert_eq!(url.path(), "/youtube/v3/channels");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("id".to_string(), "UC123".to_string())));
        assert!(pairs.contains(&("part".to_string(), CHANNEL_PARTS.to_string())));
    }

    #[test]
    fn error_bodies_keep_json_and_fall_back_to_text() {
        let upstream = json!({ "error": { "code": 400, "message": "keyInvalid" } });
        assert_eq!(error_body::<String>(Ok(upstream.to_string())), upstream);
        assert_eq!(
            error_body::<String>(Ok("backend unavailable".to_string())),
            json!("backend unavailable")
        );
    }

    #[test]
    fn unreadable_error_body_is_reported_not_blank() {
        assert_eq!(
            error_body(Err("connection reset mid-body")),
            json!(UNREADABLE_ERROR_BODY)
        );
    }

    #[test]
    fn items_must_be_a_non_empty_array() {
        assert!(has_items(&json!({ "items": [{}] })));
        assert!(!has_items(&json!({ "items": [] })));
        assert!(!has_items(&json!({ "pageInfo": {} })));
        assert!(!has_items(&json!({ "items": "nope" })));
    }
}
