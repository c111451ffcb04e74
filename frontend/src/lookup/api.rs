use crate::env_variable_utils::BACKEND_URL;
use crate::lookup::flow::LookupError;
use crate::models::{ChannelListResponse, RelayErrorBody, SearchListResponse};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

/// The two read calls the relay exposes.
#[allow(async_fn_in_trait)]
pub trait RelayApi {
    async fn search(&self, query: &str) -> Result<SearchListResponse, LookupError>;

    async fn channel_details(&self, channel_id: &str) -> Result<ChannelListResponse, LookupError>;
}

pub struct HttpRelay {
    backend_url: String,
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(&BACKEND_URL)
    }
}

impl HttpRelay {
    pub fn new(backend_url: &str) -> Self {
        HttpRelay {
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/api/search?q={}",
            self.backend_url,
            urlencoding::encode(query)
        )
    }

    pub fn channel_url(&self, channel_id: &str) -> String {
        format!(
            "{}/api/channel?id={}",
            self.backend_url,
            urlencoding::encode(channel_id)
        )
    }
}

impl RelayApi for HttpRelay {
    async fn search(&self, query: &str) -> Result<SearchListResponse, LookupError> {
        get_json(&self.search_url(query)).await
    }

    async fn channel_details(&self, channel_id: &str) -> Result<ChannelListResponse, LookupError> {
        get_json(&self.channel_url(channel_id)).await
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, LookupError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| LookupError::Network(e.to_string()))?;

    if response.ok() {
        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Decode(e.to_string()))
    } else {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Err(relay_failure(status, &text))
    }
}

/// Turns a non-2xx relay answer into the message shown to the user.
pub fn relay_failure(status: u16, body: &str) -> LookupError {
    let message = serde_json::from_str::<RelayErrorBody>(body)
        .ok()
        .and_then(|error| error.user_message())
        .unwrap_or_else(|| format!("Request failed with status {status}"));
    LookupError::Relay { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_encoded_against_the_backend() {
        let relay = HttpRelay::new("http://localhost:8000/");
        assert_eq!(
            relay.search_url("Linus Tech Tips"),
            "http://localhost:8000/api/search?q=Linus%20Tech%20Tips"
        );
        assert_eq!(
            relay.channel_url("UC123&x=1"),
            "http://localhost:8000/api/channel?id=UC123%26x%3D1"
        );
    }

    #[test]
    fn upstream_message_is_surfaced() {
        let body = r#"{"error":"YouTube API Error","details":{"error":{"code":403,"message":"API key not valid."}}}"#;
        assert_eq!(
            relay_failure(403, body),
            LookupError::Relay {
                status: 403,
                message: "API key not valid.".to_string()
            }
        );
    }

    #[test]
    fn not_found_message_is_surfaced() {
        assert_eq!(
            relay_failure(404, r#"{"error":"No channels found"}"#).to_string(),
            "No channels found"
        );
    }

    #[test]
    fn unreadable_body_falls_back_to_status() {
        assert_eq!(
            relay_failure(502, "<html>Bad Gateway</html>").to_string(),
            "Request failed with status 502"
        );
    }
}
