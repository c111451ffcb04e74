use crate::utils::{format_count, format_iso8601_date, or_na};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Subset of the YouTube Data API payloads relayed by the backend. Everything is optional
// upstream, so every field defaults.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub id: SearchItemId,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItemId {
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<ChannelItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelItem {
    pub id: Option<String>,
    #[serde(default)]
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
    #[serde(default)]
    pub status: ChannelStatus,
    #[serde(default)]
    pub branding_settings: BrandingSettings,
    #[serde(default)]
    pub content_details: ContentDetails,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSnippet {
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_url: Option<String>,
    pub published_at: Option<String>,
    pub country: Option<String>,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Thumbnail {
    pub url: Option<String>,
}

/// Counts arrive as decimal strings; plain numbers are tolerated too.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatistics {
    #[serde(default, deserialize_with = "string_or_number")]
    pub view_count: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub subscriber_count: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub video_count: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStatus {
    pub is_linked: Option<bool>,
    pub verified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrandingSettings {
    #[serde(default)]
    pub channel: BrandingChannel,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingChannel {
    pub keywords: Option<String>,
    pub custom_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetails {
    #[serde(default)]
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelatedPlaylists {
    pub uploads: Option<String>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Error body returned by the relay: `{ "error": ..., "details"?: ... }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RelayErrorBody {
    #[serde(default)]
    pub error: Value,
    #[serde(default)]
    pub details: Option<Value>,
}

impl RelayErrorBody {
    /// Picks the most specific human-readable text: textual details, then the
    /// upstream API's own `error.message`, then the relay's `error` string.
    pub fn user_message(&self) -> Option<String> {
        let from_details = match &self.details {
            Some(Value::String(text)) => non_blank(text),
            Some(details) => details["error"]["message"].as_str().and_then(non_blank),
            None => None,
        };

        from_details.or_else(|| match &self.error {
            Value::String(text) => non_blank(text),
            other => other["message"].as_str().and_then(non_blank),
        })
    }
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The display fields pulled out of a channel details item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChannelRecord {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub custom_url: Option<String>,
    pub subscriber_count: Option<String>,
    pub video_count: Option<String>,
    pub view_count: Option<String>,
    pub published_at: Option<String>,
    pub thumbnail_url: Option<String>,
    pub country: Option<String>,
    pub is_linked: bool,
    pub verified: bool,
    pub uploads_playlist: Option<String>,
    pub keywords: Option<String>,
}

impl From<&ChannelItem> for ChannelRecord {
    fn from(item: &ChannelItem) -> Self {
        let snippet = &item.snippet;
        let thumbnails = &snippet.thumbnails;
        let branding = &item.branding_settings.channel;

        ChannelRecord {
            id: present(&item.id),
            title: present(&snippet.title),
            description: present(&snippet.description),
            custom_url: present(&snippet.custom_url).or_else(|| present(&branding.custom_url)),
            subscriber_count: present(&item.statistics.subscriber_count),
            video_count: present(&item.statistics.video_count),
            view_count: present(&item.statistics.view_count),
            published_at: present(&snippet.published_at),
            thumbnail_url: [&thumbnails.default, &thumbnails.medium, &thumbnails.high]
                .into_iter()
                .flatten()
                .find_map(|thumbnail| present(&thumbnail.url)),
            country: present(&snippet.country),
            is_linked: item.status.is_linked.unwrap_or(false),
            verified: item.status.verified.unwrap_or(false),
            uploads_playlist: present(&item.content_details.related_playlists.uploads),
            keywords: present(&branding.keywords),
        }
    }
}

// Blank strings are treated the same as absent ones.
fn present(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(non_blank)
}

impl ChannelRecord {
    /// Label/value rows for the analytics grid, "N/A" standing in for anything absent.
    pub fn display_rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Channel ID", or_na(self.id.clone())),
            ("Channel Title", or_na(self.title.clone())),
            ("Description", or_na(self.description.clone())),
            ("Custom URL", or_na(self.custom_url.clone())),
            ("Subscribers", or_na(self.subscriber_count.as_deref().map(format_count))),
            ("Video Count", or_na(self.video_count.as_deref().map(format_count))),
            ("Views", or_na(self.view_count.as_deref().map(format_count))),
            (
                "Creation Date",
                or_na(self.published_at.as_deref().map(format_iso8601_date)),
            ),
            ("Country", or_na(self.country.clone())),
            ("Status", self.status_label()),
            ("Related Playlists", or_na(self.uploads_playlist.clone())),
            ("Keywords", or_na(self.keywords.clone())),
        ]
    }

    pub fn status_label(&self) -> String {
        format!(
            "{} | {}",
            if self.is_linked { "Active" } else { "Inactive" },
            if self.verified { "Verified" } else { "Not Verified" }
        )
    }
}
