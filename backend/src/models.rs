use rocket::serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON body of every failed relay call: `{ "error": ..., "details"?: ... }`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Which upstream resource a relay call targets, with the message used when it comes back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamResource {
    ChannelSearch,
    ChannelDetails,
}

impl UpstreamResource {
    pub fn path(&self) -> &'static str {
        match self {
            UpstreamResource::ChannelSearch => "search",
            UpstreamResource::ChannelDetails => "channels",
        }
    }

    pub fn not_found_message(&self) -> &'static str {
        match self {
            UpstreamResource::ChannelSearch => "No channels found",
            UpstreamResource::ChannelDetails => "Channel details not found",
        }
    }
}
