use crate::models::ErrorResponse;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde_json::Value;
use thiserror::Error;

/// Every way a relay call can fail. None of them are retried.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    Validation(String),

    /// Non-success answer from the YouTube Data API, passed through as-is.
    #[error("YouTube API Error")]
    Upstream { status: u16, body: Value },

    #[error("{0}")]
    NotFound(String),

    /// Network failure, or a success response whose body was not JSON.
    #[error("Something went wrong")]
    Transport(String),
}

impl RelayError {
    pub fn status(&self) -> Status {
        match self {
            RelayError::Validation(_) => Status::BadRequest,
            RelayError::Upstream { status, .. } => upstream_status(*status),
            RelayError::NotFound(_) => Status::NotFound,
            RelayError::Transport(_) => Status::InternalServerError,
        }
    }

    pub fn body(&self) -> ErrorResponse {
        let details = match self {
            RelayError::Upstream { body, .. } => Some(body.clone()),
            RelayError::Transport(message) => Some(Value::String(message.clone())),
            RelayError::Validation(_) | RelayError::NotFound(_) => None,
        };
        ErrorResponse {
            error: self.to_string(),
            details,
        }
    }
}

// Rocket only accepts codes in 100..=599; anything else from upstream is a bad gateway.
fn upstream_status(code: u16) -> Status {
    if (100..600).contains(&code) {
        Status::new(code)
    } else {
        Status::BadGateway
    }
}

// The URL is dropped first: it carries the API key.
impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        RelayError::Transport(e.without_url().to_string())
    }
}

impl<'r> Responder<'r, 'static> for RelayError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status(), Json(self.body())).respond_to(request)
    }
}
