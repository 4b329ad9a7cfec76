use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Everything a proxy endpoint can fail with. Each variant renders as
/// `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// The provider answered with a non-2xx status.
    #[error("{message}")]
    Upstream { status: u16, message: &'static str },

    /// The provider answered with a non-2xx status; always a 500 here.
    #[error("{message}")]
    UpstreamMasked { message: &'static str },

    #[error("No quote data available")]
    NoQuote,

    #[error("No market data for `{0}`")]
    NotFound(String),

    /// Transport or decoding failure talking to the provider. The request URL
    /// is stripped before it gets here.
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("{0}")]
    Internal(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        ProxyError::Request(e.without_url())
    }
}

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Upstream { status, .. } => match StatusCode::from_u16(*status) {
                Ok(code) if code.is_client_error() || code.is_server_error() => code,
                _ => StatusCode::BAD_GATEWAY,
            },
            ProxyError::NotFound(_) => StatusCode::NOT_FOUND,
            ProxyError::UpstreamMasked { .. }
            | ProxyError::NoQuote
            | ProxyError::Request(_)
            | ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
