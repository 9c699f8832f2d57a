#[cfg(test)]
pub(crate) mod testing;

use crate::prelude::*;
use crate::{err, err_ctx, Result};
use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

const USER_AGENT: &str = concat!("spacekit/", env!("CARGO_PKG_VERSION"));

/// Issues blocking HTTP GET requests on behalf of the [`Client`](crate::Client).
///
/// The default implementation is [`ReqwestTransport`]. Swap it to stub out
/// the network.
pub trait Transport: Send {
    /// Sends a GET request to the given URL and collects the whole response.
    /// Non-success status codes must not be treated as errors here.
    fn get(&self, url: Url) -> Result<Response>;
}

/// Fully collected HTTP response
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,

    /// URL of the response after following the redirects
    pub url: Url,

    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    /// Human-readable description of the status code, e.g. `Not Found`
    pub fn reason(&self) -> &'static str {
        self.status.canonical_reason().unwrap_or("<unknown status>")
    }

    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub(crate) fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|err| {
            match std::str::from_utf8(&self.body) {
                Ok(response_body) => warn!(%response_body, "Bad JSON response"),
                Err(utf8_decode_err) => warn!(
                    response_body = ?self.body,
                    ?utf8_decode_err,
                    "Bad JSON response"
                ),
            };
            err!(HttpClientError::UnexpectedResponseJsonShape { source: err })
        })
    }

    pub(crate) fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

/// [`Transport`] that uses a blocking [`reqwest`] client
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .fatal_ctx(|| "Failed to create an HTTP client")?;

        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: Url) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(err_ctx!(HttpClientError::Request))?;

        let status = response.status();
        let url = response.url().clone();
        let headers = response.headers().clone();

        let body = response
            .bytes()
            .map_err(err_ctx!(HttpClientError::ReadPayload))?;

        Ok(Response {
            status,
            url,
            headers,
            body,
        })
    }
}

/// Errors at the layer of the HTTP API
#[derive(Debug, thiserror::Error)]
pub enum HttpClientError {
    #[error("HTTP request failed")]
    Request { source: reqwest::Error },

    #[error("Failed to read HTTP response")]
    ReadPayload { source: reqwest::Error },

    #[error("HTTP request has failed (HTTP status code: {status}):\n{body}")]
    BadResponseStatusCode {
        status: StatusCode,
        reason: String,
        body: String,
    },

    #[error("Received an unexpected response JSON object")]
    UnexpectedResponseJsonShape { source: serde_json::Error },
}

impl HttpClientError {
    /// Returns the status code if the server responded with an error status
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::BadResponseStatusCode { status, .. } => Some(*status),
            Self::Request { source } | Self::ReadPayload { source } => source.status(),
            Self::UnexpectedResponseJsonShape { .. } => None,
        }
    }
}
