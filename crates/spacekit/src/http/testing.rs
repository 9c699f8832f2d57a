use super::{Response, Transport};
use crate::observability::logging::Logger;
use crate::{Client, Result};
use bytes::Bytes;
use parking_lot::Mutex;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::StatusCode;
use std::collections::VecDeque;
use std::sync::Arc;
use url::Url;

/// Replays canned responses in FIFO order and records every requested URL
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    imp: Arc<MockTransportImp>,
}

#[derive(Default)]
struct MockTransportImp {
    responses: Mutex<VecDeque<MockResponse>>,
    requests: Mutex<Vec<Url>>,
}

pub(crate) struct MockResponse {
    status: u16,
    headers: HeaderMap,
    body: Bytes,
}

impl MockResponse {
    pub(crate) fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    pub(crate) fn json(status: u16, body: serde_json::Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub(crate) fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.insert(name, HeaderValue::from_static(value));
        self
    }
}

impl MockTransport {
    pub(crate) fn respond(&self, response: MockResponse) -> &Self {
        self.imp.responses.lock().push_back(response);
        self
    }

    pub(crate) fn requests(&self) -> Vec<Url> {
        self.imp.requests.lock().clone()
    }

    /// Creates a client with fake credentials that talks to this transport
    pub(crate) fn client(&self) -> Client {
        Client::builder()
            .api_key("TEST_KEY")
            .weather_api_key("WEATHER_KEY")
            .logger(Logger::inherit())
            .build_with_transport(self.clone())
    }

    /// Same as [`Self::client()`], but without the weather service key
    pub(crate) fn client_without_weather_key(&self) -> Client {
        Client::builder()
            .api_key("TEST_KEY")
            .build_with_transport(self.clone())
    }
}

impl Transport for MockTransport {
    fn get(&self, url: Url) -> Result<Response> {
        self.imp.requests.lock().push(url.clone());

        let response = self
            .imp
            .responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected request to {url}"));

        Ok(Response {
            status: StatusCode::from_u16(response.status).unwrap(),
            url,
            headers: response.headers,
            body: response.body,
        })
    }
}

/// Returns the value of the query parameter with the given name
pub(crate) fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}
