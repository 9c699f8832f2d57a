use crate::http::{HttpClientError, ReqwestTransport, Response, Transport};
use crate::observability::logging::Logger;
use crate::prelude::*;
use crate::{err, Result};
use std::cell::Cell;
use std::time::Instant;
use url::Url;

/// Limited-access key that NASA hands out without registration
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Host of the NASA APIs that require the `api_key` and report the quota
pub(crate) const NASA_API_HOST: &str = "api.nasa.gov";

const RATE_LIMIT_REMAINING_HEADER: &str = "X-RateLimit-Remaining";

/// Client for the NASA open APIs and a few related services.
///
/// Every method issues blocking requests on the calling thread. The client
/// remembers the remaining NASA API quota from the last successful response,
/// so it is not [`Sync`]: use separate instances per thread. A client can be
/// moved to another thread though.
pub struct Client {
    api_key: String,
    weather_api_key: Option<String>,
    limit_remaining: Cell<Option<u64>>,
    transport: Box<dyn Transport>,
    logger: Logger,
}

pub struct ClientBuilder {
    api_key: String,
    weather_api_key: Option<String>,
    logger: Logger,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            api_key: DEMO_API_KEY.to_owned(),
            weather_api_key: None,
            logger: Logger::inherit(),
        }
    }
}

impl ClientBuilder {
    /// API key received after registration on <https://api.nasa.gov/>.
    /// Defaults to [`DEMO_API_KEY`].
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Key for the Visual Crossing weather service. Required only by
    /// [`Client::earth_weather()`].
    pub fn weather_api_key(mut self, weather_api_key: impl Into<String>) -> Self {
        self.weather_api_key = Some(weather_api_key.into());
        self
    }

    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn build(self) -> Result<Client> {
        Ok(self.build_with_transport(ReqwestTransport::new()?))
    }

    pub fn build_with_transport(self, transport: impl Transport + 'static) -> Client {
        Client {
            api_key: self.api_key,
            weather_api_key: self.weather_api_key,
            limit_remaining: Cell::new(None),
            transport: Box::new(transport),
            logger: self.logger,
        }
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Shortcut for a client with the given NASA API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// Client that uses the limited-access [`DEMO_API_KEY`]
    pub fn demo() -> Result<Self> {
        Self::builder().build()
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Number of NASA API calls still available under the current key,
    /// as reported by the last successful response from `api.nasa.gov`.
    pub fn limit_remaining(&self) -> Option<u64> {
        self.limit_remaining.get()
    }

    pub(crate) fn weather_api_key(&self) -> Option<&str> {
        self.weather_api_key.as_deref()
    }

    /// Runs the given closure with the injected logger
    pub(crate) fn scoped<T>(&self, f: impl FnOnce() -> T) -> T {
        self.logger.in_scope(f)
    }

    /// Issues a GET request and fails if the response status is not successful.
    /// The failure is logged before the error is returned.
    pub(crate) fn fetch(&self, url: Url) -> Result<Response> {
        let span = info_span!("request", method = "GET", url = %RedactedUrl(&url));
        let _guard = span.enter();

        let start = Instant::now();

        let response = self.transport.get(url).map_err(|err| {
            error!(err = tracing_err(&err), "Network request failed");
            err
        })?;

        let duration = tracing_duration(start.elapsed());
        let status = response.status;

        if !status.is_success() {
            let reason = response.reason();
            let body = response.text_lossy();

            error!(duration, %status, reason, %body, "Network request failed (error status)");

            return Err(err!(HttpClientError::BadResponseStatusCode {
                status,
                reason,
                body,
            }));
        }

        info!(
            duration,
            %status,
            body_len = response.body.len(),
            url = %RedactedUrl(&response.url),
            "Request completed"
        );

        if response.url.host_str() == Some(NASA_API_HOST) {
            self.update_limit_remaining(&response);
        }

        Ok(response)
    }

    fn update_limit_remaining(&self, response: &Response) {
        let Some(header) = response.header_str(RATE_LIMIT_REMAINING_HEADER) else {
            debug!("No {RATE_LIMIT_REMAINING_HEADER} header in the response");
            return;
        };

        match header.trim().parse::<u64>() {
            Ok(remaining) => {
                debug!(remaining, "Updated the remaining API quota");
                self.limit_remaining.set(Some(remaining));
            }
            Err(err) => warn!(
                header,
                err = tracing_err(&err),
                "Invalid {RATE_LIMIT_REMAINING_HEADER} header"
            ),
        }
    }
}
