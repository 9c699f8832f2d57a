use std::fmt;
use std::time::Duration;
use url::Url;

/// Query parameters that carry credentials and must never reach the logs
const SECRET_QUERY_PARAMS: &[&str] = &["api_key", "key"];

#[must_use]
pub fn tracing_err<'a, E: std::error::Error + 'static>(err: &'a E) -> impl tracing::Value + 'a {
    err as &dyn std::error::Error
}

pub(crate) fn tracing_duration(duration: Duration) -> impl tracing::Value {
    tracing::field::display(TracingDuration(duration))
}

struct TracingDuration(Duration);

impl fmt::Display for TracingDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2?}", self.0)
    }
}

/// Displays the URL with the values of credential query parameters masked
pub(crate) struct RedactedUrl<'a>(pub(crate) &'a Url);

impl fmt::Display for RedactedUrl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let url = self.0;
        let has_secrets = url
            .query_pairs()
            .any(|(key, _)| SECRET_QUERY_PARAMS.contains(&key.as_ref()));

        if !has_secrets {
            return fmt::Display::fmt(url, f);
        }

        let mut redacted = url.clone();
        redacted.query_pairs_mut().clear().extend_pairs(url.query_pairs().map(
            |(key, value)| {
                if SECRET_QUERY_PARAMS.contains(&key.as_ref()) {
                    (key, "***".into())
                } else {
                    (key, value)
                }
            },
        ));

        fmt::Display::fmt(&redacted, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn credentials_are_masked() {
        let url: Url = "https://api.nasa.gov/planetary/apod?api_key=SECRET&hd=true"
            .parse()
            .unwrap();
        expect!["https://api.nasa.gov/planetary/apod?api_key=***&hd=true"]
            .assert_eq(&RedactedUrl(&url).to_string());

        let url: Url = "http://api.open-notify.org/astros.json".parse().unwrap();
        expect!["http://api.open-notify.org/astros.json"].assert_eq(&RedactedUrl(&url).to_string());
    }

    #[test]
    fn durations_have_two_decimals() {
        assert_eq!(
            TracingDuration(Duration::from_millis(1500)).to_string(),
            "1.50s"
        );
    }
}
