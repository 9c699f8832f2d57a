//! Snapshot assertions on top of [`expect_test`] for the values that HTTP
//! client tests compare the most: JSON payloads, the URLs that were
//! requested and the errors that reach the user.
use display_error_chain::DisplayErrorChain;
use expect_test::Expect;
use serde::Serialize;

/// Approximate number of characters that can fit on a single screen
const COMMON_SCREEN_CHARS_WIDTH: usize = 60;

/// Compares the JSON representation of `actual` with the snapshot.
/// Short values are rendered compactly on a single line, the rest are
/// pretty-printed.
#[track_caller]
pub fn assert_json(actual: impl Serialize, expected: &Expect) {
    let terse = serde_json::to_string(&actual).unwrap();

    let snapshot = if terse.len() < COMMON_SCREEN_CHARS_WIDTH {
        terse
    } else {
        serde_json::to_string_pretty(&actual).unwrap()
    };

    expected.assert_eq(&snapshot);
}

/// Compares the list of URLs with the snapshot, one URL per line
#[track_caller]
pub fn assert_urls<U: AsRef<str>>(urls: impl IntoIterator<Item = U>, expected: &Expect) {
    let snapshot: Vec<_> = urls
        .into_iter()
        .map(|url| url.as_ref().to_owned())
        .collect();

    expected.assert_eq(&snapshot.join("\n"));
}

/// Compares the error and the chain of its sources with the snapshot.
/// The rendering is the same the users see in the logs.
#[track_caller]
pub fn assert_error_chain(err: &dyn std::error::Error, expected: &Expect) {
    expected.assert_eq(&DisplayErrorChain::new(err).to_string());
}
