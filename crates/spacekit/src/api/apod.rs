//! Astronomy Picture of the Day: <https://github.com/nasa/apod-api>
use super::nasa_api;
use crate::prelude::*;
use crate::{Client, DateArg, Result, ValidationError};

#[derive(Debug, Clone, Default)]
pub struct ApodQuery {
    /// Date of the picture. Today's one if not specified.
    pub date: Option<DateArg>,

    /// Whether to return the URL of the high-definition image
    pub hd: bool,

    /// Return this many random pictures instead. Can't be combined with `date`.
    pub count: Option<u32>,
}

impl Client {
    /// Returns the NASA Astronomy Picture of the Day as sent by the API:
    /// a single JSON object, or an array of them when `count` is requested.
    pub fn picture_of_the_day(&self, query: ApodQuery) -> Result<serde_json::Value> {
        self.scoped(|| {
            let mut url = nasa_api(["planetary", "apod"]);

            {
                let mut params = url.query_pairs_mut();
                params
                    .append_pair("api_key", self.api_key())
                    .append_pair("hd", if query.hd { "true" } else { "false" });

                match (&query.date, query.count) {
                    (Some(_), Some(_)) => return Err(ValidationError::DateAndCount.into()),
                    (Some(date), None) => {
                        params.append_pair("date", &date.to_query_value("date")?);
                    }
                    (None, Some(0)) => {
                        return Err(ValidationError::NotPositive {
                            param: "count",
                            value: "0".to_owned(),
                        }
                        .into())
                    }
                    (None, Some(count)) => {
                        params.append_pair("count", &count.to_string());
                    }
                    (None, None) => {}
                }
            }

            let payload: serde_json::Value = self.fetch(url)?.json()?;

            debug!(
                pictures = payload.as_array().map_or(1, Vec::len),
                "Fetched APOD"
            );

            Ok(payload)
        })
    }
}
