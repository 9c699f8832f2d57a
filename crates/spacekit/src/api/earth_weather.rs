//! Visual Crossing weather history:
//! <https://www.visualcrossing.com/resources/documentation/weather-api/timeline-weather-api/>
use super::{validation, visual_crossing_timeline_api};
use crate::prelude::*;
use crate::{Client, Result, ValidationError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UnitGroup {
    Us,
    Uk,
    Metric,
    Base,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ContentType {
    Json,
    Csv,
}

#[derive(Debug, Clone)]
pub struct EarthWeatherQuery {
    /// Address, partial address or `latitude,longitude`
    pub location: String,

    /// One of `us`, `uk`, `metric`, `base`
    pub unit_group: String,

    /// `YYYY-MM-DD` or a dynamic period such as `last30days`. Empty string
    /// requests the 15-day forecast.
    pub start_date: String,

    /// Requires `start_date`. Empty string means a single day.
    pub end_date: String,

    /// One of `json`, `csv`
    pub content_type: String,
}

impl Default for EarthWeatherQuery {
    fn default() -> Self {
        Self {
            location: String::new(),
            unit_group: UnitGroup::Us.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            content_type: ContentType::Json.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum WeatherHistory {
    Json(serde_json::Value),
    Csv(String),
}

impl Client {
    /// Returns the weather of the location in the given date range.
    /// Requires the weather service key passed via
    /// [`ClientBuilder::weather_api_key()`](crate::ClientBuilder::weather_api_key).
    pub fn earth_weather(&self, query: EarthWeatherQuery) -> Result<WeatherHistory> {
        self.scoped(|| {
            let key = self
                .weather_api_key()
                .ok_or(ValidationError::MissingWeatherApiKey)?;

            let location = validation::not_empty("location", &query.location)?;

            let unit_group: UnitGroup =
                validation::one_of("unit_group", &query.unit_group, "us, uk, metric, base")?;

            let content_type: ContentType =
                validation::one_of("content_type", &query.content_type, "json, csv")?;

            let start_date = query.start_date.trim();
            let end_date = query.end_date.trim();

            if start_date.is_empty() && !end_date.is_empty() {
                return Err(ValidationError::Empty {
                    param: "start_date",
                }
                .into());
            }

            let segments = [location, start_date, end_date];
            let mut url = visual_crossing_timeline_api(
                segments.into_iter().filter(|segment| !segment.is_empty()),
            );

            url.query_pairs_mut()
                .append_pair("key", key)
                .append_pair("unitGroup", unit_group.into())
                .append_pair("contentType", content_type.into())
                .append_pair("include", "days");

            let response = self.fetch(url)?;

            let history = match content_type {
                ContentType::Json => WeatherHistory::Json(response.json()?),
                ContentType::Csv => WeatherHistory::Csv(response.text_lossy()),
            };

            debug!(%unit_group, %content_type, "Fetched weather history");

            Ok(history)
        })
    }
}
