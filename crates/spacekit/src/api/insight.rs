//! InSight: Mars Weather Service API. The data is reported in Fahrenheit
//! and converted to Celsius.
use super::{nasa_api, validation};
use crate::prelude::*;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_INSIGHT_API_VERSION: f64 = 1.0;

/// Temperature summary of a single sol in degrees Celsius
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolTemperature {
    pub sol: String,
    pub average_temperature: f64,
    pub minimum_temperature: f64,
    pub maximum_temperature: f64,
}

#[derive(Debug, Deserialize)]
struct InsightResponse {
    sol_keys: Vec<String>,

    #[serde(flatten)]
    sols: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct SolData {
    /// Atmospheric temperature. Absent when the sensor didn't report.
    #[serde(rename = "AT")]
    atmospheric_temperature: Option<SensorSummary>,
}

#[derive(Debug, Deserialize)]
struct SensorSummary {
    av: f64,
    mn: f64,
    mx: f64,
}

pub(crate) fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * (5.0 / 9.0)
}

impl Client {
    /// Returns per-sol temperature summaries for the last available sols
    pub fn mars_weather(&self, version: f64) -> Result<Vec<SolTemperature>> {
        self.scoped(|| {
            let version = validation::finite("version", version)?;

            let mut url = nasa_api(["insight_weather", ""]);
            url.query_pairs_mut()
                .append_pair("api_key", self.api_key())
                .append_pair("ver", &version.to_string())
                .append_pair("feedtype", "json");

            let response: InsightResponse = self.fetch(url)?.json()?;

            let mut result = Vec::with_capacity(response.sol_keys.len());

            for sol in response.sol_keys {
                let data = response
                    .sols
                    .get(&sol)
                    .fatal_ctx(|| format!("Sol `{sol}` is listed in `sol_keys`, but has no data"))?;

                let data = SolData::deserialize(data)
                    .fatal_ctx(|| format!("Unexpected shape of the data for sol `{sol}`"))?;

                let Some(temperature) = data.atmospheric_temperature else {
                    warn!(sol, "No atmospheric temperature was reported, skipping the sol");
                    continue;
                };

                result.push(SolTemperature {
                    sol,
                    average_temperature: fahrenheit_to_celsius(temperature.av),
                    minimum_temperature: fahrenheit_to_celsius(temperature.mn),
                    maximum_temperature: fahrenheit_to_celsius(temperature.mx),
                });
            }

            Ok(result)
        })
    }
}
