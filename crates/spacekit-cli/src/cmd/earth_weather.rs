use crate::cmd;
use clap::Parser;
use spacekit::{EarthWeatherQuery, WeatherHistory};

/// Weather history of a location on Earth (requires `--weather-api-key`)
#[derive(Parser, Debug)]
pub(crate) struct EarthWeather {
    /// Address, partial address or `latitude,longitude`
    location: String,

    /// One of us, uk, metric, base
    #[arg(long, default_value = "us")]
    unit_group: String,

    /// YYYY-MM-DD or a dynamic period such as `last30days`
    #[arg(long)]
    start_date: Option<String>,

    #[arg(long, requires = "start_date")]
    end_date: Option<String>,

    /// One of json, csv
    #[arg(long, default_value = "json")]
    content_type: String,
}

impl cmd::Cmd for EarthWeather {
    fn run(self, client: &spacekit::Client) -> spacekit::Result {
        let history = client.earth_weather(EarthWeatherQuery {
            location: self.location,
            unit_group: self.unit_group,
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date.unwrap_or_default(),
            content_type: self.content_type,
        })?;

        match history {
            WeatherHistory::Csv(csv) => print!("{csv}"),
            WeatherHistory::Json(json) => cmd::print_json(&json),
        }

        Ok(())
    }
}
