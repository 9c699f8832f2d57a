mod apod;
mod earth_imagery;
mod earth_weather;
mod iss;
mod library;
mod mars_photos;
mod mars_weather;

pub(crate) use apod::*;
pub(crate) use earth_imagery::*;
pub(crate) use earth_weather::*;
pub(crate) use iss::*;
pub(crate) use library::*;
pub(crate) use mars_photos::*;
pub(crate) use mars_weather::*;

use serde::Serialize;

pub(crate) trait Cmd {
    fn run(self, client: &spacekit::Client) -> spacekit::Result;
}

#[derive(clap::Args, Debug)]
pub(crate) struct Credentials {
    /// NASA API key from <https://api.nasa.gov/>
    #[arg(long, global = true, default_value = spacekit::DEMO_API_KEY)]
    api_key: String,

    /// Visual Crossing key, used only by `earth-weather`
    #[arg(long, global = true)]
    weather_api_key: Option<String>,
}

impl Credentials {
    pub(crate) fn client(self) -> spacekit::Result<spacekit::Client> {
        let mut builder = spacekit::Client::builder().api_key(self.api_key);

        if let Some(key) = self.weather_api_key {
            builder = builder.weather_api_key(key);
        }

        builder.build()
    }
}

/// Prints the value as pretty JSON to stdout
fn print_json(value: &impl Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        // Only maps with non-string keys can fail here
        Err(err) => tracing::error!(err = spacekit::tracing_err(&err), "Failed to print the result"),
    }
}
