use crate::cmd;
use clap::Parser;

/// Temperatures on Mars reported by the InSight lander, in Celsius
#[derive(Parser, Debug)]
pub(crate) struct MarsWeather {
    /// Version of the InSight weather API
    #[arg(long, default_value_t = spacekit::DEFAULT_INSIGHT_API_VERSION)]
    version: f64,
}

impl cmd::Cmd for MarsWeather {
    fn run(self, client: &spacekit::Client) -> spacekit::Result {
        cmd::print_json(&client.mars_weather(self.version)?);
        Ok(())
    }
}
