use crate::cmd;
use clap::Parser;
use spacekit::EarthImageryQuery;
use std::path::PathBuf;

/// Landsat 8 image of a location on Earth
#[derive(Parser, Debug)]
pub(crate) struct EarthImagery {
    /// Latitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude in degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: f64,

    /// Width and height of the image in degrees
    #[arg(long, default_value_t = spacekit::DEFAULT_IMAGE_DIM)]
    dim: f64,

    /// Date in YYYY-MM-DD format, the closest available image is returned
    #[arg(long)]
    date: Option<String>,

    /// Open the image in the default viewer
    #[arg(long)]
    display: bool,

    /// Calculate the percentage of the image covered by clouds
    #[arg(long)]
    cloud_score: bool,

    /// Save the image to this path, the format is inferred from the extension
    #[arg(long)]
    save_as: Option<PathBuf>,
}

impl cmd::Cmd for EarthImagery {
    fn run(self, client: &spacekit::Client) -> spacekit::Result {
        let image = client.earth_imagery(EarthImageryQuery {
            lat: self.lat,
            lon: self.lon,
            dim: self.dim,
            date: self.date.map(Into::into),
            display: self.display,
            cloud_score: self.cloud_score,
            save_as: self.save_as,
        })?;

        let (height, width, channels) = image.pixels.dim();

        println!("{width}x{height}, {channels} channel(s): {}", image.url);

        Ok(())
    }
}
