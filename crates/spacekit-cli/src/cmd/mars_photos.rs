use crate::cmd;
use clap::Parser;
use spacekit::MarsPhotoQuery;

/// Photos taken by the Mars rovers
#[derive(Parser, Debug)]
pub(crate) struct MarsPhotos {
    /// One of Curiosity, Opportunity, Spirit, Perseverance (case-insensitive)
    #[arg(long, default_value = "curiosity")]
    rover: String,

    /// Martian sol on which the photos were taken
    #[arg(long, conflicts_with = "earth_date")]
    sol: Option<u32>,

    /// Earth date in YYYY-MM-DD format
    #[arg(long)]
    earth_date: Option<String>,

    /// Camera abbreviation, e.g. FHAZ, or `all`
    #[arg(long, default_value = "all")]
    camera: String,

    #[arg(long, default_value_t = 1)]
    page: u32,
}

impl cmd::Cmd for MarsPhotos {
    fn run(self, client: &spacekit::Client) -> spacekit::Result {
        let photos = client.mars_picture(MarsPhotoQuery {
            rover: self.rover,
            sol: self.sol,
            earth_date: self.earth_date.map(Into::into),
            camera: self.camera,
            page: self.page,
        })?;

        cmd::print_json(&photos);

        Ok(())
    }
}
