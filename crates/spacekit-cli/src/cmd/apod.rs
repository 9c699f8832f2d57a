use crate::cmd;
use clap::Parser;
use spacekit::ApodQuery;

/// Astronomy Picture of the Day
#[derive(Parser, Debug)]
pub(crate) struct Apod {
    /// Date of the picture in YYYY-MM-DD format, today by default
    #[arg(long, conflicts_with = "count")]
    date: Option<String>,

    /// Return the URL of the high-definition image
    #[arg(long)]
    hd: bool,

    /// Return this many random pictures
    #[arg(long)]
    count: Option<u32>,
}

impl cmd::Cmd for Apod {
    fn run(self, client: &spacekit::Client) -> spacekit::Result {
        let payload = client.picture_of_the_day(ApodQuery {
            date: self.date.map(Into::into),
            hd: self.hd,
            count: self.count,
        })?;

        cmd::print_json(&payload);

        Ok(())
    }
}
