use crate::cmd;
use clap::Parser;

/// Current position of the ISS and the people in space
#[derive(Parser, Debug)]
pub(crate) struct Iss {}

impl cmd::Cmd for Iss {
    fn run(self, client: &spacekit::Client) -> spacekit::Result {
        cmd::print_json(&client.track_iss()?);
        Ok(())
    }
}
