use crate::cmd;
use clap::Parser;
use spacekit::LibraryQuery;

/// Search the NASA Image and Video Library or inspect a single media item
#[derive(Parser, Debug)]
pub(crate) struct Library {
    /// Free text search terms
    #[arg(default_value = spacekit::DEFAULT_LIBRARY_QUERY)]
    query: String,

    /// NASA media id, required by all modes except `search`
    #[arg(long)]
    nasa_id: Option<String>,

    /// One of search, asset, metadata, captions
    #[arg(long, default_value = "search")]
    mode: String,
}

impl cmd::Cmd for Library {
    fn run(self, client: &spacekit::Client) -> spacekit::Result {
        let (payload, url) = client.nasa_library(LibraryQuery {
            query: self.query,
            nasa_id: self.nasa_id,
            mode: self.mode,
        })?;

        tracing::info!(%url, "Resolved the library URL");
        cmd::print_json(&payload);

        Ok(())
    }
}
