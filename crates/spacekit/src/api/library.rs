//! NASA Image and Video Library: <https://images.nasa.gov/docs/images.nasa.gov_api_docs.pdf>
use super::{nasa_images_api, validation};
use crate::prelude::*;
use crate::{Client, Result, ValidationError};
use url::Url;

pub const DEFAULT_LIBRARY_QUERY: &str = "moon";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum LibraryMode {
    /// Free text search
    Search,

    /// Manifest of the media files for the given media id
    Asset,

    /// Location of the metadata file for the given media id
    Metadata,

    /// Location of the captions file for the given video id
    Captions,
}

#[derive(Debug, Clone)]
pub struct LibraryQuery {
    /// Free text search terms, used by the `search` mode
    pub query: String,

    /// NASA media id, e.g. `as11-40-5874`, required by all modes except `search`
    pub nasa_id: Option<String>,

    /// One of `search`, `asset`, `metadata`, `captions`
    pub mode: String,
}

impl Default for LibraryQuery {
    fn default() -> Self {
        Self {
            query: DEFAULT_LIBRARY_QUERY.to_owned(),
            nasa_id: None,
            mode: LibraryMode::Search.to_string(),
        }
    }
}

impl Client {
    /// Queries the NASA Image and Video Library. Returns the raw JSON
    /// payload together with the resolved URL.
    pub fn nasa_library(&self, query: LibraryQuery) -> Result<(serde_json::Value, Url)> {
        self.scoped(|| {
            let mode: LibraryMode = validation::one_of(
                "mode",
                &query.mode,
                "search, asset, metadata, captions",
            )?;

            let url = match mode {
                LibraryMode::Search => {
                    let mut url = nasa_images_api(["search"]);
                    url.query_pairs_mut().append_pair("q", &query.query);
                    url
                }
                LibraryMode::Asset | LibraryMode::Metadata | LibraryMode::Captions => {
                    let nasa_id = query
                        .nasa_id
                        .as_deref()
                        .map(str::trim)
                        .filter(|id| !id.is_empty())
                        .ok_or(ValidationError::MissingMediaId { mode: mode.into() })?;

                    let mode: &'static str = mode.into();
                    nasa_images_api([mode, nasa_id])
                }
            };

            let response = self.fetch(url)?;
            let payload = response.json()?;

            debug!(%mode, "Fetched NASA library data");

            Ok((payload, response.url))
        })
    }
}
