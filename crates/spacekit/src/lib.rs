//! Blocking client for a handful of public space and earth-science HTTP APIs:
//! NASA APOD, Mars Rover Photos, InSight weather, Earth imagery, the NASA
//! Image and Video Library, open-notify ISS tracking and Visual Crossing
//! weather history.
//!
//! ```no_run
//! let client = spacekit::Client::new("DEMO_KEY")?;
//! let report = client.track_iss()?;
//! println!("{:?} over {:?}", report.people_on_board, report.live_position);
//! # Ok::<(), spacekit::Error>(())
//! ```
mod api;
mod client;
mod date;
mod error;
mod observability;

pub mod http;
pub mod util;

pub use crate::error::*;
pub use api::*;
pub use client::*;
pub use date::*;
pub use observability::logging::*;

#[allow(unused_imports)]
mod prelude {
    pub(crate) use crate::error::prelude::*;
    pub(crate) use crate::observability::logging::prelude::*;
}
