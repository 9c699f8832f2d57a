//! International Space Station tracking: <http://open-notify.org/Open-Notify-API/>
use super::open_notify_api;
use crate::prelude::*;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

#[derive(Debug, Clone, Serialize)]
pub struct IssReport {
    /// Names of the people currently in space
    pub people_on_board: Vec<String>,

    /// Current `(latitude, longitude)` of the ISS
    pub live_position: (f64, f64),
}

#[derive(Debug, Deserialize)]
struct IssNowResponse {
    iss_position: IssPosition,
}

// The API returns the coordinates as strings
#[serde_as]
#[derive(Debug, Deserialize)]
struct IssPosition {
    #[serde_as(as = "DisplayFromStr")]
    latitude: f64,

    #[serde_as(as = "DisplayFromStr")]
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct AstrosResponse {
    people: Vec<Astronaut>,
}

#[derive(Debug, Deserialize)]
struct Astronaut {
    name: String,
}

impl Client {
    /// Returns the current position of the ISS along with the names of
    /// the astronauts that are in space right now
    pub fn track_iss(&self) -> Result<IssReport> {
        self.scoped(|| {
            // Both requests are always issued, and both must succeed before
            // any of the bodies is parsed
            let position = self.fetch(open_notify_api(["iss-now.json"]));
            let astros = self.fetch(open_notify_api(["astros.json"]));
            let (position, astros) = (position?, astros?);

            let position = position.json::<IssNowResponse>()?.iss_position;
            let people_on_board = astros
                .json::<AstrosResponse>()?
                .people
                .into_iter()
                .map(|astronaut| astronaut.name)
                .collect();

            let report = IssReport {
                people_on_board,
                live_position: (position.latitude, position.longitude),
            };

            debug!(
                people = report.people_on_board.len(),
                latitude = position.latitude,
                longitude = position.longitude,
                "Tracked the ISS"
            );

            Ok(report)
        })
    }
}
