mod apod;
mod earth_imagery;
mod earth_weather;
mod insight;
mod iss;
mod library;
mod mars_photos;
mod validation;

pub use apod::*;
pub use earth_imagery::*;
pub use earth_weather::*;
pub use insight::*;
pub use iss::*;
pub use library::*;
pub use mars_photos::*;

use crate::util;

util::url::def!(nasa_api, "https://api.nasa.gov");
util::url::def!(nasa_images_api, "https://images-api.nasa.gov");
util::url::def!(open_notify_api, "http://api.open-notify.org");
util::url::def!(
    visual_crossing_timeline_api,
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline"
);
