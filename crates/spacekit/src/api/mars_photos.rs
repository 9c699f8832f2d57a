//! Mars Rover Photos: <https://github.com/corincerami/mars-photo-api>
use super::nasa_api;
use crate::prelude::*;
use crate::{Client, DateArg, Result, ValidationError};
use serde::Deserialize;

/// Camera filter value that disables filtering
const ALL_CAMERAS: &str = "all";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Rover {
    Curiosity,
    Opportunity,
    Spirit,
    Perseverance,
}

#[derive(Debug, Clone)]
pub struct MarsPhotoQuery {
    /// Case-insensitive name of the rover. Parsed into [`Rover`].
    pub rover: String,

    /// Martian sol on which the photos were taken
    pub sol: Option<u32>,

    /// Earth date on which the photos were taken. Can't be combined with `sol`.
    pub earth_date: Option<DateArg>,

    /// Abbreviation of the camera, e.g. `FHAZ`, or `all` to disable the filter
    pub camera: String,

    /// 1-based page of the results, 25 items per page
    pub page: u32,
}

impl Default for MarsPhotoQuery {
    fn default() -> Self {
        Self {
            rover: Rover::Curiosity.to_string(),
            sol: None,
            earth_date: None,
            camera: ALL_CAMERAS.to_owned(),
            page: 1,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PhotosResponse {
    photos: Vec<serde_json::Value>,
}

impl Client {
    /// Returns the metadata objects of the Mars rover photos that match the
    /// query, exactly as listed in the `photos` field of the response
    pub fn mars_picture(&self, query: MarsPhotoQuery) -> Result<Vec<serde_json::Value>> {
        self.scoped(|| {
            let rover: Rover =
                query
                    .rover
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::UnknownRover {
                        input: query.rover.clone(),
                    })?;

            if query.sol.is_some() && query.earth_date.is_some() {
                return Err(ValidationError::SolAndEarthDate.into());
            }

            if query.page == 0 {
                return Err(ValidationError::NotPositive {
                    param: "page",
                    value: query.page.to_string(),
                }
                .into());
            }

            let mut url = nasa_api([
                "mars-photos",
                "api",
                "v1",
                "rovers",
                rover.into(),
                "photos",
            ]);

            {
                let mut params = url.query_pairs_mut();
                params
                    .append_pair("api_key", self.api_key())
                    .append_pair("page", &query.page.to_string());

                let camera = query.camera.trim();
                if !camera.is_empty() && !camera.eq_ignore_ascii_case(ALL_CAMERAS) {
                    params.append_pair("camera", camera);
                }
                if let Some(sol) = query.sol {
                    params.append_pair("sol", &sol.to_string());
                }
                if let Some(earth_date) = &query.earth_date {
                    params.append_pair("earth_date", &earth_date.to_query_value("earth_date")?);
                }
            }

            let photos = self.fetch(url)?.json::<PhotosResponse>()?.photos;

            debug!(%rover, photos = photos.len(), "Fetched rover photos");

            Ok(photos)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{MockResponse, MockTransport};
    use assert_matches::assert_matches;
    use expect_test::expect;
    use serde_json::json;
    use strum::IntoEnumIterator;

    fn photos_json() -> serde_json::Value {
        json!({
            "photos": [{
                "id": 102693,
                "sol": 1000,
                "camera": {
                    "id": 20,
                    "name": "FHAZ",
                    "rover_id": 5,
                    "full_name": "Front Hazard Avoidance Camera"
                },
                "img_src": "http://mars.jpl.nasa.gov/msl-raw-images/proj/msl/redops/ods/surface/sol/01000/opgs/edr/fcam/FLB_486265257EDR_F0481570FHAZ00323M_.JPG",
                "earth_date": "2015-05-30",
                "rover": {
                    "id": 5,
                    "name": "Curiosity",
                    "landing_date": "2012-08-06",
                    "launch_date": "2011-11-26",
                    "status": "active"
                }
            }]
        })
    }

    #[test_log::test]
    fn photos_by_sol() {
        let mock = MockTransport::default();
        mock.respond(MockResponse::json(200, photos_json()));

        let photos = mock
            .client()
            .mars_picture(MarsPhotoQuery {
                rover: "CURIOSITY".to_owned(),
                sol: Some(1000),
                camera: "FHAZ".to_owned(),
                ..Default::default()
            })
            .unwrap();

        assert_eq!(photos.len(), 1);
        assert_eq!(photos[0]["id"], 102693);
        assert_eq!(photos[0]["camera"]["name"], "FHAZ");
        assert_eq!(photos[0]["rover"]["name"], "Curiosity");

        expect!["https://api.nasa.gov/mars-photos/api/v1/rovers/curiosity/photos?api_key=TEST_KEY&page=1&camera=FHAZ&sol=1000"]
            .assert_eq(mock.requests()[0].as_str());
    }

    #[test_log::test]
    fn photos_by_earth_date_without_camera_filter() {
        let mock = MockTransport::default();
        mock.respond(MockResponse::json(200, json!({ "photos": [] })));

        let date = chrono::NaiveDate::from_ymd_opt(2004, 1, 30).unwrap();
        let photos = mock
            .client()
            .mars_picture(MarsPhotoQuery {
                rover: "Spirit".to_owned(),
                earth_date: Some(date.into()),
                camera: "ALL".to_owned(),
                page: 2,
                ..Default::default()
            })
            .unwrap();

        assert!(photos.is_empty());
        expect!["https://api.nasa.gov/mars-photos/api/v1/rovers/spirit/photos?api_key=TEST_KEY&page=2&earth_date=2004-01-30"]
            .assert_eq(mock.requests()[0].as_str());
    }

    #[test_log::test]
    fn photo_objects_keep_unknown_fields() {
        let mock = MockTransport::default();
        mock.respond(MockResponse::json(
            200,
            json!({
                "photos": [{
                    "id": 1,
                    "img_src": "//mars.nasa.gov/mars2020-raw-images/pub/ods/surface/sol/00001/ids/edr/browse/zcam/ZRF_0001.png",
                    "rover": { "name": "Perseverance" },
                    "stats": { "exposure_ms": 12.5 }
                }]
            }),
        ));

        let photos = mock
            .client()
            .mars_picture(MarsPhotoQuery {
                rover: "perseverance".to_owned(),
                sol: Some(1),
                ..Default::default()
            })
            .unwrap();

        test_bat::assert_json(
            &photos,
            &expect![[r#"
                [
                  {
                    "id": 1,
                    "img_src": "//mars.nasa.gov/mars2020-raw-images/pub/ods/surface/sol/00001/ids/edr/browse/zcam/ZRF_0001.png",
                    "rover": {
                      "name": "Perseverance"
                    },
                    "stats": {
                      "exposure_ms": 12.5
                    }
                  }
                ]"#]],
        );
    }

    #[test]
    fn every_known_rover_is_accepted_in_any_case() {
        for rover in Rover::iter() {
            let name = rover.to_string();
            for input in [name.to_uppercase(), name.to_lowercase(), format!(" {name} ")] {
                assert_eq!(input.trim().parse::<Rover>().unwrap(), rover);
            }
        }
    }

    #[test]
    fn unknown_rovers_are_rejected_before_the_request() {
        let mock = MockTransport::default();
        let client = mock.client();

        for rover in ["Sojourner", "Zhurong", "", "curiosity2", "Spirit Opportunity"] {
            let err = client
                .mars_picture(MarsPhotoQuery {
                    rover: rover.to_owned(),
                    ..Default::default()
                })
                .unwrap_err();

            assert_matches!(
                err.as_validation(),
                Some(ValidationError::UnknownRover { input }) if input == rover
            );
        }

        assert!(mock.requests().is_empty());
    }

    #[test]
    fn sol_and_earth_date_are_exclusive() {
        let mock = MockTransport::default();
        let client = mock.client();

        for (sol, earth_date) in [(0, "2015-05-30"), (1000, "2012-08-06")] {
            let err = client
                .mars_picture(MarsPhotoQuery {
                    sol: Some(sol),
                    earth_date: Some(earth_date.into()),
                    ..Default::default()
                })
                .unwrap_err();

            assert_matches!(err.as_validation(), Some(ValidationError::SolAndEarthDate));
        }

        assert!(mock.requests().is_empty());
    }
}
