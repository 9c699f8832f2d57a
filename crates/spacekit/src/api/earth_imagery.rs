//! Landsat 8 imagery: <https://github.com/nasa/earth-imagery-api>
use super::{nasa_api, validation};
use crate::prelude::*;
use crate::util::viewer;
use crate::{Client, DateArg, Result, ValidationError};
use image::DynamicImage;
use ndarray::Array3;
use std::path::PathBuf;
use url::Url;

/// Width and height of the image in degrees used by default
pub const DEFAULT_IMAGE_DIM: f64 = 0.025;

#[derive(Debug, Clone)]
pub struct EarthImageryQuery {
    /// Latitude in degrees, `[-90, 90]`
    pub lat: f64,

    /// Longitude in degrees, `[-180, 180]`
    pub lon: f64,

    /// Width and height of the image in degrees
    pub dim: f64,

    /// Date of the image. The closest available one is returned by the API.
    pub date: Option<DateArg>,

    /// Open the image in the default image viewer
    pub display: bool,

    /// Ask the API to calculate the percentage of the image covered by clouds
    pub cloud_score: bool,

    /// Save the image to this path. The format is inferred from the extension.
    pub save_as: Option<PathBuf>,
}

impl EarthImageryQuery {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            dim: DEFAULT_IMAGE_DIM,
            date: None,
            display: false,
            cloud_score: false,
            save_as: None,
        }
    }
}

/// Decoded satellite image
#[derive(Debug, Clone)]
pub struct EarthImage {
    /// Pixel values with the shape `(height, width, channels)`. The channels
    /// are RGB(A) for color images and L(A) for grayscale ones.
    pub pixels: Array3<u8>,

    /// URL that was resolved for the image
    pub url: Url,
}

impl Client {
    /// Returns the Landsat 8 image of the given location
    pub fn earth_imagery(&self, query: EarthImageryQuery) -> Result<EarthImage> {
        self.scoped(|| {
            let lat = validation::finite("lat", query.lat)?;
            let lon = validation::finite("lon", query.lon)?;
            let dim = validation::finite("dim", query.dim)?;

            validation::latitude(lat)?;
            validation::longitude(lon)?;

            if dim <= 0.0 {
                return Err(ValidationError::NotPositive {
                    param: "dim",
                    value: dim.to_string(),
                }
                .into());
            }

            let date = query
                .date
                .as_ref()
                .map(|date| date.to_query_value("date"))
                .transpose()?;

            let mut url = nasa_api(["planetary", "earth", "imagery"]);
            {
                let mut params = url.query_pairs_mut();
                params
                    .append_pair("lon", &lon.to_string())
                    .append_pair("lat", &lat.to_string())
                    .append_pair("dim", &dim.to_string());

                if let Some(date) = &date {
                    params.append_pair("date", date);
                }

                params
                    .append_pair("cloud_score", if query.cloud_score { "true" } else { "false" })
                    .append_pair("api_key", self.api_key());
            }

            let response = self.fetch(url)?;

            let image = image::load_from_memory(&response.body)?;

            debug!(
                width = image.width(),
                height = image.height(),
                color = ?image.color(),
                "Decoded the earth image"
            );

            if let Some(path) = &query.save_as {
                image.save(path)?;
                info!(path = %path.display(), "Saved the earth image");
            }

            if query.display {
                viewer::show(&image, "earth-imagery")?;
            }

            Ok(EarthImage {
                pixels: to_pixel_array(image)?,
                url: response.url,
            })
        })
    }
}

fn to_pixel_array(image: DynamicImage) -> Result<Array3<u8>> {
    let width = image.width() as usize;
    let height = image.height() as usize;
    let color = image.color();

    let (channels, raw) = match (color.has_color(), color.has_alpha()) {
        (true, true) => (4, image.into_rgba8().into_raw()),
        (true, false) => (3, image.into_rgb8().into_raw()),
        (false, true) => (2, image.into_luma_alpha8().into_raw()),
        (false, false) => (1, image.into_luma8().into_raw()),
    };

    Array3::from_shape_vec((height, width, channels), raw)
        .fatal_ctx(|| format!("Image buffer doesn't match its dimensions {width}x{height}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::{MockResponse, MockTransport};
    use assert_matches::assert_matches;
    use expect_test::expect;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    fn png_tile() -> Vec<u8> {
        let tile = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8 * 10, y as u8 * 100, 7]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(tile)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test_log::test]
    fn image_is_decoded_into_pixels() {
        let mock = MockTransport::default();
        mock.respond(MockResponse::new(200, png_tile()).header("x-ratelimit-remaining", "7"));
        let client = mock.client();

        let mut query = EarthImageryQuery::new(1.5, 100.75);
        query.date = Some("2014-02-01".into());
        query.cloud_score = true;

        let image = client.earth_imagery(query).unwrap();

        assert_eq!(image.pixels.shape(), [2, 3, 3]);
        assert_eq!(image.pixels[[1, 2, 0]], 20);
        assert_eq!(image.pixels[[1, 2, 1]], 100);
        assert_eq!(image.pixels[[0, 0, 2]], 7);
        assert_eq!(client.limit_remaining(), Some(7));

        expect!["https://api.nasa.gov/planetary/earth/imagery?lon=100.75&lat=1.5&dim=0.025&date=2014-02-01&cloud_score=true&api_key=TEST_KEY"]
            .assert_eq(image.url.as_str());
    }

    #[test_log::test]
    fn image_is_saved_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");

        let mock = MockTransport::default();
        mock.respond(MockResponse::new(200, png_tile()));

        let mut query = EarthImageryQuery::new(-33.9, 18.4);
        query.save_as = Some(path.clone());

        mock.client().earth_imagery(query).unwrap();

        let saved = image::open(&path).unwrap();
        assert_eq!((saved.width(), saved.height()), (3, 2));
    }

    #[test]
    fn coordinates_out_of_range_are_rejected_without_requests() {
        let mock = MockTransport::default();
        let client = mock.client();

        let cases = [
            (90.5, 0.0, "lat"),
            (-91.0, 0.0, "lat"),
            (0.0, 180.01, "lon"),
            (45.0, -200.0, "lon"),
            (1000.0, 1000.0, "lat"),
        ];

        for (lat, lon, expected_param) in cases {
            let err = client
                .earth_imagery(EarthImageryQuery::new(lat, lon))
                .unwrap_err();

            assert_matches!(
                err.as_validation(),
                Some(ValidationError::OutOfRange { param, .. }) if *param == expected_param
            );
        }

        assert!(mock.requests().is_empty());
    }

    #[test]
    fn non_numeric_arguments_are_rejected() {
        let mock = MockTransport::default();
        let client = mock.client();

        let mut query = EarthImageryQuery::new(0.0, 0.0);
        query.dim = f64::INFINITY;
        let err = client.earth_imagery(query).unwrap_err();
        assert_matches!(
            err.as_validation(),
            Some(ValidationError::NotFinite { param: "dim", .. })
        );

        let mut query = EarthImageryQuery::new(0.0, 0.0);
        query.dim = 0.0;
        let err = client.earth_imagery(query).unwrap_err();
        assert_matches!(
            err.as_validation(),
            Some(ValidationError::NotPositive { param: "dim", .. })
        );

        let mut query = EarthImageryQuery::new(0.0, 0.0);
        query.date = Some("01.02.2014".into());
        let err = client.earth_imagery(query).unwrap_err();
        assert_matches!(
            err.as_validation(),
            Some(ValidationError::MalformedDate { param: "date", .. })
        );

        assert!(mock.requests().is_empty());
    }

    #[test_log::test]
    fn undecodable_body_is_an_image_error() {
        let mock = MockTransport::default();
        mock.respond(MockResponse::new(200, "definitely not a png"));

        let err = mock
            .client()
            .earth_imagery(EarthImageryQuery::new(0.0, 0.0))
            .unwrap_err();

        assert_matches!(err.kind(), crate::ErrorKind::Image { .. });
    }
}
