use crate::ValidationError;

pub(crate) fn finite(param: &'static str, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        return Ok(value);
    }
    Err(ValidationError::NotFinite { param, value })
}

/// Checks that the value is finite and lies within `[min, max]`
pub(crate) fn in_range(
    param: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ValidationError> {
    let value = finite(param, value)?;
    if (min..=max).contains(&value) {
        return Ok(value);
    }
    Err(ValidationError::OutOfRange {
        param,
        value,
        min,
        max,
    })
}

pub(crate) fn latitude(value: f64) -> Result<f64, ValidationError> {
    in_range("lat", value, -90.0, 90.0)
}

pub(crate) fn longitude(value: f64) -> Result<f64, ValidationError> {
    in_range("lon", value, -180.0, 180.0)
}

pub(crate) fn not_empty<'a>(param: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { param });
    }
    Ok(value)
}

/// Parses a string into an enum derived with [`strum::EnumString`]
pub(crate) fn one_of<T>(
    param: &'static str,
    input: &str,
    expected: &'static str,
) -> Result<T, ValidationError>
where
    T: std::str::FromStr,
{
    input
        .trim()
        .parse()
        .map_err(|_| ValidationError::UnknownVariant {
            param,
            input: input.to_owned(),
            expected,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn coordinates_bounds_are_inclusive() {
        for lat in [-90.0, -45.5, 0.0, 90.0] {
            assert_eq!(latitude(lat).unwrap(), lat);
        }
        for lon in [-180.0, 0.0, 179.99, 180.0] {
            assert_eq!(longitude(lon).unwrap(), lon);
        }
    }

    #[test]
    fn coordinates_out_of_bounds_are_rejected() {
        for lat in [-90.0001, 90.0001, 1e9, f64::NEG_INFINITY] {
            assert!(latitude(lat).is_err(), "{lat}");
        }
        for lon in [-180.5, 180.0001, -1e9] {
            assert_matches!(
                longitude(lon),
                Err(ValidationError::OutOfRange { param: "lon", .. })
            );
        }
        assert_matches!(
            latitude(f64::NAN),
            Err(ValidationError::NotFinite { param: "lat", .. })
        );
    }
}
