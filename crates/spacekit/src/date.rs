use crate::ValidationError;
use chrono::{DateTime, NaiveDate, TimeZone};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Earth date argument. Either a `YYYY-MM-DD` string, that is validated before
/// sending the request, or an already typed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateArg {
    Text(String),
    Date(NaiveDate),
}

impl DateArg {
    pub(crate) fn to_query_value(&self, param: &'static str) -> Result<String, ValidationError> {
        let date = match self {
            Self::Date(date) => *date,
            Self::Text(input) => NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(
                |source| ValidationError::MalformedDate {
                    param,
                    input: input.clone(),
                    source,
                },
            )?,
        };
        Ok(date.format(DATE_FORMAT).to_string())
    }
}

impl From<&str> for DateArg {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for DateArg {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for DateArg {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateArg {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Date(value.date_naive())
    }
}
