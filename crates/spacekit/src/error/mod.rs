mod ext;
mod macros;

use crate::util::DynError;
use std::fmt;
use thiserror::Error;
use tracing_error::SpanTrace;

pub use crate::http::HttpClientError;
pub(crate) use ext::*;
pub(crate) use macros::*;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

pub(crate) mod prelude {
    pub(crate) use super::ext::{OptionExt as _, ResultExt as _};
}

/// Describes any possible error returned by the [`Client`](crate::Client).
pub struct Error {
    imp: Box<ErrorImp>,
}

struct ErrorImp {
    kind: ErrorKind,

    // Participates only in debug impl
    spantrace: SpanTrace,
}

#[derive(Error, Debug)]
pub enum ErrorKind {
    /// The arguments were rejected before any network call was made
    #[error(transparent)]
    Validation {
        #[from]
        source: ValidationError,
    },

    #[error(transparent)]
    HttpClient {
        #[from]
        source: HttpClientError,
    },

    #[error("Failed to process the image")]
    Image {
        #[from]
        source: image::ImageError,
    },

    #[error("I/O operation failed")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("{message}")]
    Fatal {
        message: String,
        source: Option<Box<DynError>>,
    },
}

/// Rough classification of [`ValidationError`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorClass {
    /// The argument has a wrong shape (malformed date, NaN instead of a number)
    TypeMismatch,

    /// The argument is well-formed, but not within the allowed set of values
    ValueRange,
}

/// Errors caused by bad arguments passed to the client methods
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "Rover must be one of Curiosity, Opportunity, Spirit or Perseverance, \
        but got `{input}`"
    )]
    UnknownRover { input: String },

    #[error("Both `sol` and `earth_date` cannot be specified")]
    SolAndEarthDate,

    #[error("Both `date` and `count` cannot be specified")]
    DateAndCount,

    #[error("`{param}` must be a date in YYYY-MM-DD format, but got `{input}`")]
    MalformedDate {
        param: &'static str,
        input: String,
        source: chrono::ParseError,
    },

    #[error("`{param}` must be a finite number, but got {value}")]
    NotFinite { param: &'static str, value: f64 },

    #[error("`{param}` must be within [{min}, {max}], but got {value}")]
    OutOfRange {
        param: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("`{param}` must be positive, but got {value}")]
    NotPositive { param: &'static str, value: String },

    #[error("`{param}` must not be empty")]
    Empty { param: &'static str },

    #[error("`{param}` must be one of {expected}, but got `{input}`")]
    UnknownVariant {
        param: &'static str,
        input: String,
        expected: &'static str,
    },

    #[error("`{mode}` mode requires a NASA media id")]
    MissingMediaId { mode: &'static str },

    #[error("<weather_api_key> is missing")]
    MissingWeatherApiKey,
}

impl ValidationError {
    pub fn class(&self) -> ValidationErrorClass {
        match self {
            Self::MalformedDate { .. } | Self::NotFinite { .. } => ValidationErrorClass::TypeMismatch,
            Self::UnknownRover { .. }
            | Self::SolAndEarthDate
            | Self::DateAndCount
            | Self::OutOfRange { .. }
            | Self::NotPositive { .. }
            | Self::Empty { .. }
            | Self::UnknownVariant { .. }
            | Self::MissingMediaId { .. }
            | Self::MissingWeatherApiKey => ValidationErrorClass::ValueRange,
        }
    }
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.imp.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.imp.kind
    }

    /// Returns the validation error if the arguments were rejected
    /// before issuing any requests.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match &self.imp.kind {
            ErrorKind::Validation { source } => Some(source),
            _ => None,
        }
    }

    /// Returns the HTTP-level error if the failure happened at the transport layer
    pub fn as_http(&self) -> Option<&HttpClientError> {
        match &self.imp.kind {
            ErrorKind::HttpClient { source } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.imp.kind, f)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.imp.kind.source()
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.imp.kind, f)?;

        if self.imp.spantrace.status() == tracing_error::SpanTraceStatus::CAPTURED {
            write!(f, "\n{}", self.imp.spantrace)?;
        }

        Ok(())
    }
}

impl<T: Into<ErrorKind>> From<T> for Error {
    #[track_caller]
    fn from(kind: T) -> Self {
        let imp = ErrorImp {
            kind: kind.into(),
            spantrace: SpanTrace::capture(),
        };

        Self { imp: Box::new(imp) }
    }
}
