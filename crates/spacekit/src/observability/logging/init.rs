use crate::prelude::*;
use crate::Result;
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;

const ENV_PREFIX: &str = "SPACEKIT_";

/// Settings of the log sink. Can be loaded from the environment variables
/// prefixed with `SPACEKIT_`:
///
/// - `SPACEKIT_LOG` - [`EnvFilter`] directives, e.g. `info,spacekit=debug`
/// - `SPACEKIT_COLORS` - set to `false` to disable ANSI colors
/// - `SPACEKIT_LOG_FILE` - write the logs to the given file instead of stderr
///
/// [`EnvFilter`]: tracing_subscriber::EnvFilter
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_filter")]
    pub log: String,

    #[serde(default = "default_colors")]
    pub colors: bool,

    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_log_filter() -> String {
    "info".to_owned()
}

fn default_colors() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log: default_log_filter(),
            colors: default_colors(),
            log_file: None,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Result<Self> {
        envy::prefixed(ENV_PREFIX)
            .from_env()
            .fatal_ctx(|| format!("Couldn't load logging config from {ENV_PREFIX}* env vars"))
    }
}

/// Logging dependency injected into the [`Client`](crate::Client).
///
/// Every call of the client runs with this logger as the default
/// subscriber. [`Logger::inherit`] doesn't override anything and uses
/// whatever subscriber is set up for the current thread or process.
#[derive(Clone, Default)]
pub struct Logger {
    dispatch: Option<Dispatch>,
}

impl Logger {
    pub fn new(config: &LoggingConfig) -> Result<Self> {
        Ok(Self {
            dispatch: Some(create_dispatch(config)?),
        })
    }

    /// Same as [`Logger::new`], but writes to the given sink ignoring
    /// [`LoggingConfig::log_file`].
    pub fn with_writer<W>(config: &LoggingConfig, writer: W) -> Result<Self>
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Ok(Self {
            dispatch: Some(create_dispatch_with_writer(config, writer)?),
        })
    }

    pub fn inherit() -> Self {
        Self { dispatch: None }
    }

    pub(crate) fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.dispatch {
            Some(dispatch) => tracing::dispatcher::with_default(dispatch, f),
            None => f(),
        }
    }
}

/// Installs the process-wide logger. Must be called at most once, at the
/// start of the main.
pub fn init_logging(config: &LoggingConfig) -> Result {
    tracing::dispatcher::set_global_default(create_dispatch(config)?)
        .fatal_ctx(|| "The global logger was already initialized")
}

fn create_dispatch(config: &LoggingConfig) -> Result<Dispatch> {
    let Some(path) = &config.log_file else {
        return create_dispatch_with_writer(config, std::io::stderr);
    };

    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    // ANSI escapes are noise in a file
    let config = LoggingConfig {
        colors: false,
        ..config.clone()
    };

    create_dispatch_with_writer(&config, Mutex::new(file))
}

fn create_dispatch_with_writer<W>(config: &LoggingConfig, writer: W) -> Result<Dispatch>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env_filter = tracing_subscriber::EnvFilter::try_new(&config.log)
        .fatal_ctx(|| format!("Invalid log filter directives: `{}`", config.log))?;

    let fmt = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(config.colors)
        .with_writer(writer)
        .pretty();

    let subscriber = tracing_subscriber::registry()
        .with(fmt)
        .with(env_filter)
        .with(tracing_error::ErrorLayer::default());

    Ok(Dispatch::new(subscriber))
}
