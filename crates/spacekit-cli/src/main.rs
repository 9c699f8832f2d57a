use spacekit::tracing_err;
use spacekit::util::ErrorExt;
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    if dotenvy::dotenv().is_err() {
        eprintln!("Dotenv config was not found, ignoring this...")
    }

    let config = match spacekit::LoggingConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err.display_chain());
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = spacekit::init_logging(&config) {
        eprintln!("{}", err.display_chain());
        return ExitCode::FAILURE;
    }

    spacekit_cli::run().map(|()| ExitCode::SUCCESS).unwrap_or_else(|err| {
        error!(err = tracing_err(&err), "Exitting with an error...");
        ExitCode::FAILURE
    })
}
