mod cmd;

use clap::Parser;
use cmd::Cmd;

/// Query NASA open APIs and a few related space and weather services
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    credentials: cmd::Credentials,

    #[command(subcommand)]
    cmd: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
enum Subcommand {
    Apod(cmd::Apod),
    MarsPhotos(cmd::MarsPhotos),
    Iss(cmd::Iss),
    MarsWeather(cmd::MarsWeather),
    EarthWeather(cmd::EarthWeather),
    EarthImagery(cmd::EarthImagery),
    Library(cmd::Library),
}

pub fn run() -> spacekit::Result {
    let args = Args::parse();
    let client = args.credentials.client()?;

    match args.cmd {
        Subcommand::Apod(cmd) => cmd.run(&client),
        Subcommand::MarsPhotos(cmd) => cmd.run(&client),
        Subcommand::Iss(cmd) => cmd.run(&client),
        Subcommand::MarsWeather(cmd) => cmd.run(&client),
        Subcommand::EarthWeather(cmd) => cmd.run(&client),
        Subcommand::EarthImagery(cmd) => cmd.run(&client),
        Subcommand::Library(cmd) => cmd.run(&client),
    }?;

    if let Some(remaining) = client.limit_remaining() {
        tracing::info!(remaining, "NASA API quota");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn subcommands_are_parsed() {
        let args = Args::try_parse_from([
            "spacekit",
            "--api-key",
            "KEY",
            "mars-photos",
            "--rover",
            "spirit",
            "--sol",
            "1000",
        ])
        .unwrap();

        assert!(matches!(args.cmd, Subcommand::MarsPhotos(_)));

        let args = Args::try_parse_from(["spacekit", "earth-imagery", "--lat", "-33.9", "--lon", "18.4"])
            .unwrap();
        assert!(matches!(args.cmd, Subcommand::EarthImagery(_)));
    }
}
