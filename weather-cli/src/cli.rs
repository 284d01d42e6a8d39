use anyhow::{Context, anyhow};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_core::{
    Config, SearchError, Session, fetcher_from_config, provider::openweather::OpenWeatherFetcher,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key and a default city.
    Configure,

    /// Show the current weather for a city.
    Show {
        /// City name; defaults to the configured city.
        city: Option<String>,

        /// Print the report as JSON instead of a card.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities repeatedly until cancelled (Esc / Ctrl-C).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, json } => show(city, json).await,
            Command::Interactive => interactive().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load_file()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let default_city = Text::new("Default city:")
        .with_default(cfg.default_city())
        .prompt()
        .context("Failed to read default city")?;

    cfg.api_key = Some(api_key.trim().to_string());
    cfg.default_city = Some(default_city.trim().to_string()).filter(|c| !c.is_empty());
    cfg.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

fn session_from_config(cfg: &Config) -> anyhow::Result<Session<OpenWeatherFetcher>> {
    Ok(Session::new(fetcher_from_config(cfg)?))
}

async fn show(city: Option<String>, json: bool) -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let city = city.unwrap_or_else(|| cfg.default_city().to_string());
    let session = session_from_config(&cfg)?;

    let report = session.search(&city).await.map_err(user_facing)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render::view(&*session.view().lock().await));
    }

    Ok(())
}

async fn interactive() -> anyhow::Result<()> {
    let cfg = Config::load()?;
    let session = session_from_config(&cfg)?;

    // Mirror the widget, which loads the default city on startup.
    if let Err(err) = session.search(cfg.default_city()).await {
        eprintln!("{}", err.user_message());
    }
    println!("{}\n", render::view(&*session.view().lock().await));

    loop {
        let city = match Text::new("City:").with_placeholder("Search for a city...").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        if let Err(err) = session.search(&city).await {
            eprintln!("{}", err.user_message());
            if err == SearchError::EmptyInput {
                continue;
            }
        }

        println!("{}\n", render::view(&*session.view().lock().await));
    }

    Ok(())
}

fn user_facing(err: SearchError) -> anyhow::Error {
    anyhow!("{}", err.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_optional_city_and_json_flag() {
        let cli = Cli::try_parse_from(["weather", "show", "London", "--json"]).unwrap();
        match cli.command {
            Command::Show { city, json } => {
                assert_eq!(city.as_deref(), Some("London"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["weather", "-v", "show"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Command::Show { city: None, json: false }));
    }

    #[test]
    fn user_facing_uses_provider_wording() {
        let err = user_facing(SearchError::Provider { message: "city not found".to_string() });
        assert_eq!(err.to_string(), "city not found");
    }
}
