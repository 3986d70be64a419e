use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use inquire::{CustomType, Password};
use weather_core::Config;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-web", version, about = "Server-rendered weather lookup")]
pub struct Cli {
    /// Config file to use instead of the platform config directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the web server (the default).
    Serve,

    /// Store the OpenWeather API key and listening port in the config file.
    Configure,
}

/// Values that take precedence over the config file.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Address to listen on.
    #[arg(long, env = "HOST", global = true)]
    pub host: Option<String>,

    /// Port to listen on.
    #[arg(long, env = "PORT", global = true)]
    pub port: Option<u16>,

    /// OpenWeather API key.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(api_key) = &self.api_key {
            config.set_api_key(api_key.clone());
        }
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match self.command.unwrap_or(Command::Serve) {
            Command::Serve => {
                self.overrides.apply(&mut config);
                weather_web::server::serve(&config).await
            }
            Command::Configure => configure(config, self.config),
        }
    }
}

fn configure(mut config: Config, path: Option<PathBuf>) -> anyhow::Result<()> {
    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    config.server.port = CustomType::<u16>::new("Port to listen on:")
        .with_default(config.server.port)
        .prompt()
        .context("Failed to read port")?;

    let saved_to = match path {
        Some(path) => {
            config.save_to(&path)?;
            path
        }
        None => config.save()?,
    };

    println!("Configuration saved to {}", saved_to.display());
    Ok(())
}
