use anyhow::Context;
use clap::{Parser, Subcommand};
use geoflags_core::{Config, DEFAULT_BASE_URL, Flags, FlagSource, QualityApiClient, Query};
use inquire::Text;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "geoflags", version, about = "Geospatial quality flags CLI")]
pub struct Cli {
    /// Override the configured quality API endpoint for this run.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the built-in example query (Puma concolor in Argentina).
    Example,

    /// Fetch quality flags for an occurrence.
    #[command(allow_negative_numbers = true)]
    Query {
        /// Latitude in decimal degrees.
        latitude: f64,

        /// Longitude in decimal degrees.
        longitude: f64,

        /// Country name, e.g. "Argentina".
        country: String,

        /// Binomial species name, e.g. "Puma concolor".
        binomial: String,

        /// Print flags as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Set the quality API endpoint interactively.
    Configure,

    /// Print the config file location.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Example) {
            Command::Example => {
                let client = client(self.base_url)?;
                let flags = client.fetch_flags(&Query::example()).await?;
                tracing::debug!(returned = flags.is_some(), "example query finished");
            }
            Command::Query { latitude, longitude, country, binomial, json } => {
                let client = client(self.base_url)?;
                let query = Query::new(latitude, longitude, country, binomial);

                match client.fetch_flags(&query).await? {
                    Some(flags) if json => {
                        println!("{}", serde_json::to_string_pretty(&flags)?);
                    }
                    Some(flags) => print!("{}", render_flags(&flags)),
                    None => println!("No flags returned."),
                }
            }
            Command::Configure => configure()?,
            Command::ConfigPath => println!("{}", Config::config_file_path()?.display()),
        }

        Ok(())
    }
}

fn client(base_url: Option<String>) -> anyhow::Result<QualityApiClient> {
    let client = match base_url {
        Some(url) => QualityApiClient::new(url),
        None => QualityApiClient::from_config(&Config::load()?),
    };
    Ok(client)
}

fn configure() -> anyhow::Result<()> {
    let mut cfg = Config::load()?;

    let answer = Text::new("Quality API base URL:")
        .with_initial_value(cfg.effective_base_url())
        .with_help_message("Leave empty to use the built-in endpoint")
        .prompt()
        .context("Failed to read base URL")?;

    let answer = answer.trim();
    if answer.is_empty() || answer == DEFAULT_BASE_URL {
        cfg.reset_base_url();
    } else {
        cfg.set_base_url(answer);
    }

    cfg.save()?;
    println!("Using endpoint: {}", cfg.effective_base_url());

    Ok(())
}

/// One `name: value` line per flag, sorted by name.
fn render_flags(flags: &Flags) -> String {
    let mut names: Vec<&String> = flags.keys().collect();
    names.sort();

    names.into_iter().map(|name| format!("{name}: {}\n", flags[name])).collect()
}
