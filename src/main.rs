//! Recipe Deck - a terminal recipe browser
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;

use rdeck_app::config::{self, Settings};
use rdeck_core::logging;
use rdeck_core::prelude::*;

/// Recipe Deck - browse a recipe collection in the terminal
#[derive(Parser, Debug)]
#[command(name = "rdeck")]
#[command(about = "Browse a recipe collection in the terminal", long_about = None)]
struct Args {
    /// http(s) URL or local JSON file with a "recipes" array
    #[arg(value_name = "LOCATOR")]
    locator: Option<String>,

    /// Same as LOCATOR
    #[arg(long = "source", value_name = "LOCATOR", conflicts_with = "locator")]
    source: Option<String>,

    /// Run in headless mode (JSON lines on stdout, no TUI)
    #[arg(long)]
    headless: bool,

    /// Only list recipes in this category (headless mode)
    #[arg(long, value_name = "LABEL", requires = "headless")]
    category: Option<String>,

    /// Write a default .rdeck/config.toml in the current directory and exit
    #[arg(long)]
    init: bool,
}

impl Args {
    /// Locator from the command line, falling back to the config file
    fn locator(&self, settings: &Settings) -> String {
        self.locator
            .clone()
            .or_else(|| self.source.clone())
            .unwrap_or_else(|| settings.source.url.clone())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    logging::init()?;

    let cwd = std::env::current_dir().context("Failed to resolve working directory")?;

    if args.init {
        let path = config::init_config_dir(&cwd)?;
        println!("Config written to {}", path.display());
        println!("Logs are written to {}", logging::log_directory().display());
        return Ok(());
    }

    let settings = config::load_settings(&cwd);
    let locator = args.locator(&settings);

    if args.headless {
        let ok = recipe_deck::run_headless(settings, locator, args.category).await?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    recipe_deck::run(settings, locator).await
}
