use clap::{Parser, Subcommand};
use grete_ui::{config, embed, output};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "grete-ui")]
#[command(about = "Configure the GRETE site's interactive behavior")]
#[command(long_about = "\
Configure the GRETE site's interactive behavior

The behavior itself ships as a wasm module that attaches to the rendered
page: collection accordions, gallery carousels with counters and arrow-key
navigation, smooth in-page anchors, and the hero parallax. This tool
manages the configuration that module reads.

Workflow:

  grete-ui gen-config > grete-ui.toml   # documented defaults
  $EDITOR grete-ui.toml                 # keep only what you change
  grete-ui check                        # validate and summarize
  grete-ui embed >> partials/head.html  # <script> element for the page

Without a config file every command uses the stock defaults.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = config::CONFIG_FILE_NAME, global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a stock grete-ui.toml with all options documented
    GenConfig,
    /// Validate the config file and summarize the resolved behavior
    Check,
    /// Print the <script> element that carries the config into the page
    Embed,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
        Command::Check => {
            println!("==> Checking {}", cli.config.display());
            if !cli.config.exists() {
                println!("==> No config file, using stock defaults");
            }
            let resolved = config::load_config(&cli.config)?;
            output::print_config_summary(&resolved);
            println!("==> Config is valid");
        }
        Command::Embed => {
            let resolved = config::load_config(&cli.config)?;
            tracing::debug!(path = %cli.config.display(), "config resolved");
            println!("{}", embed::config_script(&resolved)?.into_string());
        }
    }

    Ok(())
}
