use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use botgeo::config::BotConfig;

#[derive(Parser)]
#[command(version, about = "Generate a web-crawler access-control snippet from published IP ranges")]
struct Cli {
    #[arg(long = "config", short = 'c', env = "BOTGEO_CONFIG",
        help = "Path to the configuration file", default_value = "config.yaml")]
    config: String,

    #[arg(long, short = 'v', help = "Enable debug output")]
    verbose: bool,

    #[arg(long, short = 'q', help = "Only log errors", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = BotConfig::load(&cli.config)
        .with_context(|| format!("Cannot load configuration from {}", cli.config))?;

    botgeo::run::run(&config)?;

    Ok(())
}
