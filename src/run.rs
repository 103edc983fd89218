//! End-to-end sequencing: fetch every configured source, merge, render,
//! write. Strictly sequential, and any failure aborts before the output
//! file is touched.

use tracing::{debug, info};

use crate::config::BotConfig;
use crate::error::{Error, Result};
use crate::fetch::Fetcher;
use crate::ranges::IpRange;
use crate::render;

pub fn run(config: &BotConfig) -> Result<()> {
    let fetcher = Fetcher::new()?;

    let mut merged = IpRange::default();
    for (bot, source) in &config.bots {
        info!("Fetching {} ranges from {}", bot, source.url);
        let range = fetcher.fetch(bot, &source.url)?;
        debug!(
            "{}: {} prefixes (published {})",
            bot,
            range.prefixes.len(),
            if range.creation_time.is_empty() {
                "unknown"
            } else {
                range.creation_time.as_str()
            }
        );
        merged.merge(range);
    }
    info!(
        "Merged {} prefixes from {} sources",
        merged.prefixes.len(),
        config.bots.len()
    );

    let output = render::render(&config.template, &merged)?;

    std::fs::write(&config.file, &output).map_err(|source| Error::Write {
        path: config.file.clone(),
        source,
    })?;
    info!("Wrote {} ({} bytes)", config.file.display(), output.len());

    Ok(())
}
