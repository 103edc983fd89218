//! # botgeo - crawler IP-range config generator
//!
//! Fetches the IP-address ranges that crawler operators publish as JSON
//! documents (Googlebot, bingbot, ...), merges them into one list, and
//! renders the list through a template into a text config file such as an
//! nginx `geo` access-control snippet.
//!
//! One run is one pass: load config, fetch every source sequentially, merge,
//! render, write. Nothing is cached or retried, and any failure aborts the
//! run before the output file is touched.
//!
//! ```no_run
//! use botgeo::config::BotConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = BotConfig::load("config.yaml")?;
//!     botgeo::run::run(&config)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod ranges;
pub mod render;
pub mod run;

pub use error::{Error, Result};
