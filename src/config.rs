//! YAML configuration for botgeo.
//!
//! The config file has two reserved keys, `file` and `template`; every other
//! top-level key names a bot source with a `url` to fetch.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Built-in output template: an nginx `geo` block that marks every published
/// crawler network with `1`. Used when the config file has no `template` key.
/// Template context is the merged range document with its wire-level field
/// names (`prefixes`, `ipv4Prefix`, `ipv6Prefix`, `creationTime`).
pub const DEFAULT_TEMPLATE: &str = "\
geo $bot_network {
    default 0;
{%- for prefix in prefixes %}
{%- if prefix.ipv4Prefix %}
    {{ prefix.ipv4Prefix }} 1;
{%- endif %}
{%- if prefix.ipv6Prefix %}
    {{ prefix.ipv6Prefix }} 1;
{%- endif %}
{%- endfor %}
}
";

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Path the rendered output is written to
    pub file: PathBuf,

    /// Output template source text
    #[serde(default = "default_template")]
    pub template: String,

    /// Named bot sources, one JSON document URL each. A BTreeMap so sources
    /// are fetched in sorted name order and the output is stable across runs.
    #[serde(flatten)]
    pub bots: BTreeMap<String, BotSource>,
}

/// A single configured source endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BotSource {
    pub url: String,
}

impl BotConfig {
    /// Load configuration from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: BotConfig =
            serde_yaml::from_str(&content).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(config)
    }
}
