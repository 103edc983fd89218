//! Error types for botgeo.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for botgeo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a run. Every variant is fatal; there is no
/// retry and no partial output.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read config file {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to build the HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch ranges for {bot} from {url}")]
    Fetch {
        bot: String,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed range document for {bot} from {url}")]
    Parse {
        bot: String,
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid output template")]
    Template(#[source] minijinja::Error),

    #[error("failed to render the output template")]
    Render(#[source] minijinja::Error),

    #[error("failed to write output file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
