//! HTTP fetcher for crawler range documents.

use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::ranges::IpRange;

const TIMEOUT_SECS: u64 = 30;

/// HTTP client for fetching range documents. One client is shared across all
/// sources in a run; each fetch is a single blocking GET with no retries.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .user_agent(format!("botgeo/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }

    /// Fetch and parse one source. `bot` is only used in error reports.
    pub fn fetch(&self, bot: &str, url: &str) -> Result<IpRange> {
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(|source| Error::Fetch {
                bot: bot.to_string(),
                url: url.to_string(),
                source,
            })?;

        parse_range(&body).map_err(|source| Error::Parse {
            bot: bot.to_string(),
            url: url.to_string(),
            source,
        })
    }
}

/// Parse a response body as a range document
pub fn parse_range(body: &str) -> std::result::Result<IpRange, serde_json::Error> {
    serde_json::from_str(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::Prefix;

    #[test]
    fn test_parse_range_googlebot_shape() {
        let body = r#"{
            "creationTime": "2024-03-08T01:02:03.000000",
            "prefixes": [
                { "ipv4Prefix": "66.249.64.0/27" },
                { "ipv4Prefix": "66.249.64.128/27" },
                { "ipv6Prefix": "2001:4860:4801:10::/64" }
            ]
        }"#;
        let range = parse_range(body).unwrap();
        assert_eq!(range.creation_time, "2024-03-08T01:02:03.000000");
        assert_eq!(range.prefixes.len(), 3);
        assert_eq!(range.prefixes[2], Prefix::v6("2001:4860:4801:10::/64"));
    }

    #[test]
    fn test_parse_range_ignores_unknown_fields() {
        // bingbot documents carry extra per-prefix metadata
        let body = r#"{
            "creationTime": "2024-03-08",
            "prefixes": [ { "ipv4Prefix": "157.55.39.0/24", "service": "bingbot" } ]
        }"#;
        let range = parse_range(body).unwrap();
        assert_eq!(range.prefixes[0], Prefix::v4("157.55.39.0/24"));
    }

    #[test]
    fn test_parse_range_missing_fields_default() {
        let range = parse_range("{}").unwrap();
        assert!(range.creation_time.is_empty());
        assert!(range.prefixes.is_empty());
    }

    #[test]
    fn test_parse_range_malformed() {
        assert!(parse_range("<html>not json</html>").is_err());
        assert!(parse_range(r#"{"prefixes": "nope"}"#).is_err());
    }
}
