//! IP-range records as published by crawler operators, plus the merge fold
//! that combines them into one list.

use serde::{Deserialize, Serialize};

/// One published range document: an informational creation timestamp and an
/// ordered list of prefixes. The timestamp is carried verbatim and never
/// interpreted.
#[derive(Default, Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct IpRange {
    #[serde(default)]
    pub creation_time: String,
    #[serde(default)]
    pub prefixes: Vec<Prefix>,
}

/// A single CIDR block attributed to a crawler. At most one of the two
/// fields is set per entry; an entry with neither is legal and simply emits
/// nothing when rendered.
#[derive(Default, Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prefix {
    pub ipv4_prefix: Option<String>,
    pub ipv6_prefix: Option<String>,
}

impl IpRange {
    /// Append `other`'s prefixes to this range, keeping their order.
    /// Duplicate or overlapping prefixes across sources are kept verbatim;
    /// crawler ranges can legitimately overlap and the output consumer
    /// tolerates repeats.
    pub fn merge(&mut self, other: IpRange) {
        self.prefixes.extend(other.prefixes);
    }
}

impl Prefix {
    pub fn v4(cidr: &str) -> Self {
        Self {
            ipv4_prefix: Some(cidr.to_string()),
            ipv6_prefix: None,
        }
    }

    pub fn v6(cidr: &str) -> Self {
        Self {
            ipv4_prefix: None,
            ipv6_prefix: Some(cidr.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_keeps_order() {
        let mut merged = IpRange::default();
        merged.merge(IpRange {
            creation_time: "2024-01-01T00:00:00.000000".to_string(),
            prefixes: vec![Prefix::v4("1.2.3.0/24"), Prefix::v6("2001:db8::/32")],
        });
        merged.merge(IpRange {
            creation_time: "2024-02-02T00:00:00.000000".to_string(),
            prefixes: vec![Prefix::v4("5.6.7.0/24")],
        });

        assert_eq!(
            merged.prefixes,
            vec![
                Prefix::v4("1.2.3.0/24"),
                Prefix::v6("2001:db8::/32"),
                Prefix::v4("5.6.7.0/24"),
            ]
        );
        // the merged record never takes on a source's timestamp
        assert!(merged.creation_time.is_empty());
    }

    #[test]
    fn test_merge_empty_other() {
        let mut merged = IpRange {
            creation_time: String::new(),
            prefixes: vec![Prefix::v4("1.2.3.0/24")],
        };
        merged.merge(IpRange::default());
        assert_eq!(merged.prefixes.len(), 1);
    }

    #[test]
    fn test_merge_preserves_duplicates() {
        let mut merged = IpRange::default();
        merged.merge(IpRange {
            creation_time: String::new(),
            prefixes: vec![Prefix::v4("1.2.3.0/24")],
        });
        merged.merge(IpRange {
            creation_time: String::new(),
            prefixes: vec![Prefix::v4("1.2.3.0/24")],
        });
        assert_eq!(merged.prefixes.len(), 2);
    }

    #[test]
    fn test_deserialize_wire_names() {
        let range: IpRange = serde_json::from_str(
            r#"{"creationTime":"2024-03-08T01:02:03.000000",
                "prefixes":[{"ipv4Prefix":"66.249.64.0/27"},{"ipv6Prefix":"2001:4860::/32"}]}"#,
        )
        .unwrap();
        assert_eq!(range.creation_time, "2024-03-08T01:02:03.000000");
        assert_eq!(range.prefixes[0], Prefix::v4("66.249.64.0/27"));
        assert_eq!(range.prefixes[1], Prefix::v6("2001:4860::/32"));
    }

    #[test]
    fn test_deserialize_entry_with_neither_field() {
        let range: IpRange = serde_json::from_str(r#"{"prefixes":[{}]}"#).unwrap();
        assert_eq!(range.prefixes, vec![Prefix::default()]);
    }
}
