use cname_sync_domain::CnameEntry;
use std::collections::HashSet;
use tracing::debug;

/// Converts between Pi-hole's `dns.cnameRecords` value and [`CnameEntry`]s.
///
/// Decoding never fails: an empty or unparseable response yields an empty
/// list. Entries with a comma that are not valid records are kept as
/// [`CnameEntry::Unparsed`] and written back unchanged.
pub struct CnameListCodec;

impl CnameListCodec {
    pub fn decode(raw: &str) -> Vec<CnameEntry> {
        let raw = raw.trim();
        if raw.is_empty() || raw == "[]" {
            return Vec::new();
        }

        let entries = match serde_json::from_str::<Vec<String>>(raw) {
            Ok(entries) => entries,
            Err(_) => match Self::split_listing(raw) {
                Some(entries) => entries,
                None => {
                    debug!(response = raw, "Unrecognised CNAME list, treating as empty");
                    return Vec::new();
                }
            },
        };

        let mut seen = HashSet::new();
        let mut decoded = Vec::with_capacity(entries.len());
        for entry in &entries {
            match CnameEntry::parse(entry) {
                Some(parsed) => {
                    if seen.insert(parsed.clone()) {
                        decoded.push(parsed);
                    }
                }
                None => debug!(entry = %entry, "Ignoring malformed CNAME entry"),
            }
        }
        decoded
    }

    /// `[ "a.example.com,proxy.lan", "b.example.com,proxy.lan" ]`
    pub fn encode(entries: &[CnameEntry]) -> String {
        if entries.is_empty() {
            return "[]".to_string();
        }

        let quoted: Vec<String> = entries
            .iter()
            .map(|entry| {
                let entry = entry.to_entry();
                serde_json::to_string(&entry).unwrap_or_else(|_| format!("\"{}\"", entry))
            })
            .collect();

        format!("[ {} ]", quoted.join(", "))
    }

    /// pihole-FTL prints the list unquoted: `[ a,b, c,d ]`.
    fn split_listing(raw: &str) -> Option<Vec<String>> {
        let inner = raw.strip_prefix('[')?.strip_suffix(']')?.trim();
        if inner.is_empty() {
            return Some(Vec::new());
        }

        Some(
            inner
                .split(", ")
                .map(|part| part.trim().trim_matches('"').to_string())
                .filter(|part| !part.is_empty())
                .collect(),
        )
    }
}
