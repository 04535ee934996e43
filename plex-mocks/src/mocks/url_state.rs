//! URL state persistence for mock pages
//!
//! Serializes control state as base64-encoded JSON in the query string,
//! keeping URLs opaque and avoiding conflicts with query parameter names.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a state string from a URL query parameter into key-value pairs.
///
/// Anything that isn't valid base64 of a flat JSON string map decodes to
/// no pairs, so a mangled URL just shows the defaults.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let json_bytes = match URL_SAFE_NO_PAD.decode(encoded) {
        Ok(b) => b,
        Err(e) => {
            tracing::debug!("Ignoring undecodable mock state: {e}");
            return Vec::new();
        }
    };

    let map: BTreeMap<String, String> = match serde_json::from_slice(&json_bytes) {
        Ok(m) => m,
        Err(e) => {
            tracing::debug!("Ignoring malformed mock state: {e}");
            return Vec::new();
        }
    };

    map.into_iter().collect()
}

/// Encode key-value pairs into a base64 state string for the URL.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    // A map of strings always serializes
    let json = serde_json::to_string(&map).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Builder to collect state changes and produce an encoded state string
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Record a bool, skipped when it equals the default.
    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.pairs.push((key.to_string(), value.to_string()));
    }

    pub fn build(self) -> String {
        build_state(&self.pairs)
    }

    /// `None` when every control is at its default, so the URL stays clean.
    pub fn build_option(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(self.build())
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_state_survives_the_url() {
        let pairs = vec![pair("collapsible", "icon"), pair("mobile", "1")];
        let encoded = build_state(&pairs);

        assert!(!encoded.contains('='));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(parse_state(&encoded), pairs);
    }

    #[test]
    fn test_parse_state_sorts_keys() {
        let encoded = build_state(&[pair("b", "2"), pair("a", "1")]);
        assert_eq!(parse_state(&encoded), vec![pair("a", "1"), pair("b", "2")]);
    }

    #[test]
    fn test_parse_state_rejects_garbage() {
        assert!(parse_state("").is_empty());
        assert!(parse_state("not base64!").is_empty());
        // Valid base64 of something that isn't a string map
        let encoded = URL_SAFE_NO_PAD.encode(b"[1, 2, 3]");
        assert!(parse_state(&encoded).is_empty());
    }

    #[test]
    fn test_builder_skips_default_bools() {
        let mut builder = StateBuilder::new();
        builder.set_bool("dismissible", true, true);
        builder.set_bool("loading", false, false);
        assert_eq!(builder.build_option(), None);

        let mut builder = StateBuilder::new();
        builder.set_bool("dismissible", false, true);
        builder.set_string("variant", "docs");
        let encoded = builder.build_option().unwrap();
        assert_eq!(
            parse_state(&encoded),
            vec![pair("dismissible", "0"), pair("variant", "docs")]
        );
    }
}
