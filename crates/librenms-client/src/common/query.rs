//! Query string helpers for the LibreNMS API
//!
//! LibreNMS filters are plain `key=value` pairs. Unset and empty values are
//! never sent, so `QueryParams` drops them on insertion.

use std::fmt::Display;

/// Ordered set of query parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to `value`, replacing any previous value.
    ///
    /// Empty strings are dropped, matching how the API treats a missing filter.
    pub fn set(&mut self, key: &str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        self.pairs.retain(|(k, _)| k != key);
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value));
        }
        self
    }

    /// Set `key` only when `value` is `Some`
    pub fn set_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a flag parameter that carries no value (e.g. `valid_mappings`)
    pub fn set_flag(&mut self, key: &str) -> &mut Self {
        self.pairs.retain(|(k, _)| k != key);
        self.pairs.push((key.to_string(), String::new()));
        self
    }

    /// Value of `key`, if set
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True when no parameter is set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Encode as `k=v&k2=v2`, sorted by key
    pub fn encode(&self) -> String {
        let mut pairs: Vec<&(String, String)> = self.pairs.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            let key: String = k.into();
            let value: String = v.into();
            params.set(&key, value);
        }
        params
    }
}

/// Types that render themselves as query parameters
pub trait ToQuery {
    /// Build the parameter set; only fields that are set are included
    fn to_query(&self) -> QueryParams;
}

impl ToQuery for QueryParams {
    fn to_query(&self) -> QueryParams {
        self.clone()
    }
}

/// Escape a single path segment (hostnames, MAC addresses, group names).
///
/// Characters allowed in an RFC 3986 path segment are kept as-is so MAC
/// addresses keep their colons; everything else is percent-encoded.
pub fn segment(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c.is_ascii_alphanumeric() || "-._~:@!$&'()*+,;=".contains(c) {
            out.push(c);
        } else {
            let mut buf = [0u8; 4];
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_dropped() {
        let mut q = QueryParams::new();
        q.set("hostname", "").set("os", "ios");
        assert_eq!(q.len(), 1);
        assert_eq!(q.get("hostname"), None);
        assert_eq!(q.encode(), "os=ios");
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut q = QueryParams::new();
        q.set("state", 1).set("state", 0);
        assert_eq!(q.encode(), "state=0");
    }

    #[test]
    fn encode_sorts_and_escapes() {
        let q: QueryParams = [("sortorder", "DESC"), ("from", "2017-07-22 23:00:00")]
            .into_iter()
            .collect();
        assert_eq!(q.encode(), "from=2017-07-22%2023%3A00%3A00&sortorder=DESC");
    }

    #[test]
    fn flags_have_no_value() {
        let mut q = QueryParams::new();
        q.set_flag("valid_mappings");
        assert_eq!(q.encode(), "valid_mappings=");
        assert!(!q.is_empty());
    }

    #[test]
    fn segment_escapes_reserved_characters() {
        assert_eq!(segment("core sw/1"), "core%20sw%2F1");
        assert_eq!(segment("aa:bb:cc:dd:ee:ff"), "aa:bb:cc:dd:ee:ff");
        assert_eq!(segment("rack?1#a"), "rack%3F1%23a");
    }
}
