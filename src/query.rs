//! Ordered query-string parameters.
//!
//! Listing URLs are rebuilt from the incoming query (pagination links, filter
//! links, redirects), so parameters keep their original order and repeated
//! keys such as `cid=1&cid=2` survive a parse/encode cycle.

use serde::Serialize;

/// Key/value pairs of a query string in their original order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Parses a raw query string (without the leading `?`).
    ///
    /// Malformed input yields an empty set of parameters.
    pub fn parse(raw: &str) -> Self {
        match serde_html_form::from_str::<Vec<(String, String)>>(raw) {
            Ok(pairs) => Self(pairs),
            Err(err) => {
                log::debug!("Ignoring malformed query string {raw:?}: {err}");
                Self::default()
            }
        }
    }

    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// First value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Every value stored under `key`, in order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Replaces `key` with a single value, keeping the position of its first
    /// occurrence. Appends the pair when the key is absent.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = false;
                self.0.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.0.push((key.to_string(), value)),
        }
    }

    /// Drops every value stored under `key`.
    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// Returns a copy with `key` set to `value`.
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.set(key, value);
        copy
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// URL-encodes the parameters without a leading `?`.
    pub fn encode(&self) -> String {
        serde_html_form::to_string(&self.0).unwrap_or_else(|err| {
            log::error!("Failed to encode query string: {err}");
            String::new()
        })
    }
}

/// Parses a `page` parameter the lenient way browsers and old links send it.
///
/// Leading whitespace and an optional sign are accepted, parsing stops at the
/// first non-digit. Missing digits and zero both mean page 1. Negative values
/// are kept so that callers can redirect them.
pub fn parse_page(value: Option<&str>) -> i64 {
    let Some(value) = value else {
        return 1;
    };
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 1;
    }
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits
    };
    let page = signed
        .parse::<i64>()
        .unwrap_or(if negative { i64::MIN } else { i64::MAX });
    if page == 0 { 1 } else { page }
}
