//! Query snapshots and their textual wire form.
//!
//! A [`Snapshot`] is the ordered, string-keyed collection of serialized
//! value texts that stands between the state object and the query string.
//! [`Snapshot::render`] produces the canonical textual form handed to the
//! navigation sink; [`Snapshot::parse`] is its pair-structure inverse for
//! hosts whose source supplies one string rather than key/text pairs.
//!
//! Percent escaping is delegated to the `urlencoding` crate; this module
//! imposes no escaping policy of its own.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Ordered parameter-name to serialized-text mapping.
///
/// Invariant: a key is in the snapshot iff its value was judged present at
/// encode time. Inserting an existing key replaces its text in place,
/// keeping the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: IndexMap<String, String>,
}

impl Snapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the serialized text for a key.
    pub fn set(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    /// Serialized text for a key, if the key is present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of parameters in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot holds no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate key/text pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    /// Render the canonical textual form.
    ///
    /// `?` followed by percent-escaped `key=text` pairs joined with `&`, in
    /// insertion order. An empty snapshot renders as the bare `"?"`, which
    /// is the form a navigation target takes when every parameter is
    /// absent.
    pub fn render(&self) -> String {
        let mut rendered = String::from("?");
        for (index, (key, text)) in self.entries.iter().enumerate() {
            if index > 0 {
                rendered.push('&');
            }
            rendered.push_str(&urlencoding::encode(key));
            rendered.push('=');
            rendered.push_str(&urlencoding::encode(text));
        }
        rendered
    }

    /// Parse a rendered form back into a snapshot.
    ///
    /// Strips an optional leading `?`, splits on `&` and the first `=` of
    /// each pair, and percent-decodes both sides. A pair without `=` maps
    /// the whole pair to the empty text. Total: bytes that do not decode as
    /// UTF-8 fall back to the raw text.
    pub fn parse(rendered: &str) -> Self {
        let raw = rendered.strip_prefix('?').unwrap_or(rendered);
        let mut snapshot = Self::new();
        for pair in raw.split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, text) = pair.split_once('=').unwrap_or((pair, ""));
            snapshot.set(unescape(key), unescape(text));
        }
        snapshot
    }
}

fn unescape(part: &str) -> String {
    urlencoding::decode(part)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| part.to_owned())
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        let mut snapshot = Self::new();
        for (key, text) in pairs {
            snapshot.set(key, text);
        }
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pairs_in_insertion_order() {
        let snapshot: Snapshot = [("page", "1"), ("search", "\"test\"")].into_iter().collect();
        assert_eq!(snapshot.render(), "?page=1&search=%22test%22");
    }

    #[test]
    fn empty_snapshot_renders_bare_prefix() {
        assert_eq!(Snapshot::new().render(), "?");
    }

    #[test]
    fn parse_inverts_render() {
        let snapshot: Snapshot = [("tags", "[\"a\",\"b\"]"), ("q", "plain word")]
            .into_iter()
            .collect();
        assert_eq!(Snapshot::parse(&snapshot.render()), snapshot);
    }

    #[test]
    fn parse_accepts_forms_without_prefix() {
        let snapshot = Snapshot::parse("page=1");
        assert_eq!(snapshot.get("page"), Some("1"));
    }

    #[test]
    fn parse_of_bare_prefix_is_empty() {
        assert!(Snapshot::parse("?").is_empty());
    }

    #[test]
    fn pair_without_separator_gets_empty_text() {
        let snapshot = Snapshot::parse("?flag");
        assert_eq!(snapshot.get("flag"), Some(""));
    }

    #[test]
    fn set_replaces_in_place() {
        let mut snapshot: Snapshot = [("a", "1"), ("b", "2")].into_iter().collect();
        snapshot.set("a", "3");
        assert_eq!(snapshot.render(), "?a=3&b=2");
    }
}
