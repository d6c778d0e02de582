//! Hyperlink interning (OSC 8). Cell storage only keeps a small
//! [`HyperlinkId`], so the full `(id, uri)` pair lives in one table shared by
//! the whole terminal.

use std::collections::HashMap;

use vtcore_types::HyperlinkId;

#[derive(Debug, Clone, Default)]
pub struct HyperlinkTable {
    entries: Vec<(Option<String>, String)>,
    index: HashMap<(Option<String>, String), HyperlinkId>,
}

impl HyperlinkTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `(id, uri)`, returning the same `HyperlinkId` for repeated
    /// requests with identical id/uri (xterm reuses one id per active link).
    pub fn intern(&mut self, id: Option<String>, uri: String) -> HyperlinkId {
        let key = (id, uri);
        if let Some(&existing) = self.index.get(&key) {
            return existing;
        }
        let new_id = self.entries.len() as HyperlinkId;
        self.entries.push(key.clone());
        self.index.insert(key, new_id);
        new_id
    }

    pub fn uri(&self, id: HyperlinkId) -> Option<&str> {
        self.entries.get(id as usize).map(|(_, uri)| uri.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_uri_with_same_id_reuses_slot() {
        let mut table = HyperlinkTable::new();
        let a = table.intern(Some("x".into()), "https://example.com".into());
        let b = table.intern(Some("x".into()), "https://example.com".into());
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_uris_get_distinct_ids() {
        let mut table = HyperlinkTable::new();
        let a = table.intern(None, "https://a.example".into());
        let b = table.intern(None, "https://b.example".into());
        assert_ne!(a, b);
        assert_eq!(table.uri(a), Some("https://a.example"));
    }
}
