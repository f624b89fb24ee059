use std::convert::Infallible;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

/// Key/value pairs of one section, in first-seen order.
pub type Section = IndexMap<String, String>;

/// Parsed INI text: section name to its pairs.
///
/// A section only exists once a pair has been stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: IndexMap<String, Section>,
}

impl Document {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Last write wins; the key keeps its original position.
    pub(crate) fn upsert(&mut self, section: &str, key: String, value: String) {
        match self.sections.get_mut(section) {
            Some(pairs) => {
                pairs.insert(key, value);
            }
            None => {
                let mut pairs = Section::new();
                pairs.insert(key, value);
                self.sections.insert(section.to_string(), pairs);
            }
        }
    }
}

impl FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(super::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upsert_creates_section_lazily_and_overwrites() {
        let mut doc = Document::default();
        assert!(doc.is_empty());
        doc.upsert("a", "k".into(), "1".into());
        doc.upsert("a", "j".into(), "2".into());
        doc.upsert("a", "k".into(), "3".into());
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get("a", "k"), Some("3"));
        let keys: Vec<&str> = doc
            .section("a")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["k", "j"]);
    }

    #[test]
    fn serializes_as_nested_object() {
        let doc: Document = "[p]\nx = 1\n".parse().unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json, serde_json::json!({ "p": { "x": "1" } }));
    }
}
