//! Tagged locale tree and deep structural merge.
//!
//! Dictionary fragments arrive as plain JSON objects from independent page
//! modules. Each node is classified once, at conversion time, so merge and
//! resolution are exhaustive matches instead of runtime type probing.

use std::collections::{BTreeMap, HashMap};

use serde_json::Value;

use super::{Language, DEFAULT_LANGUAGE};

/// One node of the merged dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum LocaleNode {
    /// Nested dictionary scope, keyed by path segment.
    Branch(BTreeMap<String, LocaleNode>),
    /// Per-language display strings. At minimum the default language's
    /// entry should be present; the rest fall back to it.
    Variant(HashMap<Language, String>),
    /// Anything else: bare strings (returned verbatim), arrays (opaque,
    /// never merged element-wise), and other scalars.
    Literal(Value),
}

impl LocaleNode {
    /// Classifies a JSON value. An object is a `Variant` iff it is
    /// non-empty, every key is a supported language code, and every value
    /// is a string; other objects are branches.
    pub fn from_json(value: &Value) -> LocaleNode {
        match value {
            Value::Object(map) => {
                if is_variant_shape(map) {
                    let mut entries = HashMap::new();
                    for (key, value) in map {
                        if let (Some(language), Some(text)) = (Language::parse(key), value.as_str()) {
                            entries.insert(language, text.to_string());
                        }
                    }
                    LocaleNode::Variant(entries)
                } else {
                    let children = map
                        .iter()
                        .map(|(key, value)| (key.clone(), LocaleNode::from_json(value)))
                        .collect();
                    LocaleNode::Branch(children)
                }
            }
            other => LocaleNode::Literal(other.clone()),
        }
    }

    /// Deep structural union. Two branches recurse, two variants union
    /// per-language; any other collision is won by the incoming node.
    /// Collisions are silent; callers use disjoint namespaces.
    pub fn merge(&mut self, incoming: LocaleNode) {
        match (self, incoming) {
            (LocaleNode::Branch(existing), LocaleNode::Branch(update)) => {
                for (key, value) in update {
                    match existing.entry(key) {
                        std::collections::btree_map::Entry::Occupied(mut slot) => {
                            slot.get_mut().merge(value);
                        }
                        std::collections::btree_map::Entry::Vacant(slot) => {
                            slot.insert(value);
                        }
                    }
                }
            }
            (LocaleNode::Variant(existing), LocaleNode::Variant(update)) => {
                existing.extend(update);
            }
            (slot, update) => *slot = update,
        }
    }

    /// Resolves this node to display text: active language, then the
    /// default language, then nothing. Bare strings pass through verbatim.
    pub fn resolve(&self, language: Language) -> Option<String> {
        match self {
            LocaleNode::Variant(entries) => entries
                .get(&language)
                .or_else(|| entries.get(&DEFAULT_LANGUAGE))
                .cloned(),
            LocaleNode::Literal(Value::String(text)) => Some(text.clone()),
            _ => None,
        }
    }
}

fn is_variant_shape(map: &serde_json::Map<String, Value>) -> bool {
    !map.is_empty()
        && map
            .iter()
            .all(|(key, value)| Language::parse(key).is_some() && value.is_string())
}

/// The merged dictionary, built incrementally as page modules register
/// their fragments. The top level is always a scope, never a variant.
#[derive(Debug, Default)]
pub struct Dictionary {
    root: BTreeMap<String, LocaleNode>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Merges one fragment into the dictionary. Non-object fragments carry
    /// no keys and are dropped with a warning.
    pub fn merge_fragment(&mut self, fragment: &Value) {
        let Value::Object(map) = fragment else {
            tracing::warn!("ignoring non-object translation fragment");
            return;
        };

        for (key, value) in map {
            let incoming = LocaleNode::from_json(value);
            match self.root.entry(key.clone()) {
                std::collections::btree_map::Entry::Occupied(mut slot) => {
                    slot.get_mut().merge(incoming);
                }
                std::collections::btree_map::Entry::Vacant(slot) => {
                    slot.insert(incoming);
                }
            }
        }
    }

    /// Walks a dot-separated key path through the tree. Returns `None` if
    /// any segment is absent or an intermediate node is not a scope.
    pub fn lookup(&self, key_path: &str) -> Option<&LocaleNode> {
        let mut segments = key_path.split('.');
        let mut node = self.root.get(segments.next()?)?;

        for segment in segments {
            match node {
                LocaleNode::Branch(children) => node = children.get(segment)?,
                _ => return None,
            }
        }

        Some(node)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
