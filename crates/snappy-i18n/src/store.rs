//! Key-first translation tree.
//!
//! Translations are supplied one locale at a time as nested mappings
//! (`{"common": {"hello": "Hello"}}` for `en`) and stored key-first:
//!
//! ```text
//! common
//! └── hello
//!     ├── en: "Hello"
//!     └── es: "¡Hola!"
//! ```
//!
//! # Invariants
//!
//! 1. **Tagged nodes**: a path holds either per-locale strings (leaf) or
//!    child segments (branch), never both.
//!
//! 2. **Atomic insertion**: a rejected `insert` leaves the tree unchanged.
//!
//! 3. **Lookups never fail**: an absent path, a branch, or a missing locale
//!    all read as `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{I18nError, Result};
use crate::locale::Locale;
use crate::merge::{Merge, MergeStrategy};

/// Root of a translation tree: key segment to node.
pub type TranslationTree = BTreeMap<String, TranslationNode>;

/// A node of the translation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// Concrete text per locale.
    Leaf(BTreeMap<Locale, String>),
    /// Child nodes per key segment.
    Branch(TranslationTree),
}

impl TranslationNode {
    /// Leaf holding a single locale's text.
    pub fn leaf(locale: impl Into<Locale>, text: impl Into<String>) -> Self {
        Self::Leaf(BTreeMap::from([(locale.into(), text.into())]))
    }

    /// Whether the node holds no entries at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Leaf(values) => values.is_empty(),
            Self::Branch(children) => children.is_empty(),
        }
    }
}

impl Merge for TranslationNode {
    fn merge_shallow(self, source: Self) -> Self {
        match (self, source) {
            (Self::Leaf(mut target), Self::Leaf(source)) => {
                target.extend(source);
                Self::Leaf(target)
            }
            (Self::Branch(target), Self::Branch(source)) => {
                Self::Branch(target.merge_shallow(source))
            }
            (_, source) => source,
        }
    }

    fn merge_deep(self, source: Self) -> Self {
        match (self, source) {
            (Self::Leaf(mut target), Self::Leaf(source)) => {
                target.extend(source);
                Self::Leaf(target)
            }
            (Self::Branch(target), Self::Branch(source)) => {
                Self::Branch(target.merge_deep(source))
            }
            (_, source) => source,
        }
    }
}

impl Merge for TranslationTree {
    fn merge_shallow(mut self, source: Self) -> Self {
        self.extend(source);
        self
    }

    fn merge_deep(mut self, source: Self) -> Self {
        for (key, node) in source {
            let merged = match self.remove(&key) {
                Some(existing) => existing.merge_deep(node),
                None => node,
            };
            self.insert(key, merged);
        }
        self
    }
}

/// Owner of a translation tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationStore {
    root: TranslationTree,
}

impl TranslationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing key-first tree.
    pub fn from_tree(root: TranslationTree) -> Self {
        Self { root }
    }

    /// The key-first tree.
    pub fn tree(&self) -> &TranslationTree {
        &self.root
    }

    /// Restructure a per-locale `structure` into the tree.
    ///
    /// Every string value becomes the `locale` entry of the leaf at its
    /// dotted path. Any other non-mapping value fails with
    /// [`I18nError::Structure`] naming the path, and so does a value whose
    /// shape conflicts with a non-empty node already in the tree.
    pub fn insert(&mut self, locale: &str, structure: &Value) -> Result<()> {
        let Value::Object(structure) = structure else {
            return Err(I18nError::structure("", locale));
        };

        let mut staged = self.root.clone();
        restructure(&mut staged, locale, structure, "")?;
        self.root = staged;
        Ok(())
    }

    /// Merge a key-first tree into the root.
    pub fn merge(&mut self, other: TranslationTree, strategy: MergeStrategy) {
        let root = std::mem::take(&mut self.root);
        self.root = root.merge_with(other, strategy);
    }

    /// Node at a dotted `key`, if the whole path exists.
    pub fn node(&self, key: &str) -> Option<&TranslationNode> {
        let mut segments = key.split('.');
        let mut node = self.root.get(segments.next()?)?;

        for segment in segments {
            match node {
                TranslationNode::Branch(children) => node = children.get(segment)?,
                TranslationNode::Leaf(_) => return None,
            }
        }

        Some(node)
    }

    /// Text for `key` in `locale`.
    pub fn get(&self, key: &str, locale: &str) -> Option<&str> {
        match self.node(key)? {
            TranslationNode::Leaf(values) => values.get(locale).map(String::as_str),
            TranslationNode::Branch(_) => None,
        }
    }

    /// Locales that have text for `key`.
    pub fn locales_of(&self, key: &str) -> Vec<&str> {
        match self.node(key) {
            Some(TranslationNode::Leaf(values)) => values.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// All dotted leaf keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_leaves(&self.root, "", &mut |path: &str, _: &BTreeMap<Locale, String>| {
            keys.push(path.to_string())
        });
        keys
    }

    /// Leaf keys with no text for `locale`, sorted.
    pub fn missing_keys(&self, locale: &str) -> Vec<String> {
        let mut missing = Vec::new();
        collect_leaves(&self.root, "", &mut |path: &str, values: &BTreeMap<Locale, String>| {
            if !values.contains_key(locale) {
                missing.push(path.to_string());
            }
        });
        missing
    }

    /// Number of leaf keys.
    pub fn len(&self) -> usize {
        let mut count = 0;
        collect_leaves(&self.root, "", &mut |_: &str, _: &BTreeMap<Locale, String>| count += 1);
        count
    }

    /// Whether the store holds no leaves.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn restructure(
    branch: &mut TranslationTree,
    locale: &str,
    structure: &Map<String, Value>,
    prefix: &str,
) -> Result<()> {
    for (key, value) in structure {
        let path = join(prefix, key);

        match value {
            Value::String(text) => {
                let node = branch
                    .entry(key.clone())
                    .or_insert_with(|| TranslationNode::Leaf(BTreeMap::new()));
                if matches!(node, TranslationNode::Branch(_)) && node.is_empty() {
                    *node = TranslationNode::Leaf(BTreeMap::new());
                }
                match node {
                    TranslationNode::Leaf(values) => {
                        values.insert(locale.to_string(), text.clone());
                    }
                    TranslationNode::Branch(_) => return Err(I18nError::structure(path, locale)),
                }
            }
            Value::Object(nested) => {
                let node = branch
                    .entry(key.clone())
                    .or_insert_with(|| TranslationNode::Branch(BTreeMap::new()));
                if matches!(node, TranslationNode::Leaf(_)) && node.is_empty() {
                    *node = TranslationNode::Branch(BTreeMap::new());
                }
                match node {
                    TranslationNode::Branch(children) => {
                        restructure(children, locale, nested, &path)?;
                    }
                    TranslationNode::Leaf(_) => return Err(I18nError::structure(path, locale)),
                }
            }
            _ => return Err(I18nError::structure(path, locale)),
        }
    }

    Ok(())
}

fn collect_leaves(
    tree: &TranslationTree,
    prefix: &str,
    visit: &mut dyn FnMut(&str, &BTreeMap<Locale, String>),
) {
    for (key, node) in tree {
        let path = join(prefix, key);
        match node {
            TranslationNode::Leaf(values) => visit(&path, values),
            TranslationNode::Branch(children) => collect_leaves(children, &path, visit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn english() -> Value {
        json!({
            "common": {
                "hello": "Hello, {{name}}!",
                "items_one": "{{count}} item",
                "items_other": "{{count}} items",
                "nested": { "message": "This is nested" }
            }
        })
    }

    #[test]
    fn test_insert_and_get() {
        let mut store = TranslationStore::new();
        store.insert("en", &json!({"a": {"b": "x"}})).unwrap();

        assert_eq!(store.get("a.b", "en"), Some("x"));
        assert_eq!(store.get("a.b", "fr"), None);
        assert_eq!(store.get("a", "en"), None);
        assert_eq!(store.get("a.b.c", "en"), None);
        assert_eq!(store.get("missing", "en"), None);
    }

    #[test]
    fn test_insert_is_key_first() {
        let mut store = TranslationStore::new();
        store.insert("en", &json!({"greet": "Hi"})).unwrap();
        store.insert("es", &json!({"greet": "Hola"})).unwrap();

        let mut expected = TranslationTree::new();
        expected.insert(
            "greet".to_string(),
            TranslationNode::Leaf(BTreeMap::from([
                ("en".to_string(), "Hi".to_string()),
                ("es".to_string(), "Hola".to_string()),
            ])),
        );
        assert_eq!(store.tree(), &expected);
        assert_eq!(store.locales_of("greet"), vec!["en", "es"]);
    }

    #[test]
    fn test_non_string_leaf_is_rejected() {
        let mut store = TranslationStore::new();
        for bad in [json!(1), json!(["a"]), json!(true), Value::Null] {
            let result = store.insert("en", &json!({"common": {"count": bad}}));
            assert_matches!(
                result,
                Err(I18nError::Structure { ref key, ref locale }) if key == "common.count" && locale == "en"
            );
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_non_mapping_structure_is_rejected() {
        let mut store = TranslationStore::new();
        assert_matches!(store.insert("en", &json!("flat")), Err(I18nError::Structure { .. }));
    }

    #[test]
    fn test_failed_insert_leaves_tree_unchanged() {
        let mut store = TranslationStore::new();
        store.insert("en", &english()).unwrap();
        let before = store.clone();

        let result = store.insert("es", &json!({"common": {"hello": "Hola", "bad": 3}}));
        assert!(result.is_err());
        assert_eq!(store, before);
        assert_eq!(store.get("common.hello", "es"), None);
    }

    #[test]
    fn test_shape_conflicts_are_rejected() {
        let mut store = TranslationStore::new();
        store.insert("en", &json!({"a": "text"})).unwrap();
        assert_matches!(
            store.insert("en", &json!({"a": {"b": "x"}})),
            Err(I18nError::Structure { ref key, .. }) if key == "a"
        );

        store.insert("en", &json!({"b": {"c": "x"}})).unwrap();
        assert_matches!(
            store.insert("fr", &json!({"b": "text"})),
            Err(I18nError::Structure { ref key, ref locale }) if key == "b" && locale == "fr"
        );
    }

    #[test]
    fn test_empty_nodes_take_the_new_shape() {
        let mut store = TranslationStore::new();
        store.insert("en", &json!({"a": {}})).unwrap();
        store.insert("en", &json!({"a": "text"})).unwrap();
        assert_eq!(store.get("a", "en"), Some("text"));
    }

    #[test]
    fn test_keys_and_missing_keys() {
        let mut store = TranslationStore::new();
        store.insert("en", &english()).unwrap();
        store.insert("es", &json!({"common": {"hello": "¡Hola, {{name}}!"}})).unwrap();

        assert_eq!(
            store.keys(),
            vec![
                "common.hello",
                "common.items_one",
                "common.items_other",
                "common.nested.message",
            ]
        );
        assert_eq!(
            store.missing_keys("es"),
            vec!["common.items_one", "common.items_other", "common.nested.message"]
        );
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_deep_merge_unions_locales() {
        let mut store = TranslationStore::new();
        store.insert("en", &english()).unwrap();

        let other: TranslationTree = serde_json::from_value(json!({
            "common": { "hello": { "fr": "Bonjour, {{name}} !" } }
        }))
        .unwrap();
        store.merge(other, MergeStrategy::Deep);

        assert_eq!(store.get("common.hello", "en"), Some("Hello, {{name}}!"));
        assert_eq!(store.get("common.hello", "fr"), Some("Bonjour, {{name}} !"));
        assert_eq!(store.get("common.nested.message", "en"), Some("This is nested"));
    }

    #[test]
    fn test_shallow_merge_replaces_top_level() {
        let mut store = TranslationStore::new();
        store.insert("en", &english()).unwrap();
        store.insert("en", &json!({"title": "Snappy"})).unwrap();

        let other: TranslationTree = serde_json::from_value(json!({
            "common": { "hello": { "fr": "Bonjour" } }
        }))
        .unwrap();
        store.merge(other, MergeStrategy::Shallow);

        assert_eq!(store.get("common.hello", "fr"), Some("Bonjour"));
        assert_eq!(store.get("common.hello", "en"), None);
        assert_eq!(store.get("common.nested.message", "en"), None);
        assert_eq!(store.get("title", "en"), Some("Snappy"));
    }

    #[test]
    fn test_tree_deserializes_leaves_and_branches() {
        let tree: TranslationTree = serde_json::from_value(json!({
            "greet": { "en": "Hi", "ar": "مرحبا" },
            "menu": { "file": { "en": "File" } }
        }))
        .unwrap();

        assert_matches!(tree.get("greet"), Some(TranslationNode::Leaf(_)));
        assert_matches!(tree.get("menu"), Some(TranslationNode::Branch(_)));

        let store = TranslationStore::from_tree(tree);
        assert_eq!(store.get("greet", "ar"), Some("مرحبا"));
        assert_eq!(store.get("menu.file", "en"), Some("File"));
    }
}
