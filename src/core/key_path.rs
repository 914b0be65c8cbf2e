//! Folding of dotted keys into dictionary paths.

use super::{key_set::ExtractedKeySet, tree::DictionaryTree};

pub const SEPARATOR: char = '.';

/// Storage shape of one key inside a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPath<'a> {
    /// Nested location, one segment per level.
    Nested(Vec<&'a str>),
    /// A single top-level entry named by the full key.
    Flat(&'a str),
}

/// Decide where `key` lives in a hierarchical dictionary.
///
/// Keys containing the separator and no whitespace are split into segments.
/// Empty segments are dropped, so `a..b` and `a.b` share the path `[a, b]`.
/// Everything else, including keys made only of separators, stays flat.
pub fn normalize(key: &str) -> KeyPath<'_> {
    if !key.contains(SEPARATOR) || key.chars().any(char::is_whitespace) {
        return KeyPath::Flat(key);
    }

    let segments: Vec<&str> = key.split(SEPARATOR).filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        KeyPath::Flat(key)
    } else {
        KeyPath::Nested(segments)
    }
}

/// Build the dictionary for freshly extracted keys.
///
/// Every leaf holds its own key as placeholder value. With `expand` set,
/// dotted keys are nested per [`normalize`]; otherwise each key is one
/// top-level entry.
pub fn build_tree(keys: &ExtractedKeySet, expand: bool) -> DictionaryTree {
    let mut tree = DictionaryTree::new();
    for key in keys.keys() {
        insert_key(&mut tree, key, expand);
    }
    tree
}

/// Build the set of paths that a sync pass keeps.
///
/// Keys are expanded per [`normalize`], and each literal key is also kept as
/// a top-level entry when that slot is still free. A dictionary may hold
/// `auth.failed` either nested or as one literal entry, and both survive.
pub fn key_space(keys: &ExtractedKeySet) -> DictionaryTree {
    let mut space = build_tree(keys, true);
    for key in keys.keys() {
        if !space.children().contains_key(key) {
            space.insert_flat(key, key);
        }
    }
    space
}

fn insert_key(tree: &mut DictionaryTree, key: &str, expand: bool) {
    match expand.then(|| normalize(key)) {
        Some(KeyPath::Nested(segments)) => tree.insert_path(&segments, key),
        Some(KeyPath::Flat(_)) | None => tree.insert_flat(key, key),
    }
}
