//! In-memory representation of one translation dictionary.
//!
//! A dictionary is an ordered mapping of segments to nodes, where every node
//! is either a final string value or a nested dictionary. A path therefore
//! resolves to exactly one node of exactly one variant.

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// Ordered children of a dictionary level.
pub type Children = IndexMap<String, DictionaryNode>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryNode {
    /// A translated (or placeholder) string value.
    Leaf(String),
    /// A nested dictionary level.
    SubTree(Children),
}

impl DictionaryNode {
    pub fn leaf(value: impl Into<String>) -> Self {
        Self::Leaf(value.into())
    }

    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(value) => Some(value),
            Self::SubTree(_) => None,
        }
    }

    pub fn as_subtree(&self) -> Option<&Children> {
        match self {
            Self::SubTree(children) => Some(children),
            Self::Leaf(_) => None,
        }
    }
}

impl Serialize for DictionaryNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Leaf(value) => serializer.serialize_str(value),
            Self::SubTree(children) => serializer.collect_map(children),
        }
    }
}

/// The root level of one dictionary file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryTree {
    root: Children,
}

impl DictionaryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_children(root: Children) -> Self {
        Self { root }
    }

    pub fn children(&self) -> &Children {
        &self.root
    }

    pub fn into_children(self) -> Children {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Look up the node at `path`.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&DictionaryNode> {
        let (last, parents) = path.split_last()?;
        let mut level = &self.root;
        for segment in parents {
            level = level.get(segment.as_ref())?.as_subtree()?;
        }
        level.get(last.as_ref())
    }

    /// Store a value under a single top-level key, whatever characters it holds.
    pub fn insert_flat(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.root.insert(key.into(), DictionaryNode::Leaf(value.into()));
    }

    /// Store a value at `path`, creating intermediate levels as needed.
    ///
    /// The last write at a path wins. A leaf standing where an intermediate
    /// level is needed is replaced by a nested dictionary.
    pub fn insert_path<S: AsRef<str>>(&mut self, path: &[S], value: impl Into<String>) {
        insert_nested(&mut self.root, path, value.into());
    }

    /// All leaf paths in depth-first order, each paired with its value.
    pub fn leaves(&self) -> Vec<(Vec<String>, &str)> {
        let mut out = Vec::new();
        collect_leaves(&self.root, &mut Vec::new(), &mut out);
        out
    }
}

impl Serialize for DictionaryTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(&self.root)
    }
}

fn insert_nested<S: AsRef<str>>(level: &mut Children, path: &[S], value: String) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };

    if rest.is_empty() {
        level.insert(first.as_ref().to_string(), DictionaryNode::Leaf(value));
        return;
    }

    let next = level
        .entry(first.as_ref().to_string())
        .or_insert_with(|| DictionaryNode::SubTree(Children::new()));

    if matches!(next, DictionaryNode::Leaf(_)) {
        *next = DictionaryNode::SubTree(Children::new());
    }

    if let DictionaryNode::SubTree(children) = next {
        insert_nested(children, rest, value);
    }
}

fn collect_leaves<'a>(
    level: &'a Children,
    prefix: &mut Vec<String>,
    out: &mut Vec<(Vec<String>, &'a str)>,
) {
    for (key, node) in level {
        prefix.push(key.clone());
        match node {
            DictionaryNode::Leaf(value) => out.push((prefix.clone(), value.as_str())),
            DictionaryNode::SubTree(children) => collect_leaves(children, prefix, out),
        }
        prefix.pop();
    }
}
