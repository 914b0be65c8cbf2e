//! Merging freshly extracted dictionaries into previously generated ones.
//!
//! `incoming` is always the tree built from the current extraction, where
//! every leaf holds its key as placeholder. `existing` is the tree loaded from
//! the dictionary file on disk, or empty when there is none.
//!
//! Conflicts between a leaf and a nested level are resolved by explicit rules
//! that differ per strategy. None of them is a generic deep merge.

use super::tree::{Children, DictionaryNode, DictionaryTree};

/// How incoming keys are combined with an existing dictionary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Keep every existing value, add new keys with placeholders.
    #[default]
    Update,
    /// Only add keys missing from the existing dictionary.
    Append,
    /// Ignore the existing dictionary altogether.
    New,
}

impl MergeStrategy {
    /// Whether the existing dictionary file has to be loaded.
    pub fn reads_existing(&self) -> bool {
        !matches!(self, MergeStrategy::New)
    }
}

/// Combine `incoming` with `existing` according to `strategy`.
pub fn merge(
    strategy: MergeStrategy,
    incoming: DictionaryTree,
    existing: DictionaryTree,
) -> DictionaryTree {
    match strategy {
        MergeStrategy::Update => update(incoming, existing),
        MergeStrategy::Append => append(incoming, existing),
        MergeStrategy::New => incoming,
    }
}

/// Update merge: existing values always survive.
///
/// Where both sides hold a nested level the merge recurses. Anywhere else the
/// existing node replaces the incoming one, so an existing leaf discards any
/// incoming nesting below it and an existing nested level is kept over an
/// incoming leaf. Existing-only entries are kept after the incoming ones.
pub fn update(incoming: DictionaryTree, existing: DictionaryTree) -> DictionaryTree {
    DictionaryTree::from_children(update_children(
        incoming.into_children(),
        existing.into_children(),
    ))
}

fn update_children(mut incoming: Children, existing: Children) -> Children {
    for (key, existing_node) in existing {
        let Some(slot) = incoming.get_mut(&key) else {
            incoming.insert(key, existing_node);
            continue;
        };
        match (slot, existing_node) {
            (DictionaryNode::SubTree(children), DictionaryNode::SubTree(existing_children)) => {
                let merged = update_children(std::mem::take(children), existing_children);
                *children = merged;
            }
            (slot, leaf @ DictionaryNode::Leaf(_)) => *slot = leaf,
            (slot, subtree @ DictionaryNode::SubTree(_)) => *slot = subtree,
        }
    }
    incoming
}

/// Append merge: only paths missing from `existing` are added.
///
/// Existing values and existing-only paths are left untouched. Nothing is
/// ever removed.
pub fn append(incoming: DictionaryTree, existing: DictionaryTree) -> DictionaryTree {
    DictionaryTree::from_children(append_children(
        incoming.into_children(),
        existing.into_children(),
    ))
}

fn append_children(incoming: Children, mut existing: Children) -> Children {
    for (key, incoming_node) in incoming {
        let Some(slot) = existing.get_mut(&key) else {
            existing.insert(key, incoming_node);
            continue;
        };
        if let (DictionaryNode::SubTree(children), DictionaryNode::SubTree(incoming_children)) =
            (slot, incoming_node)
        {
            let merged = append_children(incoming_children, std::mem::take(children));
            *children = merged;
        }
    }
    existing
}

/// Sync pass: remove every path of `tree` that is not in `key_space`.
///
/// Where the key space holds a leaf but `tree` holds a nested level, the
/// level collapses into a leaf carrying the key placeholder and its contents
/// are dropped. A leaf in `tree` is kept as is whenever its path exists.
pub fn sync(tree: DictionaryTree, key_space: &DictionaryTree) -> DictionaryTree {
    DictionaryTree::from_children(sync_children(tree.into_children(), key_space.children()))
}

fn sync_children(children: Children, space: &Children) -> Children {
    children
        .into_iter()
        .filter_map(|(key, node)| {
            let reference = space.get(&key)?;
            let node = match (node, reference) {
                (DictionaryNode::SubTree(children), DictionaryNode::SubTree(space_children)) => {
                    DictionaryNode::SubTree(sync_children(children, space_children))
                }
                (DictionaryNode::SubTree(_), DictionaryNode::Leaf(placeholder)) => {
                    DictionaryNode::Leaf(placeholder.clone())
                }
                (leaf @ DictionaryNode::Leaf(_), _) => leaf,
            };
            Some((key, node))
        })
        .collect()
}
