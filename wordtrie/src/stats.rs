//! Statistics and introspection for tries.
//!
//! Gathers structural information about a trie: how many nodes it holds, how many of them
//! currently end a word, how deep and how wide it has grown. Because removal only clears word
//! flags, comparing `num_nodes` against `num_words` shows how much structure is being retained
//! for words that are no longer present.

use std::collections::BTreeMap;

use crate::mapping::MappingKind;
use crate::node::Node;

pub trait TrieStatsTrait {
    fn get_trie_stats(&self) -> TrieStats;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieStats {
    /// Nodes below the root.
    pub num_nodes: usize,
    /// Nodes currently marked as ending a word.
    pub num_words: usize,
    /// Nodes with no children.
    pub num_leaves: usize,
    /// Length of the longest path from the root, in characters.
    pub max_depth: usize,
    /// Largest number of children held by a single node, root included.
    pub max_fanout: usize,
    /// Word count keyed by word length in characters.
    pub words_by_length: BTreeMap<usize, usize>,
}

impl TrieStats {
    /// Nodes that don't end a word: shared prefixes plus whatever removal left behind.
    pub fn num_structural_nodes(&self) -> usize {
        self.num_nodes - self.num_words
    }
}

pub(crate) fn collect_trie_stats<K: MappingKind>(root: &Node<K>) -> TrieStats {
    let mut trie_stats = TrieStats {
        max_fanout: root.num_children(),
        ..Default::default()
    };

    let mut stack: Vec<(&Node<K>, usize)> = root.iter().map(|(_, child)| (child, 1)).collect();
    while let Some((node, depth)) = stack.pop() {
        update_trie_stats(&mut trie_stats, node, depth);
        stack.extend(node.iter().map(|(_, child)| (child, depth + 1)));
    }
    trie_stats
}

fn update_trie_stats<K: MappingKind>(trie_stats: &mut TrieStats, node: &Node<K>, depth: usize) {
    trie_stats.num_nodes += 1;
    trie_stats.max_depth = trie_stats.max_depth.max(depth);
    trie_stats.max_fanout = trie_stats.max_fanout.max(node.num_children());
    if node.is_leaf() {
        trie_stats.num_leaves += 1;
    }
    if node.is_word {
        trie_stats.num_words += 1;
        trie_stats
            .words_by_length
            .entry(depth)
            .and_modify(|e| *e += 1)
            .or_insert(1);
    }
}
