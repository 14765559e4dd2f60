//! Character trie.
//!
//! This module contains the main [`Trie`] implementation for the wordtrie crate.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::TrieTrait;
use crate::error::TrieError;
use crate::iter::Words;
use crate::mapping::{HashedChildren, MappingKind, SortedChildren};
use crate::node::Node;
use crate::stats::{TrieStats, TrieStatsTrait, collect_trie_stats};

/// A prefix tree over strings, one node per character.
///
/// Every word is stored as a path of single-character edges from the root, with the node at
/// the end of the path flagged as ending a word. Nodes are created lazily the first time a
/// path is walked by [`add`](Trie::add) and are never freed afterwards: [`remove`](Trie::remove)
/// and [`remove_all`](Trie::remove_all) only clear word flags, so a removed word keeps its
/// path alive for [`starts_with`](Trie::starts_with) and [`suggestions`](Trie::suggestions).
///
/// Input is treated as a sequence of `char`s, with no normalization or case folding. The empty
/// string is never a word, but it is a valid prefix that every path starts with.
///
/// ## Type Parameters
///
/// - `K`: How each node stores its children, see [`MappingKind`]. The default,
///   [`HashedChildren`], enumerates words in no particular order; [`SortedChildren`] (see
///   [`SortedTrie`]) enumerates them lexicographically.
///
/// ## Concurrency
///
/// There is no internal locking. Mutating operations take `&mut self` and lookups take `&self`,
/// so sharing a trie between threads requires wrapping it, typically in a `RwLock`, with
/// `contains`, `starts_with` and `suggestions` as readers and `add`, `remove` and `remove_all`
/// as writers.
///
/// ## Examples
///
/// ```rust
/// use wordtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.add("dog");
/// trie.add("dot");
/// trie.add("do");
///
/// assert!(trie.contains("do"));
/// assert!(!trie.contains("d"));
/// assert!(trie.starts_with("d"));
///
/// let words = trie.suggestions("do").unwrap();
/// assert_eq!(words.len(), 3);
///
/// assert!(trie.remove_all("do"));
/// assert!(!trie.contains("dog"));
/// // The path is still there, there are just no words on it.
/// assert_eq!(trie.suggestions("do").map(|s| s.len()), Some(0));
/// ```
///
/// Absent input is accepted anywhere a string is, and always fails:
///
/// ```rust
/// use wordtrie::Trie;
///
/// let mut trie = Trie::new();
/// assert!(!trie.add(None::<&str>));
/// assert_eq!(trie.suggestions(None::<&str>), None);
/// ```
pub struct Trie<K: MappingKind = HashedChildren> {
    root: Node<K>,
    num_nodes: usize,
}

/// A trie whose word enumeration is in lexicographic order.
pub type SortedTrie = Trie<SortedChildren>;

impl Trie {
    /// Create a new empty trie with hashed children.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K: MappingKind> Default for Trie<K> {
    fn default() -> Self {
        Self {
            root: Node::new_root(),
            num_nodes: 0,
        }
    }
}

impl<K: MappingKind> Trie<K> {
    /// Add a word. Returns false only if `word` is absent or empty.
    #[inline]
    pub fn add<'a, W>(&mut self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        TrieTrait::add(self, word)
    }

    /// Add a word (direct version).
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the word was not present before
    /// - `Ok(false)` if it already was
    /// - `Err(TrieError::EmptyWord)` for the empty string
    pub fn add_k(&mut self, word: &str) -> Result<bool, TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let (node, created) = self.root.seek_or_create(word);
        self.num_nodes += created;

        let newly_added = !node.is_word;
        node.is_word = true;
        trace!(word, created, newly_added, "add");
        Ok(newly_added)
    }

    /// Remove a word. Returns true only if it was present.
    #[inline]
    pub fn remove<'a, W>(&mut self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        TrieTrait::remove(self, word)
    }

    /// Remove a word (direct version). The nodes along its path stay in place.
    pub fn remove_k(&mut self, word: &str) -> Result<(), TrieError> {
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }

        let Some(node) = self.root.seek_mut(word) else {
            trace!(word, "remove: no path");
            return Err(TrieError::PathNotFound {
                prefix: word.to_string(),
            });
        };

        if !node.is_word {
            trace!(word, "remove: not a word");
            return Err(TrieError::NotAWord {
                word: word.to_string(),
            });
        }

        node.is_word = false;
        trace!(word, "remove");
        Ok(())
    }

    /// Whether `word` is currently in the trie.
    #[inline]
    pub fn contains<'a, W>(&self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        TrieTrait::contains(self, word)
    }

    #[inline]
    pub fn contains_k(&self, word: &str) -> bool {
        !word.is_empty() && self.root.seek(word).is_some_and(|node| node.is_word)
    }

    /// Remove every word that starts with `prefix`, including `prefix` itself. Returns true
    /// whenever the path for `prefix` exists, whether or not any word was removed.
    #[inline]
    pub fn remove_all<'a, P>(&mut self, prefix: P) -> bool
    where
        P: Into<Option<&'a str>>,
    {
        TrieTrait::remove_all(self, prefix)
    }

    /// Remove every word that starts with `prefix` (direct version).
    ///
    /// Returns how many words were removed. The empty prefix matches every word.
    pub fn remove_all_k(&mut self, prefix: &str) -> Result<usize, TrieError> {
        let Some(node) = self.root.seek_mut(prefix) else {
            trace!(prefix, "remove_all: no path");
            return Err(TrieError::PathNotFound {
                prefix: prefix.to_string(),
            });
        };

        let cleared = node.clear_subtree();
        debug!(prefix, cleared, "remove_all");
        Ok(cleared)
    }

    /// Whether the path for `prefix` exists. This holds for any prefix of a word that was ever
    /// added, even if that word has since been removed.
    #[inline]
    pub fn starts_with<'a, P>(&self, prefix: P) -> bool
    where
        P: Into<Option<&'a str>>,
    {
        TrieTrait::starts_with(self, prefix)
    }

    /// True if the full path for `prefix` exists. The empty prefix always exists, matching
    /// `suggestions_k("")` and `remove_all_k("")`.
    #[inline]
    pub fn starts_with_k(&self, prefix: &str) -> bool {
        self.root.seek(prefix).is_some()
    }

    /// All words starting with `prefix`, `prefix` itself included if it is a word.
    ///
    /// `None` if `prefix` is absent or its path doesn't exist. An empty set means the path
    /// exists but no word on it is currently present.
    #[inline]
    pub fn suggestions<'a, P>(&self, prefix: P) -> Option<HashSet<String>>
    where
        P: Into<Option<&'a str>>,
    {
        TrieTrait::suggestions(self, prefix)
    }

    pub fn suggestions_k(&self, prefix: &str) -> Result<HashSet<String>, TrieError> {
        let words = self
            .words_with_prefix(prefix)
            .ok_or_else(|| TrieError::PathNotFound {
                prefix: prefix.to_string(),
            })?;
        Ok(words.collect())
    }

    /// Lazily enumerate the words starting with `prefix`. `None` if the path doesn't exist.
    pub fn words_with_prefix(&self, prefix: &str) -> Option<Words<'_, K>> {
        self.root
            .seek(prefix)
            .map(|node| Words::new(node, prefix))
    }

    /// Create an iterator over every word in the trie.
    pub fn iter(&self) -> Words<'_, K> {
        Words::new(&self.root, "")
    }

    /// True if no word is present. Nodes left behind by removals don't count; finding that
    /// out may mean walking all of them.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Number of nodes below the root. Every node ever created is counted, including the ones
    /// only kept alive by removed words, so this is not a word count.
    pub fn node_count(&self) -> usize {
        self.num_nodes
    }
}

impl<K: MappingKind> TrieTrait for Trie<K> {
    fn add_k(&mut self, word: &str) -> Result<bool, TrieError> {
        Trie::add_k(self, word)
    }

    fn remove_k(&mut self, word: &str) -> Result<(), TrieError> {
        Trie::remove_k(self, word)
    }

    fn contains_k(&self, word: &str) -> bool {
        Trie::contains_k(self, word)
    }

    fn remove_all_k(&mut self, prefix: &str) -> Result<usize, TrieError> {
        Trie::remove_all_k(self, prefix)
    }

    fn starts_with_k(&self, prefix: &str) -> bool {
        Trie::starts_with_k(self, prefix)
    }

    fn suggestions_k(&self, prefix: &str) -> Result<HashSet<String>, TrieError> {
        Trie::suggestions_k(self, prefix)
    }
}

impl<K: MappingKind> TrieStatsTrait for Trie<K> {
    fn get_trie_stats(&self) -> TrieStats {
        collect_trie_stats(&self.root)
    }
}

impl<K: MappingKind> fmt::Debug for Trie<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("num_nodes", &self.num_nodes)
            .finish_non_exhaustive()
    }
}

impl<'a, K: MappingKind> Extend<&'a str> for Trie<K> {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for word in iter {
            // The empty string is skipped, like any other word `add` refuses.
            let _ = self.add_k(word);
        }
    }
}

impl<'a, K: MappingKind> FromIterator<&'a str> for Trie<K> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut trie = Self::default();
        trie.extend(iter);
        trie
    }
}

impl<'a, K: MappingKind> IntoIterator for &'a Trie<K> {
    type Item = String;
    type IntoIter = Words<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
