//! # wordtrie
//!
//! A character trie (prefix tree) for sets of strings: membership tests, prefix tests,
//! removal of single words or of whole subtrees, and prefix-based word suggestion.
//!
//! ```rust
//! use wordtrie::{SortedTrie, Trie};
//!
//! let mut trie = Trie::new();
//! trie.add("salamander");
//! trie.add("seahorse");
//! assert!(trie.starts_with("sea"));
//!
//! // Sorted children give lexicographic enumeration.
//! let sorted: SortedTrie = ["shark", "snake", "seal"].into_iter().collect();
//! let s: Vec<String> = sorted.words_with_prefix("s").unwrap().collect();
//! assert_eq!(s, ["seal", "shark", "snake"]);
//! ```

use std::collections::HashSet;

pub mod error;
pub mod iter;
pub mod mapping;
mod node;
pub mod stats;
pub mod trie;

pub use error::TrieError;
pub use iter::Words;
pub use mapping::{HashedChildren, MappingKind, NodeMapping, SortedChildren};
pub use stats::{TrieStats, TrieStatsTrait};
pub use trie::{SortedTrie, Trie};

/// The trie operations.
///
/// Each operation comes in two forms. The `_k` methods take a `&str` and report failures as
/// [`TrieError`]. The plain methods take anything convertible into `Option<&str>`, treat `None`
/// as absent input, and collapse every failure into `false` (or `None` for `suggestions`).
pub trait TrieTrait {
    /// Add a word. `Ok(true)` if it was not present before.
    fn add_k(&mut self, word: &str) -> Result<bool, TrieError>;
    fn remove_k(&mut self, word: &str) -> Result<(), TrieError>;
    fn contains_k(&self, word: &str) -> bool;
    /// Remove every word with the given prefix, returning how many were removed.
    fn remove_all_k(&mut self, prefix: &str) -> Result<usize, TrieError>;
    fn starts_with_k(&self, prefix: &str) -> bool;
    fn suggestions_k(&self, prefix: &str) -> Result<HashSet<String>, TrieError>;

    fn add<'a, W>(&mut self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        word.into().is_some_and(|w| self.add_k(w).is_ok())
    }

    fn remove<'a, W>(&mut self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        word.into().is_some_and(|w| self.remove_k(w).is_ok())
    }

    fn contains<'a, W>(&self, word: W) -> bool
    where
        W: Into<Option<&'a str>>,
    {
        word.into().is_some_and(|w| self.contains_k(w))
    }

    fn remove_all<'a, P>(&mut self, prefix: P) -> bool
    where
        P: Into<Option<&'a str>>,
    {
        prefix.into().is_some_and(|p| self.remove_all_k(p).is_ok())
    }

    fn starts_with<'a, P>(&self, prefix: P) -> bool
    where
        P: Into<Option<&'a str>>,
    {
        prefix.into().is_some_and(|p| self.starts_with_k(p))
    }

    fn suggestions<'a, P>(&self, prefix: P) -> Option<HashSet<String>>
    where
        P: Into<Option<&'a str>>,
    {
        self.suggestions_k(prefix.into()?).ok()
    }
}
