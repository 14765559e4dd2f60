use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    #[error("the empty string is not a word")]
    EmptyWord,
    #[error("no path for {prefix:?} in trie")]
    PathNotFound { prefix: String },
    #[error("{word:?} is a prefix in the trie but not a word")]
    NotAWord { word: String },
}
