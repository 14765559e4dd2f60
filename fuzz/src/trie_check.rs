#![no_main]

use std::collections::{BTreeSet, HashSet};

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use wordtrie::Trie;

#[derive(Arbitrary, Debug)]
enum TrieMethod {
    Add { word: String },
    Remove { word: String },
    Contains { word: String },
    RemoveAll { prefix: String },
    StartsWith { prefix: String },
    Suggestions { prefix: String },
}

fn has_path(paths: &HashSet<String>, prefix: &str) -> bool {
    prefix.is_empty() || paths.contains(prefix)
}

fuzz_target!(|methods: Vec<TrieMethod>| {
    let mut trie = Trie::new();
    let mut words = BTreeSet::<String>::new();
    // Every prefix ever added. Paths are never freed, so this only grows.
    let mut paths = HashSet::<String>::new();

    for m_c in methods.chunks(1024) {
        for m in m_c {
            match m {
                TrieMethod::Add { word } => {
                    let added = trie.add(word.as_str());
                    assert_eq!(added, !word.is_empty());
                    if added {
                        for (i, _) in word.char_indices() {
                            paths.insert(word[..i].to_string());
                        }
                        paths.insert(word.clone());
                        words.insert(word.clone());
                    }
                }
                TrieMethod::Remove { word } => {
                    let removed = trie.remove(word.as_str());
                    assert_eq!(removed, words.remove(word), "Remove: {:?}", word);
                }
                TrieMethod::Contains { word } => {
                    assert_eq!(
                        trie.contains(word.as_str()),
                        words.contains(word),
                        "Contains: {:?}",
                        word
                    );
                }
                TrieMethod::RemoveAll { prefix } => {
                    let expected = has_path(&paths, prefix);
                    assert_eq!(trie.remove_all(prefix.as_str()), expected);
                    if expected {
                        words.retain(|w| !w.starts_with(prefix.as_str()));
                    }
                }
                TrieMethod::StartsWith { prefix } => {
                    assert_eq!(
                        trie.starts_with(prefix.as_str()),
                        has_path(&paths, prefix),
                        "StartsWith: {:?}",
                        prefix
                    );
                }
                TrieMethod::Suggestions { prefix } => {
                    let expected = has_path(&paths, prefix).then(|| {
                        words
                            .iter()
                            .filter(|w| w.starts_with(prefix.as_str()))
                            .cloned()
                            .collect::<HashSet<_>>()
                    });
                    assert_eq!(
                        trie.suggestions(prefix.as_str()),
                        expected,
                        "Suggestions: {:?}",
                        prefix
                    );
                }
            }
        }
    }

    for word in words.iter() {
        assert!(trie.contains(word.as_str()), "Missing word {:?}", word);
    }
    assert_eq!(trie.node_count(), paths.iter().filter(|p| !p.is_empty()).count());
});
