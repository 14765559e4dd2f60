#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use wordtrie::{SortedTrie, Trie};

#[derive(Arbitrary, Debug)]
struct SuggestionsInput {
    words: Vec<String>,
    removed: Vec<u8>,
    prefixes: Vec<String>,
}

// Hashed and sorted tries must hold the same words; the sorted one must enumerate them in order.
fuzz_target!(|input: SuggestionsInput| {
    let words: Vec<&str> = input.words.iter().take(256).map(String::as_str).collect();
    let mut hashed: Trie = words.iter().copied().collect();
    let mut sorted: SortedTrie = words.iter().copied().collect();

    for idx in input.removed.iter().take(64) {
        if let Some(word) = words.get(*idx as usize) {
            assert_eq!(hashed.remove(*word), sorted.remove(*word));
        }
    }

    let all: Vec<String> = sorted.iter().collect();
    let mut expected = all.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(all, expected);

    for prefix in input.prefixes.iter().take(32) {
        let from_hashed = hashed.suggestions(prefix.as_str());
        let from_sorted = sorted.suggestions(prefix.as_str());
        assert_eq!(from_hashed, from_sorted, "Suggestions mismatch for {:?}", prefix);

        if let Some(words) = sorted.words_with_prefix(prefix) {
            let listed: Vec<String> = words.collect();
            assert!(listed.windows(2).all(|w| w[0] < w[1]));
            assert!(listed.iter().all(|w| w.starts_with(prefix.as_str())));
        }
    }
});
