use filetrie::{PrefixTrie, TrieError};
use std::thread;

const NAMES: &[&str] = &[
    "Cargo.lock",
    "Cargo.toml",
    "README.md",
    "build.rs",
    "main.rs",
    "main.rs.bak",
    "makefile",
    "m",
];

fn build(names: &[&str]) -> PrefixTrie {
    let mut trie = PrefixTrie::new();
    for name in names {
        trie.insert(name).expect("ascii name");
    }
    trie
}

/// Brute-force reference: sorted names that start with `prefix`.
fn expected(names: &[&str], prefix: &str) -> Vec<String> {
    let mut out: Vec<String> = names
        .iter()
        .filter(|name| name.starts_with(prefix))
        .map(|name| name.to_string())
        .collect();
    out.sort();
    out.dedup();
    out
}

#[test]
fn lookup_matches_brute_force() {
    let trie = build(NAMES);

    for prefix in ["", "C", "Cargo.", "m", "ma", "main.rs", "main.rs.", "x", "README.mdx"] {
        assert_eq!(trie.find_with_prefix(prefix), expected(NAMES, prefix), "{prefix:?}");
    }
}

#[test]
fn whole_listing_is_sorted_and_unique() {
    let mut names = NAMES.to_vec();
    names.extend_from_slice(NAMES);
    let trie = build(&names);

    let all = trie.find_with_prefix("");
    assert_eq!(all.len(), NAMES.len());
    assert_eq!(trie.len(), NAMES.len());
    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn reinsert_keeps_results() {
    let mut once = PrefixTrie::new();
    let mut twice = PrefixTrie::new();
    for name in NAMES {
        once.insert(name).unwrap();
        twice.insert(name).unwrap();
        assert_eq!(twice.insert(name), Ok(false));
    }

    assert_eq!(once.find_with_prefix(""), twice.find_with_prefix(""));
}

#[test]
fn rejected_names_leave_trie_untouched() {
    let mut trie = build(&["data"]);

    assert_eq!(trie.insert(""), Err(TrieError::EmptyEntry));
    assert!(matches!(
        trie.insert("data\u{7f}\u{80}"),
        Err(TrieError::InvalidSymbol { position: 5, .. })
    ));
    assert_eq!(trie.find_with_prefix("data"), ["data"]);
}

#[test]
fn readers_share_trie_across_threads() {
    let trie = build(NAMES);

    thread::scope(|scope| {
        let handles: Vec<_> = ["C", "ma", ""]
            .into_iter()
            .map(|prefix| {
                let trie = &trie;
                scope.spawn(move || (prefix, trie.find_with_prefix(prefix)))
            })
            .collect();

        for handle in handles {
            let (prefix, found) = handle.join().unwrap();
            assert_eq!(found, expected(NAMES, prefix));
        }
    });
}
