// Copyright (c) 2025 Seqtrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit tests for the compressed trie.

use test_case::test_case;

use crate::data_structures::compressed_trie::{CompressedTrie, PrefixMap};

fn example_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("ab", "0"),
        ("abababa", "1"),
        ("abab", "2"),
        ("baba", "3"),
        ("ababaa", "4"),
        ("a", "5"),
        ("abababa", "6"),
        ("bab", "7"),
        ("babba", "8"),
    ]
}

fn example_trie() -> CompressedTrie<&'static str> {
    CompressedTrie::from_pairs(example_pairs())
}

#[test]
fn test_empty_trie() {
    let trie: CompressedTrie<String> = CompressedTrie::new();

    assert!(trie.is_empty());
    assert_eq!(trie.size(), 1);
    assert_eq!(trie.len(), 0);
    assert_eq!(trie.count(), 0);
    assert!(trie.find("").is_empty());
    assert!(trie.find("anything").is_empty());
    assert!(trie.prefix_map().unwrap().is_empty());
}

#[test]
fn test_insert_and_find() {
    let mut trie = CompressedTrie::new();
    trie.insert("hello", "world");

    assert!(!trie.is_empty());
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.size(), 2);
    assert_eq!(trie.find("hello"), &["world"]);
    assert!(trie.contains("hello"));
    assert!(trie.find("help").is_empty());
    assert!(!trie.contains("nonexistent"));
}

#[test]
fn test_node_splitting() {
    let mut trie = CompressedTrie::new();
    trie.insert("ab", 1);
    trie.insert("ac", 2);

    assert_eq!(trie.find("ab"), &[1]);
    assert_eq!(trie.find("ac"), &[2]);
    assert!(trie.find("a").is_empty());

    let a = trie.root().child('a').unwrap();
    assert_eq!(a.key(), "a");
    assert_eq!(
        a.children().map(|(c, n)| (c, n.key())).collect::<Vec<_>>(),
        vec![('b', "b"), ('c', "c")]
    );
    assert_eq!(trie.size(), 4);
}

#[test]
fn test_duplicate_preservation() {
    let mut trie = CompressedTrie::new();
    trie.insert("k", "value1");
    trie.insert("k", "value2");

    assert_eq!(trie.find("k"), &["value1", "value2"]);
    assert_eq!(trie.len(), 2);
}

#[test]
fn test_example_counts() {
    let trie = example_trie();
    assert_eq!(trie.len(), 9);
    assert_eq!(trie.size(), 10);
}

#[test_case("ab", &["0"] ; "short key")]
#[test_case("abababa", &["1", "6"] ; "duplicate key")]
#[test_case("abab", &["2"] ; "inner key")]
#[test_case("ababaa", &["4"] ; "split leaf")]
#[test_case("a", &["5"] ; "single char")]
#[test_case("bab", &["7"] ; "demoted key")]
#[test_case("babba", &["8"] ; "branch under demoted key")]
#[test_case("abc", &[] ; "diverging key")]
#[test_case("c", &[] ; "missing first char")]
#[test_case("abababab", &[] ; "longer than any key")]
fn test_example_find(key: &str, expected: &[&str]) {
    assert_eq!(example_trie().find(key), expected);
}

#[test]
fn test_example_prefix_map() {
    let map = example_trie().prefix_map().unwrap();

    let mut expected = PrefixMap::new();
    expected.insert("1", vec!["6", "2", "0", "5"]);
    expected.insert("8", vec!["7"]);
    expected.insert("3", vec![]);
    expected.insert("4", vec![]);

    assert_eq!(map, expected);
}

#[test]
fn test_prefix_map_after_insert() {
    let mut trie = example_trie();
    trie.insert("bac", "9");

    assert_eq!(trie.find("bac"), &["9"]);
    assert_eq!(trie.len(), 10);

    let map = trie.prefix_map().unwrap();
    assert_eq!(map.len(), 5);
    assert_eq!(map["1"], vec!["6", "2", "0", "5"]);
    assert_eq!(map["8"], vec!["7"]);
    assert!(map["9"].is_empty());
    assert!(map["3"].is_empty());
    assert!(map["4"].is_empty());
}

#[test]
fn test_prefix_map_single_key() {
    let mut trie = CompressedTrie::new();
    trie.insert("ACGT", "s0");
    trie.insert("ACGT", "s1");

    let map = trie.prefix_map().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["s0"], vec!["s1"]);
}

#[test]
fn test_prefix_map_empty_key_on_root() {
    let mut trie = CompressedTrie::new();
    trie.insert("", "root");

    let map = trie.prefix_map().unwrap();
    assert_eq!(map["root"], Vec::<&str>::new());

    trie.insert("A", "child");
    let map = trie.prefix_map().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map["child"], vec!["root"]);
}

#[test]
fn test_prefix_map_ties_follow_descending_branches() {
    let mut trie = CompressedTrie::new();
    trie.insert("AC", "short");
    trie.insert("ACA", "a");
    trie.insert("ACT", "t");
    trie.insert("ACG", "g");

    // All three branches are singletons; the one with the greatest first
    // character is folded first and wins the tie.
    let map = trie.prefix_map().unwrap();
    assert_eq!(map["t"], vec!["short"]);
    assert!(map["a"].is_empty());
    assert!(map["g"].is_empty());
}

#[test]
fn test_collect_and_extend() {
    let mut trie: CompressedTrie<u32> = vec![("GATTACA", 1), ("TTG", 2)].into_iter().collect();
    trie.extend(vec![("GATTACA".to_string(), 3)]);

    assert_eq!(trie.find("GATTACA"), &[1, 3]);
    assert_eq!(trie.find("TTG"), &[2]);
    assert_eq!(trie, {
        let mut expected = CompressedTrie::new();
        expected.insert("GATTACA", 1);
        expected.insert("TTG", 2);
        expected.insert("GATTACA", 3);
        expected
    });
}

#[test]
fn test_prefix_map_merges_repeated_representatives() {
    let mut trie = CompressedTrie::new();
    trie.insert("AA", "x");
    trie.insert("AC", "x");
    trie.insert("A", "y");

    // Both leaves are headed by "x"; the merged group still takes "y"
    let map = trie.prefix_map().unwrap();

    let mut expected = PrefixMap::new();
    expected.insert("x", vec!["y"]);
    assert_eq!(map, expected);
}

#[test]
fn test_prefix_map_repeated_representative_keeps_first_position() {
    let mut trie = CompressedTrie::new();
    trie.insert("AT", "x");
    trie.insert("AG", "g");
    trie.insert("AC", "x");
    trie.insert("A", "y");

    // "x" is first produced by the "T" branch and keeps that slot when the
    // "C" branch produces it again, so it wins the tie against "g"
    let map = trie.prefix_map().unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map["x"], vec!["y"]);
    assert!(map["g"].is_empty());
}
