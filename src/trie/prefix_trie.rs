use std::fmt;

use super::matches::Matches;
use super::symbol::{Symbol, ALPHABET_SIZE};
use crate::error::TrieError;

const ROOT_DEPTH: isize = -1;

pub(super) struct TrieNode {
    pub(super) symbol: Option<Symbol>,
    /// Position of `symbol` within every string passing through this node.
    pub(super) depth: isize,
    children: [Option<Box<TrieNode>>; ALPHABET_SIZE],
    pub(super) is_end: bool,
}

impl TrieNode {
    fn root() -> Self {
        TrieNode {
            symbol: None,
            depth: ROOT_DEPTH,
            children: std::array::from_fn(|_| None),
            is_end: false,
        }
    }

    fn new(symbol: Symbol, depth: isize) -> Self {
        TrieNode {
            symbol: Some(symbol),
            depth,
            children: std::array::from_fn(|_| None),
            is_end: false,
        }
    }

    fn get(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children[symbol.index()].as_deref()
    }

    /// Existing children in ascending symbol order.
    pub(super) fn children(&self) -> impl DoubleEndedIterator<Item = &TrieNode> + '_ {
        self.children.iter().filter_map(|child| child.as_deref())
    }
}

/// Prefix trie over 7-bit strings.
///
/// Entries are built once with [`insert`](Self::insert) and then looked up with
/// [`find_with_prefix`](Self::find_with_prefix), which lists every entry starting with
/// the prefix in ascending byte order. Insertion, lookup and drop never recurse, so
/// entry length is bounded by memory only.
pub struct PrefixTrie {
    root: TrieNode,
    len: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        PrefixTrie {
            root: TrieNode::root(),
            len: 0,
        }
    }

    /// Adds `value`, returning `false` if it was already present.
    ///
    /// The whole string is checked before the first node is created, so an error
    /// leaves the trie exactly as it was.
    pub fn insert(&mut self, value: &str) -> Result<bool, TrieError> {
        let symbols = Self::symbols(value)?;
        let mut current = &mut self.root;

        for symbol in symbols {
            let depth = current.depth + 1;
            current = current.children[symbol.index()]
                .get_or_insert_with(|| Box::new(TrieNode::new(symbol, depth)))
                .as_mut();
        }

        if current.is_end {
            return Ok(false);
        }
        current.is_end = true;
        self.len += 1;

        Ok(true)
    }

    /// Every entry starting with `prefix`, in ascending byte order.
    ///
    /// The empty prefix lists the whole trie. A prefix that leads nowhere, including
    /// one with bytes outside the alphabet, yields an empty vector.
    pub fn find_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.matches(prefix).collect()
    }

    /// Lazy form of [`find_with_prefix`](Self::find_with_prefix).
    pub fn matches<'a>(&'a self, prefix: &str) -> Matches<'a> {
        match self.walk(prefix) {
            Some(node) => Matches::new(node, prefix),
            None => Matches::empty(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.walk(value).is_some_and(|node| node.is_end)
    }

    /// Whether at least one entry starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.matches(prefix).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn symbols(value: &str) -> Result<Vec<Symbol>, TrieError> {
        if value.is_empty() {
            return Err(TrieError::EmptyEntry);
        }

        value
            .bytes()
            .enumerate()
            .map(|(position, byte)| {
                Symbol::new(byte).ok_or(TrieError::InvalidSymbol { byte, position })
            })
            .collect()
    }

    fn walk(&self, prefix: &str) -> Option<&TrieNode> {
        let mut current = &self.root;

        for byte in prefix.bytes() {
            current = current.get(Symbol::new(byte)?)?;
        }

        Some(current)
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PrefixTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.matches("")).finish()
    }
}

// Unlinks nodes onto a heap stack so a long chain is not freed recursively.
impl Drop for PrefixTrie {
    fn drop(&mut self) {
        let mut stack: Vec<Box<TrieNode>> = self
            .root
            .children
            .iter_mut()
            .filter_map(Option::take)
            .collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.iter_mut().filter_map(Option::take));
        }
    }
}
