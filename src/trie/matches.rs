use super::prefix_trie::TrieNode;

/// Entries under a prefix, produced on demand by [`PrefixTrie::matches`].
///
/// Nodes are visited pre-order with children in ascending symbol order, so entries come
/// out sorted. Holds only a shared borrow of the trie.
///
/// [`PrefixTrie::matches`]: super::PrefixTrie::matches
pub struct Matches<'a> {
    stack: Vec<&'a TrieNode>,
    path: String,
}

impl<'a> Matches<'a> {
    /// `path` must spell the route from the root to `start`.
    pub(super) fn new(start: &'a TrieNode, path: &str) -> Self {
        Matches {
            stack: vec![start],
            path: path.to_owned(),
        }
    }

    pub(super) fn empty() -> Self {
        Matches {
            stack: Vec::new(),
            path: String::new(),
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if let Some(symbol) = node.symbol {
                self.path.truncate(node.depth as usize);
                self.path.push(symbol.as_char());
            }

            self.stack.extend(node.children().rev());

            if node.is_end {
                return Some(self.path.clone());
            }
        }

        None
    }
}
