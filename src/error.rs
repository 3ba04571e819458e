//! Errors raised while building a [`PrefixTrie`](crate::PrefixTrie).

/// Rejected input to [`PrefixTrie::insert`](crate::PrefixTrie::insert).
///
/// A rejected entry never leaves a partial path behind; the trie is unchanged.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The empty string cannot be stored, the root is never terminal.
    #[error("empty entry")]
    EmptyEntry,
    /// A byte outside the 7-bit alphabet.
    #[error("byte {byte:#04x} at position {position} is outside the 7-bit alphabet")]
    InvalidSymbol { byte: u8, position: usize },
}
