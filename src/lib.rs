//! Prefix lookup over the file names of a directory.
//!
//! [`PrefixTrie`] is the index itself. [`FileTrie`] fills one from a directory listing
//! and [`Session`] drives the interactive prompt.

pub mod error;
mod session;
mod trie;

pub use error::TrieError;
pub use session::{scrub_line, Session};
pub use trie::{FileTrie, Matches, PrefixTrie, Symbol, ALPHABET_SIZE};
