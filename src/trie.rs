mod file_trie;
mod matches;
mod prefix_trie;
mod symbol;

pub use file_trie::FileTrie;
pub use matches::Matches;
pub use prefix_trie::PrefixTrie;
pub use symbol::{Symbol, ALPHABET_SIZE};
