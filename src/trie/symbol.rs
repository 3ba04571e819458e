/// Number of child slots per node, one per 7-bit code unit.
pub const ALPHABET_SIZE: usize = 128;

/// A single byte known to lie inside the trie alphabet (`0..128`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u8);

impl Symbol {
    pub const fn new(byte: u8) -> Option<Self> {
        if (byte as usize) < ALPHABET_SIZE {
            Some(Self(byte))
        } else {
            None
        }
    }

    /// Slot of this symbol in a node's child array.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}
