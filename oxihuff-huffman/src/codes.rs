//! Code table derivation.
//!
//! A symbol's code is the path from the root to its leaf: `0` for every left
//! branch, `1` for every right branch. Codes come straight from the tree
//! shape; they are not rearranged into canonical order.

use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use crate::tree::{HuffmanTree, Node};
use oxihuff_core::error::{OxiHuffError, Result};

/// Longest possible code: a chain-shaped tree over all 256 symbols.
pub const MAX_CODE_LENGTH: usize = SYMBOL_COUNT - 1;

const WORDS: usize = SYMBOL_COUNT / 64;

/// A variable-length bit sequence, first bit in the most significant position.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Code {
    words: [u64; WORDS],
    len: u8,
}

impl Code {
    /// The empty code.
    pub const fn empty() -> Self {
        Self {
            words: [0; WORDS],
            len: 0,
        }
    }

    /// Build a code from an explicit bit sequence.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is longer than [`MAX_CODE_LENGTH`].
    pub fn from_bits(bits: &[bool]) -> Self {
        let mut code = Self::empty();
        for &bit in bits {
            code = code.pushed(bit);
        }
        code
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns `true` for the zero-length code.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bit at `index`, counted from the first (root-side) bit.
    pub fn bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len());
        (self.words[index / 64] >> (63 - index % 64)) & 1 == 1
    }

    /// Iterate over the bits in transmission order.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len()).map(move |i| self.bit(i))
    }

    /// A copy of this code with `bit` appended.
    fn pushed(mut self, bit: bool) -> Self {
        let index = self.len();
        assert!(index < MAX_CODE_LENGTH, "Huffman code exceeds 255 bits");
        if bit {
            self.words[index / 64] |= 1u64 << (63 - index % 64);
        }
        self.len += 1;
        self
    }

    /// Returns `true` if this code is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        self.len <= other.len && (0..self.len()).all(|i| self.bit(i) == other.bit(i))
    }
}

impl std::fmt::Debug for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = self.bits().map(|b| if b { '1' } else { '0' }).collect();
        write!(f, "Code({bits})")
    }
}

/// Mapping from symbol to its code, defined only for symbols in the tree.
#[derive(Debug, Clone)]
pub struct CodeTable {
    codes: [Option<Code>; SYMBOL_COUNT],
}

impl CodeTable {
    /// Derive the code of every leaf in `tree`.
    ///
    /// A tree whose root is a leaf has a zero-depth path, which a bit packer
    /// cannot transmit; that symbol is given the one-bit code `0` instead.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut table = Self {
            codes: [None; SYMBOL_COUNT],
        };

        match tree.root() {
            Node::Leaf { symbol } => {
                table.codes[*symbol as usize] = Some(Code::empty().pushed(false));
            }
            root => table.assign(root, Code::empty()),
        }
        table
    }

    fn assign(&mut self, node: &Node, path: Code) {
        match node {
            Node::Leaf { symbol } => self.codes[*symbol as usize] = Some(path),
            Node::Internal { left, right } => {
                self.assign(left, path.pushed(false));
                self.assign(right, path.pushed(true));
            }
        }
    }

    /// Code for `symbol`, if it occurs in the tree.
    pub fn get(&self, symbol: u8) -> Option<&Code> {
        self.codes[symbol as usize].as_ref()
    }

    /// Code for `symbol`, or [`OxiHuffError::MissingCode`].
    pub fn require(&self, symbol: u8) -> Result<&Code> {
        self.get(symbol).ok_or(OxiHuffError::MissingCode { symbol })
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|c| c.is_some()).count()
    }

    /// Returns `true` if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_ref().map(|c| (symbol as u8, c)))
    }

    /// Exact number of payload bits needed to encode an input with these frequencies.
    pub fn encoded_bit_len(&self, frequencies: &FrequencyTable) -> Result<u64> {
        frequencies
            .iter_present()
            .map(|(symbol, count)| Ok(self.require(symbol)?.len() as u64 * count))
            .sum()
    }
}
