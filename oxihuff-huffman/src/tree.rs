//! Huffman tree construction.
//!
//! Every symbol present in the input becomes a leaf. Internal nodes always
//! own exactly two children, so a node with a single child cannot be
//! represented at all. Children are boxed and dropped with their parent.

use crate::frequency::{FrequencyTable, SYMBOL_COUNT};
use crate::heap::MinHeap;
use oxihuff_core::error::{OxiHuffError, Result};
use tracing::debug;

/// A node of a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf holding one symbol.
    Leaf {
        /// The byte value this leaf decodes to.
        symbol: u8,
    },
    /// An internal node with a `0` (left) and a `1` (right) branch.
    Internal {
        /// Subtree reached by a `0` bit.
        left: Box<Node>,
        /// Subtree reached by a `1` bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Create a leaf node.
    pub fn leaf(symbol: u8) -> Self {
        Node::Leaf { symbol }
    }

    /// Create an internal node owning both children.
    pub fn internal(left: Node, right: Node) -> Self {
        Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Returns `true` for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Length of the longest root-to-leaf path in this subtree.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right } => 1 + left.depth().max(right.depth()),
        }
    }
}

/// A Huffman prefix tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Wrap an existing root node.
    pub fn from_root(root: Node) -> Self {
        Self { root }
    }

    /// Build a tree from symbol frequencies.
    ///
    /// The two lightest nodes are merged repeatedly; the first extracted
    /// becomes the left child. A table with a single present symbol yields a
    /// tree whose root is that leaf. An empty table is rejected with
    /// [`OxiHuffError::EmptyInput`].
    pub fn build(frequencies: &FrequencyTable) -> Result<Self> {
        let mut heap = MinHeap::with_capacity(SYMBOL_COUNT);
        for (symbol, count) in frequencies.iter_present() {
            heap.insert(count, Node::leaf(symbol));
        }

        // Merge until a single node is left; that node is the root.
        let root = loop {
            let (weight_a, a) = heap.extract_min().ok_or(OxiHuffError::EmptyInput)?;
            let Some((weight_b, b)) = heap.extract_min() else {
                break a;
            };
            heap.insert(weight_a + weight_b, Node::internal(a, b));
        };
        let tree = Self { root };

        debug!(
            leaves = tree.leaf_count(),
            depth = tree.depth(),
            "tree built"
        );
        Ok(tree)
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Returns `true` if the root itself is a leaf.
    pub fn is_single_leaf(&self) -> bool {
        self.root.is_leaf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_three_symbols() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"aaaabbbcc")).unwrap();
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.depth(), 2);

        // c(2) and b(3) merge first, then a(4) joins the (5) node on the left.
        let expected = Node::internal(
            Node::leaf(b'a'),
            Node::internal(Node::leaf(b'c'), Node::leaf(b'b')),
        );
        assert_eq!(tree.root(), &expected);
    }

    #[test]
    fn test_build_single_symbol() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&[0x41; 1000])).unwrap();
        assert!(tree.is_single_leaf());
        assert_eq!(tree.root(), &Node::leaf(0x41));
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn test_build_two_symbols() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"xyy")).unwrap();
        assert_eq!(
            tree.root(),
            &Node::internal(Node::leaf(b'x'), Node::leaf(b'y'))
        );
    }

    #[test]
    fn test_build_empty_fails() {
        let result = HuffmanTree::build(&FrequencyTable::new());
        assert!(matches!(result, Err(OxiHuffError::EmptyInput)));
    }

    #[test]
    fn test_build_every_alphabet_size() {
        for n in 1..=256usize {
            let data: Vec<u8> = (0..n).map(|s| s as u8).collect();
            let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data)).unwrap();
            assert_eq!(tree.leaf_count(), n, "{n} symbols");
            assert_eq!(tree.is_single_leaf(), n == 1);
        }
    }

    #[test]
    fn test_build_all_symbols() {
        let data: Vec<u8> = (0..=255u8).collect();
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(&data)).unwrap();
        assert_eq!(tree.leaf_count(), 256);
        // Uniform weights over a power of two give a perfectly balanced tree.
        assert_eq!(tree.depth(), 8);
    }

    #[test]
    fn test_build_fibonacci_weights_is_deep() {
        let mut table = FrequencyTable::new();
        let (mut a, mut b) = (1usize, 1usize);
        for symbol in 0..20u8 {
            table.add_bytes(&vec![symbol; a]);
            (a, b) = (b, a + b);
        }
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(tree.leaf_count(), 20);
        assert_eq!(tree.depth(), 19);
    }
}
