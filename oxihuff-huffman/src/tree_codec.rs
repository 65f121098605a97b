//! Tree serialization for the archive header.
//!
//! The tree is written in pre-order. A leaf is the byte `'1'` followed by its
//! raw symbol; an internal node is the byte `'0'` followed by its left and then
//! its right subtree. Frequencies are not stored.
//!
//! ```text
//!        *            '0' '1' 'a' '0' '1' 'c' '1' 'b'
//!       / \
//!      a   *
//!         / \
//!        c   b
//! ```

use crate::codes::MAX_CODE_LENGTH;
use crate::frequency::SYMBOL_COUNT;
use crate::tree::{HuffmanTree, Node};
use oxihuff_core::error::{OxiHuffError, Result};
use std::io::{self, Cursor, Read, Write};

/// Marker byte preceding a leaf's symbol.
pub const LEAF_MARKER: u8 = b'1';

/// Marker byte for an internal node.
pub const INTERNAL_MARKER: u8 = b'0';

/// Number of bytes `tree` occupies once serialized.
pub fn serialized_len(tree: &HuffmanTree) -> u64 {
    // n leaves take 2 bytes each plus n - 1 internal markers.
    3 * tree.leaf_count() as u64 - 1
}

/// Write `tree` in pre-order to `writer`.
pub fn write_tree<W: Write>(tree: &HuffmanTree, writer: &mut W) -> Result<()> {
    writer.write_all(&serialize_tree(tree))?;
    Ok(())
}

/// Serialize `tree` into a new buffer.
pub fn serialize_tree(tree: &HuffmanTree) -> Vec<u8> {
    let mut out = Vec::with_capacity(serialized_len(tree) as usize);
    encode_node(tree.root(), &mut out);
    out
}

fn encode_node(node: &Node, out: &mut Vec<u8>) {
    match node {
        Node::Leaf { symbol } => {
            out.push(LEAF_MARKER);
            out.push(*symbol);
        }
        Node::Internal { left, right } => {
            out.push(INTERNAL_MARKER);
            encode_node(left, out);
            encode_node(right, out);
        }
    }
}

/// An internal node whose children are still being read.
enum Pending {
    NeedLeft,
    NeedRight(Node),
}

/// Read one pre-order tree from `reader`, consuming exactly its bytes.
///
/// Fails with [`OxiHuffError::TruncatedTree`] if the input ends early,
/// [`OxiHuffError::InvalidTreeMarker`] on an unknown marker, and
/// [`OxiHuffError::CorruptTree`] if the tree nests deeper than any code can be
/// or holds more leaves than there are symbols.
pub fn read_tree<R: Read>(reader: &mut R) -> Result<HuffmanTree> {
    let mut offset = 0u64;
    let mut stack: Vec<Pending> = Vec::new();
    let mut leaves = 0usize;

    loop {
        let marker = next_byte(reader, &mut offset)?;
        let mut node = match marker {
            LEAF_MARKER => {
                let symbol = next_byte(reader, &mut offset)?;
                leaves += 1;
                if leaves > SYMBOL_COUNT {
                    return Err(OxiHuffError::corrupt_tree(
                        offset - 2,
                        format!("more than {SYMBOL_COUNT} leaves"),
                    ));
                }
                Node::leaf(symbol)
            }
            INTERNAL_MARKER => {
                if stack.len() >= MAX_CODE_LENGTH {
                    return Err(OxiHuffError::corrupt_tree(
                        offset - 1,
                        format!("nesting deeper than {MAX_CODE_LENGTH} levels"),
                    ));
                }
                stack.push(Pending::NeedLeft);
                continue;
            }
            other => return Err(OxiHuffError::invalid_marker(other, offset - 1)),
        };

        // A subtree is complete: attach it to its parent, closing every
        // internal node that now has both children.
        loop {
            match stack.pop() {
                None => return Ok(HuffmanTree::from_root(node)),
                Some(Pending::NeedLeft) => {
                    stack.push(Pending::NeedRight(node));
                    break;
                }
                Some(Pending::NeedRight(left)) => {
                    node = Node::internal(left, node);
                }
            }
        }
    }
}

/// Deserialize a tree from the start of `data`.
///
/// Returns the tree and the number of bytes it occupied.
pub fn deserialize_tree(data: &[u8]) -> Result<(HuffmanTree, usize)> {
    let mut cursor = Cursor::new(data);
    let tree = read_tree(&mut cursor)?;
    Ok((tree, cursor.position() as usize))
}

fn next_byte<R: Read>(reader: &mut R, offset: &mut u64) -> Result<u8> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Err(OxiHuffError::truncated_tree(*offset)),
            Ok(_) => {
                *offset += 1;
                return Ok(byte[0]);
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
}
