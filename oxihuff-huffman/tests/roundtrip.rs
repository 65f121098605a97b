//! Round-trip tests for Huffman archives.

use oxihuff_huffman::archive::SIZE_FIELD_LEN;
use oxihuff_huffman::{compress, decompress, deserialize_tree};

/// Simple xorshift generator so the data is reproducible.
fn pseudo_random(len: usize, mut seed: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed >> 24) as u8
        })
        .collect()
}

#[test]
fn test_literal_example() {
    let input = b"aaaabbbcc";
    let archive = compress(input).unwrap();
    // 8 tree bytes + 8 size bytes + 2 payload bytes
    assert_eq!(archive.len(), 18);
    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_single_byte() {
    let input = b"A";
    let archive = compress(input).unwrap();
    assert_eq!(&archive[..2], b"1A");
    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_single_symbol_repeated() {
    let input = vec![0x41u8; 1000];
    let archive = compress(&input).unwrap();
    // One bit per byte: 125 payload bytes
    assert_eq!(archive.len(), 2 + SIZE_FIELD_LEN + 125);
    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_all_256_symbols() {
    let input: Vec<u8> = (0..=255u8).cycle().take(256 * 10).collect();
    let archive = compress(&input).unwrap();

    let (tree, used) = deserialize_tree(&archive).unwrap();
    assert_eq!(tree.leaf_count(), 256);
    assert_eq!(used, 3 * 256 - 1);
    // Uniform weights give a complete tree of depth 8
    assert_eq!(tree.depth(), 8);

    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_skewed_input_shrinks() {
    let mut input = vec![b'e'; 9000];
    input.extend(std::iter::repeat_n(b't', 600));
    input.extend(std::iter::repeat_n(b'q', 30));
    let archive = compress(&input).unwrap();
    assert!(archive.len() < input.len() / 4);
    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_text() {
    let input = b"The quick brown fox jumps over the lazy dog. ".repeat(50);
    let archive = compress(&input).unwrap();
    assert!(archive.len() < input.len());
    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_random_data() {
    let input = pseudo_random(50_000, 0x9E37_79B9_7F4A_7C15);
    let archive = compress(&input).unwrap();
    // Near-uniform bytes barely compress; the header makes it slightly larger.
    assert!(archive.len() > input.len() - input.len() / 50);
    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_size_field_matches_input() {
    for len in [1usize, 7, 8, 9, 1023, 1024, 1025, 8192, 8193] {
        let input = pseudo_random(len, len as u64 + 1);
        let archive = compress(&input).unwrap();
        let (_, tree_len) = deserialize_tree(&archive).unwrap();

        let mut size = [0u8; SIZE_FIELD_LEN];
        size.copy_from_slice(&archive[tree_len..tree_len + SIZE_FIELD_LEN]);
        assert_eq!(u64::from_ne_bytes(size), len as u64, "len {len}");

        assert_eq!(decompress(&archive).unwrap(), input, "len {len}");
    }
}

#[test]
fn test_marker_bytes_in_data() {
    let input = b"0101011110000111".repeat(9);
    let archive = compress(&input).unwrap();
    assert_eq!(decompress(&archive).unwrap(), input);
}

#[test]
fn test_deterministic_output() {
    let input = b"mississippi river banks";
    assert_eq!(compress(input).unwrap(), compress(input).unwrap());
}

#[test]
fn test_fibonacci_weights_deep_tree() {
    // Fibonacci frequencies force a chain-shaped tree with long codes.
    let mut input = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..20u8 {
        input.extend(std::iter::repeat_n(symbol, a));
        (a, b) = (b, a + b);
    }
    let archive = compress(&input).unwrap();
    let (tree, _) = deserialize_tree(&archive).unwrap();
    assert_eq!(tree.depth(), 19);
    assert_eq!(decompress(&archive).unwrap(), input);
}
