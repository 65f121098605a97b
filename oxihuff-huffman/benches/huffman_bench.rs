//! Performance benchmarks for oxihuff-huffman
//!
//! This benchmark suite evaluates:
//! - Compression/decompression speed for various data patterns
//! - Throughput measurements (MB/s)
//! - Cost of the individual pipeline stages

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxihuff_core::CodecConfig;
use oxihuff_huffman::{
    CodeTable, FrequencyTable, HuffmanEncoder, HuffmanTree, compress, decompress,
};
use std::hint::black_box;

/// Type alias for pattern generator functions
type PatternGenerator = fn(usize) -> Vec<u8>;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - all bytes are the same (one bit per byte)
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    /// Random data - flat histogram (worst compression)
    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    /// Text-like data - realistic scenario
    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     How vexingly quick daft zebras jump! \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }

    /// Skewed data - geometric-like distribution over a small alphabet
    pub fn skewed(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x0F1E2D3C4B5A6978;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push(((seed >> 40) as u32).trailing_zeros() as u8);
        }
        data
    }
}

/// Standard data sizes for benchmarking
mod data_sizes {
    pub const SMALL: usize = 4 * 1024; // 4 KB
    pub const MEDIUM: usize = 64 * 1024; // 64 KB
    pub const LARGE: usize = 1024 * 1024; // 1 MB
}

const PATTERNS: [(&str, PatternGenerator); 4] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
    ("skewed", test_data::skewed as PatternGenerator),
];

/// Benchmark compression speed for different data types
fn bench_compression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_data_types");
    let size = data_sizes::MEDIUM;

    for (name, generator) in PATTERNS {
        let data = generator(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data)).unwrap();
                black_box(compressed);
            });
        });
    }

    group.finish();
}

/// Benchmark decompression speed for different data types
fn bench_decompression_data_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompression_data_types");
    let size = data_sizes::MEDIUM;

    for (name, generator) in PATTERNS {
        let compressed = compress(&generator(size)).unwrap();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &compressed,
            |b, compressed| {
                b.iter(|| {
                    let decompressed = decompress(black_box(compressed)).unwrap();
                    black_box(decompressed);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark scaling with input size
fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip_sizes");

    for size in [data_sizes::SMALL, data_sizes::MEDIUM, data_sizes::LARGE] {
        let data = test_data::text_like(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let compressed = compress(black_box(data)).unwrap();
                let decompressed = decompress(&compressed).unwrap();
                black_box(decompressed);
            });
        });
    }

    group.finish();
}

/// Benchmark the individual pipeline stages
fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");
    let data = test_data::text_like(data_sizes::MEDIUM);
    let frequencies = FrequencyTable::from_bytes(&data);
    let tree = HuffmanTree::build(&frequencies).unwrap();
    let codes = CodeTable::from_tree(&tree);

    group.bench_function("histogram", |b| {
        b.iter(|| black_box(FrequencyTable::from_bytes(black_box(&data))));
    });
    group.bench_function("tree_build", |b| {
        b.iter(|| black_box(HuffmanTree::build(black_box(&frequencies)).unwrap()));
    });
    group.bench_function("code_table", |b| {
        b.iter(|| black_box(CodeTable::from_tree(black_box(&tree))));
    });
    group.throughput(Throughput::Bytes(data.len() as u64));
    group.bench_function("encode", |b| {
        let encoder = HuffmanEncoder::new(&codes, CodecConfig::DEFAULT);
        b.iter(|| black_box(encoder.encode_bytes(black_box(&data)).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compression_data_types,
    bench_decompression_data_types,
    bench_sizes,
    bench_stages
);
criterion_main!(benches);
