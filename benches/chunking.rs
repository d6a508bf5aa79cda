//! Benchmarks for token-budgeted sentence chunking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use passages::{ChunkConfig, Chunker, SentenceChunker, WhitespaceCounter};

fn sample_text(size: usize) -> String {
    // Generate realistic text with sentence structure
    let sentences = [
        "The quick brown fox jumps over the lazy dog. ",
        "Pack my box with five dozen liquor jugs. ",
        "How vexingly quick daft zebras jump! ",
        "The five boxing wizards jump quickly. ",
        "Sphinx of black quartz, judge my vow. ",
    ];
    let mut text = String::with_capacity(size);
    let mut i = 0;
    while text.len() < size {
        text.push_str(sentences[i % sentences.len()]);
        i += 1;
    }
    text.truncate(size);
    text
}

fn bench_chunk_with_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_with_overlap");

    let config = ChunkConfig::new(256, 32).unwrap();
    let chunker = SentenceChunker::new(config, WhitespaceCounter);

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("overlap", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text), None))
        });
    }

    group.finish();
}

fn bench_chunk_no_overlap(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk_no_overlap");

    let config = ChunkConfig::no_overlap(256).unwrap();
    let chunker = SentenceChunker::new(config, WhitespaceCounter);

    for size in [1_000, 10_000, 100_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("no_overlap", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text), None))
        });
    }

    group.finish();
}

fn bench_short_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("short_circuit");

    // A generous budget keeps these documents whole; this measures the
    // whole-text count plus formatting, no segmentation.
    let config = ChunkConfig::new(100_000, 0).unwrap();
    let chunker = SentenceChunker::new(config, WhitespaceCounter);

    for size in [1_000, 10_000] {
        let text = sample_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("whole", size), &text, |b, text| {
            b.iter(|| chunker.chunk(black_box(text), None))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_chunk_with_overlap,
    bench_chunk_no_overlap,
    bench_short_circuit
);
criterion_main!(benches);
