//! Lexer benchmarks for Stencil.
//!
//! Measures tokenization throughput across template sizes, and raw chunking
//! alone for comparison (no classification, no trimming).

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stencil_lexer::Lexer;
use stencil_lexer_core::{Cursor, RawChunker};

/// Generate a template with `n` list items.
fn generate_n_items(n: usize) -> String {
    let mut source = String::from("{# generated #}\n<ul>\n");
    for i in 0..n {
        source.push_str(&format!(
            "{{% if item{i}.visible %}}  <li class=\"row\">{{{{ item{i}.name | upper }}}}</li>\n{{% endif %}}\n"
        ));
    }
    source.push_str("</ul>\n");
    source
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/tokenize");

    for items in [10, 100, 1000, 10_000] {
        let source = generate_n_items(items);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &source, |b, src| {
            b.iter(|| Lexer::new(black_box(src)).tokenize());
        });
    }

    group.finish();
}

fn bench_chunks(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer/chunks");

    for items in [10, 100, 1000, 10_000] {
        let source = generate_n_items(items);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &source, |b, src| {
            b.iter(|| {
                for chunk in RawChunker::new(Cursor::new(black_box(src))) {
                    black_box(chunk);
                }
            });
        });
    }

    group.finish();
}

fn bench_plain_text(c: &mut Criterion) {
    let source = "lorem ipsum { dolor } sit amet\n".repeat(4096);
    let mut group = c.benchmark_group("lexer/plain_text");
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("no_tags", |b| {
        b.iter(|| Lexer::new(black_box(&source)).tokenize());
    });
    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_chunks, bench_plain_text);
criterion_main!(benches);
