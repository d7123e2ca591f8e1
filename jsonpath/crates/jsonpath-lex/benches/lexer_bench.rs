//! Lexer Benchmarks
//!
//! Benchmarks measuring tokenizer throughput on representative queries.
//! Run with: `cargo bench --package jsonpath-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use jsonpath_lex::tokenize;
use jsonpath_util::Handler;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    // The lexer implements Iterator, so we can drain it directly
    tokenize(source, &handler).count()
}

fn bench_lexer_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_paths");

    let source = "$.store.book[*].author";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_index", |b| {
        b.iter(|| lexer_token_count(black_box("$[0]")))
    });

    group.bench_function("dotted_path", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("recursive_descent", |b| {
        b.iter(|| lexer_token_count(black_box("$..book[2].title")))
    });

    group.finish();
}

fn bench_lexer_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_filters");

    // Filter-heavy query exercising operators, numbers and strings
    let source =
        "$.store.book[?(@.price < 10 && @.category == 'fiction' || @.isbn != null)].title";

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("comparison_filter", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.bench_function("named_operator_filter", |b| {
        b.iter(|| {
            lexer_token_count(black_box(
                "$[?(@.attr in {'a': 1, 'b': [1, 2, 3], 'c': { }})]",
            ))
        })
    });

    group.bench_function("regex_filter", |b| {
        b.iter(|| lexer_token_count(black_box("$.demo[?(@.attr =~ /[0-9]+\\.[a-z]*/iu)]")))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("$['name']")))
    });

    group.bench_function("long_string", |b| {
        let source = "$[\"a rather long quoted member name with \\\"escapes\\\" inside it\"]";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("$[123456]")))
    });

    group.bench_function("negative", |b| {
        b.iter(|| lexer_token_count(black_box("$[-100]")))
    });

    group.bench_function("double", |b| {
        b.iter(|| lexer_token_count(black_box("$[?(@.price == 3.14159)]")))
    });

    group.finish();
}

fn bench_lexer_long_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_long_input");

    // Deep path, the kind produced by generated queries
    let source: String = std::iter::once("$".to_string())
        .chain((0..200).map(|i| format!(".segment{}", i)))
        .collect();

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("deep_path", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_paths,
    bench_lexer_filters,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_long_input
);
criterion_main!(benches);
