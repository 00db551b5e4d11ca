//! Performance benchmarks for the fragment locator

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fragment_locator::matching::{locate_fragment, similarity};

fn generate_source(num_functions: usize) -> String {
    let mut src = String::from("import os\nimport sys\n\n");
    for i in 0..num_functions {
        src.push_str(&format!("def handler_{}(request, limit={}):\n", i, i));
        src.push_str(&format!("    items = fetch_items(request, offset={})\n", i * 10));
        src.push_str("    return [item for item in items if item.ok][:limit]\n\n");
    }
    src
}

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_fragment");

    for num_functions in [10, 100, 1000].iter() {
        let src = generate_source(*num_functions);
        let last = num_functions - 1;

        let exact = format!("def   handler_{}(request,  limit={}):", last, last);
        group.bench_with_input(BenchmarkId::new("exact", num_functions), &src, |b, src| {
            b.iter(|| locate_fragment(black_box(&exact), black_box(src)))
        });

        let multiline = format!(
            "def handler_{}(request, limit={}):\n  items = fetch_items(request, offset=0)\n",
            last, last
        );
        group.bench_with_input(BenchmarkId::new("multiline", num_functions), &src, |b, src| {
            b.iter(|| locate_fragment(black_box(&multiline), black_box(src)))
        });

        let fuzzy = "return [item for item in items if item.okay][:limit]";
        group.bench_with_input(BenchmarkId::new("fuzzy", num_functions), &src, |b, src| {
            b.iter(|| locate_fragment(black_box(fuzzy), black_box(src)))
        });

        let keyword = "def handler_7(req):";
        group.bench_with_input(BenchmarkId::new("keyword", num_functions), &src, |b, src| {
            b.iter(|| locate_fragment(black_box(keyword), black_box(src)))
        });
    }

    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("similarity");

    for len in [20, 80, 400].iter() {
        let a: String = "let value = compute(a, b); ".chars().cycle().take(*len).collect();
        let b: String = "let valve = compute(a, c); ".chars().cycle().take(*len).collect();
        group.bench_with_input(BenchmarkId::new("chars", len), &(a, b), |bench, (a, b)| {
            bench.iter(|| similarity(black_box(a), black_box(b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_similarity);
criterion_main!(benches);
