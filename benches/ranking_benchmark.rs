use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relevantdx::{process_queries, process_queries_joined, SearchIndex, Status};

fn build_index(document_count: i64) -> SearchIndex {
    let mut index = SearchIndex::new("and in on with a the").unwrap();
    let words = ["curly", "cat", "fluffy", "dog", "collar", "tail", "groomed", "eyes", "fashionable"];
    for id in 0..document_count {
        let text = (0..15)
            .map(|i| words[((id as usize) + i) % words.len()])
            .collect::<Vec<_>>()
            .join(" ");
        index.add_document(id, &text, Status::Actual, &[(id % 10) - 5]).unwrap();
    }
    index
}

fn bench_find_top_documents_sequential(c: &mut Criterion) {
    let index = build_index(5_000);
    c.bench_function("find_top_documents_sequential", |b| {
        b.iter(|| {
            let _ = index.find_top_documents(black_box("fluffy cat -dog")).unwrap();
        });
    });
}

fn bench_find_top_documents_parallel(c: &mut Criterion) {
    let index = build_index(5_000);
    c.bench_function("find_top_documents_parallel", |b| {
        b.iter(|| {
            let _ = index.find_top_documents_parallel(black_box("fluffy cat -dog")).unwrap();
        });
    });
}

fn bench_process_queries(c: &mut Criterion) {
    let index = build_index(2_000);
    let queries: Vec<String> = (0..200)
        .map(|i| format!("curly fluffy tail -dog{i}"))
        .collect();

    let mut group = c.benchmark_group("process_queries");
    group.bench_with_input(BenchmarkId::new("grouped", queries.len()), &queries, |b, queries| {
        b.iter(|| {
            let _ = process_queries(&index, black_box(queries)).unwrap();
        });
    });
    group.bench_with_input(BenchmarkId::new("joined", queries.len()), &queries, |b, queries| {
        b.iter(|| {
            let _ = process_queries_joined(&index, black_box(queries)).unwrap();
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_find_top_documents_sequential,
    bench_find_top_documents_parallel,
    bench_process_queries
);
criterion_main!(benches);
