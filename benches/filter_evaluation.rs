//! Benchmarks for per-record filter evaluation.
//!
//! Filters are applied to every record of a scan, so the cost of one
//! `accepts` call dominates. These benchmarks measure a single leaf, a
//! small composite tree, and the tag-lookup path.
//!
//! Run with: cargo bench --bench filter_evaluation

use bamsieve::{
    AndFilter, CompareOp, Filter, Flag, FlagFilter, IntTagFilter, MappingQualityFilter, NotFilter,
    Record, TagValue,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

/// Generate a batch of varied records.
fn generate_records(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| {
            let mut record = Record::new();
            record.name = format!("lane{}:read{}", i % 8, i);
            record.ref_id = (i % 24) as i64;
            record.position = (i * 37) as i64;
            record.mapping_quality = (i % 61) as u8;
            record.sequence_length = 150;
            if i % 3 != 0 {
                record
                    .tags
                    .insert("NM".parse().unwrap(), TagValue::Int((i % 7) as i64));
            }
            if i % 10 == 0 {
                record.flags.set(Flag::Duplicate);
            }
            record
        })
        .collect()
}

fn bench_single_leaf(c: &mut Criterion) {
    let records = generate_records(10_000);
    let filter = MappingQualityFilter::new(30);

    let mut group = c.benchmark_group("single_leaf");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("mapping_quality", |b| {
        b.iter(|| {
            records
                .iter()
                .filter(|r| filter.accepts(black_box(r)))
                .count()
        })
    });
    group.finish();
}

fn bench_composite_tree(c: &mut Criterion) {
    let records = generate_records(10_000);
    let tree = AndFilter::new(
        AndFilter::new(
            MappingQualityFilter::new(30),
            IntTagFilter::new("NM", CompareOp::Le, 2).unwrap(),
        ),
        NotFilter::new(FlagFilter::new("duplicate").unwrap()),
    );

    let mut group = c.benchmark_group("composite_tree");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("mapq_nm_not_duplicate", |b| {
        b.iter(|| {
            records
                .iter()
                .filter(|r| tree.accepts(black_box(r)))
                .count()
        })
    });
    group.finish();
}

fn bench_tag_lookup(c: &mut Criterion) {
    let records = generate_records(10_000);
    let filter = IntTagFilter::new("NM", CompareOp::Gt, 2).unwrap();

    let mut group = c.benchmark_group("tag_lookup");
    group.throughput(Throughput::Elements(records.len() as u64));
    group.bench_function("int_tag", |b| {
        b.iter(|| {
            records
                .iter()
                .filter(|r| filter.accepts(black_box(r)))
                .count()
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_leaf,
    bench_composite_tree,
    bench_tag_lookup
);
criterion_main!(benches);
