//! Benchmarks for the Folio renderer
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use folio::page::PageLayout;
use folio::render::{self, sections};
use folio::PortfolioDocument;

const SAMPLE_JSON: &str = include_str!("../tests/fixtures/portfolio_data.json");

fn sample() -> PortfolioDocument {
    PortfolioDocument::from_json(SAMPLE_JSON).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(SAMPLE_JSON.len() as u64));

    group.bench_function("document", |b| {
        b.iter(|| PortfolioDocument::from_json(black_box(SAMPLE_JSON)).unwrap())
    });

    group.finish();
}

fn bench_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("sections");
    let doc = sample();

    // Scale the project list to see how the builders grow
    for count in [3, 30, 300] {
        let projects: Vec<_> = doc.projects.iter().cycle().take(count).cloned().collect();

        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("projects_{}", count), |b| {
            b.iter(|| sections::projects(black_box(&projects)))
        });
    }

    group.bench_function("introduce", |b| {
        b.iter(|| sections::introduce(black_box(&doc.introduce)))
    });

    group.finish();
}

fn bench_prerender(c: &mut Criterion) {
    let doc = sample();
    let layout = PageLayout::default();

    c.bench_function("prerender_to_html", |b| {
        b.iter(|| {
            render::prerender(black_box(&doc), &layout, 2026)
                .unwrap()
                .to_html()
        })
    });
}

criterion_group!(benches, bench_parse, bench_sections, bench_prerender);
criterion_main!(benches);
