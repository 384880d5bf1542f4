//! Benchmarks for cut-flow evaluation and report merging
//!
//! Run with: cargo bench --package selections

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use cutflow::{CutflowReport, EventFilter, EventPipeline};
use selections::{synthetic, Event, HasLepton, LeptonPtThreshold, MissingEtThreshold};

fn demo_pipeline() -> EventPipeline<Event> {
    EventPipeline::new()
        .with_filter(EventFilter::new(HasLepton))
        .with_filter(EventFilter::new(LeptonPtThreshold::new(20.0)))
        .with_filter(EventFilter::new(MissingEtThreshold::new(30.0)))
}

fn bench_event_pipeline(c: &mut Criterion) {
    let events = synthetic::generate(42, 10_000);

    c.bench_function("event_pipeline_10k_events", |b| {
        b.iter(|| {
            let mut pipeline = demo_pipeline();
            for event in &events {
                pipeline.evaluate(black_box(event));
            }
            black_box(pipeline.passing())
        })
    });
}

fn bench_report_merge(c: &mut Criterion) {
    let mut chunk_a = demo_pipeline();
    let mut chunk_b = demo_pipeline();
    for event in synthetic::generate(1, 10_000) {
        chunk_a.evaluate(&event);
    }
    for event in synthetic::generate(2, 10_000) {
        chunk_b.evaluate(&event);
    }
    let report_a = chunk_a.report();
    let report_b = chunk_b.report();

    c.bench_function("merge_reports", |b| {
        b.iter(|| {
            let merged =
                CutflowReport::merge(black_box(&report_a), black_box(&report_b)).unwrap();
            black_box(merged)
        })
    });
}

criterion_group!(benches, bench_event_pipeline, bench_report_merge);
criterion_main!(benches);
