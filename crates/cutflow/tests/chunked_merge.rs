//! Integration tests for chunked processing and out-of-process merging.
//!
//! These tests verify that two workers filling independent pipeline
//! instances, serializing their snapshots, and reducing them afterwards
//! arrive at the same cut-flow a single pipeline would have produced.

use cutflow::{
    CutDetails, CutSnapshot, CutflowReport, EventFilter, EventPipeline, EventSelection,
};

/// Passes events whose value clears a threshold.
struct MinValue {
    label: String,
    min: u32,
}

impl MinValue {
    fn new(min: u32) -> Self {
        Self {
            label: format!("value>={min}"),
            min,
        }
    }
}

impl EventSelection<u32> for MinValue {
    fn name(&self) -> &str {
        &self.label
    }

    fn passes(&self, event: &u32, _details: &mut CutDetails) -> bool {
        *event >= self.min
    }
}

fn build_pipeline() -> EventPipeline<u32> {
    EventPipeline::new()
        .with_filter(EventFilter::new(MinValue::new(10)))
        .with_filter(EventFilter::new(MinValue::new(100)))
}

#[test]
fn test_chunked_workers_match_single_pipeline() {
    let events: Vec<u32> = (0..1000).collect();

    // One pipeline over the whole dataset.
    let mut reference = build_pipeline();
    for event in &events {
        reference.evaluate(event);
    }

    // Two workers over one half each, reduced afterwards.
    let (first_half, second_half) = events.split_at(500);
    let mut worker_a = build_pipeline();
    let mut worker_b = build_pipeline();
    for event in first_half {
        worker_a.evaluate(event);
    }
    for event in second_half {
        worker_b.evaluate(event);
    }

    let merged = EventPipeline::merge(&worker_a, &worker_b).unwrap();
    assert_eq!(merged, reference.report());
    assert_eq!(merged.total(), 1000);
    assert_eq!(merged.passing(), 900);
}

#[test]
fn test_merge_across_serialization_boundary() {
    let mut worker_a = build_pipeline();
    let mut worker_b = build_pipeline();
    for event in 0..200u32 {
        worker_a.evaluate(&event);
    }
    for event in 200..500u32 {
        worker_b.evaluate(&event);
    }

    // Each worker ships its snapshots as JSON, the way an out-of-process
    // reduction step would receive them.
    let wire_a = serde_json::to_string(&worker_a.snapshots()).unwrap();
    let wire_b = serde_json::to_string(&worker_b.snapshots()).unwrap();

    let snapshots_a: Vec<CutSnapshot> = serde_json::from_str(&wire_a).unwrap();
    let snapshots_b: Vec<CutSnapshot> = serde_json::from_str(&wire_b).unwrap();

    let merged = CutflowReport::merge(
        &CutflowReport::from_snapshots(snapshots_a),
        &CutflowReport::from_snapshots(snapshots_b),
    )
    .unwrap();

    assert_eq!(merged, EventPipeline::merge(&worker_a, &worker_b).unwrap());
    assert_eq!(merged.total(), 500);
    // 490 events clear 10, 400 clear 100.
    assert_eq!(merged.stages()[0].passing(), 490);
    assert_eq!(merged.stages()[1].total(), 490);
    assert_eq!(merged.stages()[1].passing(), 400);
}

#[test]
fn test_pipelines_with_different_definitions_do_not_merge() {
    let shorter = EventPipeline::new().with_filter(EventFilter::new(MinValue::new(10)));
    let longer = build_pipeline();

    assert!(EventPipeline::merge(&shorter, &longer).is_err());
}
