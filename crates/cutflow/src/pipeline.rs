//! Ordered pipelines of cut-flow stages.
//!
//! This module provides the two composition strategies: an AND-chain of
//! event-level stages and a progressive-narrowing chain of object-level
//! stages. Both are built with the builder pattern and both short-circuit:
//! once a stage rejects (or the working collection runs dry), later stages
//! are not consulted, so stage N's `total` equals stage N-1's `passing` by
//! construction.
//!
//! ## Usage
//! ```ignore
//! let mut pipeline = EventPipeline::new()
//!     .with_filter(EventFilter::new(HasLepton))
//!     .with_filter(EventFilter::new(LeptonPtThreshold::new(20.0)));
//!
//! for event in events {
//!     pipeline.evaluate(&event);
//! }
//! let report = pipeline.report();
//! ```

use crate::error::Result;
use crate::filter::{EventFilter, ObjectFilter};
use crate::report::CutflowReport;
use crate::snapshot::CutSnapshot;
use crate::stats::CutStats;

/// A short-circuiting AND-chain of event-level stages.
///
/// Order is semantically significant: it is the cut-flow order of the
/// final report and the short-circuit order during evaluation.
pub struct EventPipeline<E> {
    filters: Vec<EventFilter<E>>,
}

impl<E> EventPipeline<E> {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a stage at the end of the chain (builder pattern).
    pub fn with_filter(mut self, filter: EventFilter<E>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a stage at the end of the chain.
    pub fn push(&mut self, filter: EventFilter<E>) {
        self.filters.push(filter);
    }

    /// Insert a stage at `index`, shifting later stages down.
    pub fn insert(&mut self, index: usize, filter: EventFilter<E>) {
        self.filters.insert(index, filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The cut-flow's initial denominator: the first stage's `total`, or 0
    /// for an empty pipeline.
    pub fn total(&self) -> u64 {
        self.filters.first().map_or(0, |f| f.stats().total())
    }

    /// The final surviving count: the last stage's `passing`, or 0 for an
    /// empty pipeline.
    pub fn passing(&self) -> u64 {
        self.filters.last().map_or(0, |f| f.stats().passing())
    }

    /// The stages' counters, in cut-flow order.
    pub fn stats(&self) -> impl Iterator<Item = &CutStats> {
        self.filters.iter().map(|f| f.stats())
    }

    /// Plain-data captures of every stage, in cut-flow order.
    pub fn snapshots(&self) -> Vec<CutSnapshot> {
        self.filters.iter().map(|f| f.snapshot()).collect()
    }

    /// Behavior-free copy of the pipeline's counters, ready for merging.
    pub fn report(&self) -> CutflowReport {
        CutflowReport::new(self.stats().cloned().collect())
    }

    /// Sum the counters of two pipelines built from the same stage
    /// sequence. Neither operand is modified.
    pub fn merge(left: &Self, right: &Self) -> Result<CutflowReport> {
        CutflowReport::merge(&left.report(), &right.report())
    }

    /// Run one event through every stage in order.
    ///
    /// Stops at the first stage that rejects; stages after it do not see
    /// the event and their counters are unaffected by it.
    pub fn evaluate(&mut self, event: &E) -> bool {
        for filter in &mut self.filters {
            if !filter.evaluate(event) {
                tracing::trace!("Event rejected by stage: {}", filter.name());
                return false;
            }
        }
        true
    }
}

impl<E> Default for EventPipeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A progressive-narrowing chain of object-level stages.
///
/// Each stage's surviving collection feeds the next stage. Evaluation
/// stops as soon as the working collection is empty, mirroring the
/// short-circuit policy of [`EventPipeline`].
pub struct ObjectPipeline<E, O> {
    filters: Vec<ObjectFilter<E, O>>,
}

impl<E, O> ObjectPipeline<E, O> {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a stage at the end of the chain (builder pattern).
    pub fn with_filter(mut self, filter: ObjectFilter<E, O>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add a stage at the end of the chain.
    pub fn push(&mut self, filter: ObjectFilter<E, O>) {
        self.filters.push(filter);
    }

    /// Insert a stage at `index`, shifting later stages down.
    pub fn insert(&mut self, index: usize, filter: ObjectFilter<E, O>) {
        self.filters.insert(index, filter);
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// The first stage's `total`, or 0 for an empty pipeline.
    pub fn total(&self) -> u64 {
        self.filters.first().map_or(0, |f| f.stats().total())
    }

    /// The last stage's `passing`, or 0 for an empty pipeline.
    pub fn passing(&self) -> u64 {
        self.filters.last().map_or(0, |f| f.stats().passing())
    }

    /// The stages' counters, in cut-flow order.
    pub fn stats(&self) -> impl Iterator<Item = &CutStats> {
        self.filters.iter().map(|f| f.stats())
    }

    /// Plain-data captures of every stage, in cut-flow order.
    pub fn snapshots(&self) -> Vec<CutSnapshot> {
        self.filters.iter().map(|f| f.snapshot()).collect()
    }

    /// Behavior-free copy of the pipeline's counters, ready for merging.
    pub fn report(&self) -> CutflowReport {
        CutflowReport::new(self.stats().cloned().collect())
    }

    /// Sum the counters of two pipelines built from the same stage
    /// sequence. Neither operand is modified.
    pub fn merge(left: &Self, right: &Self) -> Result<CutflowReport> {
        CutflowReport::merge(&left.report(), &right.report())
    }

    /// Thread one event's collection through every stage in order.
    ///
    /// Each stage's output feeds the next. Once the working collection is
    /// empty the remaining stages are skipped and the empty collection is
    /// returned.
    pub fn evaluate(&mut self, event: &E, objects: Vec<O>) -> Vec<O> {
        let mut working = objects;
        for filter in &mut self.filters {
            working = filter.evaluate(event, working);
            if working.is_empty() {
                tracing::trace!("Collection exhausted at stage: {}", filter.name());
                return working;
            }
        }
        working
    }
}

impl<E, O> Default for ObjectPipeline<E, O> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::CutDetails;
    use crate::traits::{EventSelection, ObjectSelection};

    struct DivisibleBy(u32);

    impl EventSelection<u32> for DivisibleBy {
        fn name(&self) -> &str {
            match self.0 {
                2 => "div2",
                3 => "div3",
                _ => "divN",
            }
        }

        fn passes(&self, event: &u32, _details: &mut CutDetails) -> bool {
            event % self.0 == 0
        }
    }

    struct AboveThreshold(i32);

    impl ObjectSelection<u32, i32> for AboveThreshold {
        fn name(&self) -> &str {
            "above_threshold"
        }

        fn filtered(&self, _event: &u32, objects: Vec<i32>, _details: &mut CutDetails) -> Vec<i32> {
            objects.into_iter().filter(|o| *o > self.0).collect()
        }
    }

    struct KeepNone;

    impl ObjectSelection<u32, i32> for KeepNone {
        fn name(&self) -> &str {
            "keep_none"
        }

        fn filtered(&self, _event: &u32, _objects: Vec<i32>, _details: &mut CutDetails) -> Vec<i32> {
            Vec::new()
        }
    }

    #[test]
    fn test_empty_pipeline() {
        let mut pipeline: EventPipeline<u32> = EventPipeline::new();

        assert!(pipeline.evaluate(&1));
        assert_eq!(pipeline.total(), 0);
        assert_eq!(pipeline.passing(), 0);
        assert!(pipeline.snapshots().is_empty());
    }

    #[test]
    fn test_event_pipeline_chains_totals() {
        let mut pipeline = EventPipeline::new()
            .with_filter(EventFilter::new(DivisibleBy(2)))
            .with_filter(EventFilter::new(DivisibleBy(3)));

        for event in 1..=12u32 {
            pipeline.evaluate(&event);
        }

        let stats: Vec<_> = pipeline.stats().collect();
        // 6 of 12 are even; of those, 2 are also divisible by 3.
        assert_eq!(stats[0].total(), 12);
        assert_eq!(stats[0].passing(), 6);
        // The second stage only ever saw the first stage's survivors.
        assert_eq!(stats[1].total(), stats[0].passing());
        assert_eq!(stats[1].passing(), 2);

        assert_eq!(pipeline.total(), 12);
        assert_eq!(pipeline.passing(), 2);
    }

    #[test]
    fn test_event_pipeline_short_circuits() {
        let mut pipeline = EventPipeline::new()
            .with_filter(EventFilter::new(DivisibleBy(2)))
            .with_filter(EventFilter::new(DivisibleBy(3)));

        assert!(!pipeline.evaluate(&5));

        let stats: Vec<_> = pipeline.stats().collect();
        assert_eq!(stats[0].total(), 1);
        // The rejected event never reached the second stage.
        assert_eq!(stats[1].total(), 0);
    }

    #[test]
    fn test_object_pipeline_narrows_progressively() {
        let mut pipeline = ObjectPipeline::new()
            .with_filter(ObjectFilter::new(AboveThreshold(0)))
            .with_filter(ObjectFilter::new(AboveThreshold(10)));

        let surviving = pipeline.evaluate(&1, vec![-5, 3, 12, 20]);
        assert_eq!(surviving, vec![12, 20]);

        let stats: Vec<_> = pipeline.stats().collect();
        assert_eq!(stats[0].total(), 4);
        assert_eq!(stats[0].passing(), 3);
        assert_eq!(stats[1].total(), 3);
        assert_eq!(stats[1].passing(), 2);
    }

    #[test]
    fn test_object_pipeline_stops_on_empty_collection() {
        let mut pipeline = ObjectPipeline::new()
            .with_filter(ObjectFilter::new(KeepNone))
            .with_filter(ObjectFilter::new(AboveThreshold(0)));

        let surviving = pipeline.evaluate(&1, vec![1, 2, 3]);
        assert!(surviving.is_empty());

        let stats: Vec<_> = pipeline.stats().collect();
        assert_eq!(stats[0].total(), 3);
        assert_eq!(stats[0].passing(), 0);
        // The second stage was never invoked.
        assert_eq!(stats[1].total(), 0);
    }

    #[test]
    fn test_insert_preserves_order() {
        let mut pipeline = EventPipeline::new()
            .with_filter(EventFilter::new(DivisibleBy(3)));
        pipeline.insert(0, EventFilter::new(DivisibleBy(2)));

        let names: Vec<_> = pipeline.stats().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["div2", "div3"]);
    }
}
