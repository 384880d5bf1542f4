//! The counting stages of a cut-flow.
//!
//! A stage pairs a selection (the decision logic, see [`crate::traits`])
//! with the counters that make the cut-flow auditable. Stages are built
//! once per pipeline definition and mutated in place by every evaluation
//! over the lifetime of a run; there is no reset.
//!
//! Both stage kinds support *passthrough*: the stage keeps counting but
//! never rejects anything, which disables a cut without removing its row
//! from the report.

use crate::snapshot::CutSnapshot;
use crate::stats::CutStats;
use crate::traits::{EventSelection, Hook, ObjectSelection};

/// An event-level stage: counts events in, events out.
///
/// ## Usage
/// ```ignore
/// let mut cut = EventFilter::new(LeptonPtThreshold::new(20.0))
///     .with_hook(move || plots.fill_pt());
///
/// if cut.evaluate(&event) {
///     // event survived, hooks already ran
/// }
/// ```
pub struct EventFilter<E> {
    selection: Box<dyn EventSelection<E>>,
    stats: CutStats,
    hooks: Vec<Hook>,
    passthrough: bool,
}

impl<E> EventFilter<E> {
    /// Create a stage around `selection`, taking its name as the stage
    /// identity.
    pub fn new(selection: impl EventSelection<E> + 'static) -> Self {
        let stats = CutStats::new(selection.name());
        Self {
            selection: Box::new(selection),
            stats,
            hooks: Vec::new(),
            passthrough: false,
        }
    }

    /// Register a side effect to run each time an event passes this stage.
    /// Hooks run in registration order.
    pub fn with_hook(mut self, hook: impl FnMut() + Send + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Count but never reject: every event passes and the selection is not
    /// consulted at all.
    pub fn with_passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    /// Stage identity.
    pub fn name(&self) -> &str {
        self.stats.name()
    }

    /// The stage's counters.
    pub fn stats(&self) -> &CutStats {
        &self.stats
    }

    /// Plain-data capture of the stage's counters.
    pub fn snapshot(&self) -> CutSnapshot {
        self.stats.snapshot()
    }

    /// Run one event through this stage.
    ///
    /// Always counts the event as seen. On pass the hooks run in order,
    /// then the event is counted as surviving.
    pub fn evaluate(&mut self, event: &E) -> bool {
        self.stats.record_seen(1);
        let passed = self.passthrough || self.selection.passes(event, self.stats.details_mut());
        if passed {
            for hook in &mut self.hooks {
                hook();
            }
            self.stats.record_passed(1);
        }
        passed
    }
}

/// An object-level stage: narrows a collection of sub-objects within one
/// event.
///
/// Counting has two modes. By default the stage counts raw objects
/// (`total` grows by the input collection size, `passing` by the output
/// size). With [`ObjectFilter::counting_events`] it counts events instead:
/// one seen per call, one passing per call that leaves the collection
/// non-empty.
pub struct ObjectFilter<E, O> {
    selection: Box<dyn ObjectSelection<E, O>>,
    stats: CutStats,
    passthrough: bool,
    count_events: bool,
}

impl<E, O> ObjectFilter<E, O> {
    /// Create a stage around `selection`, counting raw objects.
    pub fn new(selection: impl ObjectSelection<E, O> + 'static) -> Self {
        let stats = CutStats::new(selection.name());
        Self {
            selection: Box::new(selection),
            stats,
            passthrough: false,
            count_events: false,
        }
    }

    /// Count events-with-surviving-objects instead of raw object counts.
    pub fn counting_events(mut self) -> Self {
        self.count_events = true;
        self
    }

    /// Count but never narrow: the collection is returned unmodified and
    /// the selection is not consulted, while counters still update with
    /// the unmodified collection as both input and output.
    pub fn with_passthrough(mut self) -> Self {
        self.passthrough = true;
        self
    }

    /// Stage identity.
    pub fn name(&self) -> &str {
        self.stats.name()
    }

    /// The stage's counters.
    pub fn stats(&self) -> &CutStats {
        &self.stats
    }

    /// Plain-data capture of the stage's counters.
    pub fn snapshot(&self) -> CutSnapshot {
        self.stats.snapshot()
    }

    /// Run one event's collection through this stage, returning the
    /// survivors.
    pub fn evaluate(&mut self, event: &E, objects: Vec<O>) -> Vec<O> {
        let seen = if self.count_events {
            1
        } else {
            objects.len() as u64
        };
        self.stats.record_seen(seen);

        let surviving = if self.passthrough {
            objects
        } else {
            self.selection
                .filtered(event, objects, self.stats.details_mut())
        };

        if !surviving.is_empty() {
            let passed = if self.count_events {
                1
            } else {
                surviving.len() as u64
            };
            self.stats.record_passed(passed);
        }
        surviving
    }
}
