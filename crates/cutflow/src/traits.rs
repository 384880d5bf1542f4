//! Core traits for the cut-flow pipeline.
//!
//! This module defines the two selection contracts a stage can implement:
//! an event-level predicate and an object-level narrowing step. The stages
//! in [`crate::filter`] own the counters and delegate the actual selection
//! decision to these traits.

use crate::stats::CutDetails;

/// Event-level selection: keep or reject one event.
///
/// ## Design Note
/// - `Send + Sync` allows selections to be used in concurrent contexts
///   (one pipeline instance per worker chunk)
/// - The selection itself is stateless with respect to counting; all
///   bookkeeping lives in the stage wrapping it
/// - `details` lets a selection record named sub-counters (e.g. which
///   lepton flavor satisfied the cut) that travel with the stage's stats
pub trait EventSelection<E>: Send + Sync {
    /// Identity of this selection. Equal names mean "the same stage" when
    /// chunk statistics are merged, so the name must be stable across
    /// structurally identical pipeline definitions.
    fn name(&self) -> &str;

    /// Decide whether `event` passes this selection.
    fn passes(&self, event: &E, details: &mut CutDetails) -> bool;
}

/// Object-level selection: narrow a collection of sub-objects within one
/// event.
///
/// Takes ownership of the collection and returns the surviving objects,
/// which lets each stage feed the next without cloning.
pub trait ObjectSelection<E, O>: Send + Sync {
    /// Identity of this selection; same merge contract as
    /// [`EventSelection::name`].
    fn name(&self) -> &str;

    /// Return the subset of `objects` that survives this selection.
    fn filtered(&self, event: &E, objects: Vec<O>, details: &mut CutDetails) -> Vec<O>;
}

/// A side effect to run when an event passes an event-level stage.
///
/// Arguments are bound at registration time by the closure's captures; the
/// pipeline calls it with nothing and ignores any result.
pub type Hook = Box<dyn FnMut() + Send>;
