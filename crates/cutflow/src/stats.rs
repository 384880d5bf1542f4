//! Counting state shared by every cut-flow stage.
//!
//! Each stage owns a [`CutStats`]: how many inputs it has seen, how many it
//! let through, and a set of named detail counters a selection can use for
//! finer-grained bookkeeping (e.g. a failure-reason breakdown). Counters
//! only ever move forward; there is no reset. At the end of a chunk the
//! stats are either snapshotted for transport or combined directly with the
//! stats of another chunk.

use crate::error::{CutflowError, Result};
use crate::snapshot::CutSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named sub-counters attached to a stage.
///
/// Backed by a `BTreeMap` so that snapshots serialize with a stable key
/// order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CutDetails(BTreeMap<String, u64>);

impl CutDetails {
    /// Create an empty set of detail counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for `label` by `n`, creating it at zero first
    /// if it does not exist yet.
    pub fn add(&mut self, label: &str, n: u64) {
        *self.0.entry(label.to_string()).or_insert(0) += n;
    }

    /// Increment the counter for `label` by one.
    pub fn bump(&mut self, label: &str) {
        self.add(label, 1);
    }

    /// Current value of the counter for `label`, zero if absent.
    pub fn get(&self, label: &str) -> u64 {
        self.0.get(label).copied().unwrap_or(0)
    }

    /// Labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over `(label, count)` pairs in sorted label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Key-wise sum of two detail sets with identical label sets.
    fn combine(name: &str, left: &Self, right: &Self) -> Result<Self> {
        if !left.0.keys().eq(right.0.keys()) {
            return Err(CutflowError::DetailKeyMismatch {
                name: name.to_string(),
                left: left.0.keys().cloned().collect(),
                right: right.0.keys().cloned().collect(),
            });
        }
        let summed = left
            .0
            .iter()
            .map(|(label, count)| (label.clone(), count + right.get(label)))
            .collect();
        Ok(Self(summed))
    }
}

/// The counters of one cut-flow stage.
///
/// `name` is the stage's identity: two stats blocks describe the same stage
/// if and only if their names are equal, and [`CutStats::combine`] refuses
/// anything else. Mutation goes through the crate-internal recording
/// methods, which keep `passing <= total` at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutStats {
    name: String,
    total: u64,
    passing: u64,
    details: CutDetails,
}

impl CutStats {
    /// Fresh counters for a stage called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total: 0,
            passing: 0,
            details: CutDetails::new(),
        }
    }

    /// Identity of the stage these counters belong to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of inputs presented to the stage.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of inputs that survived the stage.
    pub fn passing(&self) -> u64 {
        self.passing
    }

    /// Detail counters recorded by the stage's selection.
    pub fn details(&self) -> &CutDetails {
        &self.details
    }

    pub(crate) fn details_mut(&mut self) -> &mut CutDetails {
        &mut self.details
    }

    /// Record `n` more inputs seen.
    pub(crate) fn record_seen(&mut self, n: u64) {
        self.total += n;
    }

    /// Record `n` more inputs surviving. Callers only record survivors out
    /// of inputs they have already recorded as seen.
    pub(crate) fn record_passed(&mut self, n: u64) {
        self.passing += n;
        debug_assert!(self.passing <= self.total);
    }

    /// Capture the counters as a plain serializable value.
    pub fn snapshot(&self) -> CutSnapshot {
        CutSnapshot {
            name: self.name.clone(),
            total: self.total,
            passing: self.passing,
            details: self.details.clone(),
        }
    }

    /// Reconstruct counters from a snapshot taken elsewhere, typically on
    /// the far side of a process boundary.
    pub fn restore(snapshot: CutSnapshot) -> Self {
        Self {
            name: snapshot.name,
            total: snapshot.total,
            passing: snapshot.passing,
            details: snapshot.details,
        }
    }

    /// Sum the counters of the same stage as seen by two different chunks.
    ///
    /// Fails with [`CutflowError::NameMismatch`] if the two blocks do not
    /// describe the same stage, and with
    /// [`CutflowError::DetailKeyMismatch`] if their detail label sets
    /// differ. Neither operand is modified.
    pub fn combine(left: &CutStats, right: &CutStats) -> Result<CutStats> {
        if left.name != right.name {
            return Err(CutflowError::NameMismatch {
                left: left.name.clone(),
                right: right.name.clone(),
            });
        }
        Ok(CutStats {
            name: left.name.clone(),
            total: left.total + right.total,
            passing: left.passing + right.passing,
            details: CutDetails::combine(&left.name, &left.details, &right.details)?,
        })
    }
}
