//! Behavior-free cut-flow reports and the chunk-merge algorithm.
//!
//! A [`CutflowReport`] is the ordered counter sequence of one pipeline
//! instance with all selection logic stripped away. Workers each fill their
//! own pipeline over a chunk of events; merging the per-chunk reports
//! yields the cut-flow of the whole dataset, as if a single pipeline had
//! seen every event.
//!
//! Merging requires both operands to come from the same pipeline
//! definition. The stage count is checked up front and every position must
//! agree on the stage name, so misaligned pipelines fail loudly instead of
//! producing a structurally valid but meaningless report. Within that
//! precondition the merge is commutative and associative.

use crate::error::{CutflowError, Result};
use crate::snapshot::CutSnapshot;
use crate::stats::CutStats;

/// The ordered counters of one pipeline, decoupled from its stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutflowReport {
    stages: Vec<CutStats>,
}

impl CutflowReport {
    /// Build a report from stage counters in cut-flow order.
    pub fn new(stages: Vec<CutStats>) -> Self {
        Self { stages }
    }

    /// Rebuild a report from snapshots, e.g. received from another
    /// process.
    pub fn from_snapshots(snapshots: impl IntoIterator<Item = CutSnapshot>) -> Self {
        Self {
            stages: snapshots.into_iter().map(CutStats::restore).collect(),
        }
    }

    /// Plain-data captures of every stage, in cut-flow order.
    pub fn to_snapshots(&self) -> Vec<CutSnapshot> {
        self.stages.iter().map(CutStats::snapshot).collect()
    }

    /// The stages' counters, in cut-flow order.
    pub fn stages(&self) -> &[CutStats] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// The first stage's `total`, or 0 for an empty report.
    pub fn total(&self) -> u64 {
        self.stages.first().map_or(0, CutStats::total)
    }

    /// The last stage's `passing`, or 0 for an empty report.
    pub fn passing(&self) -> u64 {
        self.stages.last().map_or(0, CutStats::passing)
    }

    /// Element-wise sum of two reports from the same pipeline definition.
    ///
    /// Fails with [`CutflowError::LengthMismatch`] if the stage counts
    /// differ, and with [`CutflowError::NameMismatch`] /
    /// [`CutflowError::DetailKeyMismatch`] from the first position where
    /// the stages do not line up. Neither operand is modified and no
    /// partial result is produced.
    pub fn merge(left: &CutflowReport, right: &CutflowReport) -> Result<CutflowReport> {
        if left.len() != right.len() {
            return Err(CutflowError::LengthMismatch {
                left: left.len(),
                right: right.len(),
            });
        }
        tracing::debug!(
            "Merging cut-flow reports with {} stages ({} + {} events)",
            left.len(),
            left.total(),
            right.total()
        );
        let stages = left
            .stages
            .iter()
            .zip(&right.stages)
            .map(|(a, b)| CutStats::combine(a, b))
            .collect::<Result<Vec<_>>>()?;
        Ok(CutflowReport { stages })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(name: &str, total: u64, passing: u64) -> CutStats {
        CutStats::restore(CutSnapshot {
            name: name.to_string(),
            total,
            passing,
            details: Default::default(),
        })
    }

    fn chunk(stage_counts: &[(&str, u64, u64)]) -> CutflowReport {
        CutflowReport::new(
            stage_counts
                .iter()
                .map(|(name, total, passing)| stats(name, *total, *passing))
                .collect(),
        )
    }

    #[test]
    fn test_merge_sums_stage_by_stage() {
        let a = chunk(&[("has_lepton", 100, 80), ("pt>20", 80, 50)]);
        let b = chunk(&[("has_lepton", 50, 40), ("pt>20", 40, 25)]);

        let merged = CutflowReport::merge(&a, &b).unwrap();

        assert_eq!(merged.stages()[0].total(), 150);
        assert_eq!(merged.stages()[0].passing(), 120);
        assert_eq!(merged.stages()[1].total(), 120);
        assert_eq!(merged.stages()[1].passing(), 75);
        assert_eq!(merged.total(), 150);
        assert_eq!(merged.passing(), 75);
    }

    #[test]
    fn test_merge_rejects_different_lengths() {
        let a = chunk(&[("has_lepton", 100, 80), ("pt>20", 80, 50)]);
        let b = chunk(&[("has_lepton", 50, 40)]);

        let err = CutflowReport::merge(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            CutflowError::LengthMismatch { left: 2, right: 1 }
        ));
    }

    #[test]
    fn test_merge_rejects_misaligned_stages() {
        let a = chunk(&[("has_lepton", 100, 80), ("pt>20", 80, 50)]);
        let b = chunk(&[("pt>20", 50, 40), ("has_lepton", 40, 25)]);

        let err = CutflowReport::merge(&a, &b).unwrap_err();
        assert!(matches!(err, CutflowError::NameMismatch { .. }));
    }

    #[test]
    fn test_merge_is_commutative_and_associative() {
        let a = chunk(&[("has_lepton", 100, 80), ("pt>20", 80, 50)]);
        let b = chunk(&[("has_lepton", 50, 40), ("pt>20", 40, 25)]);
        let c = chunk(&[("has_lepton", 10, 9), ("pt>20", 9, 7)]);

        let ab = CutflowReport::merge(&a, &b).unwrap();
        let ba = CutflowReport::merge(&b, &a).unwrap();
        assert_eq!(ab, ba);

        let ab_c = CutflowReport::merge(&ab, &c).unwrap();
        let bc = CutflowReport::merge(&b, &c).unwrap();
        let a_bc = CutflowReport::merge(&a, &bc).unwrap();
        assert_eq!(ab_c, a_bc);
    }

    #[test]
    fn test_empty_report() {
        let report = CutflowReport::new(Vec::new());
        assert_eq!(report.total(), 0);
        assert_eq!(report.passing(), 0);

        let merged = CutflowReport::merge(&report, &CutflowReport::new(Vec::new())).unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip_preserves_report() {
        let report = chunk(&[("has_lepton", 100, 80), ("pt>20", 80, 50)]);
        let rebuilt = CutflowReport::from_snapshots(report.to_snapshots());
        assert_eq!(rebuilt, report);
    }
}
