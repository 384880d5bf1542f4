//! Leading-lepton transverse momentum cut.

use crate::event::Event;
use cutflow::{CutDetails, EventSelection};

/// Passes events whose leading lepton clears a pt threshold.
///
/// The stage name embeds the threshold (e.g. `lepton_pt>20`), so two
/// pipeline definitions only merge if they were built with the same cut
/// value.
pub struct LeptonPtThreshold {
    min_pt: f64,
    label: String,
}

impl LeptonPtThreshold {
    /// Create the cut for a threshold in GeV.
    pub fn new(min_pt: f64) -> Self {
        Self {
            min_pt,
            label: format!("lepton_pt>{min_pt}"),
        }
    }
}

impl EventSelection<Event> for LeptonPtThreshold {
    fn name(&self) -> &str {
        &self.label
    }

    fn passes(&self, event: &Event, _details: &mut CutDetails) -> bool {
        event
            .leading_lepton()
            .is_some_and(|lepton| lepton.pt > self.min_pt)
    }
}
