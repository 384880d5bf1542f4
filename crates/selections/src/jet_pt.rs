//! Jet transverse momentum selection.

use crate::event::{Event, Jet};
use cutflow::{CutDetails, ObjectSelection};

/// Keeps jets above a pt threshold.
pub struct JetPtSelection {
    min_pt: f64,
    label: String,
}

impl JetPtSelection {
    /// Create the selection for a threshold in GeV.
    pub fn new(min_pt: f64) -> Self {
        Self {
            min_pt,
            label: format!("jet_pt>{min_pt}"),
        }
    }
}

impl ObjectSelection<Event, Jet> for JetPtSelection {
    fn name(&self) -> &str {
        &self.label
    }

    fn filtered(&self, _event: &Event, jets: Vec<Jet>, _details: &mut CutDetails) -> Vec<Jet> {
        jets.into_iter().filter(|jet| jet.pt > self.min_pt).collect()
    }
}
