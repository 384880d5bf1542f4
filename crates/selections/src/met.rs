//! Missing transverse energy cut.

use crate::event::Event;
use cutflow::{CutDetails, EventSelection};

/// Passes events with missing transverse energy above a threshold.
pub struct MissingEtThreshold {
    min_met: f64,
    label: String,
}

impl MissingEtThreshold {
    /// Create the cut for a threshold in GeV.
    pub fn new(min_met: f64) -> Self {
        Self {
            min_met,
            label: format!("met>{min_met}"),
        }
    }
}

impl EventSelection<Event> for MissingEtThreshold {
    fn name(&self) -> &str {
        &self.label
    }

    fn passes(&self, event: &Event, details: &mut CutDetails) -> bool {
        if event.met > self.min_met {
            true
        } else {
            // Rejected events split into absent vs below-threshold MET.
            if event.met == 0.0 {
                details.bump("met_absent");
            } else {
                details.bump("met_below_threshold");
            }
            false
        }
    }
}
