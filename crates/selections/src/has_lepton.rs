//! Selection requiring at least one reconstructed lepton.
//!
//! This is typically the first cut in a leptonic analysis; events without
//! any lepton carry no signal for it.

use crate::event::Event;
use cutflow::{CutDetails, EventSelection};

/// Passes events with at least one lepton.
///
/// Records a flavor breakdown of the leading lepton in the stage details,
/// so the report shows how the surviving events split between electrons
/// and muons.
pub struct HasLepton;

impl EventSelection<Event> for HasLepton {
    fn name(&self) -> &str {
        "has_lepton"
    }

    fn passes(&self, event: &Event, details: &mut CutDetails) -> bool {
        match event.leading_lepton() {
            Some(lepton) => {
                details.bump(lepton.flavor.label());
                true
            }
            None => false,
        }
    }
}
