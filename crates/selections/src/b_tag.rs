//! b-tagged jet selection.

use crate::event::{Event, Jet};
use cutflow::{CutDetails, ObjectSelection};

/// Keeps only jets tagged as originating from b quarks.
pub struct BTaggedJets;

impl ObjectSelection<Event, Jet> for BTaggedJets {
    fn name(&self) -> &str {
        "b_tagged"
    }

    fn filtered(&self, _event: &Event, jets: Vec<Jet>, _details: &mut CutDetails) -> Vec<Jet> {
        jets.into_iter().filter(|jet| jet.b_tagged).collect()
    }
}
