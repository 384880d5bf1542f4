//! Jet pseudorapidity acceptance window.

use crate::event::{Event, Jet};
use cutflow::{CutDetails, ObjectSelection};

/// Keeps jets inside the central |eta| window.
///
/// Jets outside the window are counted per side in the stage details,
/// which makes detector-asymmetry problems visible in the report.
pub struct JetEtaWindow {
    max_abs_eta: f64,
    label: String,
}

impl JetEtaWindow {
    pub fn new(max_abs_eta: f64) -> Self {
        Self {
            max_abs_eta,
            label: format!("jet_abs_eta<{max_abs_eta}"),
        }
    }
}

impl ObjectSelection<Event, Jet> for JetEtaWindow {
    fn name(&self) -> &str {
        &self.label
    }

    fn filtered(&self, _event: &Event, jets: Vec<Jet>, details: &mut CutDetails) -> Vec<Jet> {
        jets.into_iter()
            .filter(|jet| {
                if jet.eta.abs() < self.max_abs_eta {
                    true
                } else {
                    details.bump(if jet.eta > 0.0 {
                        "forward"
                    } else {
                        "backward"
                    });
                    false
                }
            })
            .collect()
    }
}
