//! Core domain types for the toy analysis event model.
//!
//! This module defines the event and sub-object structures the concrete
//! selections operate on. The cutflow crate itself never looks at these:
//! it only sees whatever the selections choose to inspect.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up event ids with run
// numbers

/// Unique identifier of an event within its run
pub type EventId = u64;

/// Identifier of the data-taking run an event belongs to
pub type RunNumber = u32;

// =============================================================================
// Sub-objects
// =============================================================================

/// Lepton flavors distinguished by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeptonFlavor {
    Electron,
    Muon,
}

impl LeptonFlavor {
    /// Lowercase label used for detail counters.
    pub fn label(&self) -> &'static str {
        match self {
            LeptonFlavor::Electron => "electron",
            LeptonFlavor::Muon => "muon",
        }
    }
}

/// A reconstructed lepton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lepton {
    /// Transverse momentum in GeV
    pub pt: f64,
    /// Pseudorapidity
    pub eta: f64,
    /// Electric charge, +1 or -1
    pub charge: i8,
    pub flavor: LeptonFlavor,
}

/// A reconstructed jet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jet {
    /// Transverse momentum in GeV
    pub pt: f64,
    /// Pseudorapidity
    pub eta: f64,
    /// Whether the jet was tagged as originating from a b quark
    pub b_tagged: bool,
}

// =============================================================================
// Events
// =============================================================================

/// One analysis event with its reconstructed objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub run: RunNumber,
    pub leptons: Vec<Lepton>,
    pub jets: Vec<Jet>,
    /// Missing transverse energy in GeV
    pub met: f64,
}

impl Event {
    /// The highest-pt lepton, if the event has any.
    pub fn leading_lepton(&self) -> Option<&Lepton> {
        self.leptons.iter().max_by(|a, b| {
            a.pt.partial_cmp(&b.pt)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}
