//! # Selections Crate
//!
//! Concrete selections over a toy analysis event model, ready to be
//! composed into cut-flow pipelines.
//!
//! ## Components
//!
//! ### Event model
//! [`Event`] with reconstructed [`Lepton`]s, [`Jet`]s and missing
//! transverse energy. The cutflow crate treats these as opaque; only the
//! selections here inspect them.
//!
//! ### Event-level selections
//! - [`HasLepton`]: at least one reconstructed lepton
//! - [`LeptonPtThreshold`]: leading-lepton pt cut
//! - [`MissingEtThreshold`]: missing transverse energy cut
//!
//! ### Object-level selections
//! - [`JetPtSelection`]: jet pt cut
//! - [`JetEtaWindow`]: central acceptance window
//! - [`BTaggedJets`]: b-tagged jets only
//!
//! ## Example Usage
//!
//! ```ignore
//! use cutflow::{EventFilter, EventPipeline, ObjectFilter, ObjectPipeline};
//! use selections::{HasLepton, JetPtSelection, LeptonPtThreshold};
//!
//! let mut event_cuts = EventPipeline::new()
//!     .with_filter(EventFilter::new(HasLepton))
//!     .with_filter(EventFilter::new(LeptonPtThreshold::new(20.0)));
//!
//! let mut jet_cuts = ObjectPipeline::new()
//!     .with_filter(ObjectFilter::new(JetPtSelection::new(30.0)));
//!
//! for event in selections::synthetic::generate(42, 10_000) {
//!     if event_cuts.evaluate(&event) {
//!         let jets = jet_cuts.evaluate(&event, event.jets.clone());
//!     }
//! }
//! ```

// Public modules
pub mod b_tag;
pub mod event;
pub mod has_lepton;
pub mod jet_eta;
pub mod jet_pt;
pub mod lepton_pt;
pub mod met;
pub mod synthetic;

// Re-export commonly used types
pub use b_tag::BTaggedJets;
pub use event::{Event, EventId, Jet, Lepton, LeptonFlavor, RunNumber};
pub use has_lepton::HasLepton;
pub use jet_eta::JetEtaWindow;
pub use jet_pt::JetPtSelection;
pub use lepton_pt::LeptonPtThreshold;
pub use met::MissingEtThreshold;
pub use synthetic::SyntheticEvents;
