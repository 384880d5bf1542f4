//! Cut-flow filtering pipeline for analysis events.
//!
//! This crate provides:
//! - Selection traits and counting stages for event and object filtering
//! - EventPipeline / ObjectPipeline for composing stages into a cut-flow
//! - Snapshots and a merge algorithm for recombining per-chunk statistics
//!
//! ## Architecture
//! A driver feeds events one at a time into an [`EventPipeline`]; for
//! events that pass, it may feed an associated object collection into an
//! [`ObjectPipeline`]. Every stage records how many inputs it saw and how
//! many it let through, so the filled pipeline doubles as an attrition
//! report. Stages are evaluated in order with short-circuiting, which
//! makes stage N's `total` equal stage N-1's `passing` by construction.
//!
//! Workers processing independent chunks each own their pipeline instance
//! and share nothing; [`CutflowReport::merge`] recombines the per-chunk
//! counters afterwards. The event and object types are the driver's own —
//! this crate never looks inside them beyond what a selection chooses to.
//!
//! ## Example Usage
//! ```ignore
//! use cutflow::{EventFilter, EventPipeline};
//!
//! let mut pipeline = EventPipeline::new()
//!     .with_filter(EventFilter::new(HasLepton))
//!     .with_filter(EventFilter::new(LeptonPtThreshold::new(20.0)));
//!
//! for event in chunk {
//!     pipeline.evaluate(&event);
//! }
//!
//! // Reduce with another worker's chunk
//! let combined = EventPipeline::merge(&pipeline, &other)?;
//! println!("{} in, {} out", combined.total(), combined.passing());
//! ```

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod report;
pub mod snapshot;
pub mod stats;
pub mod traits;

// Re-export main types
pub use error::{CutflowError, Result};
pub use filter::{EventFilter, ObjectFilter};
pub use pipeline::{EventPipeline, ObjectPipeline};
pub use report::CutflowReport;
pub use snapshot::CutSnapshot;
pub use stats::{CutDetails, CutStats};
pub use traits::{EventSelection, Hook, ObjectSelection};
