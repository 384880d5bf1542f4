//! Plain-data capture of a stage's counters.
//!
//! A [`CutSnapshot`] is everything needed to reconstruct a mergeable stats
//! block and nothing else: no selection logic, no hooks, no generics. It is
//! the value that crosses process boundaries when chunks are reduced
//! out-of-process, and the value an external report formatter consumes.
//!
//! The serialized form is deliberately minimal and language-neutral:
//!
//! ```json
//! {"name": "pt>20", "total": 80, "passing": 50, "details": {"barrel": 35}}
//! ```

use crate::stats::CutDetails;
use serde::{Deserialize, Serialize};

/// Serializable counters of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutSnapshot {
    /// Stage identity, as used by merge.
    pub name: String,
    /// Inputs presented to the stage.
    pub total: u64,
    /// Inputs that survived the stage.
    pub passing: u64,
    /// Named sub-counters recorded during evaluation.
    pub details: CutDetails,
}
