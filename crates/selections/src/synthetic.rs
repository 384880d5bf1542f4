//! Seeded synthetic event generation.
//!
//! Produces a deterministic stream of toy events for the demo driver, the
//! benches, and the integration tests. The same seed always yields the
//! same events, so a chunked run and a single-pipeline run over the same
//! seed are directly comparable.

use crate::event::{Event, EventId, Jet, Lepton, LeptonFlavor, RunNumber};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Infinite iterator of synthetic events.
pub struct SyntheticEvents {
    rng: StdRng,
    next_id: EventId,
    run: RunNumber,
}

impl SyntheticEvents {
    /// Create a generator whose output is fully determined by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
            run: 1,
        }
    }

    fn lepton(&mut self) -> Lepton {
        Lepton {
            pt: self.rng.random_range(5.0..60.0),
            eta: self.rng.random_range(-3.0..3.0),
            charge: if self.rng.random_bool(0.5) { 1 } else { -1 },
            flavor: if self.rng.random_bool(0.5) {
                LeptonFlavor::Electron
            } else {
                LeptonFlavor::Muon
            },
        }
    }

    fn jet(&mut self) -> Jet {
        Jet {
            pt: self.rng.random_range(15.0..120.0),
            eta: self.rng.random_range(-4.5..4.5),
            b_tagged: self.rng.random_bool(0.2),
        }
    }
}

impl Iterator for SyntheticEvents {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        let id = self.next_id;
        self.next_id += 1;

        // Roughly one event in five has no lepton, so the first cut of the
        // demo pipeline has something to reject.
        let n_leptons = match self.rng.random_range(0..10) {
            0..2 => 0,
            2..8 => 1,
            _ => 2,
        };
        let n_jets = self.rng.random_range(0..6);

        Some(Event {
            id,
            run: self.run,
            leptons: (0..n_leptons).map(|_| self.lepton()).collect(),
            jets: (0..n_jets).map(|_| self.jet()).collect(),
            met: if self.rng.random_bool(0.15) {
                0.0
            } else {
                self.rng.random_range(1.0..150.0)
            },
        })
    }
}

/// Generate `count` events from `seed`.
pub fn generate(seed: u64, count: usize) -> Vec<Event> {
    SyntheticEvents::with_seed(seed).take(count).collect()
}
