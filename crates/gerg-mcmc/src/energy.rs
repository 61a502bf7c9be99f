use gerg_stats::{IndexSets, Model, Network};
use serde::{Deserialize, Serialize};

/// Terms of the log acceptance ratio for one sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AcceptanceRatio {
    /// Energy of the current network.
    pub current_energy: f64,
    /// Energy of the proposed network.
    pub proposed_energy: f64,
    /// Accumulated proposal-density correction.
    pub log_correction: f64,
    /// `log_correction + proposed_energy - current_energy`.
    pub log_ratio: f64,
}

impl AcceptanceRatio {
    /// Combines a proposal correction with the energies of both states.
    pub fn new(current_energy: f64, proposed_energy: f64, log_correction: f64) -> Self {
        Self {
            current_energy,
            proposed_energy,
            log_correction,
            log_ratio: log_correction + (proposed_energy - current_energy),
        }
    }

    /// Evaluates both networks under the model.
    pub fn evaluate(
        model: &Model,
        sets: &IndexSets,
        current: &Network,
        proposed: &Network,
        log_correction: f64,
    ) -> Self {
        let proposed_energy = model.energy(proposed, sets);
        let current_energy = model.energy(current, sets);
        Self::new(current_energy, proposed_energy, log_correction)
    }
}

/// Joint MH decision: reject when `log_ratio < ln(u)`, accept otherwise.
///
/// `log_ratio` must not be NaN; the kernel rejects NaN ratios as a numeric error.
pub fn accepts(log_ratio: f64, uniform: f64) -> bool {
    log_ratio >= uniform.ln()
}
