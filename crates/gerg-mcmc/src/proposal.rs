use gerg_core::errors::{ErrorInfo, GergError};
use gerg_core::UniformSource;
use gerg_stats::{Network, CLAMP_HIGH, CLAMP_LOW};

use crate::variates::{normal_cdf, normal_pdf, NormalPair};

/// Candidate weight for a single off-diagonal cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellProposal {
    /// Clamped candidate weight.
    pub candidate: f64,
    /// Truncated-normal density of the candidate given the current weight.
    pub forward_density: f64,
    /// Truncated-normal density of the current weight given the candidate.
    pub reverse_density: f64,
    /// `ln(reverse) - ln(forward)`.
    pub log_correction: f64,
    /// Normal draws taken before one landed inside `(0, 1)`.
    pub draws: usize,
}

/// Candidate network for a full sweep together with its proposal correction.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepProposal {
    /// Candidate network; the diagonal is copied from the current state.
    pub candidate: Network,
    /// Sum of the per-cell log corrections.
    pub log_correction: f64,
    /// Total normal draws consumed across all cells.
    pub draws: usize,
}

/// Probability mass of `N(center, sigma^2)` on `[0, 1]` under the approximate CDF.
pub fn truncation_mass(center: f64, sigma: f64) -> f64 {
    normal_cdf(1.0, center, sigma) - normal_cdf(0.0, center, sigma)
}

/// Density of `x` under the normal centred at `center`, renormalised to `[0, 1]`.
pub fn truncated_density(x: f64, center: f64, sigma: f64) -> Result<f64, GergError> {
    Ok(normal_pdf(x, center, sigma) / checked_mass(center, sigma)?)
}

fn checked_mass(center: f64, sigma: f64) -> Result<f64, GergError> {
    let mass = truncation_mass(center, sigma);
    if !(mass > 0.0 && mass.is_finite()) {
        return Err(GergError::NumericDegeneracy(
            ErrorInfo::new("zero-truncation-mass", "truncation window has no usable mass")
                .with_context("center", center)
                .with_context("sigma", sigma)
                .with_context("mass", mass)
                .with_hint("reduce proposal_sigma or move the weight inside (0, 1)"),
        ));
    }
    Ok(mass)
}

/// Draws a candidate for one cell by rejection from `N(current, sigma^2)`.
///
/// Draws repeat until one lies strictly inside `(0, 1)`; the accepted draw is
/// clamped to `[CLAMP_LOW, CLAMP_HIGH]`. A fresh [`NormalPair`] is used for
/// the cell, so a cell always starts on a new uniform pair.
pub fn propose_cell<U: UniformSource + ?Sized>(
    current: f64,
    sigma: f64,
    max_draws: usize,
    uniforms: &mut U,
) -> Result<CellProposal, GergError> {
    let forward_mass = checked_mass(current, sigma)?;
    let mut normal = NormalPair::new(current, sigma);
    let mut draws = 0usize;
    let raw = loop {
        if draws == max_draws {
            return Err(GergError::NumericDegeneracy(
                ErrorInfo::new("rejection-budget-exhausted", "no proposal landed inside (0, 1)")
                    .with_context("current", current)
                    .with_context("sigma", sigma)
                    .with_context("max_draws", max_draws),
            ));
        }
        let value = normal.sample(uniforms);
        draws += 1;
        if value > 0.0 && value < 1.0 {
            break value;
        }
    };
    let candidate = raw.clamp(CLAMP_LOW, CLAMP_HIGH);

    let forward_density = normal_pdf(candidate, current, sigma) / forward_mass;
    let reverse_density = truncated_density(current, candidate, sigma)?;
    let log_correction = reverse_density.ln() - forward_density.ln();

    Ok(CellProposal {
        candidate,
        forward_density,
        reverse_density,
        log_correction,
        draws,
    })
}

/// Proposes new weights for every off-diagonal cell, row-major.
pub fn propose_sweep<U: UniformSource + ?Sized>(
    current: &Network,
    sigma: f64,
    max_draws: usize,
    uniforms: &mut U,
) -> Result<SweepProposal, GergError> {
    let mut candidate = current.clone();
    let mut log_correction = 0.0;
    let mut draws = 0usize;
    for (i, j) in current.off_diagonal_cells() {
        let cell = propose_cell(current.get(i, j), sigma, max_draws, uniforms)?;
        candidate.set(i, j, cell.candidate);
        log_correction += cell.log_correction;
        draws += cell.draws;
    }
    Ok(SweepProposal {
        candidate,
        log_correction,
        draws,
    })
}
