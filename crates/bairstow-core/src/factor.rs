// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Factor
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bivariate Newton-Raphson refinement of a trial quadratic divisor.
//!
//! The remainder terms A(p, q) = b₋₁ and B(p, q) = b₋₂ + p·b₋₁ are
//! implicit functions of the trial (p, q); their partial derivatives
//! come out of the auxiliary c sweep. Solving the linearized system
//! A + ∂A·Δ = 0, B + ∂B·Δ = 0 gives the update
//!
//!   denominator = c₀² + c₁·(b₋₁ − c₋₁)
//!   Δp = (c₀·b₋₁ − c₁·b₋₂) / denominator
//!   Δq = (c₀·b₋₂ + b₋₁·(b₋₁ − c₋₁)) / denominator
//!
//! and the stage converges once both |Δp| and |Δq| are at or below
//! the configured tolerance.

use bairstow_types::config::SolverConfig;
use bairstow_types::error::{BairstowError, BairstowResult};

use crate::recurrence::RecurrenceBuffer;

/// Magnitude below which the Newton denominator counts as singular.
const DENOMINATOR_FLOOR: f64 = 1e-14;

/// Trial divisor x² + px + q.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticFactor {
    pub p: f64,
    pub q: f64,
}

impl QuadraticFactor {
    pub fn new(p: f64, q: f64) -> Self {
        QuadraticFactor { p, q }
    }
}

/// Converged stage output.
///
/// `buffer` holds the sweeps of the final iteration, computed before
/// the last (p, q) update; its b entries are the deflated quotient's
/// coefficient set.
#[derive(Debug, Clone)]
pub struct FactorResult {
    pub factor: QuadraticFactor,
    pub buffer: RecurrenceBuffer,
    pub iterations: usize,
    pub delta_p: f64,
    pub delta_q: f64,
}

/// Iterate (p, q) until x² + px + q divides the working polynomial
/// within tolerance.
///
/// Fails with `SolverDiverged` when the denominator collapses or the
/// iteration cap runs out; `stage` only labels the error.
pub fn refine_factor(
    coefficients: &[f64],
    initial: QuadraticFactor,
    config: &SolverConfig,
    stage: usize,
) -> BairstowResult<FactorResult> {
    let mut p = initial.p;
    let mut q = initial.q;

    for iteration in 1..=config.max_iterations {
        let buffer = RecurrenceBuffer::compute(coefficients, p, q);

        let b_m1 = buffer.b(-1);
        let b_m2 = buffer.b(-2);
        let c_m1 = buffer.c(-1);
        let c_0 = buffer.c(0);
        let c_1 = buffer.c(1);

        let denominator = c_0 * c_0 + c_1 * (b_m1 - c_m1);
        if denominator.abs() < DENOMINATOR_FLOOR {
            return Err(BairstowError::SolverDiverged {
                stage,
                iteration,
                message: format!("Newton denominator collapsed to {denominator:.3e}"),
            });
        }

        let delta_p = (c_0 * b_m1 - c_1 * b_m2) / denominator;
        let delta_q = (c_0 * b_m2 + b_m1 * (b_m1 - c_m1)) / denominator;
        p += delta_p;
        q += delta_q;

        if delta_p.abs() <= config.epsilon && delta_q.abs() <= config.epsilon {
            return Ok(FactorResult {
                factor: QuadraticFactor { p, q },
                buffer,
                iterations: iteration,
                delta_p,
                delta_q,
            });
        }
    }

    Err(BairstowError::SolverDiverged {
        stage,
        iteration: config.max_iterations,
        message: format!(
            "no convergence within {} iterations (epsilon {:.1e})",
            config.max_iterations, config.epsilon
        ),
    })
}
