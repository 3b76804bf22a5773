// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Solver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Degree-reduction orchestration.
//!
//! State per `solve` call: the current working degree m, the working
//! coefficients, and the accumulated root list. Transitions:
//! - m == 0: done, the constant contributes no roots.
//! - m == 1: single real root −a₀/a₁ (zero a₁ is degenerate).
//! - m == 2: normalize by a₂ and classify directly.
//! - m >= 3: refine a quadratic factor, classify it, deflate, m −= 2.
//!
//! Errors are fail-fast: later stages depend on earlier deflations, so
//! a failing stage aborts the whole extraction with no partial result.

use num_complex::Complex64;

use bairstow_types::config::{GuessStrategy, SolverConfig};
use bairstow_types::error::{BairstowError, BairstowResult};
use bairstow_types::poly::Polynomial;

use crate::classify::classify_quadratic;
use crate::deflate::deflate;
use crate::factor::{refine_factor, QuadraticFactor};

/// Fresh trial divisor of every stage (original choice: p = q = 1).
const INITIAL_GUESS: QuadraticFactor = QuadraticFactor { p: 1.0, q: 1.0 };

/// Diagnostic record of one iterative (m >= 3) stage.
#[derive(Debug, Clone)]
pub struct StageReport {
    /// Working degree at stage entry.
    pub degree: usize,
    /// Converged quadratic factor.
    pub p: f64,
    pub q: f64,
    pub iterations: usize,
    /// Final Newton updates at convergence.
    pub delta_p: f64,
    pub delta_q: f64,
}

/// Full extraction outcome: all roots (extraction order, highest-degree
/// factor first) plus per-stage convergence diagnostics.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub roots: Vec<Complex64>,
    pub stages: Vec<StageReport>,
}

/// Configured Bairstow root extractor.
pub struct BairstowSolver {
    config: SolverConfig,
}

impl BairstowSolver {
    pub fn new(config: SolverConfig) -> Self {
        BairstowSolver { config }
    }

    /// Create a solver from a JSON config file.
    pub fn from_file(path: &str) -> BairstowResult<Self> {
        let config = SolverConfig::from_file(path)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Extract all roots of `poly`. The returned list has exactly
    /// `poly.degree()` entries on success.
    pub fn solve(&self, poly: &Polynomial) -> BairstowResult<SolveReport> {
        self.config.validate()?;

        let mut degree = poly.degree();
        let mut coefficients = poly.coefficients().to_vec();
        let mut roots: Vec<Complex64> = Vec::with_capacity(degree);
        let mut stages: Vec<StageReport> = Vec::new();
        let mut carried = INITIAL_GUESS;

        loop {
            match degree {
                0 => break,
                1 => {
                    if coefficients[1] == 0.0 {
                        return Err(BairstowError::DegenerateLinear(
                            "zero x coefficient in terminal linear term".to_string(),
                        ));
                    }
                    roots.push(Complex64::new(-coefficients[0] / coefficients[1], 0.0));
                    break;
                }
                2 => {
                    let lead = coefficients[2];
                    roots.extend(classify_quadratic(
                        coefficients[1] / lead,
                        coefficients[0] / lead,
                    ));
                    break;
                }
                _ => {
                    let initial = match self.config.guess_strategy {
                        GuessStrategy::Fresh => INITIAL_GUESS,
                        GuessStrategy::CarryOver => carried,
                    };
                    let result =
                        refine_factor(&coefficients, initial, &self.config, stages.len())?;

                    roots.extend(classify_quadratic(result.factor.p, result.factor.q));
                    stages.push(StageReport {
                        degree,
                        p: result.factor.p,
                        q: result.factor.q,
                        iterations: result.iterations,
                        delta_p: result.delta_p,
                        delta_q: result.delta_q,
                    });

                    coefficients = deflate(&result.buffer);
                    carried = result.factor;
                    degree -= 2;
                }
            }
        }

        Ok(SolveReport { roots, stages })
    }
}

/// Single-call boundary: all roots of the polynomial with ascending
/// `coefficients` and the default configuration.
pub fn solve(degree: usize, coefficients: &[f64]) -> BairstowResult<Vec<Complex64>> {
    let poly = Polynomial::new(degree, coefficients.to_vec())?;
    let report = BairstowSolver::new(SolverConfig::default()).solve(&poly)?;
    Ok(report.roots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poly(degree: usize, coefficients: &[f64]) -> Polynomial {
        Polynomial::new(degree, coefficients.to_vec()).unwrap()
    }

    #[test]
    fn test_degree_zero_has_no_roots() {
        let roots = solve(0, &[5.0]).unwrap();
        assert!(roots.is_empty());
    }

    #[test]
    fn test_degree_one_linear_root() {
        let roots = solve(1, &[3.0, 2.0]).unwrap();
        assert_eq!(roots.len(), 1);
        assert!((roots[0].re - (-1.5)).abs() < 1e-12);
        assert_eq!(roots[0].im, 0.0);
    }

    #[test]
    fn test_sqrt_two() {
        // x² − 2: ±1.414214, positive root first.
        let roots = solve(2, &[-2.0, 0.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 2);
        assert!((roots[0].re - 1.414214).abs() < 1e-6);
        assert!((roots[1].re + 1.414214).abs() < 1e-6);
        assert_eq!(roots[0].im, 0.0);
        assert_eq!(roots[1].im, 0.0);
    }

    #[test]
    fn test_pure_imaginary_pair() {
        // x² + 1: exactly ±i.
        let roots = solve(2, &[1.0, 0.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 2);
        assert!(roots[0].re.abs() < 1e-12);
        assert!((roots[0].im - 1.0).abs() < 1e-12);
        assert!((roots[1].im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_monic_quadratic_is_normalized() {
        // 2x² − 8: roots ±2.
        let roots = solve(2, &[-8.0, 0.0, 2.0]).unwrap();
        assert!((roots[0].re - 2.0).abs() < 1e-12);
        assert!((roots[1].re + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_cubic_deflation_order() {
        // (x−1)(x−2)(x−3): the quadratic factor (x−1)(x−2) converges
        // first, so extraction order is 2, 1, then the deflated linear
        // root near 3.
        let roots = solve(3, &[-6.0, 11.0, -6.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 3);
        assert!((roots[0].re - 2.0).abs() < 1e-3);
        assert!((roots[1].re - 1.0).abs() < 1e-3);
        assert!((roots[2].re - 3.0).abs() < 1e-3);
        assert!(roots.iter().all(|r| r.im == 0.0));
    }

    #[test]
    fn test_quartic_mixed_roots() {
        // (x−1)(x−2)(x²+1) = x⁴ − 3x³ + 3x² − 3x + 2: the complex pair
        // is extracted first, then the two real roots.
        let roots = solve(4, &[2.0, -3.0, 3.0, -3.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 4);
        assert!((roots[0].im - 1.0).abs() < 1e-3);
        assert!((roots[1].im + 1.0).abs() < 1e-3);
        assert!((roots[2].re - 2.0).abs() < 1e-3);
        assert!((roots[3].re - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_quintic_all_real() {
        // (x−1)(x−2)(x−3)(x−4)(x−5)
        let coefficients = [-120.0, 274.0, -225.0, 85.0, -15.0, 1.0];
        let roots = solve(5, &coefficients).unwrap();
        assert_eq!(roots.len(), 5);
        let expected = [2.0, 1.0, 4.0, 3.0, 5.0];
        for (root, want) in roots.iter().zip(expected) {
            assert!(
                (root.re - want).abs() < 1e-3,
                "root {root} should be near {want}"
            );
            assert_eq!(root.im, 0.0);
        }
    }

    #[test]
    fn test_carry_over_guess_strategy() {
        let config = SolverConfig {
            guess_strategy: GuessStrategy::CarryOver,
            ..SolverConfig::default()
        };
        let solver = BairstowSolver::new(config);
        let report = solver
            .solve(&poly(5, &[-120.0, 274.0, -225.0, 85.0, -15.0, 1.0]))
            .unwrap();

        assert_eq!(report.roots.len(), 5);
        for (root, want) in report.roots.iter().zip([2.0, 1.0, 4.0, 3.0, 5.0]) {
            assert!((root.re - want).abs() < 1e-3);
        }
    }

    #[test]
    fn test_stage_reports_cover_iterative_stages() {
        let solver = BairstowSolver::new(SolverConfig::default());
        let report = solver
            .solve(&poly(5, &[-120.0, 274.0, -225.0, 85.0, -15.0, 1.0]))
            .unwrap();

        // Degree 5 -> stages at m = 5 and m = 3; the terminal linear
        // step produces no report.
        assert_eq!(report.stages.len(), 2);
        assert_eq!(report.stages[0].degree, 5);
        assert_eq!(report.stages[1].degree, 3);
        for stage in &report.stages {
            assert!(stage.iterations >= 1);
            assert!(stage.delta_p.abs() <= 1e-4);
            assert!(stage.delta_q.abs() <= 1e-4);
        }
    }

    #[test]
    fn test_iteration_cap_aborts_without_partial_roots() {
        let config = SolverConfig {
            max_iterations: 1,
            ..SolverConfig::default()
        };
        let solver = BairstowSolver::new(config);
        let err = solver.solve(&poly(3, &[-6.0, 11.0, -6.0, 1.0])).unwrap_err();
        assert!(matches!(err, BairstowError::SolverDiverged { stage: 0, .. }));
    }

    #[test]
    fn test_degenerate_input_propagates() {
        let err = solve(2, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, BairstowError::DegenerateInput(_)));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SolverConfig {
            epsilon: -1.0,
            ..SolverConfig::default()
        };
        let solver = BairstowSolver::new(config);
        let err = solver.solve(&poly(2, &[-2.0, 0.0, 1.0])).unwrap_err();
        assert!(matches!(err, BairstowError::ConfigError(_)));
    }

    #[test]
    fn test_solve_is_deterministic() {
        let coefficients = [2.0, -3.0, 3.0, -3.0, 1.0];
        let first = solve(4, &coefficients).unwrap();
        let second = solve(4, &coefficients).unwrap();
        assert_eq!(first, second);
    }
}
