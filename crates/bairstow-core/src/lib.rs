// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Bairstow's method: iterative extraction of quadratic factors from a
//! real polynomial, yielding all roots as real values or complex
//! conjugate pairs.
//!
//! Pipeline per stage (working degree m >= 3):
//! 1. [`recurrence`] — quotient/auxiliary coefficient sweeps for a
//!    trial divisor x² + px + q.
//! 2. [`factor`] — bivariate Newton iteration driving (p, q) until the
//!    divisor splits the working polynomial.
//! 3. [`classify`] — roots of the converged quadratic.
//! 4. [`deflate`] — degree reduction by 2; repeat on the quotient.
//!
//! Terminal degrees (2, 1, 0) are handled directly by [`solver`].

pub mod classify;
pub mod deflate;
pub mod factor;
pub mod recurrence;
pub mod solver;

pub use classify::classify_quadratic;
pub use factor::{FactorResult, QuadraticFactor};
pub use recurrence::RecurrenceBuffer;
pub use solver::{solve, BairstowSolver, SolveReport, StageReport};
