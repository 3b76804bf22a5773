// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Recurrence
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Backward coefficient sweeps for a trial quadratic divisor.
//!
//! Writing f(x) = Q(x)·(x² + px + q) + Ax + B with quotient
//! Q(x) = b₀ + b₁x + … + b_{m−2}x^{m−2} gives the recurrence
//!
//!   b_k = a_{k+2} − p·b_{k+1} − q·b_{k+2},   k = m−2 … −2
//!
//! with the boundary b_{m−1} = b_m = 0 (no quotient terms above the
//! working degree). The auxiliary sweep c_k = b_k − p·c_{k+1} − q·c_{k+2}
//! carries the partial derivatives of the remainder with respect to
//! (p, q); the Newton step reads both at the negative indices
//! A = b₋₁, B = b₋₂ + p·b₋₁.

/// Shift applied to a conceptual index k so that k = −2 lands at
/// slot 0. Valid k range: −2 ..= degree.
const INDEX_OFFSET: isize = 2;

/// The b (quotient) and c (auxiliary) sequences for one (p, q) trial,
/// conceptually indexed from −2 up to the working degree m. The top
/// two entries (k = m−1, m) stay at the forced-zero boundary.
#[derive(Debug, Clone)]
pub struct RecurrenceBuffer {
    degree: usize,
    b: Vec<f64>,
    c: Vec<f64>,
}

impl RecurrenceBuffer {
    /// Run both sweeps for the working coefficients a₀..a_m.
    ///
    /// `coefficients.len()` must be m + 1 with m >= 3; lower degrees
    /// never reach the quadratic-factor iteration.
    pub fn compute(coefficients: &[f64], p: f64, q: f64) -> Self {
        let m = coefficients.len() - 1;
        debug_assert!(m >= 3, "recurrence requires working degree >= 3");

        // Slot i holds index k = i − 2, so a_{k+2} is coefficients[i]
        // and the two slots above m are the zero boundary.
        let mut b = vec![0.0; m + 3];
        let mut c = vec![0.0; m + 3];

        for i in (0..=m).rev() {
            b[i] = coefficients[i] - p * b[i + 1] - q * b[i + 2];
        }
        for i in (0..=m).rev() {
            c[i] = b[i] - p * c[i + 1] - q * c[i + 2];
        }

        RecurrenceBuffer { degree: m, b, c }
    }

    /// Working degree m the sweeps were run for.
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// b_k for k in −2 ..= m.
    pub fn b(&self, k: isize) -> f64 {
        self.check_index(k);
        self.b[(k + INDEX_OFFSET) as usize]
    }

    /// c_k for k in −2 ..= m.
    pub fn c(&self, k: isize) -> f64 {
        self.check_index(k);
        self.c[(k + INDEX_OFFSET) as usize]
    }

    fn check_index(&self, k: isize) {
        debug_assert!(
            (-INDEX_OFFSET..=self.degree as isize).contains(&k),
            "recurrence index {k} outside -2..={}",
            self.degree
        );
    }
}
