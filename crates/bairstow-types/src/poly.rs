// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Polynomial
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Immutable polynomial input representation.
//!
//! Coefficients are stored in ascending power order: index k holds the
//! coefficient of x^k, length degree + 1. The leading coefficient must
//! be non-zero for degree >= 1; a degree-0 constant is always valid
//! and contributes no roots.

use std::fmt;

use ndarray::Array1;

use crate::error::{BairstowError, BairstowResult};

#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    degree: usize,
    coefficients: Array1<f64>,
}

impl Polynomial {
    /// Build a polynomial from its degree and ascending coefficients.
    pub fn new(degree: usize, coefficients: Vec<f64>) -> BairstowResult<Self> {
        if coefficients.len() != degree + 1 {
            return Err(BairstowError::DegenerateInput(format!(
                "degree {} requires {} coefficients, got {}",
                degree,
                degree + 1,
                coefficients.len()
            )));
        }
        if degree >= 1 && coefficients[degree] == 0.0 {
            return Err(BairstowError::DegenerateInput(format!(
                "leading coefficient (x^{degree}) must be non-zero"
            )));
        }
        Ok(Polynomial {
            degree,
            coefficients: Array1::from_vec(coefficients),
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    pub fn coefficients(&self) -> &Array1<f64> {
        &self.coefficients
    }

    /// Coefficient of x^k.
    pub fn coefficient(&self, k: usize) -> f64 {
        self.coefficients[k]
    }

    /// Evaluate at x using Horner's scheme.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

/// Human-readable rendering, descending powers:
/// `f(x) = x^3 - 6x^2 + 11x - 6`. Zero terms are skipped, unit
/// coefficients elided, integral values printed without a fraction.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f(x) = ")?;
        let mut first = true;
        for d in (0..=self.degree).rev() {
            let c = self.coefficients[d];
            if c == 0.0 && !(first && d == 0) {
                continue;
            }
            if first {
                if c < 0.0 {
                    write!(f, "-")?;
                }
                first = false;
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            let magnitude = c.abs();
            if d == 0 || magnitude != 1.0 {
                write!(f, "{magnitude}")?;
            }
            match d {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{d}")?,
            }
        }
        Ok(())
    }
}
