// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Classify
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Root classification for a quadratic x² + px + q.

use num_complex::Complex64;

/// Solve x² + px + q = 0 and classify by the discriminant D = p² − 4q.
///
/// D >= 0 yields two real roots, −(p − √D)/2 first; at D = 0 the same
/// value is emitted twice (multiplicity by duplication). D < 0 yields
/// an exact conjugate pair, positive imaginary part first.
pub fn classify_quadratic(p: f64, q: f64) -> [Complex64; 2] {
    let discriminant = p * p - 4.0 * q;
    if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        [
            Complex64::new(-(p - sqrt_d) / 2.0, 0.0),
            Complex64::new(-(p + sqrt_d) / 2.0, 0.0),
        ]
    } else {
        let sqrt_d = (-discriminant).sqrt();
        [
            Complex64::new(-p / 2.0, sqrt_d / 2.0),
            Complex64::new(-p / 2.0, -sqrt_d / 2.0),
        ]
    }
}
