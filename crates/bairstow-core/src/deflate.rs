// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Deflate
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Degree reduction by a converged quadratic factor.

use crate::recurrence::RecurrenceBuffer;

/// Extract the quotient coefficients b₀..b_{m−2} as the next working
/// polynomial (degree m − 2, ascending order). b_{m−1} and b_m are the
/// structurally-zero boundary and are discarded.
///
/// The quotient's leading coefficient equals the previous leading
/// coefficient exactly (b_{m−2} = a_m), so deflation never produces a
/// degenerate leading term.
pub fn deflate(buffer: &RecurrenceBuffer) -> Vec<f64> {
    let m = buffer.degree();
    (0..=m as isize - 2).map(|k| buffer.b(k)).collect()
}
