// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BairstowError {
    /// Stated degree does not match the coefficient count, or the
    /// leading coefficient is zero.
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// The Newton denominator collapsed or the per-stage iteration cap
    /// was exceeded. A failing stage aborts the whole extraction.
    #[error("Solver diverged at stage {stage}, iteration {iteration}: {message}")]
    SolverDiverged {
        stage: usize,
        iteration: usize,
        message: String,
    },

    /// Division by a zero coefficient in the terminal linear case.
    #[error("Degenerate linear term: {0}")]
    DegenerateLinear(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type BairstowResult<T> = Result<T, BairstowError>;
