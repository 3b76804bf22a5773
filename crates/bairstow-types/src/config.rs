// ─────────────────────────────────────────────────────────────────────
// SCPN Bairstow — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{BairstowError, BairstowResult};

/// Initial-guess policy for the trial quadratic factor of each stage.
///
/// `Fresh` restarts every stage at (1, 1). `CarryOver` seeds a stage
/// with the previous stage's converged (p, q); this changes the
/// convergence trajectory, not the extracted roots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuessStrategy {
    #[default]
    Fresh,
    CarryOver,
}

/// Solver configuration. All fields have serde defaults so a partial
/// JSON document (or `{}`) deserializes to the documented defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Convergence tolerance: a stage converges once |Δp| and |Δq|
    /// are both at or below this value.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Per-stage Newton iteration cap. Exceeding it is an error,
    /// never an unbounded loop.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub guess_strategy: GuessStrategy,
}

fn default_epsilon() -> f64 {
    1e-4
}
fn default_max_iterations() -> usize {
    500
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            epsilon: default_epsilon(),
            max_iterations: default_max_iterations(),
            guess_strategy: GuessStrategy::default(),
        }
    }
}

impl SolverConfig {
    /// Load from a JSON file.
    pub fn from_file(path: &str) -> BairstowResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tolerances and caps that would make the stage loop
    /// meaningless.
    pub fn validate(&self) -> BairstowResult<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(BairstowError::ConfigError(format!(
                "epsilon must be finite and positive, got {}",
                self.epsilon
            )));
        }
        if self.max_iterations == 0 {
            return Err(BairstowError::ConfigError(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
