//! Weighted window heuristics.
//!
//! Every heuristic is an independent pure function from a [`Window`] to a
//! partial score. [`ScoringRules`] combines an ordered list of them by
//! weighted summation, optionally clamped from below, so rules can be added,
//! dropped or reweighted without touching the windowing loop.
//!
//! ## Modules
//!
//! - [`heuristics`]: the building blocks (GC balance, terminal A/U, runs, ...)
//! - [`presets`]: ready-made rule sets such as the Reynolds criteria
//!
//! ## Examples
//!
//! ```rust
//! use sirna_core::rules::{ScoringRules, heuristics::GcCount};
//! use sirna_core::sequence::Window;
//! use sirna_core::types::Nucleotide::{A, C, G, T};
//!
//! let rules = ScoringRules::new().with_rule(GcCount, 0.5);
//! assert_eq!(rules.evaluate(&Window::new(&[G, C, A, T])), 1.0);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::{SirnaConfig, WeightOverride};
use crate::sequence::Window;
use crate::types::SirnaError;

pub mod heuristics;
pub mod presets;

/// A single scoring criterion.
///
/// Implementations must be pure: the same window always yields the same
/// contribution.
pub trait Heuristic: fmt::Debug + Send + Sync {
    /// Stable name used for weight overrides and reporting
    fn name(&self) -> &str;

    /// Unweighted contribution of this criterion to the window's score
    fn evaluate(&self, window: &Window<'_>) -> f64;
}

/// A heuristic together with the weight it contributes with.
#[derive(Debug, Clone)]
pub struct WeightedRule {
    heuristic: Arc<dyn Heuristic>,
    weight: f64,
}

impl WeightedRule {
    #[must_use]
    pub fn name(&self) -> &str {
        self.heuristic.name()
    }

    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    fn contribution(&self, window: &Window<'_>) -> f64 {
        self.weight * self.heuristic.evaluate(window)
    }
}

/// An ordered, weighted set of heuristics.
///
/// The total for a window is `Σ weight · heuristic(window)` over the rules
/// in insertion order, raised to `floor` when one is set.
#[derive(Debug, Clone, Default)]
pub struct ScoringRules {
    rules: Vec<WeightedRule>,
    floor: Option<f64>,
}

impl ScoringRules {
    /// An empty rule set; every window scores 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the preset, weight overrides and floor policy of `config`.
    ///
    /// # Errors
    ///
    /// [`SirnaError::UnknownRule`] when an override names no rule of the
    /// preset.
    pub fn from_config(config: &SirnaConfig) -> Result<Self, SirnaError> {
        let mut rules = presets::build(config.preset);
        for WeightOverride { rule, weight } in &config.weights {
            rules.set_weight(rule, *weight)?;
        }
        if config.allow_negative {
            rules.floor = None;
        }
        Ok(rules)
    }

    /// Append `heuristic` with `weight`.
    #[must_use]
    pub fn with_rule(mut self, heuristic: impl Heuristic + 'static, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            heuristic: Arc::new(heuristic),
            weight,
        });
        self
    }

    /// Clamp every total to at least `floor`.
    #[must_use]
    pub fn with_floor(mut self, floor: f64) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Change the weight of the rule called `name`.
    ///
    /// # Errors
    ///
    /// [`SirnaError::UnknownRule`] if no rule has that name,
    /// [`SirnaError::InvalidInput`] if `weight` is not finite.
    pub fn set_weight(&mut self, name: &str, weight: f64) -> Result<(), SirnaError> {
        if !weight.is_finite() {
            return Err(SirnaError::InvalidInput(format!(
                "weight for '{name}' must be finite"
            )));
        }
        let Some(index) = self.rules.iter().position(|r| r.name() == name) else {
            return Err(SirnaError::UnknownRule(format!(
                "'{name}' (available: {})",
                self.names().join(", ")
            )));
        };
        self.rules[index].weight = weight;
        Ok(())
    }

    #[must_use]
    pub const fn floor(&self) -> Option<f64> {
        self.floor
    }

    #[must_use]
    pub fn rules(&self) -> &[WeightedRule] {
        &self.rules
    }

    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(WeightedRule::name).collect()
    }

    /// Total score of `window`.
    #[must_use]
    pub fn evaluate(&self, window: &Window<'_>) -> f64 {
        // fold from +0.0 so an all-zero total never prints as "-0"
        let total = self
            .rules
            .iter()
            .fold(0.0, |acc, r| acc + r.contribution(window));
        match self.floor {
            Some(floor) => total.max(floor),
            None => total,
        }
    }
}
