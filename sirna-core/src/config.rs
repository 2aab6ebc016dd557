use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_WINDOW_WIDTH;
use crate::types::SirnaError;

/// Layout of the scored output.
///
/// # Formats
///
/// - **Table**: one row per window, `seq_id`, `position`, `score`, `window`
/// - **Binned**: windows grouped into columns by rounded score, best first
/// - **Classic**: the binned layout with fixed columns `9..0` and separate
///   position and window fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One row per window in ascending position order.
    #[default]
    Table,

    /// Score-binned layout.
    ///
    /// Each column lists the `position-window` cells of every window whose
    /// rounded score equals the column heading.
    Binned,

    /// Fixed `9..0` score columns, each split into a position field padded
    /// to five characters and a window field.
    ///
    /// Scores above 9 land in column 9.
    Classic,
}

impl FromStr for OutputFormat {
    type Err = SirnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" | "tsv" => Ok(Self::Table),
            "binned" => Ok(Self::Binned),
            "classic" => Ok(Self::Classic),
            other => Err(SirnaError::InvalidInput(format!(
                "unknown output format '{other}' (expected table, binned or classic)"
            ))),
        }
    }
}

/// Field separator for text output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Tab,
    Comma,
}

impl Delimiter {
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Tab => b'\t',
            Self::Comma => b',',
        }
    }
}

/// What to do with a symbol outside `ACGTUN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolPolicy {
    /// Fail with [`SirnaError::InvalidInput`].
    #[default]
    Reject,
    /// Read the symbol as `N`; it then matches no heuristic.
    Neutral,
}

/// Built-in heuristic sets.
///
/// See [`crate::rules::presets`] for their exact composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RulePreset {
    /// Reynolds et al. (2004) rational siRNA design criteria
    #[default]
    Reynolds,
    /// +1 per G or C in the window
    GcCount,
}

impl FromStr for RulePreset {
    type Err = SirnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reynolds" => Ok(Self::Reynolds),
            "gc" | "gc-count" => Ok(Self::GcCount),
            other => Err(SirnaError::InvalidInput(format!(
                "unknown rule preset '{other}' (expected reynolds or gc)"
            ))),
        }
    }
}

impl fmt::Display for RulePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reynolds => write!(f, "reynolds"),
            Self::GcCount => write!(f, "gc"),
        }
    }
}

/// Override of one rule's weight, parsed from `name=value`.
///
/// # Examples
///
/// ```rust
/// use sirna_core::config::WeightOverride;
///
/// let w: WeightOverride = "terminal_at=0.5".parse()?;
/// assert_eq!(w.rule, "terminal_at");
/// assert_eq!(w.weight, 0.5);
/// # Ok::<(), sirna_core::types::SirnaError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WeightOverride {
    pub rule: String,
    pub weight: f64,
}

impl FromStr for WeightOverride {
    type Err = SirnaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rule, value) = s.split_once('=').ok_or_else(|| {
            SirnaError::InvalidInput(format!("weight '{s}' is not of the form NAME=VALUE"))
        })?;
        let rule = rule.trim();
        if rule.is_empty() {
            return Err(SirnaError::InvalidInput(format!(
                "weight '{s}' has an empty rule name"
            )));
        }
        let weight: f64 = value.trim().parse().map_err(|_| {
            SirnaError::InvalidInput(format!("weight '{s}' has a non-numeric value"))
        })?;
        if !weight.is_finite() {
            return Err(SirnaError::InvalidInput(format!(
                "weight '{s}' must be finite"
            )));
        }
        Ok(Self {
            rule: rule.to_string(),
            weight,
        })
    }
}

/// Configuration settings for a scoring run.
///
/// # Examples
///
/// ```rust
/// use sirna_core::config::{OutputFormat, RulePreset, SirnaConfig};
///
/// let config = SirnaConfig {
///     window_width: 21,
///     preset: RulePreset::GcCount,
///     output_format: OutputFormat::Binned,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct SirnaConfig {
    /// Width of every scored window.
    ///
    /// **Default**: 19 (an siRNA sense strand)
    pub window_width: usize,

    /// Heuristic set to score with.
    ///
    /// **Default**: [`RulePreset::Reynolds`]
    pub preset: RulePreset,

    /// Weight overrides applied on top of the preset, in order.
    pub weights: Vec<WeightOverride>,

    /// Report negative totals instead of clamping them to the preset floor.
    ///
    /// **Default**: `false`
    pub allow_negative: bool,

    /// Handling of unrecognized symbols.
    ///
    /// **Default**: [`SymbolPolicy::Reject`]
    pub symbol_policy: SymbolPolicy,

    /// **Default**: [`OutputFormat::Table`]
    pub output_format: OutputFormat,

    /// **Default**: [`Delimiter::Tab`]
    pub delimiter: Delimiter,

    /// Score windows on the rayon pool.
    ///
    /// **Default**: `false`
    pub parallel: bool,

    /// Size of the global rayon pool. `None` leaves rayon's default.
    ///
    /// **Default**: `None`
    pub num_threads: Option<usize>,

    /// Suppress progress messages on stderr.
    ///
    /// **Default**: `false`
    pub quiet: bool,
}

impl Default for SirnaConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            preset: RulePreset::Reynolds,
            weights: Vec::new(),
            allow_negative: false,
            symbol_policy: SymbolPolicy::Reject,
            output_format: OutputFormat::Table,
            delimiter: Delimiter::Tab,
            parallel: false,
            num_threads: None,
            quiet: false,
        }
    }
}
