use std::fmt;

use thiserror::Error;

/// A single nucleotide symbol.
///
/// `N` stands for any unknown or masked base. No heuristic counts it as
/// one of the four canonical bases.
///
/// # Examples
///
/// ```rust
/// use sirna_core::types::Nucleotide;
///
/// assert_eq!(Nucleotide::from_ascii(b'g'), Some(Nucleotide::G));
/// assert_eq!(Nucleotide::from_ascii(b'U'), Some(Nucleotide::T));
/// assert_eq!(Nucleotide::from_ascii(b'X'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nucleotide {
    /// Adenine
    A,
    /// Cytosine
    C,
    /// Guanine
    G,
    /// Thymine (uracil in RNA input)
    T,
    /// Unknown base
    N,
}

impl Nucleotide {
    /// The four canonical bases, in alphabetical order.
    pub const CANONICAL: [Self; 4] = [Self::A, Self::C, Self::G, Self::T];

    /// Parse an ASCII symbol (case-insensitive).
    ///
    /// Returns `None` for anything outside `ACGTUN`.
    #[must_use]
    pub const fn from_ascii(c: u8) -> Option<Self> {
        match c.to_ascii_uppercase() {
            b'A' => Some(Self::A),
            b'C' => Some(Self::C),
            b'G' => Some(Self::G),
            b'T' | b'U' => Some(Self::T),
            b'N' => Some(Self::N),
            _ => None,
        }
    }

    /// Uppercase ASCII representation
    #[must_use]
    pub const fn as_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
            Self::N => b'N',
        }
    }

    #[must_use]
    pub const fn is_gc(self) -> bool {
        matches!(self, Self::G | Self::C)
    }

    #[must_use]
    pub const fn is_at(self) -> bool {
        matches!(self, Self::A | Self::T)
    }

    #[must_use]
    pub const fn is_canonical(self) -> bool {
        !matches!(self, Self::N)
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ascii() as char)
    }
}

/// Score of the window starting at `position` (0-based).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreRecord {
    /// Start offset of the window in the sequence
    pub position: usize,
    /// Combined heuristic score of the window
    pub score: f64,
}

impl ScoreRecord {
    #[must_use]
    pub const fn new(position: usize, score: f64) -> Self {
        Self { position, score }
    }
}

/// Error types that can occur while loading or scoring sequences
#[derive(Error, Debug)]
pub enum SirnaError {
    /// Malformed or empty sequence, bad window width, bad weight
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Weight override names a rule the active rule set does not have
    #[error("Unknown scoring rule: {0}")]
    UnknownRule(String),
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing FASTA input
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Delimited output could not be written
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}
