//! Sequence loading and windowing.
//!
//! A [`Sequence`] is an immutable run of [`Nucleotide`]s decoded from ASCII
//! input under a [`SymbolPolicy`]. Fixed-width [`Window`]s borrow from it.
//!
//! ## Modules
//!
//! - [`io`]: FASTA and raw-text input
//! - [`window`]: borrowed fixed-width views used by the heuristics
//!
//! ## Examples
//!
//! ```rust
//! use sirna_core::config::SymbolPolicy;
//! use sirna_core::sequence::Sequence;
//!
//! let seq = Sequence::from_bytes("demo", None, b"acgu NN", SymbolPolicy::Reject)?;
//! assert_eq!(seq.to_string(), "ACGTNN");
//! assert_eq!(seq.windows(4).count(), 3);
//! # Ok::<(), sirna_core::types::SirnaError>(())
//! ```

use std::fmt;

use crate::config::SymbolPolicy;
use crate::types::{Nucleotide, SirnaError};

pub mod io;
pub mod window;

pub use io::*;
pub use window::Window;

/// An immutable nucleotide sequence with its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    id: String,
    description: Option<String>,
    symbols: Vec<Nucleotide>,
}

impl Sequence {
    /// Build a sequence directly from decoded symbols.
    #[must_use]
    pub fn new(id: impl Into<String>, description: Option<String>, symbols: Vec<Nucleotide>) -> Self {
        Self {
            id: id.into(),
            description,
            symbols,
        }
    }

    /// Decode ASCII sequence text.
    ///
    /// ASCII whitespace is skipped. Symbols outside `ACGTUN` are rejected or
    /// replaced with `N` depending on `policy`.
    ///
    /// # Errors
    ///
    /// [`SirnaError::InvalidInput`] under [`SymbolPolicy::Reject`] when an
    /// unrecognized symbol is found. The message carries the 1-based
    /// position among non-whitespace symbols.
    pub fn from_bytes(
        id: impl Into<String>,
        description: Option<String>,
        raw: &[u8],
        policy: SymbolPolicy,
    ) -> Result<Self, SirnaError> {
        let id = id.into();
        let mut symbols = Vec::with_capacity(raw.len());

        for &c in raw.iter().filter(|c| !c.is_ascii_whitespace()) {
            let nucleotide = match (Nucleotide::from_ascii(c), policy) {
                (Some(n), _) => n,
                (None, SymbolPolicy::Neutral) => Nucleotide::N,
                (None, SymbolPolicy::Reject) => {
                    return Err(SirnaError::InvalidInput(format!(
                        "unrecognized symbol {:?} at position {} of sequence '{}'",
                        c as char,
                        symbols.len() + 1,
                        id
                    )));
                }
            };
            symbols.push(nucleotide);
        }

        Ok(Self {
            id,
            description,
            symbols,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn symbols(&self) -> &[Nucleotide] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Window of `width` symbols starting at `position`, if it fits.
    #[must_use]
    pub fn window(&self, position: usize, width: usize) -> Option<Window<'_>> {
        let end = position.checked_add(width)?;
        self.symbols.get(position..end).map(Window::new)
    }

    /// All full windows of `width`, in ascending start order.
    ///
    /// Yields nothing when `width` is zero or exceeds the sequence length.
    pub fn windows(&self, width: usize) -> impl Iterator<Item = Window<'_>> {
        let count = window_count(self.len(), width);
        (0..count).map(move |i| Window::new(&self.symbols[i..i + width]))
    }

    /// Fraction of canonical bases that are G or C.
    ///
    /// `N` symbols are excluded from both numerator and denominator.
    /// Returns 0.0 when the sequence holds no canonical base.
    #[must_use]
    pub fn gc_content(&self) -> f64 {
        let (gc, canonical) = self
            .symbols
            .iter()
            .filter(|n| n.is_canonical())
            .fold((0usize, 0usize), |(gc, total), n| {
                (gc + usize::from(n.is_gc()), total + 1)
            });
        if canonical == 0 {
            0.0
        } else {
            gc as f64 / canonical as f64
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in &self.symbols {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// Number of full windows of `width` in a sequence of `length`.
#[must_use]
pub const fn window_count(length: usize, width: usize) -> usize {
    if width == 0 || width > length {
        0
    } else {
        length - width + 1
    }
}
