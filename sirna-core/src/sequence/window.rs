use std::fmt;

use crate::types::Nucleotide;

/// A borrowed, fixed-width view into a [`Sequence`](super::Sequence).
///
/// Offsets are relative to the window start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window<'a> {
    symbols: &'a [Nucleotide],
}

impl<'a> Window<'a> {
    #[must_use]
    pub const fn new(symbols: &'a [Nucleotide]) -> Self {
        Self { symbols }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[must_use]
    pub const fn symbols(&self) -> &'a [Nucleotide] {
        self.symbols
    }

    /// Symbol at `offset`, or `None` past the window end
    #[must_use]
    pub fn get(&self, offset: usize) -> Option<Nucleotide> {
        self.symbols.get(offset).copied()
    }

    /// Count symbols matching `predicate`.
    pub fn count(&self, predicate: impl Fn(Nucleotide) -> bool) -> usize {
        self.symbols.iter().filter(|&&n| predicate(n)).count()
    }

    /// The tail of the window starting at `offset` (empty past the end).
    #[must_use]
    pub fn suffix(&self, offset: usize) -> Window<'a> {
        Window::new(self.symbols.get(offset..).unwrap_or(&[]))
    }

    /// Length of the longest stretch of one repeated canonical base.
    ///
    /// Runs of `N` do not count.
    #[must_use]
    pub fn longest_homopolymer(&self) -> usize {
        let mut longest = 0;
        let mut current = 0;
        let mut previous = None;

        for &n in self.symbols {
            if n.is_canonical() && previous == Some(n) {
                current += 1;
            } else if n.is_canonical() {
                current = 1;
            } else {
                current = 0;
            }
            previous = Some(n);
            longest = longest.max(current);
        }
        longest
    }
}

impl fmt::Display for Window<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for n in self.symbols {
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
