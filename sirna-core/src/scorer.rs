//! The window scorer.
//!
//! Slides a fixed-width window across a [`Sequence`] and scores every start
//! position with [`ScoringRules`]. Windows are read-only and independent, so
//! [`score_parallel`] may evaluate them on the rayon pool; both functions
//! return identical output.

use rayon::prelude::*;

use crate::rules::ScoringRules;
use crate::sequence::{Sequence, Window, window_count};
use crate::types::{ScoreRecord, SirnaError};

/// Score every window of `window_width` in `sequence`.
///
/// Produces exactly `len − window_width + 1` records with positions
/// `0, 1, 2, …` in ascending order.
///
/// # Errors
///
/// [`SirnaError::InvalidInput`] if the sequence is empty, the width is zero,
/// or the width exceeds the sequence length.
///
/// # Examples
///
/// ```rust
/// use sirna_core::config::SymbolPolicy;
/// use sirna_core::rules::presets::gc_count;
/// use sirna_core::scorer::score;
/// use sirna_core::sequence::Sequence;
///
/// let seq = Sequence::from_bytes("s", None, b"ACGTACGT", SymbolPolicy::Reject)?;
/// let records = score(&seq, 4, &gc_count())?;
///
/// assert_eq!(records.len(), 5);
/// assert!(records.iter().all(|r| r.score == 2.0));
/// # Ok::<(), sirna_core::types::SirnaError>(())
/// ```
pub fn score(
    sequence: &Sequence,
    window_width: usize,
    rules: &ScoringRules,
) -> Result<Vec<ScoreRecord>, SirnaError> {
    validate(sequence, window_width)?;

    Ok(sequence
        .windows(window_width)
        .enumerate()
        .map(|(position, window)| ScoreRecord::new(position, rules.evaluate(&window)))
        .collect())
}

/// [`score`] with windows evaluated in parallel.
///
/// # Errors
///
/// Same conditions as [`score`].
pub fn score_parallel(
    sequence: &Sequence,
    window_width: usize,
    rules: &ScoringRules,
) -> Result<Vec<ScoreRecord>, SirnaError> {
    validate(sequence, window_width)?;

    let symbols = sequence.symbols();
    let count = window_count(symbols.len(), window_width);
    Ok((0..count)
        .into_par_iter()
        .map(|position| {
            let window = Window::new(&symbols[position..position + window_width]);
            ScoreRecord::new(position, rules.evaluate(&window))
        })
        .collect())
}

fn validate(sequence: &Sequence, window_width: usize) -> Result<(), SirnaError> {
    if sequence.is_empty() {
        return Err(SirnaError::InvalidInput(format!(
            "sequence '{}' is empty",
            sequence.id()
        )));
    }
    if window_width == 0 {
        return Err(SirnaError::InvalidInput(
            "window width must be positive".to_string(),
        ));
    }
    if window_width > sequence.len() {
        return Err(SirnaError::InvalidInput(format!(
            "window width {} exceeds length {} of sequence '{}'",
            window_width,
            sequence.len(),
            sequence.id()
        )));
    }
    Ok(())
}
