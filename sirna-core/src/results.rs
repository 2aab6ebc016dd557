use crate::sequence::Sequence;
use crate::types::ScoreRecord;

/// Scoring results for one input sequence.
///
/// # Fields
///
/// - `sequence_info`: identifier and summary statistics
/// - `window_width`: width every record was scored with
/// - `records`: one [`ScoreRecord`] per window, ascending by position
/// - `sequence`: the scored sequence, for rendering window text
///
/// # Examples
///
/// ```rust
/// use sirna_core::{SirnaAnalyzer, config::SirnaConfig};
///
/// let analyzer = SirnaAnalyzer::new(SirnaConfig::default())?;
/// let results = analyzer.analyze_sequence("AAGCTGACCTGCACTTCGAAAAA", None)?;
///
/// println!("{}: {} windows", results.sequence_info.id, results.records.len());
/// if let Some(best) = results.best() {
///     println!("best window at {} scores {}", best.position + 1, best.score);
/// }
/// # Ok::<(), sirna_core::types::SirnaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SequenceScores {
    pub sequence_info: SequenceInfo,
    pub window_width: usize,
    pub records: Vec<ScoreRecord>,
    pub sequence: Sequence,
}

impl SequenceScores {
    /// Text of the window behind `record`.
    #[must_use]
    pub fn window_text(&self, record: &ScoreRecord) -> String {
        self.sequence
            .window(record.position, self.window_width)
            .map(|w| w.to_string())
            .unwrap_or_default()
    }

    /// Highest-scoring record; the earliest one wins ties.
    #[must_use]
    pub fn best(&self) -> Option<&ScoreRecord> {
        self.records
            .iter()
            .reduce(|best, r| if r.score > best.score { r } else { best })
    }
}

/// Information about a scored sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceInfo {
    /// Identifier from the FASTA header, or the default name for raw input
    pub id: String,

    /// Everything after the identifier on the FASTA header line
    pub description: Option<String>,

    /// Length in nucleotides
    pub length: usize,

    /// G/C fraction of canonical bases (0.0 to 1.0)
    pub gc_content: f64,
}

impl From<&Sequence> for SequenceInfo {
    fn from(sequence: &Sequence) -> Self {
        Self {
            id: sequence.id().to_string(),
            description: sequence.description().map(String::from),
            length: sequence.len(),
            gc_content: sequence.gc_content(),
        }
    }
}
