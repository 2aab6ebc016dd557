use std::io::Read;
use std::path::Path;

use crate::config::SirnaConfig;
use crate::results::{SequenceInfo, SequenceScores};
use crate::rules::ScoringRules;
use crate::scorer::{score, score_parallel};
use crate::sequence::{Sequence, read_sequence_file, read_sequences};
use crate::types::SirnaError;

/// High-level scoring entry point.
///
/// Resolves the configured rule set once, then loads and scores sequences
/// from strings, byte slices, readers or files.
///
/// # Examples
///
/// ```rust
/// use sirna_core::{SirnaAnalyzer, config::SirnaConfig};
///
/// let analyzer = SirnaAnalyzer::new(SirnaConfig::default())?;
/// let results = analyzer.analyze_sequence("AAGCTGACCTGCACTTCGAAAAA", Some("demo".into()))?;
///
/// assert_eq!(results.records.len(), 5);
/// assert_eq!(results.records[0].score, 6.0);
/// # Ok::<(), sirna_core::types::SirnaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SirnaAnalyzer {
    pub config: SirnaConfig,
    rules: ScoringRules,
}

impl SirnaAnalyzer {
    /// Creates an analyzer with the specified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SirnaError`] if:
    /// - a weight override names an unknown rule
    /// - the window width is zero
    /// - `num_threads` is set and the global rayon pool already runs with a
    ///   different number of threads
    pub fn new(config: SirnaConfig) -> Result<Self, SirnaError> {
        if config.window_width == 0 {
            return Err(SirnaError::InvalidInput(
                "window width must be positive".to_string(),
            ));
        }
        let rules = ScoringRules::from_config(&config)?;

        if let Some(num_threads) = config.num_threads {
            configure_thread_pool(num_threads)?;
        }

        Ok(Self { config, rules })
    }

    /// Use an explicit rule set instead of the configured preset.
    #[must_use]
    pub fn with_rules(mut self, rules: ScoringRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub const fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Scores a single sequence given as a string.
    ///
    /// `header` defaults to `sequence_1`.
    pub fn analyze_sequence(
        &self,
        sequence: &str,
        header: Option<String>,
    ) -> Result<SequenceScores, SirnaError> {
        let header = header.unwrap_or_else(|| crate::constants::DEFAULT_SEQUENCE_ID.to_string());
        self.analyze_bytes(sequence.as_bytes(), header, None)
    }

    /// Decodes and scores raw sequence bytes.
    pub fn analyze_bytes(
        &self,
        sequence: &[u8],
        header: String,
        description: Option<String>,
    ) -> Result<SequenceScores, SirnaError> {
        let sequence =
            Sequence::from_bytes(header, description, sequence, self.config.symbol_policy)?;
        self.score_sequence(sequence)
    }

    /// Scores every sequence read from `reader` (FASTA or raw text).
    ///
    /// # Errors
    ///
    /// Fails when the input holds no sequence, or when any sequence fails to
    /// load or score. No partial results are returned.
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<Vec<SequenceScores>, SirnaError> {
        let sequences = read_sequences(reader, self.config.symbol_policy)?;
        self.score_all(sequences)
    }

    /// Scores every sequence in the file at `path`.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use sirna_core::{SirnaAnalyzer, config::SirnaConfig};
    ///
    /// let analyzer = SirnaAnalyzer::new(SirnaConfig::default())?;
    /// for result in analyzer.analyze_file("transcripts.fasta")? {
    ///     println!("{}: {} windows", result.sequence_info.id, result.records.len());
    /// }
    /// # Ok::<(), sirna_core::types::SirnaError>(())
    /// ```
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<Vec<SequenceScores>, SirnaError> {
        let sequences = read_sequence_file(path, self.config.symbol_policy)?;
        self.score_all(sequences)
    }

    fn score_all(&self, sequences: Vec<Sequence>) -> Result<Vec<SequenceScores>, SirnaError> {
        if sequences.is_empty() {
            return Err(SirnaError::InvalidInput(
                "no sequence found in input".to_string(),
            ));
        }
        if !self.config.quiet {
            eprintln!("Loaded {} sequence(s)", sequences.len());
        }
        sequences
            .into_iter()
            .map(|sequence| self.score_sequence(sequence))
            .collect()
    }

    fn score_sequence(&self, sequence: Sequence) -> Result<SequenceScores, SirnaError> {
        let width = self.config.window_width;
        let records = if self.config.parallel {
            score_parallel(&sequence, width, &self.rules)?
        } else {
            score(&sequence, width, &self.rules)?
        };

        Ok(SequenceScores {
            sequence_info: SequenceInfo::from(&sequence),
            window_width: width,
            records,
            sequence,
        })
    }
}

/// Size the global rayon pool once per process.
///
/// A pool that already exists with the requested size is accepted.
fn configure_thread_pool(num_threads: usize) -> Result<(), SirnaError> {
    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(()) => Ok(()),
        Err(_) if rayon::current_num_threads() == num_threads => Ok(()),
        Err(e) => Err(SirnaError::InvalidInput(format!(
            "Failed to configure thread pool with {num_threads} threads \
             (running with {}): {e}",
            rayon::current_num_threads()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{RulePreset, SymbolPolicy};
    use crate::rules::presets::gc_count;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn quiet_config() -> SirnaConfig {
        SirnaConfig {
            quiet: true,
            ..SirnaConfig::default()
        }
    }

    #[test]
    fn test_analyzer_new_default() {
        let analyzer = SirnaAnalyzer::new(quiet_config()).unwrap();
        assert_eq!(analyzer.rules().names().len(), 8);
        assert_eq!(analyzer.config.window_width, 19);
    }

    #[test]
    fn test_analyzer_rejects_zero_width() {
        let config = SirnaConfig {
            window_width: 0,
            ..quiet_config()
        };
        assert!(matches!(
            SirnaAnalyzer::new(config),
            Err(SirnaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_analyzer_rejects_unknown_weight() {
        let config = SirnaConfig {
            weights: vec!["nope=1".parse().unwrap()],
            ..quiet_config()
        };
        assert!(matches!(
            SirnaAnalyzer::new(config),
            Err(SirnaError::UnknownRule(_))
        ));
    }

    #[test]
    fn test_repeated_thread_pool_configuration() {
        // Reading the size starts the global pool if nothing else has
        let running = rayon::current_num_threads();
        let config = SirnaConfig {
            num_threads: Some(running),
            ..quiet_config()
        };
        assert!(SirnaAnalyzer::new(config.clone()).is_ok());
        assert!(SirnaAnalyzer::new(config).is_ok());

        let mismatched = SirnaConfig {
            num_threads: Some(running + 1),
            ..quiet_config()
        };
        match SirnaAnalyzer::new(mismatched) {
            Err(SirnaError::InvalidInput(msg)) => assert!(msg.contains("thread pool"), "{msg}"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_sequence_gc_example() {
        let config = SirnaConfig {
            window_width: 4,
            preset: RulePreset::GcCount,
            ..quiet_config()
        };
        let analyzer = SirnaAnalyzer::new(config).unwrap();
        let results = analyzer.analyze_sequence("ACGTACGT", None).unwrap();

        assert_eq!(results.sequence_info.id, "sequence_1");
        assert_eq!(results.window_width, 4);
        let scores: Vec<f64> = results.records.iter().map(|r| r.score).collect();
        assert_eq!(scores, [2.0; 5]);
    }

    #[test]
    fn test_analyze_sequence_too_short() {
        let analyzer = SirnaAnalyzer::new(quiet_config()).unwrap();
        match analyzer.analyze_sequence("ACGT", None) {
            Err(SirnaError::InvalidInput(msg)) => assert!(msg.contains("window width 19"), "{msg}"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_empty_sequence() {
        let analyzer = SirnaAnalyzer::new(quiet_config()).unwrap();
        assert!(matches!(
            analyzer.analyze_sequence("", None),
            Err(SirnaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_symbol_policy_applies() {
        let text = "AAGCTGACCTGCACTTCGX";
        let strict = SirnaAnalyzer::new(quiet_config()).unwrap();
        assert!(matches!(
            strict.analyze_sequence(text, None),
            Err(SirnaError::InvalidInput(_))
        ));

        let lenient = SirnaAnalyzer::new(SirnaConfig {
            symbol_policy: SymbolPolicy::Neutral,
            ..quiet_config()
        })
        .unwrap();
        let results = lenient.analyze_sequence(text, None).unwrap();
        // X reads as N: no A at 19 and one fewer A/T in the tail
        assert_eq!(results.records[0].score, 4.0);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "AAGCTGACCTGCACTTCGAAAAATTTGGGCCCATATATGCGCAAGT".repeat(20);
        let sequential = SirnaAnalyzer::new(quiet_config()).unwrap();
        let parallel = SirnaAnalyzer::new(SirnaConfig {
            parallel: true,
            ..quiet_config()
        })
        .unwrap();

        let a = sequential.analyze_sequence(&text, None).unwrap();
        let b = parallel.analyze_sequence(&text, None).unwrap();
        assert_eq!(a.records, b.records);
    }

    #[test]
    fn test_with_rules_overrides_preset() {
        let analyzer = SirnaAnalyzer::new(SirnaConfig {
            window_width: 2,
            ..quiet_config()
        })
        .unwrap()
        .with_rules(gc_count());
        let results = analyzer.analyze_sequence("GCA", None).unwrap();
        let scores: Vec<f64> = results.records.iter().map(|r| r.score).collect();
        assert_eq!(scores, [2.0, 1.0]);
    }

    #[test]
    fn test_analyze_reader_multiple_records() {
        let analyzer = SirnaAnalyzer::new(SirnaConfig {
            window_width: 3,
            preset: RulePreset::GcCount,
            ..quiet_config()
        })
        .unwrap();
        let input = ">a\nGGGA\n>b first\nATATAT\n";
        let results = analyzer.analyze_reader(input.as_bytes()).unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].sequence_info.id, "a");
        assert_eq!(results[0].records.len(), 2);
        assert_eq!(results[1].sequence_info.description.as_deref(), Some("first"));
        assert_eq!(results[1].records.len(), 4);
    }

    #[test]
    fn test_analyze_reader_one_short_record_fails_run() {
        let analyzer = SirnaAnalyzer::new(SirnaConfig {
            window_width: 5,
            ..quiet_config()
        })
        .unwrap();
        let input = ">long\nACGTACGT\n>short\nACG\n";
        assert!(matches!(
            analyzer.analyze_reader(input.as_bytes()),
            Err(SirnaError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_analyze_reader_empty_input() {
        let analyzer = SirnaAnalyzer::new(quiet_config()).unwrap();
        match analyzer.analyze_reader("".as_bytes()) {
            Err(SirnaError::InvalidInput(msg)) => assert!(msg.contains("no sequence"), "{msg}"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_analyze_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">target\nAAGCTGACCTGCACTTCGA").unwrap();

        let analyzer = SirnaAnalyzer::new(quiet_config()).unwrap();
        let results = analyzer.analyze_file(file.path()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].records, [crate::types::ScoreRecord::new(0, 6.0)]);
    }

    #[test]
    fn test_analyze_file_not_found() {
        let analyzer = SirnaAnalyzer::new(quiet_config()).unwrap();
        assert!(matches!(
            analyzer.analyze_file("nonexistent_file.fa"),
            Err(SirnaError::IoError(_))
        ));
    }
}
