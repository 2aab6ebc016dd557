//! # siRNA window scoring
//!
//! Scores every fixed-width window of a DNA sequence against a weighted set
//! of heuristics that estimate how suitable the window is as a silencing RNA
//! target. The default rule set implements the rational design criteria of
//! Reynolds et al. (2004), Nat Biotechnol 22(3):326-330, on 19-mer sense
//! strand windows.
//!
//! ## Quick Start
//!
//! ```rust
//! use sirna_core::{SirnaAnalyzer, config::SirnaConfig};
//!
//! let analyzer = SirnaAnalyzer::new(SirnaConfig::default())?;
//! let results = analyzer.analyze_sequence("AAGCTGACCTGCACTTCGAAAAA", None)?;
//!
//! for record in &results.records {
//!     println!("{}\t{}", record.position + 1, record.score);
//! }
//! # Ok::<(), sirna_core::types::SirnaError>(())
//! ```
//!
//! ## Custom rule sets
//!
//! Heuristics are independent pure functions combined by weighted summation:
//!
//! ```rust
//! use sirna_core::config::SymbolPolicy;
//! use sirna_core::rules::{ScoringRules, heuristics::{GcCount, HomopolymerRun}};
//! use sirna_core::scorer::score;
//! use sirna_core::sequence::Sequence;
//!
//! let rules = ScoringRules::new()
//!     .with_rule(GcCount, 1.0)
//!     .with_rule(HomopolymerRun { name: "runs".into(), run_length: 3 }, 2.0);
//!
//! let seq = Sequence::from_bytes("s", None, b"ACGGGT", SymbolPolicy::Reject)?;
//! let records = score(&seq, 4, &rules)?;
//! assert_eq!(records.len(), 3);
//! # Ok::<(), sirna_core::types::SirnaError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for a scoring run
//! - [`engine`]: [`SirnaAnalyzer`], the high-level entry point
//! - [`scorer`]: The window scorer itself
//! - [`rules`]: Heuristics, weighting and presets
//! - [`sequence`]: Alphabet decoding, windows and input
//! - [`results`]: Per-sequence scoring results
//! - [`output`]: Table and score-binned writers
//! - [`types`]: Nucleotides, score records and errors
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T, SirnaError>`](types::SirnaError):
//!
//! - Invalid input (empty sequence, bad window width, unrecognized symbols)
//! - Unknown rule names in weight overrides
//! - I/O and FASTA parse errors

pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod rules;
pub mod scorer;
pub mod sequence;
pub mod types;

pub use engine::SirnaAnalyzer;
pub use types::SirnaError;
