//! Output formatting for window scores.
//!
//! ## Supported Formats
//!
//! - **Table**: one delimited row per window
//! - **Binned**: windows grouped into score columns, best scores first
//! - **Classic**: fixed `9..0` score columns with separate position and
//!   window fields
//!
//! Positions are written 1-based. Every layout can be tab- or
//! comma-delimited; fields holding the delimiter are quoted.
//!
//! ## Examples
//!
//! ```rust
//! use sirna_core::{SirnaAnalyzer, config::{Delimiter, OutputFormat, SirnaConfig}};
//! use sirna_core::output::write_results;
//!
//! let analyzer = SirnaAnalyzer::new(SirnaConfig { quiet: true, ..Default::default() })?;
//! let results = analyzer.analyze_sequence("AAGCTGACCTGCACTTCGA", Some("demo".into()))?;
//!
//! let mut out = Vec::new();
//! write_results(&mut out, &[results], OutputFormat::Table, Delimiter::Tab)?;
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "seq_id\tposition\tscore\twindow\ndemo\t1\t6\tAAGCTGACCTGCACTTCGA\n"
//! );
//! # Ok::<(), sirna_core::types::SirnaError>(())
//! ```

use std::io::Write;

use crate::config::{Delimiter, OutputFormat};
use crate::results::SequenceScores;
use crate::types::SirnaError;

mod formats {
    pub mod binned;
    pub mod table;
}

use formats::{
    binned::{write_binned_format, write_classic_format},
    table::write_table_format,
};

/// Writes scoring results in the specified format.
///
/// # Errors
///
/// Returns [`SirnaError::IoError`] or [`SirnaError::CsvError`] if writing
/// fails.
pub fn write_results<W: Write>(
    writer: &mut W,
    results: &[SequenceScores],
    format: OutputFormat,
    delimiter: Delimiter,
) -> Result<(), SirnaError> {
    match format {
        OutputFormat::Table => write_table_format(writer, results, delimiter),
        OutputFormat::Binned => write_binned_format(writer, results, delimiter),
        OutputFormat::Classic => write_classic_format(writer, results, delimiter),
    }
}
