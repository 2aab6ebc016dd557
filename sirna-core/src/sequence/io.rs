use std::fs::File;
use std::io::Read;
use std::path::Path;

use bio::io::fasta;

use crate::config::SymbolPolicy;
use crate::constants::DEFAULT_SEQUENCE_ID;
use crate::sequence::Sequence;
use crate::types::SirnaError;

/// Read every sequence from `reader`.
///
/// Input whose first non-whitespace byte is `>` is parsed as (multi-record)
/// FASTA with rust-bio. Anything else is taken as a single raw sequence named
/// [`DEFAULT_SEQUENCE_ID`]. Empty input yields no sequences.
pub fn read_sequences<R: Read>(
    mut reader: R,
    policy: SymbolPolicy,
) -> Result<Vec<Sequence>, SirnaError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let Some(start) = content.iter().position(|c| !c.is_ascii_whitespace()) else {
        return Ok(Vec::new());
    };

    // rust-bio expects '>' on the very first line
    match content[start] {
        b'>' => read_fasta_records(&content[start..], policy),
        _ => Ok(vec![Sequence::from_bytes(
            DEFAULT_SEQUENCE_ID,
            None,
            &content,
            policy,
        )?]),
    }
}

/// Read every sequence from the file at `path`; see [`read_sequences`].
pub fn read_sequence_file<P: AsRef<Path>>(
    path: P,
    policy: SymbolPolicy,
) -> Result<Vec<Sequence>, SirnaError> {
    let file = File::open(path)?;
    read_sequences(file, policy)
}

fn read_fasta_records(content: &[u8], policy: SymbolPolicy) -> Result<Vec<Sequence>, SirnaError> {
    let reader = fasta::Reader::new(content);
    let mut sequences = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| SirnaError::ParseError(e.to_string()))?;
        let description = record.desc().map(String::from);
        sequences.push(Sequence::from_bytes(
            record.id(),
            description,
            record.seq(),
            policy,
        )?);
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_fasta_single_record() {
        let input = ">seq1 first record\nACGT\nacgt\n";
        let sequences = read_sequences(input.as_bytes(), SymbolPolicy::Reject).unwrap();

        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].id(), "seq1");
        assert_eq!(sequences[0].description(), Some("first record"));
        assert_eq!(sequences[0].to_string(), "ACGTACGT");
    }

    #[test]
    fn test_read_fasta_multiple_records() {
        let input = ">seq1\nATCG\n>seq2\nGCTA\n>seq3\nTTAA\n";
        let sequences = read_sequences(input.as_bytes(), SymbolPolicy::Reject).unwrap();

        let ids: Vec<&str> = sequences.iter().map(Sequence::id).collect();
        assert_eq!(ids, ["seq1", "seq2", "seq3"]);
        assert_eq!(sequences[1].description(), None);
    }

    #[test]
    fn test_read_fasta_leading_blank_lines() {
        let input = "\n\n>seq1\nACGT\n";
        let sequences = read_sequences(input.as_bytes(), SymbolPolicy::Reject).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].to_string(), "ACGT");
    }

    #[test]
    fn test_read_raw_sequence() {
        let input = "acgtac\ngtac\n";
        let sequences = read_sequences(input.as_bytes(), SymbolPolicy::Reject).unwrap();

        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].id(), DEFAULT_SEQUENCE_ID);
        assert_eq!(sequences[0].to_string(), "ACGTACGTAC");
    }

    #[test]
    fn test_read_empty_input() {
        let sequences = read_sequences(" \n\n".as_bytes(), SymbolPolicy::Reject).unwrap();
        assert!(sequences.is_empty());
    }

    #[test]
    fn test_invalid_symbol_in_fasta_record() {
        let input = ">seq1\nACGT\n>seq2\nAC*GT\n";
        let result = read_sequences(input.as_bytes(), SymbolPolicy::Reject);
        match result {
            Err(SirnaError::InvalidInput(msg)) => assert!(msg.contains("'seq2'"), "{msg}"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }

        let sequences = read_sequences(input.as_bytes(), SymbolPolicy::Neutral).unwrap();
        assert_eq!(sequences[1].to_string(), "ACNGT");
    }

    #[test]
    fn test_read_sequence_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, ">from_file\nGGGCCC").unwrap();

        let sequences = read_sequence_file(file.path(), SymbolPolicy::Reject).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].id(), "from_file");
    }

    #[test]
    fn test_read_sequence_file_not_found() {
        let result = read_sequence_file("nonexistent_file.fa", SymbolPolicy::Reject);
        match result {
            Err(SirnaError::IoError(_)) => {}
            other => panic!("Expected IoError for missing file, got {other:?}"),
        }
    }
}
