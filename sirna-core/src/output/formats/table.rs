use std::io::Write;

use crate::{SirnaError, config::Delimiter, results::SequenceScores};

/// Write one row per window: `seq_id`, 1-based `position`, `score`, `window`
///
/// Fields holding the delimiter or a quote (such as FASTA ids with commas)
/// are quoted.
pub fn write_table_format<W: Write>(
    writer: &mut W,
    results: &[SequenceScores],
    delimiter: Delimiter,
) -> Result<(), SirnaError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter.as_byte())
        .from_writer(writer);
    wtr.write_record(["seq_id", "position", "score", "window"])?;

    for result in results {
        for record in &result.records {
            let position = (record.position + 1).to_string();
            let score = record.score.to_string();
            let window = result.window_text(record);
            wtr.write_record([
                result.sequence_info.id.as_str(),
                position.as_str(),
                score.as_str(),
                window.as_str(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::SymbolPolicy,
        results::SequenceInfo,
        sequence::Sequence,
        types::ScoreRecord,
    };

    fn create_results(id: &str, text: &str, width: usize, scores: &[f64]) -> SequenceScores {
        let sequence = Sequence::from_bytes(id, None, text.as_bytes(), SymbolPolicy::Reject).unwrap();
        SequenceScores {
            sequence_info: SequenceInfo::from(&sequence),
            window_width: width,
            records: scores
                .iter()
                .enumerate()
                .map(|(i, &s)| ScoreRecord::new(i, s))
                .collect(),
            sequence,
        }
    }

    #[test]
    fn test_write_table_single_sequence() {
        let results = [create_results("s1", "ACGTAC", 4, &[2.0, 2.0, 1.0])];
        let mut buffer = Vec::new();
        write_table_format(&mut buffer, &results, Delimiter::Tab).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "seq_id\tposition\tscore\twindow\n\
             s1\t1\t2\tACGT\n\
             s1\t2\t2\tCGTA\n\
             s1\t3\t1\tGTAC\n"
        );
    }

    #[test]
    fn test_write_table_fractional_and_negative_scores() {
        let results = [create_results("s1", "AAA", 2, &[1.5, -0.25])];
        let mut buffer = Vec::new();
        write_table_format(&mut buffer, &results, Delimiter::Comma).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "seq_id,position,score,window\ns1,1,1.5,AA\ns1,2,-0.25,AA\n"
        );
    }

    #[test]
    fn test_write_table_multiple_sequences_share_header() {
        let results = [
            create_results("a", "GG", 2, &[2.0]),
            create_results("b", "TT", 2, &[0.0]),
        ];
        let mut buffer = Vec::new();
        write_table_format(&mut buffer, &results, Delimiter::Tab).unwrap();

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, ["seq_id\tposition\tscore\twindow", "a\t1\t2\tGG", "b\t1\t0\tTT"]);
    }

    #[test]
    fn test_write_table_quotes_ids_containing_delimiter() {
        let results = [create_results("gene,iso1", "GGCA", 4, &[3.0])];
        let mut buffer = Vec::new();
        write_table_format(&mut buffer, &results, Delimiter::Comma).unwrap();

        let mut reader = csv::ReaderBuilder::new().from_reader(buffer.as_slice());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 4);
        assert_eq!(&rows[0][0], "gene,iso1");
        assert_eq!(&rows[0][3], "GGCA");
    }

    #[test]
    fn test_write_table_no_records() {
        let mut buffer = Vec::new();
        write_table_format(&mut buffer, &[], Delimiter::Tab).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "seq_id\tposition\tscore\twindow\n");
    }
}
