use std::io::Write;

use crate::{
    SirnaError,
    config::Delimiter,
    constants::{BINNED_MAX_COLUMN, CLASSIC_POSITION_WIDTH, CLASSIC_TOP_COLUMN},
    results::SequenceScores,
    types::ScoreRecord,
};

/// Write windows grouped into score columns, highest score first.
///
/// Each sequence gets a `# <id>` line, a header of column scores, then rows
/// of `position-window` cells. Column `k` lists, in ascending position
/// order, the windows whose score rounds to `k`; negative scores land in
/// column 0 and scores above [`BINNED_MAX_COLUMN`] in the top column.
/// Sequences are separated by a blank line.
pub fn write_binned_format<W: Write>(
    writer: &mut W,
    results: &[SequenceScores],
    delimiter: Delimiter,
) -> Result<(), SirnaError> {
    write_sections(writer, results, delimiter, |result, wtr| {
        let top = result
            .records
            .iter()
            .map(|r| bucket(r.score, BINNED_MAX_COLUMN))
            .max()
            .unwrap_or(0);
        let bins = bin_records(&result.records, top);

        wtr.write_record((0..=top).rev().map(|k| k.to_string()))?;
        for row in 0..depth(&bins) {
            wtr.write_record(bins.iter().rev().map(|bin| {
                bin.get(row)
                    .map(|r| format!("{}-{}", r.position + 1, result.window_text(r)))
                    .unwrap_or_default()
            }))?;
        }
        Ok(())
    })
}

/// Write the fixed `9..0` column layout.
///
/// Every column is two fields wide: the 1-based position left-justified to
/// [`CLASSIC_POSITION_WIDTH`] characters, then the window. The header puts
/// each score over the window field. Scores above 9 share column 9.
pub fn write_classic_format<W: Write>(
    writer: &mut W,
    results: &[SequenceScores],
    delimiter: Delimiter,
) -> Result<(), SirnaError> {
    write_sections(writer, results, delimiter, |result, wtr| {
        let bins = bin_records(&result.records, CLASSIC_TOP_COLUMN);

        let header: Vec<String> = (0..=CLASSIC_TOP_COLUMN)
            .rev()
            .flat_map(|k| [String::new(), k.to_string()])
            .collect();
        wtr.write_record(&header)?;

        for row in 0..depth(&bins) {
            let cells: Vec<String> = bins
                .iter()
                .rev()
                .flat_map(|bin| match bin.get(row) {
                    Some(r) => [
                        format!("{:<width$}", r.position + 1, width = CLASSIC_POSITION_WIDTH),
                        result.window_text(r),
                    ],
                    None => [String::new(), String::new()],
                })
                .collect();
            wtr.write_record(&cells)?;
        }
        Ok(())
    })
}

/// Shared framing: blank line between sequences, `# <id>` line, then `body`.
fn write_sections<W, F>(
    writer: &mut W,
    results: &[SequenceScores],
    delimiter: Delimiter,
    mut body: F,
) -> Result<(), SirnaError>
where
    W: Write,
    F: FnMut(&SequenceScores, &mut csv::Writer<&mut W>) -> Result<(), SirnaError>,
{
    for (index, result) in results.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(delimiter.as_byte())
            .flexible(true)
            .from_writer(&mut *writer);
        wtr.write_record([format!("# {}", result.sequence_info.id)])?;
        body(result, &mut wtr)?;
        wtr.flush()?;
    }
    Ok(())
}

/// Column of `score`: rounded, clamped into `0..=top`.
fn bucket(score: f64, top: usize) -> usize {
    // NaN casts to 0
    score.round().clamp(0.0, top as f64) as usize
}

/// Group records into `top + 1` buckets; index `k` holds bucket `k`.
fn bin_records(records: &[ScoreRecord], top: usize) -> Vec<Vec<&ScoreRecord>> {
    let mut bins = vec![Vec::new(); top + 1];
    for record in records {
        bins[bucket(record.score, top)].push(record);
    }
    bins
}

fn depth(bins: &[Vec<&ScoreRecord>]) -> usize {
    bins.iter().map(Vec::len).max().unwrap_or(0)
}
