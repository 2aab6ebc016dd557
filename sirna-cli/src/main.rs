//! # sirna - siRNA target prediction
//!
//! Scores every 19-mer (or any window width) of a DNA sequence against the
//! Reynolds et al. (2004) siRNA design criteria, or another weighted rule set.
//!
//! ## Usage
//!
//! ```bash
//! # Score a sequence given on the command line
//! sirna -s AAGCTGACCTGCACTTCGAAAAATTTGG
//!
//! # Score every record of a FASTA file, write CSV
//! sirna -i transcripts.fasta -c -o scores.csv
//!
//! # Group windows by score, like the classic web tool
//! sirna -i cdna.fasta -f binned
//!
//! # Fixed 9..0 columns with separate position and window fields
//! sirna -i cdna.fasta -f classic -c
//!
//! # Reweight rules, report negative totals
//! sirna -i cdna.fasta --weight terminal_at=0.5 --weight homopolymer=2 --no-floor
//! ```
//!
//! ## Options
//!
//! - `-s, --sequence <SEQ>`: Sequence to analyze
//! - `-i, --input <FILE>`: FASTA or raw sequence file (default: stdin)
//! - `-o, --output <FILE>`: Output file (default: stdout)
//! - `-w, --window <N>`: Window width (default: 19)
//! - `-r, --rules <PRESET>`: reynolds or gc (default: reynolds)
//! - `--weight <NAME=VALUE>`: Override a rule weight (repeatable)
//! - `--no-floor`: Report negative totals
//! - `--lenient`: Read unrecognized symbols as N instead of failing
//! - `-f, --format <FORMAT>`: table, binned or classic (default: table)
//! - `-c, --csv`: Comma-delimited output
//! - `-j, --threads <N>`: Score windows in parallel on N threads
//! - `-q, --quiet`: Suppress progress messages

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use sirna_core::config::{
    Delimiter, OutputFormat, RulePreset, SirnaConfig, SymbolPolicy, WeightOverride,
};
use sirna_core::constants::DEFAULT_WINDOW_WIDTH;
use sirna_core::output::write_results;
use sirna_core::results::SequenceScores;
use sirna_core::*;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn cli() -> Command {
    Command::new("sirna")
        .version(env!("CARGO_PKG_VERSION"))
        .about("siRNA target prediction using the Reynolds et al. (2004) design criteria")
        .arg(
            Arg::new("sequence")
                .short('s')
                .long("sequence")
                .value_name("SEQ")
                .conflicts_with("input")
                .help("Input DNA sequence to analyze"),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .visible_alias("fasta")
                .value_name("FILE")
                .help("FASTA or raw sequence file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Output file (default: stdout)"),
        )
        .arg(
            Arg::new("window")
                .short('w')
                .long("window")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .default_value("19")
                .help("Window width"),
        )
        .arg(
            Arg::new("rules")
                .short('r')
                .long("rules")
                .value_name("PRESET")
                .default_value("reynolds")
                .help("Rule set: reynolds or gc"),
        )
        .arg(
            Arg::new("weight")
                .long("weight")
                .value_name("NAME=VALUE")
                .action(ArgAction::Append)
                .help("Override the weight of a rule (repeatable)"),
        )
        .arg(
            Arg::new("no-floor")
                .long("no-floor")
                .action(ArgAction::SetTrue)
                .help("Report negative totals instead of clamping them"),
        )
        .arg(
            Arg::new("lenient")
                .long("lenient")
                .action(ArgAction::SetTrue)
                .help("Read unrecognized symbols as N instead of failing"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .default_value("table")
                .help("Output format: table, binned or classic"),
        )
        .arg(
            Arg::new("csv")
                .short('c')
                .long("csv")
                .action(ArgAction::SetTrue)
                .help("Comma-delimited output"),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Score windows in parallel on N threads"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .action(ArgAction::SetTrue)
                .help("Quiet mode"),
        )
}

/// Map parsed arguments onto a [`SirnaConfig`].
fn build_config(matches: &ArgMatches) -> Result<SirnaConfig, SirnaError> {
    let weights = matches
        .get_many::<String>("weight")
        .into_iter()
        .flatten()
        .map(|w| w.parse::<WeightOverride>())
        .collect::<Result<Vec<_>, _>>()?;

    let num_threads = matches.get_one::<usize>("threads").copied();

    Ok(SirnaConfig {
        window_width: matches
            .get_one::<usize>("window")
            .copied()
            .unwrap_or(DEFAULT_WINDOW_WIDTH),
        preset: parse_or_default::<RulePreset>(matches, "rules")?,
        weights,
        allow_negative: matches.get_flag("no-floor"),
        symbol_policy: if matches.get_flag("lenient") {
            SymbolPolicy::Neutral
        } else {
            SymbolPolicy::Reject
        },
        output_format: parse_or_default::<OutputFormat>(matches, "format")?,
        delimiter: if matches.get_flag("csv") {
            Delimiter::Comma
        } else {
            Delimiter::Tab
        },
        parallel: num_threads.is_some(),
        num_threads,
        quiet: matches.get_flag("quiet"),
    })
}

fn parse_or_default<T>(matches: &ArgMatches, id: &str) -> Result<T, SirnaError>
where
    T: std::str::FromStr<Err = SirnaError> + Default,
{
    matches
        .get_one::<String>(id)
        .map_or_else(|| Ok(T::default()), |s| s.parse())
}

fn run() -> Result<(), Box<dyn Error>> {
    let matches = cli().get_matches();
    let config = build_config(&matches)?;
    let quiet = config.quiet;
    let analyzer = SirnaAnalyzer::new(config)?;

    let results: Vec<SequenceScores> = if let Some(seq) = matches.get_one::<String>("sequence") {
        vec![analyzer.analyze_sequence(seq, None)?]
    } else if let Some(input_file) = matches.get_one::<String>("input") {
        analyzer.analyze_file(input_file)?
    } else {
        if !quiet {
            eprintln!("Reading sequence from stdin...");
        }
        analyzer.analyze_reader(io::stdin().lock())?
    };

    // Write output only once every sequence has scored
    let output_file = matches.get_one::<String>("output");
    let mut writer: Box<dyn Write> = if let Some(path) = output_file {
        Box::new(BufWriter::new(File::create(path)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    write_results(
        &mut writer,
        &results,
        analyzer.config.output_format,
        analyzer.config.delimiter,
    )?;
    writer.flush()?;

    if !quiet {
        eprintln!(
            "Scored {} windows in {} sequence(s).",
            results.iter().map(|r| r.records.len()).sum::<usize>(),
            results.len()
        );
        if let Some(path) = output_file {
            eprintln!("Output written to {path}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
