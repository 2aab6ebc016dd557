//! Ready-made rule sets.
//!
//! ## Reynolds
//!
//! The eight rational-design criteria of Reynolds et al. (2004), scored on
//! the sense strand of a 19-mer:
//!
//! | rule          | criterion                                 | points |
//! |---------------|-------------------------------------------|--------|
//! | `gc_content`  | 6-10 G/C (30%-52%)                        | +1     |
//! | `terminal_at` | each A/U at positions 15-19               | +1     |
//! | `homopolymer` | a run of 4 identical bases                | −1     |
//! | `a_at_19`     | A at position 19                          | +1     |
//! | `a_at_3`      | A at position 3                           | +1     |
//! | `t_at_10`     | U at position 10                          | +1     |
//! | `gc_at_19`    | G or C at position 19                     | −1     |
//! | `g_at_13`     | G at position 13                          | −1     |
//!
//! Totals are clamped at 0, so unweighted scores fall in `0..=9`.

use crate::config::RulePreset;
use crate::constants::{
    REYNOLDS_GC_MAX, REYNOLDS_GC_MIN, REYNOLDS_HOMOPOLYMER_RUN, REYNOLDS_SCORE_FLOOR,
    REYNOLDS_TERMINAL_OFFSET, SENSE_POSITION_3, SENSE_POSITION_10, SENSE_POSITION_13,
    SENSE_POSITION_19,
};
use crate::rules::ScoringRules;
use crate::rules::heuristics::{BaseAt, GcBalance, GcCount, HomopolymerRun, TerminalAtCount};
use crate::types::Nucleotide;

/// Rule set for `preset` with default weights.
#[must_use]
pub fn build(preset: RulePreset) -> ScoringRules {
    match preset {
        RulePreset::Reynolds => reynolds(),
        RulePreset::GcCount => gc_count(),
    }
}

/// The Reynolds et al. (2004) criteria, all weighted 1, floored at 0.
#[must_use]
pub fn reynolds() -> ScoringRules {
    ScoringRules::new()
        .with_rule(
            GcBalance {
                name: "gc_content".to_string(),
                min: REYNOLDS_GC_MIN,
                max: REYNOLDS_GC_MAX,
            },
            1.0,
        )
        .with_rule(
            TerminalAtCount {
                name: "terminal_at".to_string(),
                from: REYNOLDS_TERMINAL_OFFSET,
            },
            1.0,
        )
        .with_rule(
            HomopolymerRun {
                name: "homopolymer".to_string(),
                run_length: REYNOLDS_HOMOPOLYMER_RUN,
            },
            1.0,
        )
        .with_rule(base_at("a_at_19", SENSE_POSITION_19, &[Nucleotide::A], 1.0), 1.0)
        .with_rule(base_at("a_at_3", SENSE_POSITION_3, &[Nucleotide::A], 1.0), 1.0)
        .with_rule(base_at("t_at_10", SENSE_POSITION_10, &[Nucleotide::T], 1.0), 1.0)
        .with_rule(
            base_at(
                "gc_at_19",
                SENSE_POSITION_19,
                &[Nucleotide::G, Nucleotide::C],
                -1.0,
            ),
            1.0,
        )
        .with_rule(base_at("g_at_13", SENSE_POSITION_13, &[Nucleotide::G], -1.0), 1.0)
        .with_floor(REYNOLDS_SCORE_FLOOR)
}

/// +1 per G or C, no floor.
#[must_use]
pub fn gc_count() -> ScoringRules {
    ScoringRules::new().with_rule(GcCount, 1.0)
}

fn base_at(name: &str, offset: usize, bases: &[Nucleotide], points: f64) -> BaseAt {
    BaseAt {
        name: name.to_string(),
        offset,
        bases: bases.to_vec(),
        points,
    }
}
