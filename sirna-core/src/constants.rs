// =============================================================================
// Windowing
// =============================================================================

/// Length of an siRNA sense-strand target in nucleotides
pub const SIRNA_LENGTH: usize = 19;

/// Default scoring window width
pub const DEFAULT_WINDOW_WIDTH: usize = SIRNA_LENGTH;

/// Identifier given to a sequence supplied without a FASTA header
pub const DEFAULT_SEQUENCE_ID: &str = "sequence_1";

// =============================================================================
// Reynolds et al. (2004) criteria
// =============================================================================

/// Lower bound on G/C count in a 19-mer (~30% GC)
pub const REYNOLDS_GC_MIN: usize = 6;

/// Upper bound on G/C count in a 19-mer (~52% GC)
pub const REYNOLDS_GC_MAX: usize = 10;

/// Offset of sense position 15; positions 15-19 form the A/U-rich 3' end
pub const REYNOLDS_TERMINAL_OFFSET: usize = 14;

/// Shortest homopolymer stretch that is penalized
pub const REYNOLDS_HOMOPOLYMER_RUN: usize = 4;

/// Offset of sense position 3
pub const SENSE_POSITION_3: usize = 2;

/// Offset of sense position 10
pub const SENSE_POSITION_10: usize = 9;

/// Offset of sense position 13
pub const SENSE_POSITION_13: usize = 12;

/// Offset of sense position 19
pub const SENSE_POSITION_19: usize = 18;

/// Scores below this are reported as this value
pub const REYNOLDS_SCORE_FLOOR: f64 = 0.0;

// =============================================================================
// Binned output
// =============================================================================

/// Highest score column of the binned layout; larger scores share it
pub const BINNED_MAX_COLUMN: usize = 99;

/// Fixed top column of the classic layout (the Reynolds maximum)
pub const CLASSIC_TOP_COLUMN: usize = 9;

/// Width positions are left-justified to in the classic layout
pub const CLASSIC_POSITION_WIDTH: usize = 5;
