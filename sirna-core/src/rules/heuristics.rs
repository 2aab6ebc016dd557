use crate::rules::Heuristic;
use crate::sequence::Window;
use crate::types::Nucleotide;

/// +1 for every G or C in the window.
#[derive(Debug, Clone, Copy, Default)]
pub struct GcCount;

impl Heuristic for GcCount {
    fn name(&self) -> &str {
        "gc_count"
    }

    fn evaluate(&self, window: &Window<'_>) -> f64 {
        window.count(Nucleotide::is_gc) as f64
    }
}

/// +1 when the number of G/C symbols lies within `min..=max`.
#[derive(Debug, Clone)]
pub struct GcBalance {
    pub name: String,
    pub min: usize,
    pub max: usize,
}

impl Heuristic for GcBalance {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, window: &Window<'_>) -> f64 {
        let gc = window.count(Nucleotide::is_gc);
        if (self.min..=self.max).contains(&gc) {
            1.0
        } else {
            0.0
        }
    }
}

/// +1 for every A or T at offsets `from` onwards.
///
/// Zero when the window is no longer than `from`.
#[derive(Debug, Clone)]
pub struct TerminalAtCount {
    pub name: String,
    pub from: usize,
}

impl Heuristic for TerminalAtCount {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, window: &Window<'_>) -> f64 {
        window.suffix(self.from).count(Nucleotide::is_at) as f64
    }
}

/// −1 when the window holds a stretch of `run_length` identical bases.
#[derive(Debug, Clone)]
pub struct HomopolymerRun {
    pub name: String,
    pub run_length: usize,
}

impl Heuristic for HomopolymerRun {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, window: &Window<'_>) -> f64 {
        if window.longest_homopolymer() >= self.run_length {
            -1.0
        } else {
            0.0
        }
    }
}

/// `points` when the symbol at `offset` is one of `bases`.
///
/// Zero when `offset` is past the end of the window.
#[derive(Debug, Clone)]
pub struct BaseAt {
    pub name: String,
    pub offset: usize,
    pub bases: Vec<Nucleotide>,
    pub points: f64,
}

impl Heuristic for BaseAt {
    fn name(&self) -> &str {
        &self.name
    }

    fn evaluate(&self, window: &Window<'_>) -> f64 {
        match window.get(self.offset) {
            Some(n) if self.bases.contains(&n) => self.points,
            _ => 0.0,
        }
    }
}
