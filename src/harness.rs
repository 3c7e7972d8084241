//! Demonstration harness behind the `indir_sort` binary.
//!
//! Generates a pseudo-random array from `<size> <modulus> <seed>`, sorts it indirectly and
//! renders the input, its positions, the sorted view and the permutation.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::engine::{Algorithm, EngineConfig, IndexSortEngine, SortOutcome};
use crate::error::{Result, SortError};

pub const DEFAULT_WIDTH: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub size: usize,
    pub modulus: u32,
    pub seed: u64,
    pub algorithm: Algorithm,
    pub verify: bool,
    pub width: usize,
}

impl HarnessConfig {
    pub fn new(size: usize, modulus: u32, seed: u64) -> Self {
        Self {
            size,
            modulus,
            seed,
            algorithm: Algorithm::default(),
            verify: false,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.modulus == 0 {
            return Err(SortError::invalid_input("modulus must be at least 1"));
        }

        if self.width == 0 {
            return Err(SortError::invalid_input("column width must be at least 1"));
        }

        Ok(())
    }
}

/// `size` values drawn uniformly from `[0, modulus)`. The same seed always yields the same array.
pub fn generate_input(size: usize, modulus: u32, seed: u64) -> Result<Vec<u32>> {
    if modulus == 0 {
        return Err(SortError::invalid_input("modulus must be at least 1"));
    }

    let mut rng = StdRng::seed_from_u64(seed);

    Ok((0..size).map(|_| rng.gen_range(0..modulus)).collect())
}

pub fn run(config: &HarnessConfig) -> Result<Report> {
    config.validate()?;

    let input = generate_input(config.size, config.modulus, config.seed)?;
    info!(
        size = config.size,
        modulus = config.modulus,
        seed = config.seed,
        "generated input"
    );

    let engine = IndexSortEngine::with_config(EngineConfig {
        algorithm: config.algorithm,
        // Debug builds always verify, release builds only on request.
        verify_order: config.verify || cfg!(debug_assertions),
    });
    let outcome = engine.sort(&input)?;
    info!(
        algorithm = %config.algorithm,
        comparisons = outcome.comparisons,
        "sorted input"
    );

    Ok(Report {
        input,
        outcome,
        width: config.width,
    })
}

/// Everything the harness prints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub input: Vec<u32>,
    pub outcome: SortOutcome,
    pub width: usize,
}

impl Report {
    /// The input read through the permutation.
    pub fn sorted_view(&self) -> Vec<u32> {
        self.outcome
            .permutation
            .iter()
            .map(|&idx| self.input[idx])
            .collect()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width;

        writeln!(f)?;
        writeln!(f, "Input array")?;
        write_row(f, self.input.iter(), width)?;
        write_row(f, 0..self.input.len(), width)?;

        writeln!(
            f,
            "Sorted array after {} comparisons",
            self.outcome.comparisons
        )?;
        write_row(f, self.sorted_view().iter(), width)?;
        write_row(f, self.outcome.permutation.iter(), width)
    }
}

fn write_row<I>(f: &mut fmt::Formatter<'_>, cells: I, width: usize) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for cell in cells {
        write!(f, "{cell:>width$} ")?;
    }

    writeln!(f)
}
