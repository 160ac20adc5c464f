//! Exercises and the worksheet exercise-set builder.

use std::fmt;

use thiserror::Error;

use crate::rng::SeededRng;
use crate::sampler::sample_factor;
use crate::weights::WeightTable;

/// Parameter combinations the builder rejects before touching the RNG.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("level must be at least 1, got {0}")]
    InvalidLevel(u32),
    #[error("{total} exercises cannot cover every factor up to level {level}")]
    TooFewExercises { total: usize, level: u32 },
}

/// One multiplication exercise, displayed as `first × second`.
///
/// The operand order is display order only; which operand came from the level
/// and which from the fill sampler is not recoverable, by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exercise {
    first: u32,
    second: u32,
}

impl Exercise {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    /// Pairs two factors with the display order decided by a coin flip.
    pub fn oriented(a: u32, b: u32, rng: &mut SeededRng) -> Self {
        if rng.coin() {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// True if `factor` appears on either side of the multiplication.
    pub fn has_operand(&self, factor: u32) -> bool {
        self.first == factor || self.second == factor
    }
}

impl fmt::Display for Exercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \u{00d7} {}", self.first, self.second)
    }
}

/// Builds the full exercise list for one worksheet.
///
/// The first `level + 1` exercises pair every factor in `[0, level]` with the
/// level itself, so each row of the selected times table occurs at least
/// once. The remaining slots are filled by weighted sampling: one factor from
/// `[1, level]`, the other from `[0, max(max_factor, level)]`. A single
/// shuffle at the end spreads the coverage exercises across the page.
///
/// The result has exactly `total_count` entries and is fully determined by
/// `(level, max_factor, total_count)` and the RNG seed.
pub fn build_exercise_set(
    level: u32,
    max_factor: u32,
    total_count: usize,
    weights: &WeightTable,
    rng: &mut SeededRng,
) -> Result<Vec<Exercise>, BuildError> {
    if level < 1 {
        return Err(BuildError::InvalidLevel(level));
    }
    let coverage = level as usize + 1;
    if total_count < coverage {
        return Err(BuildError::TooFewExercises {
            total: total_count,
            level,
        });
    }

    let upper = max_factor.max(level);
    let mut exercises = Vec::with_capacity(total_count);

    for factor in 0..=level {
        exercises.push(Exercise::oriented(factor, level, rng));
    }

    for _ in coverage..total_count {
        let a = sample_factor(1, level, weights, rng);
        let b = sample_factor(0, upper, weights, rng);
        exercises.push(Exercise::oriented(a, b, rng));
    }

    rng.shuffle(&mut exercises);
    Ok(exercises)
}
