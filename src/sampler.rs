//! Weighted factor selection by inverse-CDF walk.
//!
//! A draw picks a point `y` uniformly inside the total weight mass of the
//! range, then walks the factors in order until the cumulative weight reaches
//! `y`. Factors with larger weights cover more of the mass and are hit more
//! often; the distribution is exactly proportional to the table weights.

use tracing::trace;

use crate::rng::SeededRng;
use crate::weights::WeightTable;

/// Draws one factor from the closed range `[min_factor, max_factor]` with
/// probability proportional to each value's table weight.
///
/// The walk is O(`max_factor - min_factor`). A degenerate range
/// (`min_factor == max_factor`) returns that value regardless of its weight.
///
/// # Panics
/// Panics if `min_factor > max_factor`. The cumulative walk reaching the end
/// of the range without covering the drawn point would mean the weight table
/// and the range sum disagree; that is a bug, not a recoverable condition,
/// and fails the same way.
pub fn sample_factor(
    min_factor: u32,
    max_factor: u32,
    weights: &WeightTable,
    rng: &mut SeededRng,
) -> u32 {
    assert!(
        min_factor <= max_factor,
        "invalid factor range: {min_factor} > {max_factor}"
    );

    let weight_sum = weights.sum(min_factor, max_factor);
    let y = rng.uniform_int(1, weight_sum);
    trace!(min_factor, max_factor, weight_sum, y, "sampling factor");

    let mut cumulative = 0u64;
    for factor in min_factor..=max_factor {
        cumulative += u64::from(weights.weight(factor));
        if cumulative >= y {
            return factor;
        }
    }

    unreachable!("cumulative weight {cumulative} never reached draw {y}");
}
