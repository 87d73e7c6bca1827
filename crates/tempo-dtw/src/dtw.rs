//! Banded DTW recurrence shared by both aligners.

use tracing::warn;

use crate::config::AlignerConfig;
use crate::cost::{UNREACHED, minimum_of};
use crate::error::AlignError;
use crate::grid::CostGrid;

/// Fill an `n × m` cost grid.
///
/// `local(i, j)` is the local distance between `test[i]` and `reference[j]`.
/// The base cell, first column, and first row are always filled by forced
/// unit steps. Interior row `i` fills only `config.band().interior_columns(i, m)`,
/// taking the cheapest admissible step of `config.steps()`, each weighted by
/// `Δi + Δj`. Cells outside the band, and cells with no filled admissible
/// predecessor, are left unfilled. A filled cell may hold `f64::INFINITY` when
/// the accumulated cost overflows.
///
/// Requires `n >= 1` and `m >= 1`.
pub(crate) fn accumulate<L>(n: usize, m: usize, config: &AlignerConfig, local: L) -> CostGrid
where
    L: Fn(usize, usize) -> f64,
{
    let mut grid = CostGrid::new(n, m);

    grid.set(0, 0, local(0, 0));
    for i in 1..n {
        grid.set(i, 0, grid[(i - 1, 0)] + local(i, 0));
    }
    for j in 1..m {
        grid.set(0, j, grid[(0, j - 1)] + local(0, j));
    }

    let band = config.band();
    let steps = config.steps();
    let mut candidates = [UNREACHED; 5];

    for i in 1..n {
        for j in band.interior_columns(i, m) {
            let cost = local(i, j);
            let mut reachable = false;
            for (slot, step) in candidates.iter_mut().zip(&steps) {
                *slot = UNREACHED;
                if !step.admits(i, j) {
                    continue;
                }
                let (pi, pj) = step.predecessor(i, j);
                if let Some(pred) = grid.cost(pi, pj) {
                    *slot = pred + step.weight() * cost;
                    reachable = true;
                }
            }
            if reachable {
                grid.set(i, j, minimum_of(&candidates));
            }
        }
    }

    grid
}

/// Read the final cell of a filled grid.
///
/// # Errors
///
/// | Variant | Condition |
/// |---|---|
/// | [`AlignError::BandStarvation`] | The final cell was never reached |
/// | [`AlignError::CostOverflow`] | The final cell was reached but its cost is not finite |
pub(crate) fn final_cost(grid: &CostGrid, config: &AlignerConfig) -> Result<f64, AlignError> {
    let (n, m) = (grid.rows(), grid.cols());
    match grid.final_cost() {
        None => {
            let radius = config.radius();
            warn!(n, m, radius, "band leaves the final cell unreachable");
            Err(AlignError::BandStarvation { n, m, radius })
        }
        Some(total) if !total.is_finite() => {
            warn!(n, m, "accumulated cost overflowed");
            Err(AlignError::CostOverflow { n, m })
        }
        Some(total) => Ok(total),
    }
}
