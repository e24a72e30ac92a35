//! Element-wise arithmetic over grids.
//!
//! Results are never clamped back to `{0, 1}`: two set pixels sum to `2`, and
//! negating `2` gives `-1`. Encoding such a grid writes those values verbatim,
//! which most PBM readers will reject. Check [`Grid::is_binary`] before export
//! if that matters. Overflow saturates at the [`Pixel`] limits.

use whereat::{At, at};

use crate::error::DimensionMismatch;
use crate::grid::{Grid, Pixel};

/// Element-wise sum of two grids of equal shape.
///
/// ```
/// use pbmatrix::{Grid, add};
///
/// let a = Grid::from_rows([[1, 0], [0, 1]]).unwrap();
/// let b = Grid::from_rows([[1, 1], [0, 0]]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().to_rows(), vec![vec![2, 1], vec![0, 1]]);
/// ```
pub fn add(a: &Grid, b: &Grid) -> Result<Grid, At<DimensionMismatch>> {
    if a.dimensions() != b.dimensions() {
        return Err(at!(DimensionMismatch {
            left_width: a.width(),
            left_height: a.height(),
            right_width: b.width(),
            right_height: b.height(),
        }));
    }
    let (lhs, rhs) = (a.cells(), b.cells());
    let w = a.width();
    Ok(Grid::from_fn(w, a.height(), |r, c| {
        lhs[r * w + c].saturating_add(rhs[r * w + c])
    }))
}

/// Multiply every cell by `factor`.
pub fn scale_by(grid: &Grid, factor: u32) -> Grid {
    let factor = Pixel::try_from(factor).unwrap_or(Pixel::MAX);
    grid.map(|p| p.saturating_mul(factor))
}

/// Replace every cell `p` with `1 - p`.
///
/// The complement for binary grids. Other values pass through the same
/// formula (`2` becomes `-1`).
pub fn negate(grid: &Grid) -> Grid {
    grid.map(|p| (1 as Pixel).saturating_sub(p))
}

/// Sum of all cell values.
///
/// Equals the number of set pixels for binary grids; may exceed
/// `width * height` otherwise.
pub fn population_count(grid: &Grid) -> i64 {
    grid.cells().iter().map(|&p| i64::from(p)).sum()
}
