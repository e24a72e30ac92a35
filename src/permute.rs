//! Row and column exchanges, and the symmetric swap choices offered to users.

use core::fmt;
use core::iter::FusedIterator;

use whereat::{At, at};

use crate::error::IndexOutOfBounds;
use crate::grid::Grid;

/// A grid dimension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Indexes rows (`0..height`).
    Row,
    /// Indexes columns (`0..width`).
    Column,
}

impl Axis {
    /// Size of this dimension in `grid`.
    pub fn extent(self, grid: &Grid) -> usize {
        match self {
            Self::Row => grid.height(),
            Self::Column => grid.width(),
        }
    }

    fn check(self, grid: &Grid, index: usize) -> Result<(), At<IndexOutOfBounds>> {
        let len = self.extent(grid);
        if index < len {
            Ok(())
        } else {
            Err(at!(IndexOutOfBounds {
                axis: self,
                index,
                len,
            }))
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Row => "row",
            Self::Column => "column",
        })
    }
}

/// Exchange rows `i` and `j`. Returns a new grid; `grid` is not modified.
pub fn swap_rows(grid: &Grid, i: usize, j: usize) -> Result<Grid, At<IndexOutOfBounds>> {
    Axis::Row.check(grid, i)?;
    Axis::Row.check(grid, j)?;
    let cells = grid.cells();
    let w = grid.width();
    Ok(Grid::from_fn(w, grid.height(), |r, c| {
        let src = exchange(r, i, j);
        cells[src * w + c]
    }))
}

/// Exchange columns `i` and `j` in every row. Returns a new grid.
///
/// ```
/// use pbmatrix::{Grid, swap_columns};
///
/// let g = Grid::from_rows([[0, 1, 2]]).unwrap();
/// assert_eq!(swap_columns(&g, 0, 2).unwrap().to_rows(), vec![vec![2, 1, 0]]);
/// ```
pub fn swap_columns(grid: &Grid, i: usize, j: usize) -> Result<Grid, At<IndexOutOfBounds>> {
    Axis::Column.check(grid, i)?;
    Axis::Column.check(grid, j)?;
    let cells = grid.cells();
    let w = grid.width();
    Ok(Grid::from_fn(w, grid.height(), |r, c| {
        cells[r * w + exchange(c, i, j)]
    }))
}

/// Index that lands at `k` after exchanging `i` and `j`.
fn exchange(k: usize, i: usize, j: usize) -> usize {
    if k == i {
        j
    } else if k == j {
        i
    } else {
        k
    }
}

/// A symmetric pair `(k, size - 1 - k)` of zero-based indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SwapChoice {
    /// Outer index, always the smaller of the two.
    pub first: usize,
    /// Mirror of `first` across the middle.
    pub second: usize,
}

impl SwapChoice {
    /// Human-readable label using 1-based positions, e.g. `swap rows 1 and 5`.
    pub fn label(self, axis: Axis) -> ChoiceLabel {
        ChoiceLabel { choice: self, axis }
    }

    /// Apply this exchange to `grid` along `axis`.
    pub fn apply(self, grid: &Grid, axis: Axis) -> Result<Grid, At<IndexOutOfBounds>> {
        match axis {
            Axis::Row => swap_rows(grid, self.first, self.second),
            Axis::Column => swap_columns(grid, self.first, self.second),
        }
    }
}

/// [`Display`](fmt::Display) adapter returned by [`SwapChoice::label`].
#[derive(Copy, Clone, Debug)]
pub struct ChoiceLabel {
    choice: SwapChoice,
    axis: Axis,
}

impl fmt::Display for ChoiceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "swap {}s {} and {}",
            self.axis,
            self.choice.first + 1,
            self.choice.second + 1
        )
    }
}

/// Outermost-first symmetric pairs for a dimension of `size`.
///
/// Yields `size / 2` choices; the middle index of an odd size never appears.
/// Clone the iterator, or call again, to restart.
///
/// ```
/// use pbmatrix::swap_choices;
///
/// let pairs: Vec<_> = swap_choices(5).map(|c| (c.first, c.second)).collect();
/// assert_eq!(pairs, [(0, 4), (1, 3)]);
/// assert_eq!(swap_choices(1).count(), 0);
/// ```
pub fn swap_choices(size: usize) -> SwapChoices {
    SwapChoices {
        size,
        front: 0,
        back: size / 2,
    }
}

/// Iterator returned by [`swap_choices`].
#[derive(Clone, Debug)]
pub struct SwapChoices {
    size: usize,
    front: usize,
    back: usize,
}

impl SwapChoices {
    fn choice(&self, k: usize) -> SwapChoice {
        SwapChoice {
            first: k,
            second: self.size - 1 - k,
        }
    }
}

impl Iterator for SwapChoices {
    type Item = SwapChoice;

    fn next(&mut self) -> Option<SwapChoice> {
        if self.front >= self.back {
            return None;
        }
        let choice = self.choice(self.front);
        self.front += 1;
        Some(choice)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for SwapChoices {
    fn next_back(&mut self) -> Option<SwapChoice> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.choice(self.back))
    }
}

impl ExactSizeIterator for SwapChoices {}
impl FusedIterator for SwapChoices {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    fn labelled() -> Grid {
        Grid::from_rows([[0, 1, 2], [3, 4, 5], [6, 7, 8], [9, 10, 11]]).unwrap()
    }

    #[test]
    fn swap_rows_exchanges_whole_rows() {
        let s = swap_rows(&labelled(), 0, 3).unwrap();
        assert_eq!(
            s.to_rows(),
            vec![vec![9, 10, 11], vec![3, 4, 5], vec![6, 7, 8], vec![0, 1, 2]]
        );
    }

    #[test]
    fn swap_columns_exchanges_every_row() {
        let s = swap_columns(&labelled(), 2, 0).unwrap();
        assert_eq!(
            s.to_rows(),
            vec![vec![2, 1, 0], vec![5, 4, 3], vec![8, 7, 6], vec![11, 10, 9]]
        );
    }

    #[test]
    fn same_index_is_noop() {
        let g = labelled();
        assert_eq!(swap_rows(&g, 2, 2).unwrap(), g);
        assert_eq!(swap_columns(&g, 1, 1).unwrap(), g);
    }

    #[test]
    fn swaps_are_involutions() {
        let g = labelled();
        let twice = swap_rows(&swap_rows(&g, 1, 3).unwrap(), 1, 3).unwrap();
        assert_eq!(twice, g);
        let twice = swap_columns(&swap_columns(&g, 0, 1).unwrap(), 0, 1).unwrap();
        assert_eq!(twice, g);
    }

    #[test]
    fn swap_leaves_input_untouched() {
        let g = labelled();
        let before = g.clone();
        let _ = swap_rows(&g, 0, 1).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn out_of_range_index() {
        let g = labelled();
        let err = swap_rows(&g, 0, 4).unwrap_err();
        assert_eq!(
            *err.error(),
            IndexOutOfBounds {
                axis: Axis::Row,
                index: 4,
                len: 4
            }
        );
        let err = swap_columns(&g, 3, 0).unwrap_err();
        assert_eq!(
            *err.error(),
            IndexOutOfBounds {
                axis: Axis::Column,
                index: 3,
                len: 3
            }
        );
        assert_eq!(err.error().to_string(), "column index 3 out of range for length 3");
    }

    #[test]
    fn choices_for_odd_size_skip_middle() {
        let choices: Vec<SwapChoice> = swap_choices(5).collect();
        assert_eq!(
            choices,
            vec![
                SwapChoice {
                    first: 0,
                    second: 4
                },
                SwapChoice {
                    first: 1,
                    second: 3
                },
            ]
        );
        assert!(choices.iter().all(|c| c.first != 2 && c.second != 2));
    }

    #[test]
    fn choices_counts() {
        for (size, expected) in [(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (7, 3), (8, 4)] {
            let it = swap_choices(size);
            assert_eq!(it.len(), expected, "size {size}");
            assert_eq!(it.count(), expected, "size {size}");
        }
    }

    #[test]
    fn choices_restart_by_clone() {
        let it = swap_choices(6);
        let a: Vec<_> = it.clone().collect();
        let b: Vec<_> = it.collect();
        assert_eq!(a, b);
    }

    #[test]
    fn choices_reverse() {
        let back: Vec<usize> = swap_choices(6).rev().map(|c| c.first).collect();
        assert_eq!(back, vec![2, 1, 0]);
    }

    #[test]
    fn labels_are_one_based() {
        let mut it = swap_choices(5);
        let first = it.next().unwrap();
        assert_eq!(first.label(Axis::Row).to_string(), "swap rows 1 and 5");
        let second = it.next().unwrap();
        assert_eq!(second.label(Axis::Column).to_string(), "swap columns 2 and 4");
    }

    #[test]
    fn choice_apply_uses_axis() {
        let g = labelled();
        let outer = swap_choices(g.height()).next().unwrap();
        assert_eq!(outer.apply(&g, Axis::Row).unwrap(), swap_rows(&g, 0, 3).unwrap());
        let outer = swap_choices(g.width()).next().unwrap();
        assert_eq!(
            outer.apply(&g, Axis::Column).unwrap(),
            swap_columns(&g, 0, 2).unwrap()
        );
    }
}
