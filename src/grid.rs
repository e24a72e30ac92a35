//! Dense row-major grid of binary pixels.

use alloc::vec::Vec;
use core::fmt;

use whereat::{At, at};

use crate::error::GridError;

/// One cell value. `0` is white, `1` is black.
///
/// Decoded grids only hold `0` and `1`, but [`add`](crate::add) and
/// [`scale_by`](crate::scale_by) do not clamp, so values outside that range
/// reach callers unchanged.
pub type Pixel = i32;

/// Rectangular pixel grid with at least one row and one column.
///
/// Every transform takes `&Grid` and returns a new `Grid`; inputs are never
/// modified.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Pixel>,
}

impl Grid {
    /// Build from row-major cells. `cells.len()` must equal `width * height`.
    pub fn from_vec(
        width: usize,
        height: usize,
        cells: Vec<Pixel>,
    ) -> Result<Self, At<GridError>> {
        if width == 0 || height == 0 {
            return Err(at!(GridError::Empty));
        }
        let expected = width.checked_mul(height).ok_or_else(|| {
            at!(GridError::LengthMismatch {
                expected: usize::MAX,
                len: cells.len(),
            })
        })?;
        if cells.len() != expected {
            return Err(at!(GridError::LengthMismatch {
                expected,
                len: cells.len(),
            }));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build from a list of equally long rows.
    ///
    /// ```
    /// use pbmatrix::Grid;
    ///
    /// let g = Grid::from_rows([[0, 1, 0], [1, 0, 1]]).unwrap();
    /// assert_eq!((g.width(), g.height()), (3, 2));
    /// assert_eq!(g.get(1, 2), Some(1));
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self, At<GridError>>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[Pixel]>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for (row_idx, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            let expected = *width.get_or_insert(row.len());
            if row.len() != expected {
                return Err(at!(GridError::Ragged {
                    row: row_idx,
                    len: row.len(),
                    expected,
                }));
            }
            cells.extend_from_slice(row);
            height += 1;
        }
        Self::from_vec(width.unwrap_or(0), height, cells)
    }

    /// A `width x height` grid with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: Pixel) -> Result<Self, At<GridError>> {
        let len = width.checked_mul(height).ok_or_else(|| {
            at!(GridError::LengthMismatch {
                expected: usize::MAX,
                len: 0,
            })
        })?;
        Self::from_vec(width, height, alloc::vec![value; len])
    }

    /// Build a grid whose cell at `(row, col)` is `f(row, col)`.
    ///
    /// Callers guarantee non-zero dimensions.
    pub(crate) fn from_fn(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Pixel,
    ) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut cells = Vec::with_capacity(width * height);
        for r in 0..height {
            for c in 0..width {
                cells.push(f(r, c));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Same shape, each cell replaced by `f(cell)`.
    pub(crate) fn map(&self, f: impl FnMut(Pixel) -> Pixel) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().copied().map(f).collect(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Row `r` as a slice, or `None` past the last row.
    pub fn row(&self, r: usize) -> Option<&[Pixel]> {
        if r < self.height {
            Some(&self.cells[r * self.width..(r + 1) * self.width])
        } else {
            None
        }
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + DoubleEndedIterator {
        self.cells.chunks_exact(self.width)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Pixel] {
        &self.cells
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Whether every cell is `0` or `1`.
    pub fn is_binary(&self) -> bool {
        self.cells.iter().all(|&p| p == 0 || p == 1)
    }
}

/// Renders the P1 encoding, identical to [`encode`](crate::encode).
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::codec::encode_to(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_rows_row_major() {
        let g = Grid::from_rows([[0, 1, 0], [1, 0, 1]]).unwrap();
        assert_eq!(g.cells(), &[0, 1, 0, 1, 0, 1]);
        assert_eq!(g.row(1), Some(&[1, 0, 1][..]));
        assert_eq!(g.row(2), None);
        assert_eq!(g.get(0, 1), Some(1));
        assert_eq!(g.get(0, 3), None);
        assert_eq!(g.get(2, 0), None);
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = Grid::from_rows(vec![vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            *err.error(),
            GridError::Ragged {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_empty() {
        let none: [[Pixel; 0]; 0] = [];
        assert_eq!(*Grid::from_rows(none).unwrap_err().error(), GridError::Empty);
        let empty_row: [[Pixel; 0]; 1] = [[]];
        assert_eq!(
            *Grid::from_rows(empty_row).unwrap_err().error(),
            GridError::Empty
        );
    }

    #[test]
    fn from_vec_checks_length() {
        let err = Grid::from_vec(2, 2, vec![0, 1, 0]).unwrap_err();
        assert_eq!(
            *err.error(),
            GridError::LengthMismatch {
                expected: 4,
                len: 3
            }
        );
        assert_eq!(
            *Grid::from_vec(0, 3, vec![]).unwrap_err().error(),
            GridError::Empty
        );
    }

    #[test]
    fn filled_and_binary() {
        let g = Grid::filled(3, 2, 1).unwrap();
        assert_eq!(g.dimensions(), (3, 2));
        assert!(g.is_binary());
        assert!(!Grid::filled(1, 1, 2).unwrap().is_binary());
    }

    #[test]
    fn to_rows_matches_rows() {
        let g = Grid::from_rows([[1, 2], [3, 4], [5, 6]]).unwrap();
        assert_eq!(g.to_rows(), vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
        assert_eq!(g.rows().len(), 3);
    }
}
