//! Orientation (D4 dihedral group) and the geometric grid transforms built on it.
//!
//! Every rotation, mirror, and diagonal reflection of a grid is one of the
//! eight elements of D4. Each transform below is the matching [`Orientation`]
//! applied to the grid's pixels.

use crate::grid::Grid;

/// Grid orientation as an element of the D4 dihedral group.
///
/// Represents a rotation (0, 90, 180, 270 degrees clockwise) optionally
/// followed by a horizontal flip.
///
/// ```text
///     IDENTITY      FLIP_H        ROTATE_180    FLIP_V
///     ┌───┐          ┌───┐          ┌───┐          ┌───┐
///     │ F │          │ Ꟊ │          │   │          │   │
///     │   │          │   │          │ Ꟊ │          │ F │
///     └───┘          └───┘          └───┘          └───┘
///
///     TRANSPOSE      ROTATE_90      TRANSVERSE     ROTATE_270
///     ┌────┐         ┌────┐         ┌────┐         ┌────┐
///     │ F  │         │  F │         │  Ꟊ │         │ Ꟊ  │
///     └────┘         └────┘         └────┘         └────┘
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Rotation in 90-degree increments (0-3). 0=0°, 1=90°, 2=180°, 3=270°.
    pub rotation: u8,
    /// Horizontal flip applied after rotation.
    pub flip: bool,
}

impl Orientation {
    /// No transformation.
    pub const IDENTITY: Self = Self {
        rotation: 0,
        flip: false,
    };
    /// Mirror left-right.
    pub const FLIP_H: Self = Self {
        rotation: 0,
        flip: true,
    };
    /// 180° rotation.
    pub const ROTATE_180: Self = Self {
        rotation: 2,
        flip: false,
    };
    /// Mirror top-bottom.
    pub const FLIP_V: Self = Self {
        rotation: 2,
        flip: true,
    };
    /// Reflect over the main diagonal.
    pub const TRANSPOSE: Self = Self {
        rotation: 1,
        flip: true,
    };
    /// 90° clockwise rotation.
    pub const ROTATE_90: Self = Self {
        rotation: 1,
        flip: false,
    };
    /// Reflect over the anti-diagonal.
    pub const TRANSVERSE: Self = Self {
        rotation: 3,
        flip: true,
    };
    /// 270° clockwise rotation (90° counter-clockwise).
    pub const ROTATE_270: Self = Self {
        rotation: 3,
        flip: false,
    };

    /// All 8 elements of the group.
    pub const ALL: [Self; 8] = [
        Self::IDENTITY,
        Self::FLIP_H,
        Self::ROTATE_180,
        Self::FLIP_V,
        Self::TRANSPOSE,
        Self::ROTATE_90,
        Self::TRANSVERSE,
        Self::ROTATE_270,
    ];

    /// Whether this is the identity transformation.
    pub fn is_identity(self) -> bool {
        self.rotation & 3 == 0 && !self.flip
    }

    /// Whether this orientation swaps width and height.
    pub fn swaps_axes(self) -> bool {
        self.rotation % 2 == 1
    }

    /// Compose two orientations: apply `self` first, then `other`.
    pub fn compose(self, other: Self) -> Self {
        if !self.flip {
            Self {
                rotation: self.rotation.wrapping_add(other.rotation) & 3,
                flip: other.flip,
            }
        } else {
            Self {
                rotation: (self.rotation.wrapping_sub(other.rotation)) & 3,
                flip: !other.flip,
            }
        }
    }

    /// The inverse orientation: `self.compose(self.inverse()) == IDENTITY`.
    pub fn inverse(self) -> Self {
        if !self.flip {
            Self {
                rotation: (4 - (self.rotation & 3)) & 3,
                flip: false,
            }
        } else {
            // Flips are self-inverse, but rotation direction reverses under flip
            self
        }
    }

    /// Output `(width, height)` for an input of `width x height`.
    pub fn transform_dimensions(self, width: usize, height: usize) -> (usize, usize) {
        if self.swaps_axes() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Where the input cell `(row, col)` lands in the output, as `(row, col)`.
    ///
    /// `width` and `height` are the input dimensions.
    ///
    /// # Panics
    ///
    /// Panics unless `row < height` and `col < width`.
    pub fn map_point(
        self,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    ) -> (usize, usize) {
        assert!(
            row < height && col < width,
            "point ({row}, {col}) outside {width}x{height}"
        );
        let (x, y, w, h) = (col, row, width, height);
        let (dx, dy) = match (self.rotation & 3, self.flip) {
            (0, false) => (x, y),
            (0, true) => (w - 1 - x, y),
            (1, false) => (h - 1 - y, x),
            (1, true) => (y, x),
            (2, false) => (w - 1 - x, h - 1 - y),
            (2, true) => (x, h - 1 - y),
            (3, false) => (y, w - 1 - x),
            (3, true) => (h - 1 - y, w - 1 - x),
            _ => unreachable!(),
        };
        (dy, dx)
    }

    /// Where the output cell `(row, col)` was read from in the input.
    ///
    /// `width` and `height` are the input dimensions.
    ///
    /// # Panics
    ///
    /// Panics unless `(row, col)` lies inside the output grid.
    pub fn source_point(
        self,
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    ) -> (usize, usize) {
        let (out_w, out_h) = self.transform_dimensions(width, height);
        self.inverse().map_point(row, col, out_w, out_h)
    }

    /// A new grid holding `grid` with this orientation applied.
    pub fn apply(self, grid: &Grid) -> Grid {
        let (w, h) = grid.dimensions();
        let (out_w, out_h) = self.transform_dimensions(w, h);
        let inverse = self.inverse();
        let cells = grid.cells();
        Grid::from_fn(out_w, out_h, |r, c| {
            let (sr, sc) = inverse.map_point(r, c, out_w, out_h);
            cells[sr * w + sc]
        })
    }
}

/// Reflect over the main diagonal: `result[c][r] = input[r][c]`.
pub fn transpose(grid: &Grid) -> Grid {
    Orientation::TRANSPOSE.apply(grid)
}

/// Rotate 90° clockwise: `result[c][height-1-r] = input[r][c]`.
///
/// ```
/// use pbmatrix::{Grid, rotate_90};
///
/// let g = Grid::from_rows([[0, 1], [1, 0]]).unwrap();
/// assert_eq!(rotate_90(&g).to_rows(), vec![vec![1, 0], vec![0, 1]]);
/// ```
pub fn rotate_90(grid: &Grid) -> Grid {
    Orientation::ROTATE_90.apply(grid)
}

/// Rotate 180°: `result[height-1-r][width-1-c] = input[r][c]`.
pub fn rotate_180(grid: &Grid) -> Grid {
    Orientation::ROTATE_180.apply(grid)
}

/// Rotate 270° clockwise (90° counter-clockwise). Inverse of [`rotate_90`].
pub fn rotate_270(grid: &Grid) -> Grid {
    Orientation::ROTATE_270.apply(grid)
}

/// Reverse each row: `result[r][c] = input[r][width-1-c]`.
pub fn mirror_horizontal(grid: &Grid) -> Grid {
    Orientation::FLIP_H.apply(grid)
}

/// Reverse row order: `result[r][c] = input[height-1-r][c]`.
pub fn mirror_vertical(grid: &Grid) -> Grid {
    Orientation::FLIP_V.apply(grid)
}

/// Reflect over the anti-diagonal.
pub fn transverse(grid: &Grid) -> Grid {
    Orientation::TRANSVERSE.apply(grid)
}
