//! Operation catalog and sequential pipelines.
//!
//! Each [`Operation`] variant corresponds to exactly one library function.
//! A [`Pipeline`] threads a grid through a list of operations, feeding each
//! result into the next step.
//!
//! ```
//! use pbmatrix::{Pipeline, decode, encode};
//!
//! let grid = decode("P1\n3 2\n0 1 0\n1 1 0").unwrap();
//! let out = Pipeline::new()
//!     .rotate_90()
//!     .swap_rows(0, 2)
//!     .negate()
//!     .run(&grid)
//!     .unwrap();
//! assert_eq!(encode(&out), "P1\n2 3\n1 1\n0 0\n0 1");
//! ```

use alloc::vec::Vec;

use whereat::At;

use crate::arith;
use crate::error::OpError;
use crate::grid::Grid;
use crate::orientation;
use crate::permute::{self, Axis, SwapChoice};

/// A single grid transformation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`orientation::transpose`].
    Transpose,
    /// [`orientation::rotate_90`].
    Rotate90,
    /// [`orientation::rotate_180`].
    Rotate180,
    /// [`orientation::rotate_270`].
    Rotate270,
    /// [`orientation::mirror_horizontal`].
    MirrorHorizontal,
    /// [`orientation::mirror_vertical`].
    MirrorVertical,
    /// [`permute::swap_rows`].
    SwapRows(usize, usize),
    /// [`permute::swap_columns`].
    SwapColumns(usize, usize),
    /// [`arith::add`] with the carried operand on the right.
    Add(Grid),
    /// [`arith::scale_by`].
    ScaleBy(u32),
    /// [`arith::negate`].
    Negate,
}

impl Operation {
    /// Swap along `axis` using a choice from [`swap_choices`](crate::swap_choices).
    pub fn swap(axis: Axis, choice: SwapChoice) -> Self {
        match axis {
            Axis::Row => Self::SwapRows(choice.first, choice.second),
            Axis::Column => Self::SwapColumns(choice.first, choice.second),
        }
    }

    /// Short stable name, e.g. `rotate-90`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Transpose => "transpose",
            Self::Rotate90 => "rotate-90",
            Self::Rotate180 => "rotate-180",
            Self::Rotate270 => "rotate-270",
            Self::MirrorHorizontal => "mirror-horizontal",
            Self::MirrorVertical => "mirror-vertical",
            Self::SwapRows(..) => "swap-rows",
            Self::SwapColumns(..) => "swap-columns",
            Self::Add(_) => "add",
            Self::ScaleBy(_) => "scale-by",
            Self::Negate => "negate",
        }
    }

    /// Whether the output shape is `(height, width)` of the input.
    pub fn swaps_axes(&self) -> bool {
        matches!(self, Self::Transpose | Self::Rotate90 | Self::Rotate270)
    }

    /// Apply to `grid`, returning a new grid.
    pub fn apply(&self, grid: &Grid) -> Result<Grid, At<OpError>> {
        let out = match self {
            Self::Transpose => orientation::transpose(grid),
            Self::Rotate90 => orientation::rotate_90(grid),
            Self::Rotate180 => orientation::rotate_180(grid),
            Self::Rotate270 => orientation::rotate_270(grid),
            Self::MirrorHorizontal => orientation::mirror_horizontal(grid),
            Self::MirrorVertical => orientation::mirror_vertical(grid),
            Self::SwapRows(i, j) => permute::swap_rows(grid, *i, *j).map_err(lift)?,
            Self::SwapColumns(i, j) => permute::swap_columns(grid, *i, *j).map_err(lift)?,
            Self::Add(rhs) => arith::add(grid, rhs).map_err(lift)?,
            Self::ScaleBy(factor) => arith::scale_by(grid, *factor),
            Self::Negate => arith::negate(grid),
        };
        Ok(out)
    }
}

/// Widen a library error into an [`OpError`], keeping its trace.
fn lift<E: Into<OpError>>(err: At<E>) -> At<OpError> {
    err.map_error(Into::into)
}

/// Ordered list of operations applied left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    ops: Vec<Operation>,
}

impl Pipeline {
    /// Empty pipeline; running it returns a copy of the input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary operation.
    pub fn then(mut self, op: Operation) -> Self {
        self.ops.push(op);
        self
    }

    /// Append [`Operation::Transpose`].
    pub fn transpose(self) -> Self {
        self.then(Operation::Transpose)
    }

    /// Append [`Operation::Rotate90`].
    pub fn rotate_90(self) -> Self {
        self.then(Operation::Rotate90)
    }

    /// Append [`Operation::Rotate180`].
    pub fn rotate_180(self) -> Self {
        self.then(Operation::Rotate180)
    }

    /// Append [`Operation::Rotate270`].
    pub fn rotate_270(self) -> Self {
        self.then(Operation::Rotate270)
    }

    /// Append [`Operation::MirrorHorizontal`].
    pub fn mirror_horizontal(self) -> Self {
        self.then(Operation::MirrorHorizontal)
    }

    /// Append [`Operation::MirrorVertical`].
    pub fn mirror_vertical(self) -> Self {
        self.then(Operation::MirrorVertical)
    }

    /// Append [`Operation::SwapRows`].
    pub fn swap_rows(self, i: usize, j: usize) -> Self {
        self.then(Operation::SwapRows(i, j))
    }

    /// Append [`Operation::SwapColumns`].
    pub fn swap_columns(self, i: usize, j: usize) -> Self {
        self.then(Operation::SwapColumns(i, j))
    }

    /// Append [`Operation::Add`].
    pub fn add_grid(self, rhs: Grid) -> Self {
        self.then(Operation::Add(rhs))
    }

    /// Append [`Operation::ScaleBy`].
    pub fn scale_by(self, factor: u32) -> Self {
        self.then(Operation::ScaleBy(factor))
    }

    /// Append [`Operation::Negate`].
    pub fn negate(self) -> Self {
        self.then(Operation::Negate)
    }

    /// The queued operations.
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Number of queued operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether no operations are queued.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Output `(width, height)` for an input of `width x height`, if every step succeeds.
    pub fn output_dimensions(&self, width: usize, height: usize) -> (usize, usize) {
        self.ops.iter().fold((width, height), |(w, h), op| {
            if op.swaps_axes() { (h, w) } else { (w, h) }
        })
    }

    /// Run every operation in order. The first failure aborts the run and no
    /// intermediate grid is returned.
    pub fn run(&self, grid: &Grid) -> Result<Grid, At<OpError>> {
        let mut current = grid.clone();
        for (_step, op) in self.ops.iter().enumerate() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                step = _step,
                op = op.name(),
                width = current.width(),
                height = current.height(),
                "applying operation"
            );
            current = op.apply(&current)?;
        }
        Ok(current)
    }
}

impl FromIterator<Operation> for Pipeline {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Extend<Operation> for Pipeline {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}
