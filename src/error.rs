//! Error taxonomy for decoding, grid construction, and grid operations.
//!
//! Fallible entry points return these wrapped in [`whereat::At`], which records
//! where the error was raised. Read the kind back with `.error()`.

use crate::permute::Axis;

/// Failure to decode a P1 payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// First significant line is not `P1`.
    #[error("payload does not start with the P1 magic line")]
    BadMagic,
    /// Dimensions line is missing, malformed, non-positive, or overflows.
    #[error("dimensions line is missing or malformed")]
    BadHeader,
    /// Pixel token `token` is missing or is not `0`/`1`.
    #[error("pixel data is invalid or missing at token {token}")]
    BadData {
        /// Zero-based index into the flat pixel token sequence.
        token: usize,
    },
    /// Tokens beyond `width * height` under [`TrailingTokens::Reject`](crate::TrailingTokens::Reject).
    #[error("{extra} pixel tokens follow the last row")]
    TrailingData {
        /// Number of surplus tokens.
        extra: usize,
    },
    /// Declared pixel count exceeds the configured limit.
    #[error("{pixels} pixels exceeds the limit of {limit}")]
    TooLarge {
        /// `width * height` from the header.
        pixels: u64,
        /// Configured `max_pixels`.
        limit: u64,
    },
}

/// Failure to build a [`Grid`](crate::Grid) from raw cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GridError {
    /// Zero rows or zero columns.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// Row `row` differs in length from the first row.
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        /// Offending row index.
        row: usize,
        /// Its length.
        len: usize,
        /// Length of row 0.
        expected: usize,
    },
    /// Flat cell buffer does not hold exactly `width * height` cells.
    #[error("expected {expected} cells, got {len}")]
    LengthMismatch {
        /// `width * height`.
        expected: usize,
        /// Buffer length.
        len: usize,
    },
}

/// Element-wise operation on grids of different shapes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("grid dimensions differ: {left_width}x{left_height} vs {right_width}x{right_height}")]
pub struct DimensionMismatch {
    /// Width of the left operand.
    pub left_width: usize,
    /// Height of the left operand.
    pub left_height: usize,
    /// Width of the right operand.
    pub right_width: usize,
    /// Height of the right operand.
    pub right_height: usize,
}

/// Row or column index outside the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{axis} index {index} out of range for length {len}")]
pub struct IndexOutOfBounds {
    /// Which dimension was indexed.
    pub axis: Axis,
    /// Requested index.
    pub index: usize,
    /// Size of that dimension.
    pub len: usize,
}

/// Any failure from applying an [`Operation`](crate::Operation).
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum OpError {
    /// `Add` with a differently shaped operand.
    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),
    /// Swap with an index outside the grid.
    #[error(transparent)]
    IndexOutOfBounds(#[from] IndexOutOfBounds),
}
