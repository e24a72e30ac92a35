//! Plain PBM (`P1`) codec and pure transforms over binary pixel grids.
//!
//! Decode a payload into a [`Grid`], thread it through any number of
//! transforms (each returns a new grid), and encode the result. The crate
//! holds no state between calls.
//!
//! # Modules
//!
//! - [`codec`] — `P1` text decoding and encoding
//! - [`orientation`] — D4 dihedral group: transpose, rotations, mirrors
//! - [`permute`] — row/column swaps and symmetric swap choices
//! - [`arith`] — element-wise sum, scaling, negation, population count
//! - [`plan`] — closed operation catalog and sequential pipelines
//!
//! # Example
//!
//! ```
//! use pbmatrix::{decode, encode, population_count, rotate_90};
//!
//! let grid = decode("P1\n# tiny\n2 2\n0 1\n1 0").unwrap();
//! let rotated = rotate_90(&grid);
//! assert_eq!(encode(&rotated), "P1\n2 2\n1 0\n0 1");
//! assert_eq!(population_count(&rotated), 2);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod arith;
pub mod codec;
pub mod error;
pub mod grid;
pub mod orientation;
pub mod permute;
pub mod plan;

pub use arith::{add, negate, population_count, scale_by};
pub use codec::{DecodeOptions, MAGIC, TrailingTokens, decode, encode, encode_to};
pub use error::{DimensionMismatch, GridError, IndexOutOfBounds, OpError, ParseError};
pub use grid::{Grid, Pixel};
pub use orientation::{
    Orientation, mirror_horizontal, mirror_vertical, rotate_90, rotate_180, rotate_270,
    transpose, transverse,
};
pub use permute::{Axis, ChoiceLabel, SwapChoice, SwapChoices, swap_choices, swap_columns, swap_rows};
pub use plan::{Operation, Pipeline};

pub use whereat::At;

whereat::define_at_crate_info!();
