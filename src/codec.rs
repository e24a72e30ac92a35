//! Plain PBM (`P1`) text codec.
//!
//! ```text
//! P1
//! # comment lines are dropped before anything is interpreted
//! 3 2
//! 0 1 0
//! 1 0 1
//! ```
//!
//! Blank lines and lines whose trimmed text starts with `#` are removed first.
//! The remaining lines are the magic token, the `<width> <height>` header, and
//! whitespace-separated pixel tokens laid out row-major.
//!
//! # Example
//!
//! ```
//! let grid = pbmatrix::decode("P1\n3 2\n0 1 0\n1 0 1").unwrap();
//! assert_eq!(grid.to_rows(), vec![vec![0, 1, 0], vec![1, 0, 1]]);
//! assert_eq!(pbmatrix::encode(&grid), "P1\n3 2\n0 1 0\n1 0 1");
//! ```

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use whereat::{At, at};

use crate::error::ParseError;
use crate::grid::{Grid, Pixel};

/// Magic token identifying the plain-text bitmap variant.
pub const MAGIC: &str = "P1";

/// What to do with pixel tokens past `width * height`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TrailingTokens {
    /// Drop them unread. Default.
    #[default]
    Ignore,
    /// Fail with [`ParseError::TrailingData`].
    Reject,
}

/// Decoder configuration.
///
/// ```
/// use pbmatrix::{DecodeOptions, ParseError, TrailingTokens};
///
/// let strict = DecodeOptions::new().with_trailing(TrailingTokens::Reject);
/// let err = strict.decode("P1\n1 1\n1 0").unwrap_err();
/// assert_eq!(*err.error(), ParseError::TrailingData { extra: 1 });
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodeOptions {
    /// Surplus token policy.
    pub trailing: TrailingTokens,
    /// Upper bound on `width * height`. `None` accepts any size that fits in memory.
    pub max_pixels: Option<u64>,
}

impl DecodeOptions {
    /// Lenient defaults: surplus tokens ignored, no size limit.
    pub const fn new() -> Self {
        Self {
            trailing: TrailingTokens::Ignore,
            max_pixels: None,
        }
    }

    /// Set the surplus token policy.
    pub const fn with_trailing(mut self, trailing: TrailingTokens) -> Self {
        self.trailing = trailing;
        self
    }

    /// Cap the declared pixel count.
    pub const fn with_max_pixels(mut self, limit: u64) -> Self {
        self.max_pixels = Some(limit);
        self
    }

    /// Decode a P1 payload under these options.
    pub fn decode(&self, text: &str) -> Result<Grid, At<ParseError>> {
        let mut lines = significant_lines(text);

        if lines.next() != Some(MAGIC) {
            return Err(at!(ParseError::BadMagic));
        }

        let (width, height) = lines
            .next()
            .and_then(parse_header)
            .ok_or_else(|| at!(ParseError::BadHeader))?;
        let pixels = width
            .checked_mul(height)
            .ok_or_else(|| at!(ParseError::BadHeader))?;

        if let Some(limit) = self.max_pixels {
            let pixels = pixels as u64;
            if pixels > limit {
                return Err(at!(ParseError::TooLarge { pixels, limit }));
            }
        }

        let mut tokens = lines.flat_map(str::split_whitespace);
        // Every token takes at least one byte of input.
        let mut cells = Vec::with_capacity(pixels.min(text.len()));
        for token in 0..pixels {
            let value = tokens
                .next()
                .and_then(parse_pixel)
                .ok_or_else(|| at!(ParseError::BadData { token }))?;
            cells.push(value);
        }

        let extra = tokens.count();
        if extra > 0 {
            match self.trailing {
                TrailingTokens::Reject => {
                    return Err(at!(ParseError::TrailingData { extra }));
                }
                TrailingTokens::Ignore => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(extra, "ignoring pixel tokens past the last row");
                }
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(width, height, "decoded P1 grid");

        Grid::from_vec(width, height, cells).map_err(|_| at!(ParseError::BadHeader))
    }
}

/// Decode a P1 payload with [`DecodeOptions::new`].
pub fn decode(text: &str) -> Result<Grid, At<ParseError>> {
    DecodeOptions::new().decode(text)
}

/// Encode a grid as P1 text.
///
/// Output is the magic line, `<width> <height>`, then one line per row with
/// cells separated by single spaces. Lines are joined with `\n` and there is
/// no trailing newline.
pub fn encode(grid: &Grid) -> String {
    let mut out = String::with_capacity(8 + grid.cells().len() * 2);
    // Writing into a String cannot fail.
    let _ = encode_to(grid, &mut out);
    out
}

/// Stream the P1 encoding of `grid` into `out`.
pub fn encode_to<W: Write + ?Sized>(grid: &Grid, out: &mut W) -> fmt::Result {
    write!(out, "{MAGIC}\n{} {}", grid.width(), grid.height())?;
    for row in grid.rows() {
        out.write_char('\n')?;
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{cell}")?;
        }
    }
    Ok(())
}

/// Trimmed, non-empty, non-comment lines.
fn significant_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

/// `<width> <height>`, both positive, exactly two tokens.
fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let width: usize = parts.next()?.parse().ok()?;
    let height: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() || width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

/// An integer token equal to 0 or 1.
fn parse_pixel(token: &str) -> Option<Pixel> {
    match token.parse::<i64>().ok()? {
        0 => Some(0),
        1 => Some(1),
        _ => None,
    }
}
