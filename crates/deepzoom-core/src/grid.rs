//! Tile grid resolution for one pyramid level against one viewport.
//!
//! The viewport is expressed in fitted-box coordinates, so the nominal tile
//! size is first converted into that space: a level twice as wide as the
//! fitted box has tiles that cover half as many on-screen points.

use serde::{Deserialize, Serialize};

use crate::geometry::{FittedBox, PyramidLevel, Viewport};

/// Identifies one tile of one pyramid level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileAddress {
    pub level: usize,
    pub col: u32,
    pub row: u32,
}

impl TileAddress {
    pub fn new(level: usize, col: u32, row: u32) -> Self {
        Self { level, col, row }
    }
}

/// Rows and columns of a level's tile grid that intersect a viewport.
///
/// Bounds are inclusive. `max_col`/`max_row` are capped at `num_cols`/`num_rows`
/// rather than the last index, so they may name one column or row past the
/// grid; [`TileGridRange::tiles`] only yields tiles that exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileGridRange {
    pub min_row: i64,
    pub min_col: i64,
    pub max_row: i64,
    pub max_col: i64,
    pub num_rows: u32,
    pub num_cols: u32,
}

impl TileGridRange {
    /// Inclusive column bounds clipped to the grid, or `None` when empty.
    fn col_span(&self) -> Option<(u32, u32)> {
        clip_span(self.min_col, self.max_col, self.num_cols)
    }

    fn row_span(&self) -> Option<(u32, u32)> {
        clip_span(self.min_row, self.max_row, self.num_rows)
    }

    pub fn is_empty(&self) -> bool {
        self.col_span().is_none() || self.row_span().is_none()
    }

    /// Tiles in the range of the fitted-space grid. The native grid of the
    /// level can be one column or row smaller after float rounding, so
    /// planned tile lists are the authoritative count.
    pub fn tile_count(&self) -> usize {
        match (self.col_span(), self.row_span()) {
            (Some((c0, c1)), Some((r0, r1))) => (c1 - c0 + 1) as usize * (r1 - r0 + 1) as usize,
            _ => 0,
        }
    }

    /// Existing `(col, row)` pairs in the range, row-major.
    pub fn tiles(&self) -> impl Iterator<Item = (u32, u32)> {
        let (c0, c1, r0, r1) = match (self.col_span(), self.row_span()) {
            (Some((c0, c1)), Some((r0, r1))) => (c0, c1, r0, r1),
            _ => (1, 0, 1, 0),
        };
        (r0..=r1).flat_map(move |row| (c0..=c1).map(move |col| (col, row)))
    }
}

fn clip_span(min: i64, max: i64, count: u32) -> Option<(u32, u32)> {
    if count == 0 {
        return None;
    }
    let lo = min.max(0);
    let hi = max.min(i64::from(count) - 1);
    (lo <= hi).then(|| (lo as u32, hi as u32))
}

/// Resolve which tiles of `level` intersect `viewport`.
///
/// The caller pads the viewport beforehand if tiles just outside the visible
/// area should be prefetched.
///
/// # Panics
///
/// Panics if `tile_size` is zero or either box has a non-positive dimension.
pub fn resolve_grid(
    fitted: FittedBox,
    level: PyramidLevel,
    tile_size: u32,
    viewport: &Viewport,
) -> TileGridRange {
    assert!(tile_size > 0, "tile size must be positive");
    assert!(
        fitted.is_valid(),
        "fitted box must be positive, got {}x{}",
        fitted.width,
        fitted.height
    );
    assert!(
        level.width > 0 && level.height > 0,
        "level dimensions must be positive, got {}x{}",
        level.width,
        level.height
    );

    let scale = f64::from(level.width) / fitted.width;
    let effective = f64::from(tile_size) / scale;

    let num_cols = (fitted.width / effective).ceil() as u32;
    let num_rows = (fitted.height / effective).ceil() as u32;

    let min_col = ((viewport.x / effective).floor() as i64).max(0);
    let min_row = ((viewport.y / effective).floor() as i64).max(0);
    let max_col = ((viewport.right() / effective).floor() as i64).min(i64::from(num_cols));
    let max_row = ((viewport.bottom() / effective).floor() as i64).min(i64::from(num_rows));

    TileGridRange {
        min_row,
        min_col,
        max_row,
        max_col,
        num_rows,
        num_cols,
    }
}

/// Native size of the last tile along an axis of `level_extent` pixels.
///
/// A zero remainder means the last tile is full size.
pub fn edge_tile_extent(level_extent: u32, tile_size: u32) -> u32 {
    match level_extent % tile_size {
        0 => tile_size,
        rem => rem,
    }
}

/// Native size of tile `index` along an axis, or `None` past the edge.
pub fn tile_extent(index: u32, level_extent: u32, tile_size: u32) -> Option<u32> {
    let count = level_extent.div_ceil(tile_size);
    if index >= count {
        None
    } else if index < count - 1 {
        Some(tile_size)
    } else {
        Some(edge_tile_extent(level_extent, tile_size))
    }
}

/// Position and size of a tile within its level, in native pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TilePlacement {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

/// Place tile `(col, row)` on `level`. `None` if it lies outside the level.
pub fn place_tile(level: PyramidLevel, tile_size: u32, col: u32, row: u32) -> Option<TilePlacement> {
    Some(TilePlacement {
        left: col * tile_size,
        top: row * tile_size,
        width: tile_extent(col, level.width, tile_size)?,
        height: tile_extent(row, level.height, tile_size)?,
    })
}
