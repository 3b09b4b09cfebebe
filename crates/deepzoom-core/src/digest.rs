//! Order-sensitive running hash used to skip redundant tile-set rebuilds.
//!
//! Feeding the same integers in the same order always yields the same hash;
//! feeding them in a different order generally does not. Equal hashes are a
//! cheap proxy for "the visible tile set is unchanged", never a guarantee.

use crate::consts::DJB2_SEED;
use crate::grid::TileGridRange;

/// DJB2 accumulator over a sequence of integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RenderDigest {
    hash: u64,
}

impl Default for RenderDigest {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDigest {
    pub fn new() -> Self {
        Self { hash: DJB2_SEED }
    }

    /// Mix one integer into the hash, byte by byte (little-endian).
    pub fn include(&mut self, value: i64) {
        for byte in value.to_le_bytes() {
            // hash * 33 + byte
            self.hash = (self.hash << 5)
                .wrapping_add(self.hash)
                .wrapping_add(u64::from(byte));
        }
    }

    /// Feed one level's grid as `(level, min_row, min_col, max_row, max_col)`.
    pub fn include_grid(&mut self, level: usize, grid: &TileGridRange) {
        self.include(level as i64);
        self.include(grid.min_row);
        self.include(grid.min_col);
        self.include(grid.max_row);
        self.include(grid.max_col);
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }
}

impl Extend<i64> for RenderDigest {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, values: I) {
        for value in values {
            self.include(value);
        }
    }
}

impl FromIterator<i64> for RenderDigest {
    fn from_iter<I: IntoIterator<Item = i64>>(values: I) -> Self {
        let mut digest = Self::new();
        digest.extend(values);
        digest
    }
}
