//! Deep zoom pyramid construction.
//!
//! A deep zoom image is encoded by halving the full-resolution dimensions,
//! rounding up to the nearest pixel at each step, until the image is 1x1.
//! Level 0 is the 1x1 image and the last level is the full resolution.

use serde::{Deserialize, Serialize};

use crate::error::{DeepZoomError, Result};
use crate::geometry::{ImageSize, PyramidLevel};

/// Resolution levels of one image, ascending by size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pyramid {
    levels: Vec<PyramidLevel>,
}

impl Pyramid {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Always false: a pyramid holds at least the 1x1 level.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Index of the full-resolution level.
    pub fn max_level(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn levels(&self) -> &[PyramidLevel] {
        &self.levels
    }

    pub fn get(&self, level: usize) -> Option<PyramidLevel> {
        self.levels.get(level).copied()
    }

    /// Like [`Pyramid::get`], but reports the bad index as an error.
    pub fn level(&self, level: usize) -> Result<PyramidLevel> {
        self.get(level).ok_or(DeepZoomError::LevelOutOfRange {
            level,
            total: self.levels.len(),
        })
    }

    pub fn full_resolution(&self) -> PyramidLevel {
        self.levels[self.max_level()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, PyramidLevel)> + '_ {
        self.levels.iter().copied().enumerate()
    }
}

/// Compute every pyramid level for an image of the given size.
///
/// The result has `ceil(log2(max(width, height))) + 1` levels.
///
/// # Panics
///
/// Panics if either dimension is zero; halving would never reach 1x1.
pub fn compute_levels(size: ImageSize) -> Pyramid {
    assert!(
        size.is_valid(),
        "image dimensions must be at least 1x1, got {}x{}",
        size.width,
        size.height
    );

    let mut current = PyramidLevel::from(size);
    let mut levels = vec![current];
    while !current.is_unit() {
        current = current.halved();
        levels.push(current);
    }
    levels.reverse();

    Pyramid { levels }
}
