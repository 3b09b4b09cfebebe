use serde::{Deserialize, Serialize};

use crate::geometry::FittedBox;
use crate::pyramid::Pyramid;

/// Pyramid levels worth rendering for an image as fitted on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelRange {
    /// First level at least as wide as the fitted box.
    pub min_level: usize,
    /// Full-resolution level.
    pub max_level: usize,
}

impl LevelRange {
    pub fn contains(&self, level: usize) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }
}

/// Select the level range for `fitted` against `pyramid`.
///
/// `min_level` is the first level (scanning upward from 0) whose width is at
/// least the fitted width; the first match wins, not the closest one. When no
/// level qualifies the scan runs off the end and `min_level` equals the
/// number of levels scanned, which callers clamp to `max_level`.
pub fn select_range(fitted: FittedBox, pyramid: &Pyramid) -> LevelRange {
    let max_level = pyramid.max_level();
    let min_level = pyramid
        .levels()
        .iter()
        .position(|level| f64::from(level.width) >= fitted.width)
        .unwrap_or(pyramid.len());

    LevelRange {
        min_level,
        max_level,
    }
}
