//! On-screen transform for one pyramid level's tile layer.
//!
//! Each level is laid out at its native size, centred over the zoomed base
//! image, then scaled down to match it. The renderer recomputes this per
//! frame; tile planning never needs it.

use serde::{Deserialize, Serialize};

use crate::geometry::{ContentOffset, FittedBox, PyramidLevel};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

/// Transform placing a `level`-sized layer over the base image shown at
/// `zoom_scale` and scrolled by `offset`.
pub fn compute_tile_level_transform(
    zoom_scale: f64,
    offset: ContentOffset,
    fitted: FittedBox,
    level: PyramidLevel,
) -> LevelTransform {
    let level_width = f64::from(level.width);
    let level_height = f64::from(level.height);
    let level_scale = level_width / fitted.width;

    let center_x = -offset.x + fitted.width * zoom_scale / 2.0;
    let center_y = -offset.y + fitted.height * zoom_scale / 2.0;

    LevelTransform {
        translate_x: center_x - level_width / 2.0,
        translate_y: center_y - level_height / 2.0,
        scale: zoom_scale / level_scale,
    }
}
