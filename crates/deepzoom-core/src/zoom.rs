//! Mapping between scroll-view zoom scales and pyramid levels.

use crate::consts::MIN_ZOOM_SCALE;
use crate::geometry::{FittedBox, ImageSize, Viewport};

/// Find the finest pyramid level needed to render at `zoom_scale`.
///
/// Starting from `min_level` (the level shown at zoom scale 1), the level
/// width doubles with each step up until it covers `min_level_width *
/// zoom_scale`. The doubling mirrors the halving used to build the pyramid,
/// so the two stay in step. The result is not clamped; callers cap it at the
/// pyramid's `max_level`.
///
/// # Panics
///
/// Panics if `zoom_scale` is below 1 or not finite.
pub fn map_zoom_to_level(zoom_scale: f64, min_level: usize, min_level_width: f64) -> usize {
    assert!(
        zoom_scale.is_finite() && zoom_scale >= MIN_ZOOM_SCALE,
        "zoom scale must be finite and >= 1, got {zoom_scale}"
    );

    let target = min_level_width * zoom_scale;
    let mut level_width = min_level_width;
    let mut level = min_level;
    while level_width < target {
        level_width *= 2.0;
        level += 1;
    }
    level
}

/// Current magnification implied by the visible window.
pub fn zoom_scale_for_viewport(fitted: FittedBox, viewport: &Viewport) -> f64 {
    fitted.width / viewport.width
}

/// Largest useful zoom scale: the one at which the full-resolution image is
/// shown one pixel per point.
pub fn max_zoom_scale(fitted: FittedBox, full: ImageSize) -> f64 {
    f64::from(full.height) / fitted.height
}
