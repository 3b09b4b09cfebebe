//! Viewer-facing tile planner.
//!
//! Owns the per-image geometry (pyramid, level range) and the digest of the
//! last emitted tile set. Each viewport event is evaluated synchronously:
//! the zoom scale picks the finest level to render, every level from the
//! minimum up to it is resolved against the padded viewport, and a new plan
//! is emitted only when the resulting grids differ from the previous event.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::config::{PlannerConfig, SessionConfig};
use crate::consts::MIN_ZOOM_SCALE;
use crate::descriptor::ImageDescriptor;
use crate::digest::RenderDigest;
use crate::error::{DeepZoomError, Result};
use crate::geometry::{ContentOffset, FittedBox, PyramidLevel, Viewport};
use crate::grid::{place_tile, resolve_grid, TileAddress, TileGridRange, TilePlacement};
use crate::pyramid::{compute_levels, Pyramid};
use crate::range::{select_range, LevelRange};
use crate::transform::{compute_tile_level_transform, LevelTransform};
use crate::zoom::{map_zoom_to_level, max_zoom_scale, zoom_scale_for_viewport};

/// A tile the renderer should fetch and display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannedTile {
    pub address: TileAddress,
    pub url: String,
    pub placement: TilePlacement,
}

/// Tiles to show for one pyramid level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelPlan {
    pub level: usize,
    pub dimensions: PyramidLevel,
    pub grid: TileGridRange,
    /// Tiles that exist in the level's native grid. May be fewer than
    /// `grid.tile_count()` when the fitted-space grid rounds up past it.
    pub tiles: Vec<PlannedTile>,
}

/// Complete tile set for one viewport event, coarsest level first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TilePlan {
    pub zoom_scale: f64,
    pub digest: u64,
    pub levels: Vec<LevelPlan>,
}

impl TilePlan {
    pub fn tile_count(&self) -> usize {
        self.levels.iter().map(|l| l.tiles.len()).sum()
    }

    pub fn addresses(&self) -> impl Iterator<Item = TileAddress> + '_ {
        self.levels
            .iter()
            .flat_map(|l| l.tiles.iter().map(|t| t.address))
    }
}

/// Grids resolved for one viewport, before deciding whether to render.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewportEvaluation {
    pub zoom_scale: f64,
    pub grids: Vec<(usize, TileGridRange)>,
    pub digest: RenderDigest,
}

/// Plans the tiles of one deep zoom image shown in one viewer.
pub struct TilePlanner {
    descriptor: ImageDescriptor,
    fitted: FittedBox,
    config: PlannerConfig,
    pyramid: Pyramid,
    range: LevelRange,
    last_digest: Option<RenderDigest>,
}

impl TilePlanner {
    /// Validate inputs and precompute the image's pyramid and level range.
    pub fn new(descriptor: ImageDescriptor, fitted: FittedBox, config: PlannerConfig) -> Result<Self> {
        descriptor.validate()?;
        if !fitted.is_valid() {
            return Err(DeepZoomError::InvalidFittedBox {
                width: fitted.width,
                height: fitted.height,
            });
        }
        if !config.viewport_margin.is_finite() || config.viewport_margin < 0.0 {
            return Err(DeepZoomError::InvalidConfig(format!(
                "viewport margin must be finite and >= 0, got {}",
                config.viewport_margin
            )));
        }

        let pyramid = compute_levels(descriptor.size);
        let mut range = select_range(fitted, &pyramid);
        // No level is as wide as the fitted box: fall back to full resolution.
        range.min_level = range.min_level.min(range.max_level);

        info!(
            width = descriptor.size.width,
            height = descriptor.size.height,
            levels = pyramid.len(),
            min_level = range.min_level,
            max_level = range.max_level,
            "Deep zoom planner ready"
        );

        Ok(Self {
            descriptor,
            fitted,
            config,
            pyramid,
            range,
            last_digest: None,
        })
    }

    pub fn from_session(session: SessionConfig) -> Result<Self> {
        Self::new(session.image, session.fitted, session.planner)
    }

    pub fn descriptor(&self) -> &ImageDescriptor {
        &self.descriptor
    }

    pub fn fitted(&self) -> FittedBox {
        self.fitted
    }

    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    pub fn range(&self) -> LevelRange {
        self.range
    }

    pub fn max_zoom_scale(&self) -> f64 {
        max_zoom_scale(self.fitted, self.descriptor.size)
    }

    /// Forget the last emitted tile set so the next event always renders.
    pub fn reset(&mut self) {
        self.last_digest = None;
    }

    /// Resolve the grids for `viewport` without touching planner state.
    pub fn evaluate(&self, viewport: &Viewport) -> Result<ViewportEvaluation> {
        if !viewport.is_valid() {
            return Err(DeepZoomError::InvalidViewport {
                x: viewport.x,
                y: viewport.y,
                width: viewport.width,
                height: viewport.height,
            });
        }
        let zoom_scale = zoom_scale_for_viewport(self.fitted, viewport);
        if !zoom_scale.is_finite() || zoom_scale <= 0.0 {
            return Err(DeepZoomError::InvalidZoomScale(zoom_scale));
        }
        // A viewport wider than the fitted box is still shown at scale 1.
        let zoom_scale = zoom_scale.max(MIN_ZOOM_SCALE);

        let min_level = self.range.min_level;
        let min_level_width = f64::from(self.pyramid.level(min_level)?.width);
        let max_level = map_zoom_to_level(zoom_scale, min_level, min_level_width).min(self.range.max_level);

        let padded = viewport.grow(self.config.viewport_margin / zoom_scale);
        let mut digest = RenderDigest::new();
        let mut grids = Vec::with_capacity(max_level - min_level + 1);
        for level in min_level..=max_level {
            let dimensions = self.pyramid.level(level)?;
            let grid = resolve_grid(self.fitted, dimensions, self.descriptor.tile_size, &padded);
            digest.include_grid(level, &grid);
            grids.push((level, grid));
        }

        Ok(ViewportEvaluation {
            zoom_scale,
            grids,
            digest,
        })
    }

    /// Handle one viewport event. `None` means the tile set is unchanged and
    /// rendering can be skipped.
    pub fn on_viewport_changed(&mut self, viewport: Viewport) -> Result<Option<TilePlan>> {
        let evaluation = self.evaluate(&viewport)?;

        if self.last_digest == Some(evaluation.digest) {
            trace!(digest = evaluation.digest.hash(), "Tile set unchanged");
            return Ok(None);
        }
        self.last_digest = Some(evaluation.digest);

        let plan = self.build_plan(evaluation)?;
        debug!(
            zoom_scale = plan.zoom_scale,
            levels = plan.levels.len(),
            tiles = plan.tile_count(),
            "Tile set updated"
        );
        Ok(Some(plan))
    }

    /// Feed a stream of viewport events, calling `on_update` for each one that
    /// changes the tile set. Returns the number of updates delivered.
    pub fn drive<I>(&mut self, viewports: I, mut on_update: impl FnMut(&TilePlan)) -> Result<usize>
    where
        I: IntoIterator<Item = Viewport>,
    {
        let mut updates = 0;
        for viewport in viewports {
            if let Some(plan) = self.on_viewport_changed(viewport)? {
                on_update(&plan);
                updates += 1;
            }
        }
        Ok(updates)
    }

    /// Transform for `level`'s tile layer at the given zoom and scroll state.
    pub fn level_transform(
        &self,
        level: usize,
        zoom_scale: f64,
        offset: ContentOffset,
    ) -> Result<LevelTransform> {
        let dimensions = self.pyramid.level(level)?;
        Ok(compute_tile_level_transform(
            zoom_scale,
            offset,
            self.fitted,
            dimensions,
        ))
    }

    fn build_plan(&self, evaluation: ViewportEvaluation) -> Result<TilePlan> {
        let tile_size = self.descriptor.tile_size;
        let mut levels = Vec::with_capacity(evaluation.grids.len());

        for (level, grid) in evaluation.grids {
            let dimensions = self.pyramid.level(level)?;
            let tiles = grid
                .tiles()
                .filter_map(|(col, row)| {
                    let placement = place_tile(dimensions, tile_size, col, row)?;
                    let address = TileAddress::new(level, col, row);
                    Some(PlannedTile {
                        address,
                        url: self.descriptor.tile_url(address),
                        placement,
                    })
                })
                .collect();
            levels.push(LevelPlan {
                level,
                dimensions,
                grid,
                tiles,
            });
        }

        Ok(TilePlan {
            zoom_scale: evaluation.zoom_scale,
            digest: evaluation.digest.hash(),
            levels,
        })
    }
}
