use approx::assert_relative_eq;
use deepzoom_core::config::{PlannerConfig, SessionConfig};
use deepzoom_core::descriptor::ImageDescriptor;
use deepzoom_core::error::DeepZoomError;
use deepzoom_core::geometry::{ContentOffset, FittedBox, ImageSize, Viewport};
use deepzoom_core::grid::{TileAddress, TilePlacement};
use deepzoom_core::planner::TilePlanner;

fn descriptor() -> ImageDescriptor {
    ImageDescriptor::new(
        "https://example.com/deepzoom/",
        "jpg",
        256,
        ImageSize::new(1000, 600),
    )
}

fn fitted() -> FittedBox {
    FittedBox::new(375.0, 225.0)
}

fn planner() -> TilePlanner {
    TilePlanner::new(descriptor(), fitted(), PlannerConfig::default()).unwrap()
}

/// Viewport showing the image at `zoom`, anchored at the top-left corner.
fn zoomed(zoom: f64) -> Viewport {
    Viewport::new(0.0, 0.0, 375.0 / zoom, 225.0 / zoom)
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn test_planner_geometry() {
    let p = planner();
    assert_eq!(p.pyramid().len(), 11);
    assert_eq!(p.range().min_level, 9);
    assert_eq!(p.range().max_level, 10);
    assert_relative_eq!(p.max_zoom_scale(), 600.0 / 225.0);
}

#[test]
fn test_planner_clamps_min_level_when_fitted_box_exceeds_image() {
    let p = TilePlanner::new(descriptor(), FittedBox::new(2000.0, 1200.0), PlannerConfig::default())
        .unwrap();
    assert_eq!(p.range().min_level, 10);
    assert_eq!(p.range().max_level, 10);
}

#[test]
fn test_planner_rejects_bad_descriptor() {
    let mut d = descriptor();
    d.tile_size = 0;
    let result = TilePlanner::new(d, fitted(), PlannerConfig::default());
    assert!(matches!(result, Err(DeepZoomError::InvalidTileSize(0))));
}

#[test]
fn test_planner_rejects_empty_fitted_box() {
    let result = TilePlanner::new(descriptor(), FittedBox::new(0.0, 225.0), PlannerConfig::default());
    assert!(matches!(result, Err(DeepZoomError::InvalidFittedBox { .. })));
}

#[test]
fn test_planner_rejects_negative_margin() {
    let config = PlannerConfig {
        viewport_margin: -1.0,
    };
    let result = TilePlanner::new(descriptor(), fitted(), config);
    assert!(matches!(result, Err(DeepZoomError::InvalidConfig(_))));
}

#[test]
fn test_planner_from_session() {
    let session = SessionConfig {
        image: descriptor(),
        fitted: fitted(),
        planner: PlannerConfig::default(),
    };
    let p = TilePlanner::from_session(session).unwrap();
    assert_eq!(p.range().min_level, 9);
}

// ---------------------------------------------------------------------------
// Viewport events
// ---------------------------------------------------------------------------

#[test]
fn test_first_event_renders_min_level() {
    let mut p = planner();
    let plan = p.on_viewport_changed(Viewport::full(fitted())).unwrap().unwrap();

    assert_relative_eq!(plan.zoom_scale, 1.0);
    assert_eq!(plan.levels.len(), 1);
    let level = &plan.levels[0];
    assert_eq!(level.level, 9);
    assert_eq!((level.grid.num_cols, level.grid.num_rows), (2, 2));

    let addresses: Vec<_> = plan.addresses().collect();
    assert_eq!(
        addresses,
        vec![
            TileAddress::new(9, 0, 0),
            TileAddress::new(9, 1, 0),
            TileAddress::new(9, 0, 1),
            TileAddress::new(9, 1, 1),
        ]
    );
}

#[test]
fn test_plan_tiles_carry_url_and_edge_placement() {
    let mut p = planner();
    let plan = p.on_viewport_changed(Viewport::full(fitted())).unwrap().unwrap();
    let corner = plan.levels[0]
        .tiles
        .iter()
        .find(|t| t.address == TileAddress::new(9, 1, 1))
        .unwrap();
    assert_eq!(corner.url, "https://example.com/deepzoom/9/1_1.jpg");
    // level 9 is 500x300
    assert_eq!(
        corner.placement,
        TilePlacement {
            left: 256,
            top: 256,
            width: 244,
            height: 44,
        }
    );
}

#[test]
fn test_unchanged_viewport_is_skipped() {
    let mut p = planner();
    assert!(p.on_viewport_changed(Viewport::full(fitted())).unwrap().is_some());
    assert!(p.on_viewport_changed(Viewport::full(fitted())).unwrap().is_none());
    // a small pan that stays within the same tiles
    assert!(p
        .on_viewport_changed(Viewport::new(1.0, 1.0, 375.0, 225.0))
        .unwrap()
        .is_none());
}

#[test]
fn test_reset_forces_render() {
    let mut p = planner();
    p.on_viewport_changed(Viewport::full(fitted())).unwrap();
    p.reset();
    assert!(p.on_viewport_changed(Viewport::full(fitted())).unwrap().is_some());
}

#[test]
fn test_zooming_in_adds_finer_levels() {
    let mut p = planner();
    let plan = p.on_viewport_changed(zoomed(4.0)).unwrap().unwrap();
    assert_relative_eq!(plan.zoom_scale, 4.0);
    let levels: Vec<usize> = plan.levels.iter().map(|l| l.level).collect();
    // unclamped mapping asks for level 11; capped at full resolution
    assert_eq!(levels, vec![9, 10]);
    for level in &plan.levels {
        for tile in &level.tiles {
            assert!(tile.placement.left < level.dimensions.width);
            assert!(tile.placement.top < level.dimensions.height);
        }
    }
}

#[test]
fn test_margin_shrinks_with_zoom() {
    let mut p = planner();
    let plan = p.on_viewport_changed(zoomed(4.0)).unwrap().unwrap();
    // margin 400 / 4 = 100; padded viewport reaches 193.75 across
    let finest = &plan.levels[1];
    assert_eq!(finest.level, 10);
    assert_eq!((finest.grid.min_col, finest.grid.max_col), (0, 2));
    assert_eq!((finest.grid.min_row, finest.grid.max_row), (0, 1));
}

#[test]
fn test_viewport_wider_than_fitted_box_is_scale_one() {
    let mut p = planner();
    let plan = p
        .on_viewport_changed(Viewport::new(-100.0, -100.0, 750.0, 450.0))
        .unwrap()
        .unwrap();
    assert_relative_eq!(plan.zoom_scale, 1.0);
    assert_eq!(plan.levels.len(), 1);
}

#[test]
fn test_degenerate_viewport_is_error() {
    let mut p = planner();
    let result = p.on_viewport_changed(Viewport::new(0.0, 0.0, 0.0, 0.0));
    assert!(matches!(result, Err(DeepZoomError::InvalidViewport { .. })));
}

#[test]
fn test_non_finite_viewport_is_error() {
    let mut p = planner();
    let bad = [
        Viewport::new(f64::NAN, f64::NAN, 93.75, 56.25),
        Viewport::new(0.0, 0.0, 93.75, f64::NAN),
        Viewport::new(f64::INFINITY, 0.0, 93.75, 56.25),
        Viewport::new(0.0, f64::NEG_INFINITY, 93.75, 56.25),
        Viewport::new(0.0, 0.0, 93.75, -1.0),
    ];
    for viewport in bad {
        let result = p.on_viewport_changed(viewport);
        assert!(
            matches!(result, Err(DeepZoomError::InvalidViewport { .. })),
            "{viewport:?}"
        );
    }
    // rejected events leave the last tile set untouched
    assert!(p.on_viewport_changed(Viewport::full(fitted())).unwrap().is_some());
}

#[test]
fn test_planned_tiles_never_exceed_grid_range() {
    let mut p = planner();
    let events = [Viewport::full(fitted()), zoomed(2.0), zoomed(4.0)];
    for viewport in events {
        p.reset();
        let plan = p.on_viewport_changed(viewport).unwrap().unwrap();
        for level in &plan.levels {
            assert!(level.tiles.len() <= level.grid.tile_count());
            let native_cols = level.dimensions.width.div_ceil(256);
            let native_rows = level.dimensions.height.div_ceil(256);
            assert!(level
                .tiles
                .iter()
                .all(|t| t.address.col < native_cols && t.address.row < native_rows));
        }
    }
}

#[test]
fn test_evaluate_does_not_change_state() {
    let mut p = planner();
    let first = p.evaluate(&Viewport::full(fitted())).unwrap();
    let second = p.evaluate(&Viewport::full(fitted())).unwrap();
    assert_eq!(first, second);
    assert!(p.on_viewport_changed(Viewport::full(fitted())).unwrap().is_some());
}

#[test]
fn test_drive_counts_only_changes() {
    let mut p = planner();
    let events = vec![
        Viewport::full(fitted()),
        Viewport::full(fitted()),
        zoomed(4.0),
        zoomed(4.0),
        Viewport::full(fitted()),
    ];
    let mut seen = Vec::new();
    let updates = p
        .drive(events, |plan| seen.push(plan.levels.len()))
        .unwrap();
    assert_eq!(updates, 3);
    assert_eq!(seen, vec![1, 2, 1]);
}

#[test]
fn test_level_transform_for_known_level() {
    let p = planner();
    let t = p.level_transform(9, 1.0, ContentOffset::default()).unwrap();
    assert_relative_eq!(t.scale, 375.0 / 500.0);
    assert!(p.level_transform(11, 1.0, ContentOffset::default()).is_err());
}
