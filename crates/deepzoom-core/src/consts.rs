/// On-screen distance (in fitted-box points) by which the viewport is grown
/// on every side before resolving tiles, so tiles just outside the visible
/// area are fetched ahead of time. Divided by the zoom scale at use.
pub const DEFAULT_VIEWPORT_MARGIN: f64 = 400.0;

/// Nominal tile edge length used by most deep zoom encoders.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Default tile image encoding.
pub const DEFAULT_TILE_FORMAT: &str = "jpg";

/// Zoom scale at which the image is displayed at its fitted size.
pub const MIN_ZOOM_SCALE: f64 = 1.0;

/// Initial value of the DJB2 running hash.
pub const DJB2_SEED: u64 = 5381;
