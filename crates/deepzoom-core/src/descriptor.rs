use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TILE_FORMAT, DEFAULT_TILE_SIZE};
use crate::error::{DeepZoomError, Result};
use crate::geometry::ImageSize;
use crate::grid::TileAddress;

/// Read-only description of one deep zoom image as served by the backend.
///
/// Field aliases accept the capitalised spelling used by deep zoom
/// descriptors (`Url`, `Format`, `TileSize`, `Size { Width, Height }`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    /// Base path that tile paths are appended to, usually ending in `/`.
    #[serde(alias = "Url")]
    pub url: String,
    /// Tile image encoding, used as the file extension.
    #[serde(alias = "Format", default = "default_format")]
    pub format: String,
    /// Nominal tile edge length in pixels.
    #[serde(alias = "TileSize", default = "default_tile_size")]
    pub tile_size: u32,
    /// Full-resolution image size.
    #[serde(alias = "Size")]
    pub size: ImageSize,
}

fn default_format() -> String {
    DEFAULT_TILE_FORMAT.to_string()
}
fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl ImageDescriptor {
    pub fn new(url: impl Into<String>, format: impl Into<String>, tile_size: u32, size: ImageSize) -> Self {
        Self {
            url: url.into(),
            format: format.into(),
            tile_size,
            size,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.size.is_valid() {
            return Err(DeepZoomError::InvalidDimensions {
                width: self.size.width,
                height: self.size.height,
            });
        }
        if self.tile_size == 0 {
            return Err(DeepZoomError::InvalidTileSize(self.tile_size));
        }
        if self.format.trim().is_empty() {
            return Err(DeepZoomError::InvalidDescriptor(
                "tile format must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// `{url}{level}/{col}_{row}.{format}`; must match the CDN layout exactly.
    pub fn tile_url(&self, address: TileAddress) -> String {
        format!(
            "{}{}/{}_{}.{}",
            self.url, address.level, address.col, address.row, self.format
        )
    }
}
