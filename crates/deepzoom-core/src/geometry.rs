use serde::{Deserialize, Serialize};

/// Full-resolution source image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageSize {
    #[serde(alias = "Width")]
    pub width: u32,
    #[serde(alias = "Height")]
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width >= 1 && self.height >= 1
    }
}

/// One resolution level of the image pyramid, in native pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PyramidLevel {
    pub width: u32,
    pub height: u32,
}

impl PyramidLevel {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The next smaller level: both dimensions halved, rounding up.
    pub fn halved(&self) -> Self {
        Self {
            width: self.width.div_ceil(2),
            height: self.height.div_ceil(2),
        }
    }

    pub fn is_unit(&self) -> bool {
        self.width == 1 && self.height == 1
    }
}

impl From<ImageSize> for PyramidLevel {
    fn from(size: ImageSize) -> Self {
        Self::new(size.width, size.height)
    }
}

/// On-screen size of the whole image at zoom scale 1.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FittedBox {
    pub width: f64,
    pub height: f64,
}

impl FittedBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Visible window into the image, in fitted-box coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The viewport showing the whole fitted box.
    pub fn full(fitted: FittedBox) -> Self {
        Self::new(0.0, 0.0, fitted.width, fitted.height)
    }

    /// Enlarge by `amount` on every side, keeping the center fixed.
    pub fn grow(&self, amount: f64) -> Self {
        Self {
            x: self.x - amount,
            y: self.y - amount,
            width: self.width + 2.0 * amount,
            height: self.height + 2.0 * amount,
        }
    }

    /// Finite origin and a positive, finite size.
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Scroll offset of the zoomed content, in screen points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentOffset {
    pub x: f64,
    pub y: f64,
}
