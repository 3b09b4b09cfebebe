use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_VIEWPORT_MARGIN;
use crate::descriptor::ImageDescriptor;
use crate::geometry::FittedBox;

/// Tuning for [`crate::planner::TilePlanner`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Prefetch margin in on-screen points, divided by the zoom scale before
    /// it is applied to the viewport.
    #[serde(default = "default_viewport_margin")]
    pub viewport_margin: f64,
}

fn default_viewport_margin() -> f64 {
    DEFAULT_VIEWPORT_MARGIN
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            viewport_margin: DEFAULT_VIEWPORT_MARGIN,
        }
    }
}

/// One image shown in one viewer: everything needed to build a planner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub image: ImageDescriptor,
    pub fitted: FittedBox,
    #[serde(default)]
    pub planner: PlannerConfig,
}
