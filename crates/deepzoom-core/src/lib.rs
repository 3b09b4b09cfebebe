//! Deep zoom tile planning.
//!
//! Given an image encoded as a pyramid of progressively halved resolution
//! levels, works out which tiles at which levels must be fetched and shown
//! for the current viewport and zoom scale.

pub mod config;
pub mod consts;
pub mod descriptor;
pub mod digest;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod planner;
pub mod pyramid;
pub mod range;
pub mod transform;
pub mod zoom;
