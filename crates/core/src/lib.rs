//! hexgrid is a small kit for hexagonal grid coordinate math. It converts
//! between pixel space and hex space for both tile orientations and rounds
//! fractional hex coordinates to whole tiles. On top of that sits
//! [HighlightTracker], which turns a stream of pointer positions into "which
//! tile is highlighted" updates for a host to feed into a shader.
//!
//! ```
//! use hexgrid::{HexConfig, HighlightTracker, PixelPoint};
//!
//! let config = HexConfig::default();
//! let mut tracker = HighlightTracker::new(&config).unwrap();
//! tracker.update(PixelPoint::new(96.0, 600.0));
//! assert_eq!(tracker.shader_param("highlight"), Some([2.0, -1.0, 0.0]));
//! ```
//!
//! See [HexConfig] for details on what can be configured, and the [hex]
//! module for a description of the coordinate systems.

mod config;
pub mod hex;
mod tracker;

pub use crate::{
    config::{HexConfig, ScreenConfig, ShaderConfig},
    hex::{
        AxialPoint, CubePoint, HexLayout, PixelPoint, TileDirection,
        TileOrientation, TilePoint,
    },
    tracker::{HighlightTracker, TileChange},
};
