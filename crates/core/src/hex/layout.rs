use crate::{
    config::ShaderConfig,
    hex::{AxialPoint, PixelPoint},
};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use validator::Validate;

/// The two ways a hexagon can sit on the screen. This decides which linear
/// transform maps between hex space and pixel space. It's a fixed choice per
/// scene, so it lives in [HexLayout] rather than on individual points.
///
/// See https://www.redblobgames.com/grids/hexagons/#hex-to-pixel
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileOrientation {
    /// A vertex points straight up; rows of tiles are horizontal
    PointyTop,
    /// A side faces straight up; columns of tiles are vertical
    FlatTop,
}

impl TileOrientation {
    /// The matrix that maps a unit-radius hex point to pixel space. Columns
    /// are the pixel-space basis vectors for `q` and `r`.
    pub fn forward_matrix(self) -> Matrix2<f64> {
        let sqrt3 = 3.0f64.sqrt();
        match self {
            Self::PointyTop => Matrix2::new(sqrt3, sqrt3 / 2.0, 0.0, 3.0 / 2.0),
            Self::FlatTop => Matrix2::new(3.0 / 2.0, 0.0, sqrt3 / 2.0, sqrt3),
        }
    }

    /// The inverse of [Self::forward_matrix], written out in closed form
    /// instead of inverted numerically.
    pub fn inverse_matrix(self) -> Matrix2<f64> {
        let sqrt3 = 3.0f64.sqrt();
        match self {
            Self::PointyTop => {
                Matrix2::new(sqrt3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Self::FlatTop => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, sqrt3 / 3.0)
            }
        }
    }

    /// Convert a pixel point to a (fractional) hex point. The result is
    /// meaningless unless `tile_radius` is finite and positive; use
    /// [HexLayout] to get that guarantee.
    pub fn pixel_to_hex(self, point: PixelPoint, tile_radius: f64) -> AxialPoint {
        let hex =
            self.inverse_matrix() * Vector2::new(point.x, point.y) / tile_radius;
        AxialPoint::new(hex.x, hex.y)
    }

    /// Convert a hex point to the pixel point it's centered on. This is the
    /// inverse of [Self::pixel_to_hex] (modulo float error).
    pub fn hex_to_pixel(self, hex: AxialPoint, tile_radius: f64) -> PixelPoint {
        let pixel =
            self.forward_matrix() * Vector2::new(hex.q, hex.r) * tile_radius;
        PixelPoint::new(pixel.x, pixel.y)
    }
}

impl Default for TileOrientation {
    fn default() -> Self {
        Self::FlatTop
    }
}

/// A hex layout ties pixel space to hex space. It's built from a validated
/// [ShaderConfig], so the tile radius is always finite and positive and the
/// conversions here are safe to call with any finite point.
///
/// Layouts can't be changed after creation, but they're very cheap to
/// create so if you need a different radius, just create a new one.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HexLayout {
    tile_radius: f64,
    orientation: TileOrientation,
}

impl HexLayout {
    /// Initialize a new layout with the given shader config. Returns an error
    /// if the config is invalid.
    pub fn new(config: &ShaderConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Build a layout from a config that the caller has already validated,
    /// e.g. as part of a bigger config
    pub(crate) fn from_validated(config: &ShaderConfig) -> Self {
        Self {
            tile_radius: config.radius,
            orientation: config.orientation,
        }
    }

    /// Distance from the center of a tile to any of its vertices, in pixels
    pub fn tile_radius(&self) -> f64 {
        self.tile_radius
    }

    pub fn orientation(&self) -> TileOrientation {
        self.orientation
    }

    pub fn pixel_to_hex(&self, point: PixelPoint) -> AxialPoint {
        self.orientation.pixel_to_hex(point, self.tile_radius)
    }

    pub fn hex_to_pixel(&self, hex: AxialPoint) -> PixelPoint {
        self.orientation.hex_to_pixel(hex, self.tile_radius)
    }

    /// Get the tile that contains the given pixel. The returned point is
    /// always integer-valued.
    pub fn pixel_to_tile(&self, point: PixelPoint) -> AxialPoint {
        self.pixel_to_hex(point).round()
    }
}
