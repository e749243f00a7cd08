use crate::TileOrientation;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Top-level config for a hex highlighting scene. This is read once at
/// startup and never changes after that. Every field has a default, so an
/// empty config file is valid.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexConfig {
    /// Config for the hex grid that the highlight shader draws
    #[validate]
    pub shader: ShaderConfig,

    /// Size of the screen the pointer moves across
    #[validate]
    pub screen: ScreenConfig,
}

/// Configuration for the hex grid, as seen by the shader. The tile radius is
/// the one constant that relates pixel space to hex space, so it has to be
/// sane before any conversions happen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_radius", skip_on_field_errors = false))]
#[serde(default)]
pub struct ShaderConfig {
    /// Distance from the center of a tile to any of its vertices, in pixels.
    /// Must be finite and strictly positive.
    pub radius: f64,

    /// Which way the tiles are drawn. See [TileOrientation].
    pub orientation: TileOrientation,

    /// Name of the shader parameter that receives the highlighted tile. The
    /// tile is passed as `[q, r, 0.0]`.
    #[validate(length(min = 1))]
    pub highlight_param: String,
}

/// Screen dimensions, in pixels. Pointer positions come in with the origin in
/// the top-left and `y` pointing down, so we need the height to flip them.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_screen", skip_on_field_errors = false))]
#[serde(default)]
pub struct ScreenConfig {
    #[validate(range(min = 0.0))]
    pub width: f64,

    #[validate(range(min = 0.0))]
    pub height: f64,
}

impl Default for ShaderConfig {
    fn default() -> Self {
        Self {
            radius: 32.0,
            orientation: TileOrientation::FlatTop,
            highlight_param: "highlight".into(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Range validation lets NaN through, so check the radius by hand. Zero or
/// negative radii would flip or blow up every conversion.
fn validate_radius(config: &ShaderConfig) -> Result<(), ValidationError> {
    if config.radius.is_finite() && config.radius > 0.0 {
        Ok(())
    } else {
        let mut error = ValidationError::new("radius");
        error.message = Some(
            format!(
                "tile radius must be finite and positive, got {}",
                config.radius
            )
            .into(),
        );
        Err(error)
    }
}

/// Same NaN problem as the radius. A non-finite height would turn every
/// flipped pointer into NaN.
fn validate_screen(config: &ScreenConfig) -> Result<(), ValidationError> {
    let valid = |value: f64| value.is_finite() && value >= 0.0;
    if valid(config.width) && valid(config.height) {
        Ok(())
    } else {
        let mut error = ValidationError::new("screen");
        error.message = Some(
            format!(
                "screen size must be finite and non-negative, got {}x{}",
                config.width, config.height
            )
            .into(),
        );
        Err(error)
    }
}
