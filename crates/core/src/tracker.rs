use crate::{AxialPoint, HexConfig, HexLayout, PixelPoint};
use log::debug;
use validator::Validate;

/// Emitted by [HighlightTracker::update] when the pointer moves onto a
/// different tile.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TileChange {
    /// The tile that was highlighted last frame
    pub previous: AxialPoint,
    /// The tile that's highlighted now
    pub current: AxialPoint,
    /// The pointer position that caused the change, in world pixels
    pub pointer: PixelPoint,
}

/// Tracks which tile the pointer is over, frame by frame. Feed it the raw
/// pointer position once per frame with [Self::update], then read the current
/// tile back with [Self::highlight] or [Self::shader_param].
///
/// Raw pointer positions are in screen space (origin top-left, `y` down).
/// Before conversion they're flipped into world space (origin bottom-left,
/// `y` up), which is what the hex layout works in.
#[derive(Clone, Debug)]
pub struct HighlightTracker {
    layout: HexLayout,
    screen_height: f64,
    highlight_param: String,
    /// Last pointer position, in world space
    pointer: PixelPoint,
    /// Last highlighted tile
    tile: AxialPoint,
}

impl HighlightTracker {
    /// Create a new tracker from the given config. Returns an error if the
    /// config is invalid. Nothing has been sampled yet, so the pointer and the
    /// highlighted tile both start at the origin.
    pub fn new(config: &HexConfig) -> anyhow::Result<Self> {
        // One pass, so errors from both sections are reported together
        config.validate()?;
        Ok(Self {
            layout: HexLayout::from_validated(&config.shader),
            screen_height: config.screen.height,
            highlight_param: config.shader.highlight_param.clone(),
            pointer: PixelPoint::ORIGIN,
            tile: AxialPoint::ORIGIN,
        })
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    /// Convert a raw screen-space pointer position to world space by flipping
    /// the `y` axis.
    pub fn to_world(&self, raw: PixelPoint) -> PixelPoint {
        PixelPoint::new(raw.x, self.screen_height - raw.y)
    }

    /// Sample the pointer for one frame. Returns the change if the pointer is
    /// now over a different tile than last frame, or `None` if it isn't.
    pub fn update(&mut self, raw_pointer: PixelPoint) -> Option<TileChange> {
        let pointer = self.to_world(raw_pointer);
        let previous = self.tile;
        let current = self.layout.pixel_to_tile(pointer);

        self.pointer = pointer;
        self.tile = current;

        if current.q != previous.q || current.r != previous.r {
            debug!("Tile changed from {} to {} at {}", previous, current, pointer);
            Some(TileChange {
                previous,
                current,
                pointer,
            })
        } else {
            None
        }
    }

    /// The tile that's currently highlighted, i.e. the result of the last
    /// [Self::update]
    pub fn highlight(&self) -> AxialPoint {
        self.tile
    }

    /// The last sampled pointer position, in world space
    pub fn pointer(&self) -> PixelPoint {
        self.pointer
    }

    /// Get the value for a shader parameter. The highlight parameter gets the
    /// current tile as `[q, r, 0.0]`; any other name isn't ours, so it gets
    /// `None`.
    pub fn shader_param(&self, name: &str) -> Option<[f64; 3]> {
        if name == self.highlight_param {
            Some([self.tile.q, self.tile.r, 0.0])
        } else {
            None
        }
    }
}
