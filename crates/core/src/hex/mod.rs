//! This module holds the basic types and conversions for hexagon grids.
//!
//! ## Coordinate Systems
//!
//! hexgrid deals with three coordinate systems:
//!
//! ### Axial Coordinates
//!
//! Axial coordinates (`q`, `r`) index positions on the hex lattice with two
//! numbers. They're what gets stored and handed to the host, e.g. as the
//! `highlight` shader parameter. See [Amit Patel's guide](https://www.redblobgames.com/grids/hexagons/#coordinates-axial)
//! for the canonical description.
//!
//! ### Cube Coordinates
//!
//! Cube coordinates (`x`, `y`, `z`) are the same positions with the implied
//! third component made explicit. **For any cube coordinate,
//! `x + y + z = 0`.** We only use them as an intermediate form, because
//! rounding a fractional position to the nearest whole tile is well-defined
//! in cube space but not in axial space. Rounding `q` and `r` independently
//! can land on a point that isn't the nearest tile.
//!
//! Converting axial to cube is `(q, r) -> (q, r, -q - r)` and back is just
//! dropping `z`.
//!
//! ### Pixel Coordinates
//!
//! Pixel coordinates are plain 2D screen/world positions. They're related to
//! hex space by a single scalar, the **tile radius** (distance from a tile's
//! center to any of its vertices), and by the [TileOrientation], which picks
//! one of two linear transforms:
//!
//! ```text
//!   pointy top        flat top
//!       /\             ____
//!      /  \           /    \
//!     |    |         /      \
//!     |    |         \      /
//!      \  /           \____/
//!       \/
//! ```
//!
//! In both orientations, the tile `(0, 0)` is centered on the pixel origin.
//!
//! Use [HexLayout] to convert between pixel space and hex space with a
//! validated radius.

mod layout;
mod unit;

pub use self::{layout::*, unit::*};
