//! This sub-module contains the basic value types of the hex coordinate
//! system. See the parent module documentation for more info on the
//! coordinate systems.

use anyhow::anyhow;
use derive_more::{Add, AddAssign, Display, Div, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// A position on the hex lattice in axial coordinates. The components are
/// floats, so this can refer to any point within a tile, not just tile
/// centers. Use [AxialPoint::round] to snap to the nearest tile.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct AxialPoint {
    pub q: f64,
    pub r: f64,
}

impl AxialPoint {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(q: f64, r: f64) -> Self {
        Self { q, r }
    }

    /// The implied third component. Since `q + r + s = 0`, we can always
    /// derive it.
    pub fn s(&self) -> f64 {
        -self.q - self.r
    }

    /// Convert to cube coordinates, making the third component explicit. The
    /// output always satisfies `x + y + z = 0` exactly.
    pub fn to_cube(self) -> CubePoint {
        CubePoint {
            x: self.q,
            y: self.r,
            z: -self.q - self.r,
        }
    }

    /// Round this point to the center of the tile that contains it. This
    /// goes through cube space, see [CubePoint::round].
    pub fn round(self) -> AxialPoint {
        self.to_cube().round().to_axial()
    }

    /// Are both components whole numbers?
    pub fn is_integral(&self) -> bool {
        self.q.fract() == 0.0 && self.r.fract() == 0.0
    }
}

impl From<CubePoint> for AxialPoint {
    fn from(cube: CubePoint) -> Self {
        cube.to_axial()
    }
}

impl From<TilePoint> for AxialPoint {
    fn from(tile: TilePoint) -> Self {
        Self::new(tile.q.into(), tile.r.into())
    }
}

/// A position in cube coordinates. All cube points fall on the plane
/// `x + y + z = 0`, which is enforced on construction.
///
/// Cube points are mostly an intermediate form; the rest of the crate passes
/// around [AxialPoint]s.
#[derive(Copy, Clone, Debug, PartialEq, Display, Serialize)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct CubePoint {
    x: f64,
    y: f64,
    z: f64,
}

impl CubePoint {
    /// Construct a new cube point, validating that it falls on the plane
    /// `x + y + z = 0`. Floats don't add up perfectly, so a small error
    /// (relative to the magnitude of the components) is tolerated.
    pub fn new(x: f64, y: f64, z: f64) -> anyhow::Result<Self> {
        let magnitude = x.abs().max(y.abs()).max(z.abs()).max(1.0);
        let tolerance = 4.0 * f64::EPSILON * magnitude;
        // Written this way so NaN fails too
        if (x + y + z).abs() <= tolerance {
            Ok(Self { x, y, z })
        } else {
            Err(anyhow!(
                "Invalid cube point ({}, {}, {}); must be on the plane x+y+z=0",
                x,
                y,
                z
            ))
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn z(&self) -> f64 {
        self.z
    }

    /// Convert to axial coordinates. `z` is redundant, so it's dropped.
    pub fn to_axial(self) -> AxialPoint {
        AxialPoint::new(self.x, self.y)
    }

    /// Round to the nearest tile center. Each component is rounded on its
    /// own (halves go away from zero), which can knock the point off the
    /// plane. To get back on it, the component that moved the most is
    /// recomputed from the other two.
    ///
    /// Ties matter here: `x` only wins if it moved strictly more than both
    /// others, then `y` if it moved strictly more than `z`, otherwise `z` is
    /// recomputed. Changing this order changes which tile boundary points
    /// land on.
    ///
    /// https://www.redblobgames.com/grids/hexagons/#rounding
    pub fn round(self) -> CubePoint {
        let mut rx = self.x.round();
        let mut ry = self.y.round();
        let mut rz = self.z.round();

        let x_diff = (rx - self.x).abs();
        let y_diff = (ry - self.y).abs();
        let z_diff = (rz - self.z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            rx = -ry - rz;
        } else if y_diff > z_diff {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        CubePoint {
            x: rx,
            y: ry,
            z: rz,
        }
    }
}

impl From<AxialPoint> for CubePoint {
    fn from(axial: AxialPoint) -> Self {
        axial.to_cube()
    }
}

/// A point in 2D pixel space, i.e. screen or world units. These have nothing
/// to do with hex units until they're run through a [HexLayout](super::HexLayout).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Display,
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point that refers to a whole tile (via its center). This is the integer
/// counterpart of [AxialPoint]: any rounded axial point can be converted into
/// one.
///
/// Components are `i32`, but anything derived from them (`s`, distances) is
/// computed in `i64` so tiles near the edge of the range don't overflow.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct TilePoint {
    q: i32,
    r: i32,
}

impl TilePoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i64 {
        -i64::from(self.q) - i64::from(self.r)
    }

    /// Get the tile one step away in the given direction. `None` if that
    /// tile can't be represented, which only happens at the very edge of the
    /// `i32` range.
    pub fn adjacent(self, direction: TileDirection) -> Option<TilePoint> {
        let (dq, dr) = direction.to_offset();
        Some(Self::new(self.q.checked_add(dq)?, self.r.checked_add(dr)?))
    }

    /// Get an iterator of all the tiles directly adjacent to this one, in
    /// [TileDirection] order. The iterator contains 6 values, unless this
    /// tile is on the edge of the `i32` range.
    pub fn adjacents(self) -> impl Iterator<Item = TilePoint> {
        TileDirection::iter().filter_map(move |dir| self.adjacent(dir))
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the tiles are equal,
    /// 1 if they're adjacent, etc.
    pub fn distance_to(self, other: TilePoint) -> u64 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = self.s() - other.s();
        // IMPORTANT: each step between adjacent tiles moves two of the three
        // components by one
        (dq.unsigned_abs() + dr.unsigned_abs() + ds.unsigned_abs()) / 2
    }
}

/// The 6 directions in which hexes line up side-to-side, in clockwise order.
/// The compass names are how they look with flat top tiles and `y` pointing
/// up; with pointy top tiles everything is rotated by 30 degrees.
#[derive(Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash)]
pub enum TileDirection {
    /// Northeast
    NE,
    /// Southeast
    SE,
    /// South
    S,
    /// Southwest
    SW,
    /// Northwest
    NW,
    /// North
    N,
}

impl TileDirection {
    /// Get the axial `(q, r)` offset that moves a tile one step in this
    /// direction
    pub fn to_offset(self) -> (i32, i32) {
        match self {
            Self::NE => (1, 0),
            Self::SE => (1, -1),
            Self::S => (0, -1),
            Self::SW => (-1, 0),
            Self::NW => (-1, 1),
            Self::N => (0, 1),
        }
    }

    /// Get the direction pointing the other way
    pub fn opposite(self) -> Self {
        match self {
            Self::NE => Self::SW,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::NW => Self::SE,
            Self::N => Self::S,
        }
    }
}

impl TryFrom<AxialPoint> for TilePoint {
    type Error = anyhow::Error;

    /// Only integer-valued points convert. Call [AxialPoint::round] first if
    /// the point could be fractional.
    fn try_from(value: AxialPoint) -> Result<Self, Self::Error> {
        let in_range =
            |v: f64| v >= i32::MIN as f64 && v <= i32::MAX as f64;
        if value.is_integral() && in_range(value.q) && in_range(value.r) {
            Ok(Self::new(value.q as i32, value.r as i32))
        } else {
            Err(anyhow!(
                "Invalid tile point {}; components must be integers",
                value
            ))
        }
    }
}
