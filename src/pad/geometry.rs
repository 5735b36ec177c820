//! Coordinate normalization between container-local and pad-centered space
//!
//! The host reports pointer positions relative to the pad's container
//! (origin at the top-left corner, y growing downward). Everything the
//! classifier and clamper do happens in pad-centered space, where the origin
//! sits at the visual center of the pad.
//!
//! ```text
//!   container-local            pad-centered
//!   (0,0) ──────── x           (-w/2,-h/2) ─────
//!     │                            │
//!     │    (w/2,h/2)  ──────►      │   (0,0)
//!     │                            │
//!     y                                     (w/2,h/2)
//! ```

use serde::{Deserialize, Serialize};

/// A 2D point. Which space it lives in is stated by whoever hands it out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the origin, without overflowing for huge
    /// coordinates
    pub fn length(&self) -> f32 {
        self.x.hypot(self.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Last measured size of the pad's container
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PadGeometry {
    pub width: f32,
    pub height: f32,
}

impl PadGeometry {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center of the container, in container-local coordinates
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// True until the host has reported a non-empty size
    pub fn is_unmeasured(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Convert a container-local point into pad-centered coordinates
pub fn normalize(point: Point, geometry: &PadGeometry) -> Point {
    Point::new(
        point.x - geometry.width / 2.0,
        point.y - geometry.height / 2.0,
    )
}

/// Convert a pad-centered point back into container-local coordinates
pub fn denormalize(point: Point, geometry: &PadGeometry) -> Point {
    Point::new(
        point.x + geometry.width / 2.0,
        point.y + geometry.height / 2.0,
    )
}
