//! # Geometric Primitives
//!
//! Plain-data 2D/3D points and line segments used by the layout engine and
//! the detailing path generators. Rendering backends consume these directly;
//! nothing here issues draw calls.
//!
//! Coordinates are section-local: origin at the section centroid, +x to the
//! right, +y upward. Backends with y-down screen space flip on their side.

use serde::{Deserialize, Serialize};

/// Position in the 2D section plane, in scaled drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// Distance along the section x axis.
    pub x: f64,
    /// Distance along the section y axis.
    pub y: f64,
}

impl Point2 {
    /// Create a [`Point2`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point.
    #[must_use]
    pub fn distance_to(self, other: Point2) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Position in 3D space, used by the helical binder path generator.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    /// Distance along the member axis.
    pub z: f64,
}

impl Point3 {
    /// Create a [`Point3`] with explicit coordinates.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A straight line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    /// Create a [`Segment`] between two points.
    #[must_use]
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Midpoint of the segment.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        Point2::new(
            (self.start.x + self.end.x) / 2.0,
            (self.start.y + self.end.y) / 2.0,
        )
    }

    /// Length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}
