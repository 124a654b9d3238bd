use crate::math::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, used for the playable area and render regions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum (bottom-left) corner
    pub min: Point2,
    
    /// Maximum (top-right) corner
    pub max: Point2,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB from an origin (bottom-left corner) and an extent
    #[inline]
    pub fn from_origin_extent(origin: Point2, extent: Vector2) -> Self {
        Self {
            min: origin,
            max: origin + extent,
        }
    }

    /// Creates an AABB centered at a position with the given half extents
    #[inline]
    pub fn from_center_half_extents(center: Point2, half_extents: Vector2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Returns the origin (bottom-left corner)
    #[inline]
    pub fn origin(&self) -> Point2 {
        self.min
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the extents of the AABB in each dimension
    #[inline]
    pub fn extents(&self) -> Vector2 {
        self.max - self.min
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the four corners counter-clockwise starting at the bottom-left:
    /// (x0,y0), (x1,y0), (x1,y1), (x0,y1)
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.min.x, self.min.y),
            Point2::new(self.max.x, self.min.y),
            Point2::new(self.max.x, self.max.y),
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Checks if this AABB contains a point
    #[inline]
    pub fn contains_point(&self, point: Point2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Returns the point at the given fractions of the width and height
    #[inline]
    pub fn lerp(&self, fx: f32, fy: f32) -> Point2 {
        Point2::new(
            self.min.x + fx * self.width(),
            self.min.y + fy * self.height(),
        )
    }

    /// Returns true when the AABB has a strictly positive, finite area
    pub fn is_valid(&self) -> bool {
        let extents = self.extents();
        extents.x.is_finite() && extents.y.is_finite() && extents.x > 0.0 && extents.y > 0.0
    }
}
