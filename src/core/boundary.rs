use crate::bodies::Material;
use crate::core::engine::Engine;
use crate::core::{BodyHandle, Registry, ShapeHandle};
use crate::math::{Aabb, Point2};
use crate::shapes::{ShapeDesc, BOUNDARY_THICKNESS};

/// One of the four walls enclosing the playable area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySegment {
    pub handle: ShapeHandle,
    pub a: Point2,
    pub b: Point2,
    pub radius: f32,
}

/// Keeps four static wall segments on the world's static body in step with the
/// playable area. The set always has exactly four members; a rebuild removes
/// all four before adding their replacements.
#[derive(Debug)]
pub struct BoundaryManager {
    segments: [BoundarySegment; 4],
    bounds: Aabb,
    rebuilds: u64,
}

impl BoundaryManager {
    /// Wall endpoints for `bounds`: bottom, right, top, left, each running
    /// counter-clockwise around the rectangle
    pub fn wall_endpoints(bounds: &Aabb) -> [(Point2, Point2); 4] {
        let [bottom_left, bottom_right, top_right, top_left] = bounds.corners();
        [
            (bottom_left, bottom_right),
            (bottom_right, top_right),
            (top_right, top_left),
            (top_left, bottom_left),
        ]
    }

    pub(crate) fn new(
        engine: &mut Engine,
        registry: &mut Registry,
        anchor: BodyHandle,
        bounds: Aabb,
    ) -> Self {
        Self {
            segments: Self::add_walls(engine, registry, anchor, &bounds),
            bounds,
            rebuilds: 0,
        }
    }

    /// Replaces the four walls with ones matching `bounds`.
    ///
    /// Panics if one of the current walls is no longer in the engine: carrying on
    /// with a broken boundary would silently stop containing bodies.
    pub(crate) fn rebuild(
        &mut self,
        engine: &mut Engine,
        registry: &mut Registry,
        anchor: BodyHandle,
        bounds: Aabb,
    ) {
        for segment in &self.segments {
            assert!(
                engine.remove_shape(segment.handle.0),
                "boundary segment {} missing from the world",
                segment.handle
            );
            registry.remove_shape(segment.handle);
        }

        self.segments = Self::add_walls(engine, registry, anchor, &bounds);
        self.bounds = bounds;
        self.rebuilds += 1;

        log::debug!(
            "boundary rebuilt for ({}, {})-({}, {})",
            bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y
        );
    }

    fn add_walls(
        engine: &mut Engine,
        registry: &mut Registry,
        anchor: BodyHandle,
        bounds: &Aabb,
    ) -> [BoundarySegment; 4] {
        Self::wall_endpoints(bounds).map(|(a, b)| {
            let desc = ShapeDesc::segment(a, b, BOUNDARY_THICKNESS, Material::boundary());
            let handle = ShapeHandle(engine.insert_shape(&desc, anchor.0));
            registry.insert_shape(handle, anchor, desc);
            BoundarySegment {
                handle,
                a,
                b,
                radius: BOUNDARY_THICKNESS,
            }
        })
    }

    /// The current four walls: bottom, right, top, left
    pub fn segments(&self) -> &[BoundarySegment; 4] {
        &self.segments
    }

    /// The area the walls currently enclose
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Number of rebuilds since construction
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    pub fn contains(&self, handle: ShapeHandle) -> bool {
        self.segments.iter().any(|segment| segment.handle == handle)
    }
}
