//! The render-facing side of the sandbox: the surface contract the sandbox
//! draws through, an in-memory surface, and the table of visual proxies.

mod color;
mod proxy;
mod recording;

pub use self::color::Color;
pub use self::proxy::{ProxyTable, VisualProxy};
pub use self::recording::{RecordingSurface, RegionState, SurfaceOpCounts};

use crate::math::{Point2, Vector2};

/// Opaque handle to a region created on a render surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(u64);

impl RegionId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// Initial attributes of a render region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionDesc {
    /// Bottom-left corner; in the parent's local frame when `parent` is set
    pub position: Point2,

    pub size: Vector2,

    pub color: Color,

    /// Texture key understood by the surface, e.g. `"circle.png"`
    pub texture: Option<String>,

    /// Region this one is drawn inside of, moving and rotating with it
    pub parent: Option<RegionId>,
}

impl RegionDesc {
    pub fn new(position: Point2, size: Vector2, color: Color) -> Self {
        Self {
            position,
            size,
            color,
            texture: None,
            parent: None,
        }
    }

    pub fn with_texture(mut self, texture: Option<String>) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_parent(mut self, parent: RegionId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Whatever draws the sandbox. Regions are created once and then moved,
/// resized, rotated and recoloured every frame.
pub trait RenderSurface {
    /// Creates a region and returns its handle
    fn create_region(&mut self, desc: RegionDesc) -> RegionId;

    /// Destroys a region and any regions parented to it
    fn remove_region(&mut self, region: RegionId);

    /// Moves the region's bottom-left corner
    fn set_position(&mut self, region: RegionId, position: Point2);

    fn set_size(&mut self, region: RegionId, size: Vector2);

    /// Rotation in degrees, counter-clockwise about the region centre
    fn set_rotation(&mut self, region: RegionId, degrees: f32);

    fn set_fill_color(&mut self, region: RegionId, color: Color);
}
