use crate::math::{Point2, Vector2};
use crate::render::{Color, RegionDesc, RegionId, RenderSurface};
use std::collections::BTreeMap;

/// Current attributes of a region on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct RegionState {
    pub position: Point2,
    pub size: Vector2,
    /// Degrees, counter-clockwise about the centre
    pub rotation: f32,
    pub color: Color,
    pub texture: Option<String>,
    pub parent: Option<RegionId>,
}

impl RegionState {
    pub fn center(&self) -> Point2 {
        self.position + self.size * 0.5
    }
}

/// How many operations of each kind a surface has received
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SurfaceOpCounts {
    pub created: u64,
    pub removed: u64,
    pub position: u64,
    pub size: u64,
    pub rotation: u64,
    pub color: u64,
}

/// A render surface that only remembers what it was told.
///
/// Handy for headless runs and for asserting what the sandbox pushed to the screen.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    regions: BTreeMap<RegionId, RegionState>,
    next_id: u64,
    ops: SurfaceOpCounts,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(&self, region: RegionId) -> Option<&RegionState> {
        self.regions.get(&region)
    }

    /// Every live region in creation order
    pub fn regions(&self) -> impl Iterator<Item = (RegionId, &RegionState)> + '_ {
        self.regions.iter().map(|(id, state)| (*id, state))
    }

    /// Copy of every region's attributes, for before/after comparisons
    pub fn snapshot(&self) -> BTreeMap<RegionId, RegionState> {
        self.regions.clone()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn op_counts(&self) -> SurfaceOpCounts {
        self.ops
    }

    fn region_mut(&mut self, region: RegionId) -> Option<&mut RegionState> {
        let state = self.regions.get_mut(&region);
        if state.is_none() {
            log::warn!("render op on unknown region {:?}", region);
        }
        state
    }
}

impl RenderSurface for RecordingSurface {
    fn create_region(&mut self, desc: RegionDesc) -> RegionId {
        self.next_id += 1;
        let id = RegionId::new(self.next_id);
        self.regions.insert(id, RegionState {
            position: desc.position,
            size: desc.size,
            rotation: 0.0,
            color: desc.color,
            texture: desc.texture,
            parent: desc.parent,
        });
        self.ops.created += 1;
        id
    }

    fn remove_region(&mut self, region: RegionId) {
        if self.regions.remove(&region).is_some() {
            self.ops.removed += 1;
        }
        let children: Vec<RegionId> = self
            .regions
            .iter()
            .filter(|(_, state)| state.parent == Some(region))
            .map(|(id, _)| *id)
            .collect();
        for child in children {
            self.remove_region(child);
        }
    }

    fn set_position(&mut self, region: RegionId, position: Point2) {
        self.ops.position += 1;
        if let Some(state) = self.region_mut(region) {
            state.position = position;
        }
    }

    fn set_size(&mut self, region: RegionId, size: Vector2) {
        self.ops.size += 1;
        if let Some(state) = self.region_mut(region) {
            state.size = size;
        }
    }

    fn set_rotation(&mut self, region: RegionId, degrees: f32) {
        self.ops.rotation += 1;
        if let Some(state) = self.region_mut(region) {
            state.rotation = degrees;
        }
    }

    fn set_fill_color(&mut self, region: RegionId, color: Color) {
        self.ops.color += 1;
        if let Some(state) = self.region_mut(region) {
            state.color = color;
        }
    }
}
