use crate::core::{BodyHandle, PhysicsWorld};
use crate::math::{Point2, Vector2};
use crate::render::{Color, RegionId, RenderSurface};
use std::collections::HashMap;

/// Render-side record of one dynamic body
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualProxy {
    /// A square region holding the circle's texture; never rotated
    Circle {
        radius: f32,
        color: Color,
        region: RegionId,
    },

    /// A rotatable panel whose centre tracks the body, with the visible
    /// rectangle drawn inside it
    Box {
        panel: RegionId,
        rect: RegionId,
        size: Vector2,
    },
}

impl VisualProxy {
    /// The top-level region to destroy when the proxy goes away
    pub fn root_region(&self) -> RegionId {
        match *self {
            VisualProxy::Circle { region, .. } => region,
            VisualProxy::Box { panel, .. } => panel,
        }
    }

    /// Pushes the transform implied by a body at `position`/`rotation` to the surface
    fn project<S: RenderSurface>(&self, position: Point2, rotation_degrees: f32, surface: &mut S) {
        match *self {
            VisualProxy::Circle { radius, region, .. } => {
                surface.set_position(region, Point2::new(position.x - radius, position.y - radius));
                surface.set_size(region, Vector2::new(radius * 2.0, radius * 2.0));
            }
            VisualProxy::Box { panel, size, .. } => {
                surface.set_position(panel, position - size * 0.5);
                surface.set_rotation(panel, rotation_degrees);
            }
        }
    }
}

/// Maps every synced dynamic body to its visual proxy
#[derive(Debug, Default)]
pub struct ProxyTable {
    proxies: HashMap<BodyHandle, VisualProxy>,
    order: Vec<BodyHandle>,
}

impl ProxyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, body: BodyHandle, proxy: VisualProxy) {
        if self.proxies.insert(body, proxy).is_none() {
            self.order.push(body);
        }
    }

    pub fn remove(&mut self, body: BodyHandle) -> Option<VisualProxy> {
        let proxy = self.proxies.remove(&body)?;
        self.order.retain(|handle| *handle != body);
        Some(proxy)
    }

    pub fn get(&self, body: BodyHandle) -> Option<&VisualProxy> {
        self.proxies.get(&body)
    }

    /// Proxies in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &VisualProxy)> + '_ {
        self.order
            .iter()
            .filter_map(|body| self.proxies.get(body).map(|proxy| (*body, proxy)))
    }

    pub fn len(&self) -> usize {
        self.proxies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proxies.is_empty()
    }

    /// Projects every body's current transform onto its proxy's regions.
    ///
    /// Reads the world, writes only to the surface: running it twice without a
    /// step in between pushes identical values. Boxes are synced before circles.
    ///
    /// Panics if a proxy's body is gone from the world.
    pub fn sync<S: RenderSurface>(&self, world: &PhysicsWorld, surface: &mut S) -> usize {
        let boxes = self.iter().filter(|(_, p)| matches!(p, VisualProxy::Box { .. }));
        let circles = self.iter().filter(|(_, p)| matches!(p, VisualProxy::Circle { .. }));

        let mut synced = 0;
        for (body, proxy) in boxes.chain(circles) {
            let Some(state) = world.body_state(body) else {
                panic!("visual proxy for {} outlived its body", body);
            };
            proxy.project(state.position, state.rotation_degrees(), surface);
            synced += 1;
        }
        synced
    }
}
