use crate::bodies::{BodyDesc, BodyFlags, Material, CIRCLE_MOMENT, DEFAULT_MASS};
use crate::core::{BodyHandle, PhysicsWorld, SandboxConfig};
use crate::error::SandboxError;
use crate::math::{moment_for_box, Aabb, Point2, Vector2};
use crate::render::{Color, ProxyTable, RegionDesc, RenderSurface, VisualProxy};
use crate::shapes::ShapeDesc;
use crate::Result;
use rand::Rng;
use std::collections::VecDeque;

/// Height of the ground strip laid just under the playable area
pub const GROUND_THICKNESS: f32 = 2.0;

/// Saturation and value of circle colours; only the hue cycles
const CIRCLE_SATURATION: f32 = 0.3;
const CIRCLE_VALUE: f32 = 1.0;

fn check_dimension(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SandboxError::InvalidParameter(format!("{} must be positive, got {}", name, value)))
    }
}

fn check_position(x: f32, y: f32) -> Result<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(SandboxError::InvalidParameter(format!("position ({}, {}) is not finite", x, y)))
    }
}

/// Builds new entities: the engine body and shape, the registry entry and the
/// matching visual proxy.
///
/// Owns the hue counter for circle colours and the spawn-ordered list of live
/// circles used for eviction.
#[derive(Debug, Clone)]
pub struct Spawner {
    hue: f32,
    hue_step: f32,
    circle_texture: Option<String>,
    circle_capacity: Option<usize>,
    circles: VecDeque<BodyHandle>,
}

impl Spawner {
    pub fn new(config: &SandboxConfig) -> Self {
        Self {
            hue: 0.0,
            hue_step: config.hue_step,
            circle_texture: config.circle_texture.clone(),
            circle_capacity: config.circle_capacity,
            circles: VecDeque::new(),
        }
    }

    /// Hue of the most recently spawned circle (0 before the first one)
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Live circles, oldest first
    pub fn circles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.circles.iter().copied()
    }

    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    fn next_hue(&mut self) -> f32 {
        self.hue = (self.hue + self.hue_step).rem_euclid(1.0);
        self.hue
    }

    /// Adds a dynamic circle. Its colour is taken from the hue counter unless
    /// `color` is given.
    ///
    /// Circles get mass 100 and a huge moment of inertia, so they barely spin;
    /// their rotation is simulated but never drawn.
    pub fn spawn_circle<S: RenderSurface>(
        &mut self,
        world: &mut PhysicsWorld,
        proxies: &mut ProxyTable,
        surface: &mut S,
        x: f32,
        y: f32,
        radius: f32,
        color: Option<Color>,
    ) -> Result<BodyHandle> {
        check_position(x, y)?;
        check_dimension("radius", radius)?;

        if let Some(capacity) = self.circle_capacity {
            while self.circles.len() >= capacity {
                if self.evict_oldest(world, proxies, surface)?.is_none() {
                    break;
                }
            }
        }

        let (body, _) = world.add_entity(
            BodyDesc::dynamic(DEFAULT_MASS, CIRCLE_MOMENT, Point2::new(x, y)),
            ShapeDesc::circle(radius, Material::circle()),
            BodyFlags::DYNAMIC | BodyFlags::SYNCED | BodyFlags::EVICTABLE,
        );

        let color = match color {
            Some(color) => color,
            None => Color::from_hsv(self.next_hue(), CIRCLE_SATURATION, CIRCLE_VALUE),
        };
        let region = surface.create_region(
            RegionDesc::new(
                Point2::new(x - radius, y - radius),
                Vector2::new(radius * 2.0, radius * 2.0),
                color,
            )
            .with_texture(self.circle_texture.clone()),
        );

        proxies.insert(body, VisualProxy::Circle { radius, color, region });
        self.circles.push_back(body);

        log::debug!("spawned circle {} at ({}, {}) r={}", body, x, y, radius);
        Ok(body)
    }

    /// Adds a circle at a uniformly random point of `area` with a radius in [10, 60)
    pub fn spawn_random_circle<S: RenderSurface, R: Rng>(
        &mut self,
        world: &mut PhysicsWorld,
        proxies: &mut ProxyTable,
        surface: &mut S,
        area: &Aabb,
        rng: &mut R,
    ) -> Result<BodyHandle> {
        let position = area.lerp(rng.gen::<f32>(), rng.gen::<f32>());
        let radius = 10.0 + rng.gen::<f32>() * 50.0;
        self.spawn_circle(world, proxies, surface, position.x, position.y, radius, None)
    }

    /// Adds a dynamic box centred at (x, y). Mass is 100 and the moment of
    /// inertia follows from the box size.
    pub fn spawn_box<S: RenderSurface>(
        &mut self,
        world: &mut PhysicsWorld,
        proxies: &mut ProxyTable,
        surface: &mut S,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<BodyHandle> {
        check_position(x, y)?;
        check_dimension("width", width)?;
        check_dimension("height", height)?;

        let moment = moment_for_box(DEFAULT_MASS, width, height);
        let (body, _) = world.add_entity(
            BodyDesc::dynamic(DEFAULT_MASS, moment, Point2::new(x, y)),
            ShapeDesc::cuboid(width, height, Material::dead()),
            BodyFlags::DYNAMIC | BodyFlags::SYNCED,
        );

        let size = Vector2::new(width, height);
        let panel = surface.create_region(RegionDesc::new(
            Point2::new(x, y) - size * 0.5,
            size,
            Color::rgba(0.0, 0.0, 0.0, 0.0),
        ));
        let rect = surface.create_region(
            RegionDesc::new(Point2::origin(), size, color).with_parent(panel),
        );

        proxies.insert(body, VisualProxy::Box { panel, rect, size });

        log::debug!("spawned box {} at ({}, {}) {}x{} (moment {})", body, x, y, width, height, moment);
        Ok(body)
    }

    /// Adds an immovable box with a render region that is drawn once and never synced
    pub fn spawn_static_box<S: RenderSurface>(
        &mut self,
        world: &mut PhysicsWorld,
        surface: &mut S,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<BodyHandle> {
        check_position(x, y)?;
        check_dimension("width", width)?;
        check_dimension("height", height)?;

        let (body, _) = world.add_entity(
            BodyDesc::fixed(Point2::new(x, y)),
            ShapeDesc::cuboid(width, height, Material::dead()),
            BodyFlags::STATIC,
        );

        let size = Vector2::new(width, height);
        surface.create_region(RegionDesc::new(Point2::new(x, y) - size * 0.5, size, color));

        log::debug!("spawned static box {} at ({}, {}) {}x{}", body, x, y, width, height);
        Ok(body)
    }

    /// Lays a thin, very bouncy strip just below the bottom edge of `area`,
    /// spanning its width. It is not moved when the area later changes.
    pub fn spawn_ground(&mut self, world: &mut PhysicsWorld, area: &Aabb) -> BodyHandle {
        let center = Point2::new(
            area.min.x + area.width() * 0.5,
            area.min.y - GROUND_THICKNESS * 0.5,
        );
        let (body, _) = world.add_entity(
            BodyDesc::fixed(center),
            ShapeDesc::cuboid(area.width(), GROUND_THICKNESS, Material::ground()),
            BodyFlags::STATIC,
        );

        log::debug!("ground {} laid under y = {}", body, area.min.y);
        body
    }

    /// Removes the oldest live circle from the world, the proxy table and the surface
    pub fn evict_oldest<S: RenderSurface>(
        &mut self,
        world: &mut PhysicsWorld,
        proxies: &mut ProxyTable,
        surface: &mut S,
    ) -> Result<Option<BodyHandle>> {
        let Some(&body) = self.circles.front() else {
            return Ok(None);
        };

        world.remove_entity(body)?;
        self.circles.pop_front();
        if let Some(proxy) = proxies.remove(body) {
            surface.remove_region(proxy.root_region());
        }

        log::debug!("evicted circle {}", body);
        Ok(Some(body))
    }
}
