//! The sandbox ties the pieces together: it owns the world, the proxy table,
//! the spawner and the render surface, and reacts to ticks, taps and resizes.

pub mod picker;
mod spawner;

pub use self::spawner::{Spawner, GROUND_THICKNESS};

use crate::core::{
    BodyHandle, FixedStepScheduler, PhysicsWorld, SandboxConfig, ShapeHandle, WorldEvent,
};
use crate::error::SandboxError;
use crate::math::{Aabb, Point2};
use crate::render::{Color, ProxyTable, RenderSurface, VisualProxy};
use crate::Result;
use rand::Rng;

/// An interactive 2D physics playground drawing onto `S`
pub struct Sandbox<S: RenderSurface> {
    config: SandboxConfig,
    world: PhysicsWorld,
    proxies: ProxyTable,
    spawner: Spawner,
    scheduler: FixedStepScheduler,
    surface: S,
    area: Aabb,
    ground: Option<BodyHandle>,
    last_pick: String,
}

impl<S: RenderSurface> Sandbox<S> {
    /// Builds the world inside `config.area` and, if asked, the starting scene
    pub fn new(config: SandboxConfig, surface: S) -> Result<Self> {
        config.validate()?;

        let area = config.area;
        let world = PhysicsWorld::new(config.simulation.clone(), area);
        let scheduler = FixedStepScheduler::new(&config.simulation);
        let spawner = Spawner::new(&config);

        let mut sandbox = Self {
            config,
            world,
            proxies: ProxyTable::new(),
            spawner,
            scheduler,
            surface,
            area,
            ground: None,
            last_pick: "None".to_string(),
        };

        if sandbox.config.populate_scene {
            sandbox.populate_scene()?;
        }
        Ok(sandbox)
    }

    /// Ground strip, two boxes, two circles and a static platform
    fn populate_scene(&mut self) -> Result<()> {
        self.ground = Some(self.spawner.spawn_ground(&mut self.world, &self.area));
        self.spawn_box(220.0, 300.0, 200.0, 100.0, Color::RED)?;
        self.spawn_box(350.0, 400.0, 50.0, 100.0, Color::TEAL)?;
        self.spawn_circle(450.0, 600.0, 50.0)?;
        self.spawn_circle(100.0, 600.0, 50.0)?;
        self.spawn_static_box(400.0, 100.0, 200.0, 100.0, Color::GREEN)?;

        log::info!(
            "scene populated: {} bodies, {} shapes",
            self.world.body_count(),
            self.world.shape_count()
        );
        Ok(())
    }

    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn proxies(&self) -> &ProxyTable {
        &self.proxies
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// Current playable area
    pub fn area(&self) -> Aabb {
        self.area
    }

    /// The ground strip, when the starting scene was built
    pub fn ground(&self) -> Option<BodyHandle> {
        self.ground
    }

    /// Adds a circle coloured by the spawner's hue counter
    pub fn spawn_circle(&mut self, x: f32, y: f32, radius: f32) -> Result<BodyHandle> {
        self.spawner.spawn_circle(
            &mut self.world,
            &mut self.proxies,
            &mut self.surface,
            x,
            y,
            radius,
            None,
        )
    }

    pub fn spawn_circle_with_color(&mut self, x: f32, y: f32, radius: f32, color: Color) -> Result<BodyHandle> {
        self.spawner.spawn_circle(
            &mut self.world,
            &mut self.proxies,
            &mut self.surface,
            x,
            y,
            radius,
            Some(color),
        )
    }

    /// Adds a circle somewhere random inside the playable area
    pub fn spawn_random_circle<R: Rng>(&mut self, rng: &mut R) -> Result<BodyHandle> {
        let area = self.area;
        self.spawner
            .spawn_random_circle(&mut self.world, &mut self.proxies, &mut self.surface, &area, rng)
    }

    pub fn spawn_box(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) -> Result<BodyHandle> {
        self.spawner.spawn_box(
            &mut self.world,
            &mut self.proxies,
            &mut self.surface,
            x,
            y,
            width,
            height,
            color,
        )
    }

    pub fn spawn_static_box(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) -> Result<BodyHandle> {
        self.spawner
            .spawn_static_box(&mut self.world, &mut self.surface, x, y, width, height, color)
    }

    /// Runs one fixed step and pushes the new transforms to the surface
    pub fn step(&mut self) {
        self.world.step(self.scheduler.time_step());
        self.sync();
    }

    /// Handles one scheduler tick with `elapsed` seconds of wall-clock time;
    /// returns the number of steps run
    pub fn tick(&mut self, elapsed: f32) -> u32 {
        let steps = self.scheduler.advance(elapsed);
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    /// Projects every proxied body onto the surface; returns how many were synced
    pub fn sync(&mut self) -> usize {
        self.proxies.sync(&self.world, &mut self.surface)
    }

    /// The playable area moved or changed size: rebuild the walls around it.
    /// Dynamic bodies and the ground strip are left alone.
    pub fn on_resize(&mut self, bounds: Aabb) -> Result<()> {
        if !bounds.is_valid() {
            return Err(SandboxError::InvalidParameter(format!(
                "area must have a positive extent, got {:?}",
                bounds
            )));
        }
        self.world.rebuild_boundary(bounds);
        self.area = bounds;
        Ok(())
    }

    /// Picks the shape under a tap and remembers its description for the status line
    pub fn on_tap(&mut self, point: Point2) -> Option<ShapeHandle> {
        let shape = self.pick(point);
        self.last_pick = picker::describe(&self.world, shape);
        log::info!("tap at ({}, {}): {}", point.x, point.y, self.last_pick);
        shape
    }

    /// First shape under `point`, if any
    pub fn pick(&self, point: Point2) -> Option<ShapeHandle> {
        picker::pick(&self.world, point)
    }

    /// Description of the last tapped shape, `"None"` if the tap hit nothing
    pub fn last_pick_text(&self) -> &str {
        &self.last_pick
    }

    /// `"x, y, degrees"` of the most recently spawned box
    pub fn box_status(&self) -> Option<String> {
        let (body, _) = self
            .proxies
            .iter()
            .filter(|(_, proxy)| matches!(proxy, VisualProxy::Box { .. }))
            .last()?;
        let state = self.world.body_state(body)?;
        Some(format!(
            "{:.2}, {:.2}, {:.2}",
            state.position.x,
            state.position.y,
            state.rotation_degrees()
        ))
    }

    /// Removes and returns every pending world event
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        self.world.drain_events()
    }
}
