use crate::bodies::{BodyDesc, BodyFlags, BodyState};
use crate::core::engine::Engine;
use crate::core::{
    BodyHandle, BodyRecord, BoundaryManager, EventQueue, Registry, ShapeHandle,
    SimulationConfig, WorldEvent,
};
use crate::error::SandboxError;
use crate::math::{Aabb, Point2, Vector2};
use crate::shapes::ShapeDesc;
use crate::Result;

/// The physics world: the engine's simulation context together with the
/// boundary walls and the registry of every body and shape the sandbox created
pub struct PhysicsWorld {
    /// The underlying rigid-body engine
    engine: Engine,

    /// Every engine handle allocated through this world
    registry: Registry,

    /// The four walls around the playable area
    boundary: BoundaryManager,

    /// Static body shared by the boundary walls
    static_body: BodyHandle,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Queue of world events
    events: EventQueue,

    /// The total elapsed simulation time
    time: f32,

    /// Number of steps run so far
    steps: u64,
}

impl PhysicsWorld {
    /// Creates a world with the given tuning, walled in by `area`
    pub fn new(config: SimulationConfig, area: Aabb) -> Self {
        let mut engine = Engine::new(&config);
        let mut registry = Registry::new();

        let anchor_desc = BodyDesc::fixed(Point2::origin());
        let static_body = BodyHandle(engine.insert_body(&anchor_desc));
        registry.insert_body(static_body, anchor_desc, BodyFlags::STATIC | BodyFlags::BOUNDARY);

        let boundary = BoundaryManager::new(&mut engine, &mut registry, static_body, area);

        log::info!(
            "physics world created: gravity ({}, {}), {} iterations, dt {:.4}",
            config.gravity.x, config.gravity.y, config.iterations, config.time_step
        );

        Self {
            engine,
            registry,
            boundary,
            static_body,
            config,
            events: EventQueue::new(),
            time: 0.0,
            steps: 0,
        }
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns the number of steps run so far
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Gets the current gravity
    pub fn get_gravity(&self) -> Vector2 {
        self.engine.gravity()
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The static body the boundary walls hang off
    pub fn static_body(&self) -> BodyHandle {
        self.static_body
    }

    /// Adds a body with a single shape and returns both handles
    pub fn add_entity(&mut self, body: BodyDesc, shape: ShapeDesc, flags: BodyFlags) -> (BodyHandle, ShapeHandle) {
        let body_handle = BodyHandle(self.engine.insert_body(&body));
        self.registry.insert_body(body_handle, body, flags);

        let shape_handle = ShapeHandle(self.engine.insert_shape(&shape, body_handle.0));
        self.registry.insert_shape(shape_handle, body_handle, shape);

        self.events.push(WorldEvent::EntityAdded {
            body: body_handle,
            flags,
        });

        (body_handle, shape_handle)
    }

    /// Removes a body and all of its shapes from the engine and the registry
    pub fn remove_entity(&mut self, body: BodyHandle) -> Result<BodyRecord> {
        if body == self.static_body {
            return Err(SandboxError::InvalidParameter(
                "the boundary anchor body cannot be removed".into(),
            ));
        }

        let record = self.registry.remove_body(body).ok_or_else(|| {
            SandboxError::ResourceNotFound(format!("Body {} not registered", body))
        })?;

        if !self.engine.remove_body(body.0) {
            return Err(SandboxError::ResourceNotFound(format!(
                "Body {} registered but unknown to the engine",
                body
            )));
        }

        self.events.push(WorldEvent::EntityRemoved { body });
        Ok(record)
    }

    /// Advances the simulation by exactly `dt` seconds
    pub fn step(&mut self, dt: f32) {
        self.engine.step(dt);
        self.time += dt;
        self.steps += 1;

        log::trace!("step {} (t = {:.3})", self.steps, self.time);
    }

    /// Returns the first shape containing `point`, if any.
    ///
    /// Overlaps resolve to whichever shape the engine stores first.
    pub fn point_query(&self, point: Point2) -> Option<ShapeHandle> {
        self.engine.point_query(&point).map(ShapeHandle)
    }

    /// Replaces the boundary walls to enclose `bounds`
    pub fn rebuild_boundary(&mut self, bounds: Aabb) {
        self.boundary
            .rebuild(&mut self.engine, &mut self.registry, self.static_body, bounds);
        self.events.push(WorldEvent::BoundaryRebuilt { bounds });
    }

    pub fn boundary(&self) -> &BoundaryManager {
        &self.boundary
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Reads a body's current transform and velocity from the engine
    pub fn body_state(&self, body: BodyHandle) -> Option<BodyState> {
        self.engine.body_state(body.0)
    }

    /// Effective mass the engine uses for a body
    pub fn body_mass(&self, body: BodyHandle) -> Option<f32> {
        self.engine.body_mass(body.0)
    }

    /// Whether the engine currently holds this shape
    pub fn contains_shape(&self, shape: ShapeHandle) -> bool {
        self.engine.contains_shape(shape.0)
    }

    /// Returns the number of bodies in the engine
    pub fn body_count(&self) -> usize {
        self.engine.body_count()
    }

    /// Returns the number of shapes in the engine
    pub fn shape_count(&self) -> usize {
        self.engine.shape_count()
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Removes and returns every pending event
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        self.events.drain()
    }
}
