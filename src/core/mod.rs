pub mod world;
pub mod config;
pub mod storage;
pub mod events;
pub mod boundary;
pub mod scheduler;
mod engine;

pub use self::world::PhysicsWorld;
pub use self::config::{SandboxConfig, SimulationConfig, StepMode};
pub use self::storage::{BodyRecord, Registry, ShapeRecord};
pub use self::events::{EventQueue, WorldEvent};
pub use self::boundary::{BoundaryManager, BoundarySegment};
pub use self::scheduler::FixedStepScheduler;

use rapier2d::prelude::{ColliderHandle, RigidBodyHandle};
use std::fmt;

/// A unique identifier for a body in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub(crate) RigidBodyHandle);

/// A unique identifier for a collision shape in the physics world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeHandle(pub(crate) ColliderHandle);

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (index, generation) = self.0.into_raw_parts();
        write!(f, "Body({}v{})", index, generation)
    }
}

impl fmt::Display for ShapeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (index, generation) = self.0.into_raw_parts();
        write!(f, "Shape({}v{})", index, generation)
    }
}
