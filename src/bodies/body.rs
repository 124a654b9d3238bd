use crate::bodies::RigidBodyType;
use crate::math::{to_degrees, Point2, Vector2};

/// Mass assigned to every dynamic body spawned in the sandbox
pub const DEFAULT_MASS: f32 = 100.0;

/// Moment of inertia given to circles; large enough that they barely rotate
pub const CIRCLE_MOMENT: f32 = 1.0e5;

/// Description of a body before it is handed to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDesc {
    /// Dynamic or static
    pub body_type: RigidBodyType,
    
    /// Mass (ignored for static bodies)
    pub mass: f32,
    
    /// Moment of inertia (ignored for static bodies)
    pub moment: f32,
    
    /// Initial position of the body origin in world space
    pub position: Point2,
}

impl BodyDesc {
    /// A dynamic body with explicit mass and moment of inertia
    pub fn dynamic(mass: f32, moment: f32, position: Point2) -> Self {
        Self {
            body_type: RigidBodyType::Dynamic,
            mass,
            moment,
            position,
        }
    }
    
    /// An immovable body fixed at `position`
    pub fn fixed(position: Point2) -> Self {
        Self {
            body_type: RigidBodyType::Static,
            mass: 0.0,
            moment: 0.0,
            position,
        }
    }
    
    pub fn is_dynamic(&self) -> bool {
        self.body_type == RigidBodyType::Dynamic
    }
}

/// Snapshot of a body's authoritative transform as read back from the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Position of the body origin
    pub position: Point2,
    
    /// Rotation in radians, counter-clockwise
    pub rotation: f32,
    
    /// Linear velocity
    pub velocity: Vector2,
    
    /// Whether the engine has put the body to sleep
    pub sleeping: bool,
}

impl BodyState {
    /// Rotation converted to degrees, as the render layer expects it
    pub fn rotation_degrees(&self) -> f32 {
        to_degrees(self.rotation)
    }
    
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }
}
