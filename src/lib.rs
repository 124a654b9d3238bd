pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod render;
pub mod sandbox;

/// Re-export common types for easier usage
pub use crate::core::{BodyHandle, PhysicsWorld, SandboxConfig, ShapeHandle, SimulationConfig, StepMode};
pub use crate::bodies::{BodyDesc, BodyState, Material, RigidBodyType};
pub use crate::render::{Color, RecordingSurface, RenderSurface};
pub use crate::sandbox::Sandbox;
pub use crate::math::{Aabb, Point2, Vector2};

/// Error types for the sandbox
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum SandboxError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("I/O error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Invalid configuration: {0}")]
        Config(#[from] serde_json::Error),
    }
}

/// Result type for sandbox operations
pub type Result<T> = std::result::Result<T, error::SandboxError>;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
