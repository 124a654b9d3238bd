/// Type of rigid body, determining how it behaves in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigidBodyType {
    /// Dynamic bodies are fully simulated (affected by gravity and collisions)
    Dynamic,
    
    /// Static bodies never move; used for walls, ground and platforms
    Static,
}
