mod body;
mod material;
mod body_type;

pub use self::body::{BodyDesc, BodyState, CIRCLE_MOMENT, DEFAULT_MASS};
pub use self::material::Material;
pub use self::body_type::RigidBodyType;
pub use self::body_flags::BodyFlags;

/// Flags describing the role of a registered body
pub mod body_flags {
    use bitflags::bitflags;
    
    bitflags! {
        /// Flags describing how the sandbox treats a registered body
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct BodyFlags: u32 {
            /// Body is moved by the simulation
            const DYNAMIC = 0x01;
            
            /// Body never moves
            const STATIC = 0x02;
            
            /// Body (or its shapes) forms the playable-area walls
            const BOUNDARY = 0x04;
            
            /// Body has a visual proxy that is re-synced after every step
            const SYNCED = 0x08;
            
            /// Body may be evicted when the circle capacity is exceeded
            const EVICTABLE = 0x10;
        }
    }
}
