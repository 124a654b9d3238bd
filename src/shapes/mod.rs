mod shape;

pub use self::shape::{ShapeDesc, ShapeKind, BOUNDARY_THICKNESS};
