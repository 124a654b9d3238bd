use crate::core::{PhysicsWorld, ShapeHandle};
use crate::math::Point2;

/// Returns the first shape under `point`, straight from the world's point query
pub fn pick(world: &PhysicsWorld, point: Point2) -> Option<ShapeHandle> {
    world.point_query(point)
}

/// Human-readable form of a pick result for a status display,
/// e.g. `"Shape(3v0) circle on Body(2v0)"` or `"None"`
pub fn describe(world: &PhysicsWorld, shape: Option<ShapeHandle>) -> String {
    let Some(shape) = shape else {
        return "None".to_string();
    };

    match world.registry().get_shape(shape) {
        Ok(record) if world.boundary().contains(shape) => {
            format!("{} boundary {} on {}", shape, record.desc.kind.name(), record.body)
        }
        Ok(record) => format!("{} {} on {}", shape, record.desc.kind.name(), record.body),
        Err(_) => shape.to_string(),
    }
}
