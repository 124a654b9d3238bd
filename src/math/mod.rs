mod aabb;

pub use aabb::Aabb;

/// 2D vector type shared with the underlying engine
pub type Vector2 = nalgebra::Vector2<f32>;

/// 2D point type shared with the underlying engine
pub type Point2 = nalgebra::Point2<f32>;

/// Converts radians to degrees
#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / std::f32::consts::PI
}

/// Moment of inertia of a solid box of the given mass and size, about its centre
#[inline]
pub fn moment_for_box(mass: f32, width: f32, height: f32) -> f32 {
    mass * (width * width + height * height) / 12.0
}

/// Moment of inertia of a solid disc of the given mass and radius, about its centre
#[inline]
pub fn moment_for_circle(mass: f32, radius: f32) -> f32 {
    0.5 * mass * radius * radius
}
