use crate::bodies::Material;
use crate::math::{Point2, Vector2};
use rapier2d::parry::shape::SharedShape;
use rapier2d::prelude::{Collider, ColliderBuilder, CoefficientCombineRule};

/// Radius of the boundary wall segments
pub const BOUNDARY_THICKNESS: f32 = 10.0;

/// Geometry of a collision shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    /// Thick line segment between two points in the owning body's frame
    Segment {
        a: Point2,
        b: Point2,
        radius: f32,
    },
    
    /// Circle centred on the owning body
    Circle {
        radius: f32,
    },
    
    /// Axis-aligned (in body space) box centred on the owning body
    Box {
        width: f32,
        height: f32,
    },
}

impl ShapeKind {
    /// Returns the type name of the shape
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Segment { .. } => "segment",
            ShapeKind::Circle { .. } => "circle",
            ShapeKind::Box { .. } => "box",
        }
    }
    
    /// Size of the shape's bounding box in its local frame
    pub fn local_extents(&self) -> Vector2 {
        match *self {
            ShapeKind::Segment { a, b, radius } => {
                let d = b - a;
                Vector2::new(d.x.abs() + 2.0 * radius, d.y.abs() + 2.0 * radius)
            }
            ShapeKind::Circle { radius } => Vector2::new(2.0 * radius, 2.0 * radius),
            ShapeKind::Box { width, height } => Vector2::new(width, height),
        }
    }
}

/// A collision shape as the sandbox describes it: geometry plus surface material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDesc {
    pub kind: ShapeKind,
    pub material: Material,
}

impl ShapeDesc {
    pub fn segment(a: Point2, b: Point2, radius: f32, material: Material) -> Self {
        Self {
            kind: ShapeKind::Segment { a, b, radius },
            material,
        }
    }
    
    pub fn circle(radius: f32, material: Material) -> Self {
        Self {
            kind: ShapeKind::Circle { radius },
            material,
        }
    }
    
    pub fn cuboid(width: f32, height: f32, material: Material) -> Self {
        Self {
            kind: ShapeKind::Box { width, height },
            material,
        }
    }
    
    pub fn elasticity(&self) -> f32 {
        self.material.elasticity
    }
    
    /// Builds the engine collider. Colliders carry no density: body mass and
    /// inertia are always set explicitly on the body.
    ///
    /// Elasticity and friction of two touching shapes multiply, so a shape
    /// with elasticity 0 never bounces, whatever it hits.
    pub(crate) fn to_collider(&self) -> Collider {
        let builder = match self.kind {
            ShapeKind::Segment { a, b, radius } => {
                ColliderBuilder::new(SharedShape::capsule(a, b, radius))
            }
            ShapeKind::Circle { radius } => ColliderBuilder::ball(radius),
            ShapeKind::Box { width, height } => ColliderBuilder::cuboid(width * 0.5, height * 0.5),
        };
        
        builder
            .density(0.0)
            .restitution(self.material.elasticity)
            .friction(self.material.friction)
            .restitution_combine_rule(CoefficientCombineRule::Multiply)
            .friction_combine_rule(CoefficientCombineRule::Multiply)
            .build()
    }
}
