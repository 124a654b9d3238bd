/// Surface properties of a collision shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Coefficient of restitution (elasticity), 0-1
    pub elasticity: f32,
    
    /// Coefficient of friction
    pub friction: f32,
}

impl Material {
    /// Creates a frictionless material with the given elasticity
    pub fn new(elasticity: f32) -> Self {
        Self {
            elasticity,
            friction: 0.0,
        }
    }
    
    /// Creates a material with the given elasticity and friction
    pub fn with_friction(elasticity: f32, friction: f32) -> Self {
        Self {
            elasticity,
            friction,
        }
    }
    
    /// Boundary walls: moderately bouncy
    pub fn boundary() -> Self {
        Self::new(0.6)
    }
    
    /// Dynamic circles
    pub fn circle() -> Self {
        Self::new(0.6)
    }
    
    /// Dynamic and static boxes absorb impacts
    pub fn dead() -> Self {
        Self::new(0.0)
    }
    
    /// Ground strip: near-perfect bounce
    pub fn ground() -> Self {
        Self::new(1.0)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::dead()
    }
}
