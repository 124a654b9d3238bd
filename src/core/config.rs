use crate::error::SandboxError;
use crate::math::{Aabb, Point2, Vector2};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How wall-clock frame time is turned into simulation steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepMode {
    /// Exactly one step of `time_step` per scheduler tick, whatever the elapsed time
    #[default]
    Fixed,

    /// Accumulate elapsed time and run zero or more fixed steps per tick
    Accumulated,
}

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// The fixed time step for the simulation
    pub time_step: f32,

    /// The maximum number of steps a single tick may run in accumulated mode
    pub max_substeps: u32,

    /// How elapsed frame time maps to steps
    pub step_mode: StepMode,

    /// Gravity vector applied to dynamic bodies
    pub gravity: Vector2,

    /// Number of solver iterations per step (accuracy vs. cost)
    pub iterations: u32,

    /// The time a body must be inactive before sleeping
    pub sleep_time_threshold: f32,

    /// Penetration allowed between shapes before position correction kicks in
    pub collision_slop: f32,

    /// Number of world units (pixels) per engine length unit
    pub length_unit: f32,

    /// Whether to use continuous collision detection on dynamic bodies
    pub use_ccd: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            time_step: 1.0 / 30.0,
            max_substeps: 5,
            step_mode: StepMode::Fixed,
            gravity: Vector2::new(0.0, -100.0),
            iterations: 30,
            sleep_time_threshold: 0.5,
            collision_slop: 0.5,
            length_unit: 10.0,
            use_ccd: false,
        }
    }
}

impl SimulationConfig {
    /// Checks that every tuning value is usable by the engine
    pub fn validate(&self) -> Result<()> {
        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "time_step must be positive, got {}",
                self.time_step
            )));
        }
        if self.max_substeps == 0 {
            return Err(SandboxError::InvalidParameter("max_substeps must be at least 1".into()));
        }
        if self.iterations == 0 {
            return Err(SandboxError::InvalidParameter("iterations must be at least 1".into()));
        }
        if !(self.gravity.x.is_finite() && self.gravity.y.is_finite()) {
            return Err(SandboxError::InvalidParameter("gravity must be finite".into()));
        }
        if !(self.sleep_time_threshold.is_finite() && self.sleep_time_threshold >= 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "sleep_time_threshold must be non-negative, got {}",
                self.sleep_time_threshold
            )));
        }
        if !(self.collision_slop.is_finite() && self.collision_slop >= 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "collision_slop must be non-negative, got {}",
                self.collision_slop
            )));
        }
        if !(self.length_unit.is_finite() && self.length_unit > 0.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "length_unit must be positive, got {}",
                self.length_unit
            )));
        }
        Ok(())
    }
}

/// Configuration of the whole sandbox: engine tuning plus scene and spawner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub simulation: SimulationConfig,

    /// Initial playable area; the boundary walls and the ground strip are built from it
    pub area: Aabb,

    /// Hue advance per spawned circle, wrapping at 1.0
    pub hue_step: f32,

    /// Maximum number of live circles; `None` keeps every circle ever spawned
    pub circle_capacity: Option<usize>,

    /// Texture key handed to the render surface for circle regions
    pub circle_texture: Option<String>,

    /// Whether to build the initial scene (ground, two boxes, two circles, platform)
    pub populate_scene: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            area: Aabb::from_origin_extent(Point2::origin(), Vector2::new(800.0, 720.0)),
            hue_step: 0.01,
            circle_capacity: None,
            circle_texture: Some("circle.png".to_string()),
            populate_scene: true,
        }
    }
}

impl SandboxConfig {
    /// Parses a JSON document; missing fields take their default values
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SandboxConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.simulation.validate()?;

        if !self.area.is_valid() {
            return Err(SandboxError::InvalidParameter(format!(
                "area must have a positive extent, got {:?}",
                self.area
            )));
        }
        if !(self.hue_step > 0.0 && self.hue_step <= 1.0) {
            return Err(SandboxError::InvalidParameter(format!(
                "hue_step must be in (0, 1], got {}",
                self.hue_step
            )));
        }
        if self.circle_capacity == Some(0) {
            return Err(SandboxError::InvalidParameter("circle_capacity must be at least 1".into()));
        }
        Ok(())
    }
}
