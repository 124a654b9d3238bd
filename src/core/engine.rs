//! Thin adapter over rapier2d. Everything the sandbox needs from a rigid-body
//! solver goes through here: insert/remove bodies and shapes, step, and
//! point queries.

use crate::bodies::{BodyDesc, BodyState, RigidBodyType};
use crate::core::SimulationConfig;
use crate::math::{Point2, Vector2};
use crate::shapes::ShapeDesc;
use rapier2d::parry::mass_properties::MassProperties;
use rapier2d::prelude::{
    CCDSolver, ColliderHandle, ColliderSet, DefaultBroadPhase, ImpulseJointSet,
    IntegrationParameters, IslandManager, MultibodyJointSet, NarrowPhase, PhysicsPipeline,
    RigidBodyBuilder, RigidBodyHandle, RigidBodySet,
};
use std::num::NonZeroUsize;

pub(crate) struct Engine {
    gravity: Vector2,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    sleep_time_threshold: f32,
    use_ccd: bool,
}

impl Engine {
    pub(crate) fn new(config: &SimulationConfig) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = config.time_step;
        integration_parameters.length_unit = config.length_unit;
        integration_parameters.normalized_allowed_linear_error =
            config.collision_slop / config.length_unit;
        integration_parameters.num_solver_iterations =
            NonZeroUsize::new(config.iterations as usize).unwrap_or(NonZeroUsize::MIN);

        Self {
            gravity: config.gravity,
            integration_parameters,
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            sleep_time_threshold: config.sleep_time_threshold,
            use_ccd: config.use_ccd,
        }
    }

    pub(crate) fn gravity(&self) -> Vector2 {
        self.gravity
    }

    pub(crate) fn insert_body(&mut self, desc: &BodyDesc) -> RigidBodyHandle {
        let builder = match desc.body_type {
            RigidBodyType::Dynamic => RigidBodyBuilder::dynamic()
                .additional_mass_properties(MassProperties::new(
                    Point2::origin(),
                    desc.mass,
                    desc.moment,
                ))
                .ccd_enabled(self.use_ccd),
            RigidBodyType::Static => RigidBodyBuilder::fixed(),
        };

        let handle = self.bodies.insert(builder.translation(desc.position.coords).build());
        if let Some(body) = self.bodies.get_mut(handle) {
            body.activation_mut().time_until_sleep = self.sleep_time_threshold;
        }
        handle
    }

    pub(crate) fn insert_shape(&mut self, desc: &ShapeDesc, parent: RigidBodyHandle) -> ColliderHandle {
        self.colliders
            .insert_with_parent(desc.to_collider(), parent, &mut self.bodies)
    }

    /// Removes a shape; returns false if the engine did not know it
    pub(crate) fn remove_shape(&mut self, handle: ColliderHandle) -> bool {
        self.colliders
            .remove(handle, &mut self.islands, &mut self.bodies, true)
            .is_some()
    }

    /// Removes a body together with every shape attached to it
    pub(crate) fn remove_body(&mut self, handle: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    pub(crate) fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;

        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// First shape (in engine storage order) whose geometry contains `point`
    pub(crate) fn point_query(&self, point: &Point2) -> Option<ColliderHandle> {
        self.colliders
            .iter()
            .find(|(_, collider)| collider.shape().contains_point(collider.position(), point))
            .map(|(handle, _)| handle)
    }

    pub(crate) fn body_state(&self, handle: RigidBodyHandle) -> Option<BodyState> {
        self.bodies.get(handle).map(|body| BodyState {
            position: Point2::from(*body.translation()),
            rotation: body.rotation().angle(),
            velocity: *body.linvel(),
            sleeping: body.is_sleeping(),
        })
    }

    pub(crate) fn body_mass(&self, handle: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(handle).map(|body| body.mass())
    }

    pub(crate) fn contains_shape(&self, handle: ColliderHandle) -> bool {
        self.colliders.contains(handle)
    }

    pub(crate) fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub(crate) fn shape_count(&self) -> usize {
        self.colliders.len()
    }
}
