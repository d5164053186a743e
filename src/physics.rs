use log::debug;
use rapier3d::prelude::*;

use crate::catalog::Catalog;
use crate::consts;

/// Rigid-body counterpart of the scene. The world runs with zero ambient
/// gravity; the only gravitational influence is the one-time tangential
/// velocity each planet is seeded with at construction.
pub struct PhysicsWorld {
    pipeline: PhysicsPipeline,
    integration_parameters: IntegrationParameters,
    islands: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    planet_handles: Vec<RigidBodyHandle>,
}

impl PhysicsWorld {
    /// Builds the world from the catalog. `sun_mass` is the mass fed into
    /// the velocity-seeding formula only; the simulated sun body is fixed
    /// (immovable) no matter what is passed here.
    pub fn new(catalog: &Catalog, sun_mass: f64) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        // The sun anchors the world at the origin and never moves.
        let sun = RigidBodyBuilder::fixed().build();
        let sun_handle = bodies.insert(sun);
        colliders.insert_with_parent(
            ColliderBuilder::ball(catalog.sun.radius).build(),
            sun_handle,
            &mut bodies,
        );

        let mut planet_handles = vec![];
        for planet in &catalog.planets {
            let speed = consts::circular_orbit_speed(sun_mass, planet.distance as f64) as f32;
            debug!("{}: seeded orbital speed {:e}", planet.name, speed);

            let body = RigidBodyBuilder::dynamic()
                .translation(vector![planet.distance, 0.0, 0.0])
                // Tangent to the radius vector, in the orbital plane.
                .linvel(vector![0.0, 0.0, speed])
                .additional_mass(planet.radius.powi(3))
                .build();
            let handle = bodies.insert(body);

            // Mass comes from the body, not the collider volume.
            colliders.insert_with_parent(
                ColliderBuilder::ball(planet.radius).density(0.0).build(),
                handle,
                &mut bodies,
            );
            planet_handles.push(handle);
        }

        PhysicsWorld {
            pipeline: PhysicsPipeline::new(),
            integration_parameters: IntegrationParameters::default(),
            islands: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            planet_handles,
        }
    }

    /// Advances the simulation by `dt` seconds. Callers are expected to
    /// clamp `dt` (see `consts::clamp_timestep`).
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.pipeline.step(
            &vector![0.0, 0.0, 0.0],
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn planet_count(&self) -> usize {
        self.planet_handles.len()
    }

    pub fn planet_position(&self, idx: usize) -> Vector<f32> {
        *self.bodies[self.planet_handles[idx]].translation()
    }

    pub fn planet_velocity(&self, idx: usize) -> Vector<f32> {
        *self.bodies[self.planet_handles[idx]].linvel()
    }
}
