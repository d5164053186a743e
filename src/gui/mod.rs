use std::time::Instant;

use kiss3d::scene::SceneNode;
use kiss3d::window::Window;
use log::info;
use nalgebra::Translation3;

use self::camera::FixedCamera;
use crate::catalog::Catalog;
use crate::consts;
use crate::physics::PhysicsWorld;

mod camera;

const CAMERA_DISTANCE: f32 = 400.0;

pub struct Scene {
    catalog: Catalog,
    planet_spheres: Vec<SceneNode>,
    world: PhysicsWorld,

    window: Window,
    camera: FixedCamera,

    // Wall clock driving the rendered motion; fixed at construction.
    epoch: Instant,
    // Per-frame clock feeding the (clamped) physics step.
    last_frame: Instant,
}

impl Scene {
    pub fn new(mut window: Window, catalog: Catalog) -> Self {
        let camera = FixedCamera::new(CAMERA_DISTANCE);

        // The sun never moves, so its node handle isn't kept around.
        let mut sun = window.add_sphere(catalog.sun.radius);
        sun.set_color(catalog.sun.color.x, catalog.sun.color.y, catalog.sun.color.z);

        let mut planet_spheres = vec![];
        for planet in &catalog.planets {
            let mut sphere = window.add_sphere(planet.radius);
            sphere.set_color(planet.color.x, planet.color.y, planet.color.z);
            sphere.set_local_translation(Translation3::new(planet.distance, 0.0, 0.0));
            planet_spheres.push(sphere);
        }

        let world = PhysicsWorld::new(&catalog, consts::SUN_SEED_MASS);
        info!(
            "scene ready: {} spheres, {} rigid bodies",
            catalog.body_count(),
            world.body_count()
        );

        // We can't query the fps, so let's just set it
        window.set_framerate_limit(Some(60));

        let now = Instant::now();
        Scene {
            catalog,
            planet_spheres,
            world,
            window,
            camera,
            epoch: now,
            last_frame: now,
        }
    }

    pub fn draw_loop(&mut self) {
        loop {
            self.update_state();
            self.update_scene_objects();

            // This step is when kiss3d detects when the window is exited
            if !self.render_scene() {
                break;
            }
        }
    }

    fn update_state(&mut self) {
        let dt = consts::clamp_timestep(self.last_frame.elapsed().as_secs_f32());
        self.last_frame = Instant::now();
        self.world.step(dt);
    }

    // The rendered motion is a pure function of the wall clock, not of the
    // physics step above.
    fn update_scene_objects(&mut self) {
        let t_millis = self.epoch.elapsed().as_secs_f64() * 1000.0;
        for (sphere, planet) in self.planet_spheres.iter_mut().zip(&self.catalog.planets) {
            let (x, z) = consts::orbital_position(planet.distance as f64, t_millis);
            sphere.set_local_translation(Translation3::new(x as f32, 0.0, z as f32));
        }
    }

    fn render_scene(&mut self) -> bool {
        self.window.render_with_camera(&mut self.camera)
    }
}
