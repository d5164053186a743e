/// Newtonian gravitational constant, used only when seeding orbital
/// velocities. The simulated world itself runs with zero ambient gravity.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674e-11;

/// Mass fed into the velocity-seeding formula. The simulated sun is an
/// immovable body regardless of this value. Zero reproduces the original
/// behavior: every planet starts at rest.
pub const SUN_SEED_MASS: f64 = 0.0;

/// Upper bound on a single integration step, in seconds. Keeps the world
/// stable after a stall (e.g., the window being suspended for a while).
pub const MAX_FRAME_STEP: f32 = 0.1;

/// Numerator of the rendered angular speed: a planet at distance d sweeps
/// ORBIT_RATE / d radians per millisecond of wall-clock time.
pub const ORBIT_RATE: f64 = 0.1;

pub fn circular_orbit_speed(central_mass: f64, distance: f64) -> f64 {
    (central_mass * GRAVITATIONAL_CONSTANT / distance).sqrt()
}

pub fn angular_speed(distance: f64) -> f64 {
    ORBIT_RATE / distance
}

/// Position on the circular track at wall-clock time `t_millis`, as (x, z)
/// on the orbital plane. Depends only on its arguments, so a frame rendered
/// at time t looks the same no matter how many frames preceded it.
pub fn orbital_position(distance: f64, t_millis: f64) -> (f64, f64) {
    let angle = t_millis * angular_speed(distance);
    (distance * angle.sin(), distance * angle.cos())
}

pub fn clamp_timestep(dt: f32) -> f32 {
    dt.min(MAX_FRAME_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    #[test]
    fn test_orbital_position_stays_on_track() {
        let distance = 70.0;
        for i in 0..100 {
            let t = 317.0 * i as f64;
            let (x, z) = orbital_position(distance, t);
            assert_relative_eq!(x * x + z * z, distance * distance, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_orbital_position_is_pure() {
        let (x1, z1) = orbital_position(120.0, 98765.0);
        let (x2, z2) = orbital_position(120.0, 98765.0);
        assert_eq!((x1, z1), (x2, z2));
    }

    #[test]
    fn test_earth_track_positions() {
        // Earth sits at distance 70. At t = 0 it's at the top of the track,
        // and a quarter-turn later it's on the x-axis.
        let (x, z) = orbital_position(70.0, 0.0);
        assert_relative_eq!(x, 0.0);
        assert_relative_eq!(z, 70.0);

        let quarter_turn = (PI / 2.0) / angular_speed(70.0);
        let (x, z) = orbital_position(70.0, quarter_turn);
        assert_relative_eq!(x, 70.0, max_relative = 1e-12);
        assert_relative_eq!(z, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_timestep_clamp() {
        // A 5-second stall still advances the world by at most one clamp.
        assert_eq!(clamp_timestep(5.0), MAX_FRAME_STEP);
        assert_eq!(clamp_timestep(0.016), 0.016);
        assert_eq!(clamp_timestep(MAX_FRAME_STEP), MAX_FRAME_STEP);
    }

    #[test]
    fn test_circular_orbit_speed() {
        // v = sqrt(G m / d)
        assert_relative_eq!(
            circular_orbit_speed(5.0e12, 70.0),
            (5.0e12 * GRAVITATIONAL_CONSTANT / 70.0).sqrt()
        );
        // The degenerate case the original shipped with: a massless sun
        // seeds every planet at rest.
        assert_eq!(circular_orbit_speed(0.0, 70.0), 0.0);
    }
}
