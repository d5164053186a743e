use nalgebra::Point3;

// All the immutable info about a body. Radius doubles as the visual sphere
// size and, cubed, as the simulated mass.
#[derive(Debug, Clone)]
pub struct BodyDescriptor {
    pub name: &'static str,
    pub radius: f32,
    pub distance: f32,
    pub rotation_speed: f32,
    pub color: Point3<f32>,
}

/// The fixed set of bodies: the sun at the origin plus eight planets.
/// Compiled in, enumerated, never mutated.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub sun: BodyDescriptor,
    pub planets: Vec<BodyDescriptor>,
}

impl Catalog {
    pub fn solar_system() -> Self {
        let planet = |name, radius, distance, rotation_speed, color| BodyDescriptor {
            name,
            radius,
            distance,
            rotation_speed,
            color: hex_color(color),
        };

        Catalog {
            sun: BodyDescriptor {
                name: "Sun",
                radius: 10.0,
                distance: 0.0,
                rotation_speed: 0.0,
                color: hex_color(0xffff00),
            },
            planets: vec![
                planet("Mercury", 0.38, 30.0, 0.02, 0xffa500),
                planet("Venus", 0.95, 50.0, 0.01, 0xffc0cb),
                planet("Earth", 1.0, 70.0, 0.01, 0x0080ff),
                planet("Mars", 0.53, 90.0, 0.008, 0xff5733),
                planet("Jupiter", 11.2, 120.0, 0.005, 0xffd700),
                planet("Saturn", 9.45, 150.0, 0.004, 0xffffe0),
                planet("Uranus", 4.0, 180.0, 0.003, 0xafeeee),
                planet("Neptune", 3.88, 210.0, 0.002, 0x0000ff),
            ],
        }
    }

    /// Sun first, then planets in orbital order.
    pub fn iter(&self) -> impl Iterator<Item = &BodyDescriptor> {
        std::iter::once(&self.sun).chain(self.planets.iter())
    }

    pub fn body_count(&self) -> usize {
        1 + self.planets.len()
    }
}

fn hex_color(hex: u32) -> Point3<f32> {
    let r = ((hex >> 16) & 0xff) as f32;
    let g = ((hex >> 8) & 0xff) as f32;
    let b = (hex & 0xff) as f32;
    Point3::new(r / 255.0, g / 255.0, b / 255.0)
}
