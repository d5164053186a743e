extern crate kiss3d;

use kiss3d::light::Light;
use kiss3d::window::Window;

use solar_orrery::catalog::Catalog;
use solar_orrery::gui;

fn main() {
    env_logger::init();

    let mut window = Window::new("Solar System");
    window.set_light(Light::StickToCamera);

    let catalog = Catalog::solar_system();
    gui::Scene::new(window, catalog).draw_loop();
}
