// main.rs
//
// Lays out a small going train inside a demo caliber and logs the result.
// Set RUST_LOG=debug to see every placement step.

use gearlayout::{Gear, GearTrain, MovementParameters};
use nalgebra::Point2;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let params = MovementParameters::new(30.0, 5.0).with_target_frequency(4.0);
    if let Err(err) = params.validate() {
        error!(%err, "invalid movement parameters");
        return;
    }
    let module = params.default_module_mm;

    let mut train = GearTrain::new().with_increment_angle(120.0);
    train.add_gear(Gear::new("center wheel", 80, module));
    train.add_gear(Gear::new("third pinion", 10, module));
    train.add_gear(Gear::new("third wheel", 75, module));
    train.add_gear(Gear::new("fourth pinion", 10, module));
    if let Err(err) = train.validate() {
        error!(%err, "invalid gear train");
        return;
    }

    train.compute_centers_linear_chain(Point2::origin(), 0.0);

    let usable_radius = params.diameter_mm / 2.0 - params.mainplate_margin_mm;
    for gear in train.gears() {
        let reach = nalgebra::distance(&Point2::origin(), &gear.center) + gear.radius();
        info!(
            gear = %gear.name,
            x = gear.center.x,
            y = gear.center.y,
            radius = gear.radius(),
            "layout"
        );
        if reach > usable_radius {
            warn!(gear = %gear.name, reach, usable_radius, "gear extends past the mainplate margin");
        }
    }

    for (a, b) in train.check_collisions(0.05) {
        warn!(first = %a.name, second = %b.name, "adjacent gears collide");
    }
    for (a, b) in train.check_all_collisions(0.05) {
        info!(first = %a.name, second = %b.name, "overlap anywhere in the train");
    }
}
