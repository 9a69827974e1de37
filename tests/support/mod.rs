//! Test support library
//! Shared gear trains and float helpers for the integration tests.
#![allow(dead_code)]

use gearlayout::{Gear, GearTrain, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Three gears of module 1 with pitch radii 10, 15 and 20.
pub fn gears_10_15_20() -> [Gear; 3] {
    [
        Gear::new("G1", 20, 1.0),
        Gear::new("G2", 30, 1.0),
        Gear::new("G3", 40, 1.0),
    ]
}

/// A default train (180° increment) holding `gears` in order.
pub fn train_of(gears: impl IntoIterator<Item = Gear>) -> GearTrain {
    let mut train = GearTrain::new();
    for gear in gears {
        train.add_gear(gear);
    }
    train
}
