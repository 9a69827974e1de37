//! Geometry kernel for laying out the gear train of a mechanical movement.
//!
//! Given a chain of gears described by tooth count and module, the crate computes
//! meshing center distances, places the gear centers one after another along the
//! chain, and flags gears whose pitch circles overlap. It is meant for quick
//! feasibility checks before detailed CAD work.
//!
//! ```
//! use gearlayout::{Gear, GearTrain};
//! use nalgebra::Point2;
//!
//! let mut train = GearTrain::new();
//! train.add_gear(Gear::new("center wheel", 80, 0.2));
//! train.add_gear(Gear::new("third pinion", 10, 0.2));
//! train.compute_centers_linear_chain(Point2::origin(), 0.0);
//! assert!(train.check_collisions(0.0).is_empty());
//! ```
//!
//! All lengths are millimetres and all angles degrees.
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod collision;
pub mod errors;
pub mod float_types;
pub mod gear;
pub mod geometry;
pub mod movement;
pub mod train;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use collision::circles_overlap;
pub use errors::ValidationError;
pub use gear::Gear;
pub use geometry::{compute_center_distance, compute_pitch_diameter, place_second_gear};
pub use movement::{Arbor, MovementParameters};
pub use train::GearTrain;
