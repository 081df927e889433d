//! Coaster Steering
//!
//! Runtime reorientation of a wheel's steering mount. Each wheel's
//! controller rotates the mount frame to a commanded angle every
//! step, remaps the wheel's spin into the new frame, and rebuilds
//! the physical joint only when the command has moved far enough to
//! matter. The physics engine stays behind the [`SteeringTarget`]
//! seam; this crate never solves dynamics itself.

pub mod controller;
pub mod target;

pub use controller::{SteeringController, REORIENT_THRESHOLD_DEG};
pub use target::SteeringTarget;
